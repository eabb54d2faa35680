//! Delivery channels for contact messages
//!
//! This module provides:
//! - Channel selection types produced by [`DeliveryConfig::channels`](crate::DeliveryConfig::channels)
//! - Transport traits the pipeline drives, one per channel
//! - Production transports: EmailJS relay, JSON form endpoint, OS mail client

mod endpoint;
mod mailto;
mod relay;
#[cfg(test)]
mod test_server;

pub use endpoint::FormEndpointClient;
pub use mailto::{SystemMailLauncher, mailto_uri};
pub use relay::EmailJsClient;

use serde::Serialize;
use url::Url;

use crate::models::{EndpointBody, TemplateParams};

/// Fully configured relay identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayTarget {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
}

/// A delivery channel, in the order the pipeline attempts them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryChannel {
    /// Templated email relay (EmailJS)
    Relay(RelayTarget),
    /// Generic JSON form backend (Formspree-style)
    FormEndpoint(Url),
    /// Local mail client handoff via a mailto: URI
    MailClient { address: String },
}

impl DeliveryChannel {
    pub fn kind(&self) -> ChannelKind {
        match self {
            DeliveryChannel::Relay(_) => ChannelKind::Relay,
            DeliveryChannel::FormEndpoint(_) => ChannelKind::FormEndpoint,
            DeliveryChannel::MailClient { .. } => ChannelKind::MailClient,
        }
    }
}

/// Channel discriminant without its settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Relay,
    FormEndpoint,
    MailClient,
}

impl ChannelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Relay => "relay",
            ChannelKind::FormEndpoint => "form_endpoint",
            ChannelKind::MailClient => "mail_client",
        }
    }
}

/// Failure of a single channel attempt
///
/// These are logged and trigger fallthrough; they never reach the visitor.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {code}")]
    Status { code: u16, body: String },
    #[error("could not launch mail client: {0}")]
    Launch(String),
}

impl From<ureq::Error> for ChannelError {
    fn from(e: ureq::Error) -> Self {
        match e {
            // Only reachable from agents left on the default config; ours read
            // non-2xx responses themselves so the body survives
            ureq::Error::StatusCode(code) => ChannelError::Status {
                code,
                body: String::new(),
            },
            other => ChannelError::Transport(other.to_string()),
        }
    }
}

/// Sends a templated message through the email relay
pub trait RelayTransport: Send + Sync {
    fn send(&self, target: &RelayTarget, params: &TemplateParams) -> Result<(), ChannelError>;
}

/// Posts a message to a form endpoint; success means HTTP 2xx
pub trait EndpointTransport: Send + Sync {
    fn post(&self, endpoint: &Url, body: &EndpointBody) -> Result<(), ChannelError>;
}

/// Hands a mailto: URI to whatever opens mail on this system
pub trait MailLauncher: Send + Sync {
    fn launch(&self, uri: &str) -> Result<(), ChannelError>;
}
