//! EmailJS relay client
//!
//! Calls the EmailJS REST API directly instead of the browser SDK.
//! Uses synchronous HTTP (ureq) to be executor-agnostic.
//!
//! EmailJS refuses requests that don't come from a browser unless the
//! account enables API access for non-browser applications (Account >
//! Security). Without it the relay answers 403 and the pipeline moves on to
//! the next channel.

use serde::Serialize;

use super::{ChannelError, RelayTarget, RelayTransport};
use crate::models::TemplateParams;

/// Request body for the EmailJS send endpoint
#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// EmailJS HTTP client
pub struct EmailJsClient {
    agent: ureq::Agent,
    send_url: String,
}

impl EmailJsClient {
    /// EmailJS send endpoint
    const SEND_URL: &'static str = "https://api.emailjs.com/api/v1.0/email/send";

    /// Create a client against the public EmailJS API
    pub fn new() -> Self {
        Self::with_url(Self::SEND_URL)
    }

    /// Create a client against a custom send URL (self-hosted proxy, tests)
    pub fn with_url(send_url: impl Into<String>) -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
            send_url: send_url.into(),
        }
    }
}

impl Default for EmailJsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RelayTransport for EmailJsClient {
    fn send(&self, target: &RelayTarget, params: &TemplateParams) -> Result<(), ChannelError> {
        let request = SendRequest {
            service_id: &target.service_id,
            template_id: &target.template_id,
            user_id: &target.user_id,
            template_params: params,
        };

        let mut response = self.agent.post(self.send_url.as_str()).send_json(&request)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // EmailJS explains rejections in a plain-text body
        let body = response.body_mut().read_to_string().unwrap_or_default();
        Err(ChannelError::Status {
            code: status.as_u16(),
            body,
        })
    }
}
