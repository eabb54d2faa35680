//! Contact submission pipeline
//!
//! Validates input, then tries each configured channel in order until one
//! succeeds. Channel failures are logged and skipped; the mail client
//! handoff is the terminal step, so every valid submission ends with
//! either a delivery or a mailto: link for the visitor.

use chrono::Utc;
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use url::Url;

use super::form::{ContactForm, InFlightGuard, SendingGuard};
use crate::channels::{
    ChannelError, ChannelKind, DeliveryChannel, EmailJsClient, EndpointTransport,
    FormEndpointClient, MailLauncher, RelayTarget, RelayTransport, SystemMailLauncher, mailto_uri,
};
use crate::config::DeliveryConfig;
use crate::models::{ContactInput, ContactMessage, NotificationKind, ValidationError};
use crate::notify::Notifier;

/// User-facing texts
pub mod messages {
    pub const SENT_VIA_RELAY: &str = "Message sent successfully. Thank you!";
    pub const SENT_VIA_ENDPOINT: &str = "Message sent successfully via the contact form. Thank you!";
    pub const HANDOFF_NOTICE: &str = "No server available, opening your email client as fallback.";
    pub const HANDOFF_FAILED: &str =
        "Could not open email client. Please contact directly via email.";
}

/// Pause between the handoff notice and opening the mail client
pub const DEFAULT_HANDOFF_DELAY: Duration = Duration::from_millis(400);

/// Terminal state of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Delivered through a preferred channel
    Delivered(ChannelKind),
    /// No preferred channel worked; the mail client was opened with this URI
    MailClientOpened { uri: String },
    /// The mail client could not be opened
    MailClientFailed,
    /// Rejected before any delivery attempt
    Invalid(ValidationError),
    /// Another submission is still in flight
    Busy,
}

impl SubmitOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmitOutcome::Delivered(_))
    }
}

/// Delivers contact messages through the best available channel
pub struct ContactPipeline {
    config: DeliveryConfig,
    relay: Option<Arc<dyn RelayTransport>>,
    endpoint: Arc<dyn EndpointTransport>,
    launcher: Arc<dyn MailLauncher>,
    notifier: Arc<dyn Notifier>,
    handoff_delay: Duration,
    in_flight: AtomicBool,
}

impl ContactPipeline {
    /// Create a pipeline with the production transports
    pub fn new(config: DeliveryConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            config,
            relay: Some(Arc::new(EmailJsClient::new())),
            endpoint: Arc::new(FormEndpointClient::new()),
            launcher: Arc::new(SystemMailLauncher),
            notifier,
            handoff_delay: DEFAULT_HANDOFF_DELAY,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Replace the relay transport; `None` means no relay client is available
    pub fn with_relay(mut self, relay: Option<Arc<dyn RelayTransport>>) -> Self {
        self.relay = relay;
        self
    }

    pub fn with_endpoint(mut self, endpoint: Arc<dyn EndpointTransport>) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_launcher(mut self, launcher: Arc<dyn MailLauncher>) -> Self {
        self.launcher = launcher;
        self
    }

    pub fn with_handoff_delay(mut self, delay: Duration) -> Self {
        self.handoff_delay = delay;
        self
    }

    /// Whether a submission is currently running
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit a contact message
    ///
    /// Blocks until the message is delivered or handed off. Exactly one
    /// outcome notification is issued per accepted submission; the form is
    /// held in the sending state for the duration and always restored.
    pub fn submit(&self, form: &dyn ContactForm, input: &ContactInput) -> SubmitOutcome {
        let Some(_in_flight) = InFlightGuard::acquire(&self.in_flight) else {
            debug!("Ignoring contact submission while another is in flight");
            return SubmitOutcome::Busy;
        };

        let message = match ContactMessage::parse(input) {
            Ok(message) => message,
            Err(e) => {
                self.notifier.notify(&e.to_string(), NotificationKind::Error);
                return SubmitOutcome::Invalid(e);
            }
        };

        let _sending = SendingGuard::new(form);

        let mut fallback_address = self.config.fallback_address.clone();
        for channel in self.config.channels() {
            let delivered = match &channel {
                DeliveryChannel::Relay(target) => self.try_relay(target, &message),
                DeliveryChannel::FormEndpoint(url) => self.try_endpoint(url, &message),
                DeliveryChannel::MailClient { address } => {
                    fallback_address = address.clone();
                    break;
                }
            };

            if delivered {
                let kind = channel.kind();
                info!("Contact message delivered via {}", kind.as_str());
                let text = match kind {
                    ChannelKind::Relay => messages::SENT_VIA_RELAY,
                    _ => messages::SENT_VIA_ENDPOINT,
                };
                self.notifier.notify(text, NotificationKind::Success);
                form.reset();
                return SubmitOutcome::Delivered(kind);
            }
        }

        self.hand_off(&fallback_address, &message)
    }

    fn try_relay(&self, target: &RelayTarget, message: &ContactMessage) -> bool {
        let Some(relay) = &self.relay else {
            debug!("Relay configured but no relay client available, skipping");
            return false;
        };

        match relay.send(target, &message.template_params(Utc::now())) {
            Ok(()) => true,
            Err(e) => {
                warn!("Relay send failed: {}", e);
                false
            }
        }
    }

    fn try_endpoint(&self, url: &Url, message: &ContactMessage) -> bool {
        match self.endpoint.post(url, &message.endpoint_body()) {
            Ok(()) => true,
            Err(ChannelError::Status { code, body }) => {
                warn!("Form endpoint error {}: {}", code, body);
                false
            }
            Err(e) => {
                warn!("Form endpoint request failed: {}", e);
                false
            }
        }
    }

    fn hand_off(&self, address: &str, message: &ContactMessage) -> SubmitOutcome {
        self.notifier
            .notify(messages::HANDOFF_NOTICE, NotificationKind::Info);

        if !self.handoff_delay.is_zero() {
            std::thread::sleep(self.handoff_delay);
        }

        let uri = mailto_uri(address, message);
        match self.launcher.launch(&uri) {
            Ok(()) => {
                info!("Handed contact message to mail client for {}", address);
                SubmitOutcome::MailClientOpened { uri }
            }
            Err(e) => {
                error!("mailto fallback failed: {}", e);
                self.notifier
                    .notify(messages::HANDOFF_FAILED, NotificationKind::Error);
                SubmitOutcome::MailClientFailed
            }
        }
    }
}
