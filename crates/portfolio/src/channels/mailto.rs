//! Mail client handoff via mailto: URIs

use super::{ChannelError, MailLauncher};
use crate::models::ContactMessage;

/// Build the mailto: URI for a contact message
///
/// Subject and body are percent-encoded; the address is used as-is.
pub fn mailto_uri(address: &str, message: &ContactMessage) -> String {
    let subject = format!("Portfolio contact from {}", message.name());
    let body = format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        message.name(),
        message.email(),
        message.message()
    );

    format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(&subject),
        urlencoding::encode(&body),
    )
}

/// Opens mailto: URIs with the system's default handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemMailLauncher;

impl MailLauncher for SystemMailLauncher {
    fn launch(&self, uri: &str) -> Result<(), ChannelError> {
        open::that(uri).map_err(|e| ChannelError::Launch(e.to_string()))
    }
}
