//! Form endpoint client (Formspree-style JSON backends)

use url::Url;

use super::{ChannelError, EndpointTransport};
use crate::models::EndpointBody;

/// Posts contact messages as JSON to a configured endpoint
pub struct FormEndpointClient {
    agent: ureq::Agent,
}

impl FormEndpointClient {
    pub fn new() -> Self {
        // Non-2xx is handled below so the body can be logged
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
        }
    }
}

impl Default for FormEndpointClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EndpointTransport for FormEndpointClient {
    fn post(&self, endpoint: &Url, body: &EndpointBody) -> Result<(), ChannelError> {
        let mut response = self
            .agent
            .post(endpoint.as_str())
            .header("Accept", "application/json")
            .send_json(body)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.body_mut().read_to_string().unwrap_or_default();
        Err(ChannelError::Status {
            code: status.as_u16(),
            body,
        })
    }
}
