//! Contact message model and input validation

use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Basic user@domain.tld shape; anything stricter is the relay's problem
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Reasons a contact submission is rejected before any delivery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Raw form fields as entered by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// A validated contact message
///
/// All fields are trimmed and non-empty, and `email` has a plausible shape.
/// The only way to build one is [`ContactMessage::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    name: String,
    email: String,
    message: String,
}

impl ContactMessage {
    /// Validate raw input into a message
    ///
    /// Empty fields are checked before the email shape, so a blank form
    /// always reports [`ValidationError::MissingFields`].
    pub fn parse(input: &ContactInput) -> Result<Self, ValidationError> {
        let name = input.name.trim();
        let email = input.email.trim();
        let message = input.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Parameters for the relay's message template
    pub fn template_params(&self, sent_at: DateTime<Utc>) -> TemplateParams {
        TemplateParams {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            message: self.message.clone(),
            sent_at: sent_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// JSON body for the form endpoint
    pub fn endpoint_body(&self) -> EndpointBody {
        EndpointBody {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// Check an address against the basic user@domain.tld shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Variables handed to the relay's template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    /// ISO 8601 UTC timestamp, millisecond precision
    pub sent_at: String,
}

/// Body posted to the form endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointBody {
    pub name: String,
    pub email: String,
    pub message: String,
}
