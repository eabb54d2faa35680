//! Portfolio crate - Behavior layer for the portfolio site
//!
//! This crate provides platform-independent site functionality including:
//! - Contact message validation and models
//! - Delivery configuration and channel selection
//! - Delivery transports (EmailJS relay, form endpoint, mail client handoff)
//! - The contact submission pipeline with ordered fallback
//! - A transient notification surface
//! - Page behavior state (theme, menus, animations, tabs, projects, carousel)
//!
//! This crate has zero UI dependencies; front ends implement the small
//! collaborator traits ([`ContactForm`], [`Notifier`]) and render the state.

pub mod channels;
pub mod config;
pub mod models;
pub mod notify;
pub mod page;
pub mod pipeline;

pub use channels::{
    ChannelError, ChannelKind, DeliveryChannel, EmailJsClient, EndpointTransport,
    FormEndpointClient, MailLauncher, RelayTarget, RelayTransport, SystemMailLauncher, mailto_uri,
};
pub use config::{DEFAULT_FALLBACK_ADDRESS, DeliveryConfig, RelaySettings};
pub use models::{
    ContactInput, ContactMessage, EndpointBody, Notification, NotificationKind, TemplateParams,
    ValidationError,
};
pub use notify::{NotificationCenter, Notifier};
pub use pipeline::{ContactForm, ContactPipeline, FormState, SubmitOutcome};
