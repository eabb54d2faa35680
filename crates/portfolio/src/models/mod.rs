//! Domain models for contact delivery

mod contact;
mod notification;

pub use contact::{
    ContactInput, ContactMessage, EndpointBody, TemplateParams, ValidationError, is_valid_email,
};
pub use notification::{Notification, NotificationKind};
