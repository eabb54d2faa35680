//! Contact form surface driven by the pipeline

use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::models::ContactInput;

/// Submit button label while a submission is in flight
pub const SENDING_LABEL: &str = "Sending...";

/// Default submit button label
pub const SUBMIT_LABEL: &str = "Send Message";

/// The form the pipeline reports back to
pub trait ContactForm: Send + Sync {
    /// Enter (`true`) or leave (`false`) the sending state: submit control
    /// disabled and relabeled
    fn set_sending(&self, sending: bool);

    /// Clear all fields after a successful delivery
    fn reset(&self);
}

/// Keeps a form in the sending state for as long as it lives
///
/// Restores the form on drop, which covers early returns and unwinding.
pub(crate) struct SendingGuard<'a> {
    form: &'a dyn ContactForm,
}

impl<'a> SendingGuard<'a> {
    pub(crate) fn new(form: &'a dyn ContactForm) -> Self {
        form.set_sending(true);
        Self { form }
    }
}

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        self.form.set_sending(false);
    }
}

/// Re-entrancy flag for the pipeline; released on drop
pub(crate) struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    /// Claim the flag, or `None` if a submission is already running
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[derive(Debug, Clone)]
struct FormFields {
    input: ContactInput,
    submit_label: String,
    submit_disabled: bool,
}

/// In-memory form state for headless front ends and tests
pub struct FormState {
    fields: RwLock<FormFields>,
}

impl FormState {
    pub fn new() -> Self {
        Self::with_input(ContactInput::default())
    }

    pub fn with_input(input: ContactInput) -> Self {
        Self {
            fields: RwLock::new(FormFields {
                input,
                submit_label: SUBMIT_LABEL.to_string(),
                submit_disabled: false,
            }),
        }
    }

    /// Replace the entered values
    pub fn fill(&self, input: ContactInput) {
        if let Ok(mut fields) = self.fields.write() {
            fields.input = input;
        }
    }

    /// Current entered values
    pub fn input(&self) -> ContactInput {
        self.fields
            .read()
            .map(|f| f.input.clone())
            .unwrap_or_default()
    }

    pub fn submit_label(&self) -> String {
        self.fields
            .read()
            .map(|f| f.submit_label.clone())
            .unwrap_or_else(|_| SUBMIT_LABEL.to_string())
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.fields.read().map(|f| f.submit_disabled).unwrap_or(false)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm for FormState {
    fn set_sending(&self, sending: bool) {
        if let Ok(mut fields) = self.fields.write() {
            fields.submit_disabled = sending;
            fields.submit_label = if sending { SENDING_LABEL } else { SUBMIT_LABEL }.to_string();
        }
    }

    fn reset(&self) {
        if let Ok(mut fields) = self.fields.write() {
            fields.input = ContactInput::default();
        }
    }
}
