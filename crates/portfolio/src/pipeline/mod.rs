//! Contact submission pipeline and the form surface it drives

mod form;
mod submit;

pub use form::{ContactForm, FormState, SENDING_LABEL, SUBMIT_LABEL};
pub use submit::{ContactPipeline, DEFAULT_HANDOFF_DELAY, SubmitOutcome, messages};
