//! Contact form: field validation and the in-memory submission store.

mod store;
mod validate;

pub use store::{ContactSubmission, SubmissionStore};
pub use validate::{validate, ContactForm};
