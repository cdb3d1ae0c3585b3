//! Registry wire model and document submission.

mod document;
mod submitter;

pub use document::{Description, Document, Product};
pub use submitter::{DocumentSubmitter, SubmissionOutcome};
