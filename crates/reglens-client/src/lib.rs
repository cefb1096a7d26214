//! Submission lifecycle for the remote analysis service.
//!
//! Exactly one analysis request is in flight at a time: the controller's
//! blocking `submit` holds `&mut self` for the whole request, so there is
//! no queue and no cancellation primitive. Input validation happens at
//! the submission boundary (`AnalyzeRequest::validate`) and never reaches
//! the controller.

#![forbid(unsafe_code)]

mod error;
mod input;
mod submit;
mod transport;

pub use error::SubmitError;
pub use input::{AnalyzeRequest, MAX_TEXT_CHARS, MIN_TEXT_CHARS};
pub use submit::{SubmissionController, SubmissionState};
pub use transport::{AnalysisTransport, HttpTransport};
