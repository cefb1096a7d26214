//! Session orchestration and export.
//!
//! This crate glues the submission controller, the reveal schedule, and
//! the canonical renderer into the operations the CLI exposes. It stays
//! deliberately thin: anything with real logic lives in `reglens-domain`,
//! `reglens-render`, or `reglens-client`.

#![forbid(unsafe_code)]

mod export;
mod session;

pub use export::{clipboard_text, download_artifact, write_artifact, ARTIFACT_PREFIX};
pub use session::Session;
