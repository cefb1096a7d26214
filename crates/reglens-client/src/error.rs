use thiserror::Error;

/// Everything that can go wrong between "user pressed submit" and a
/// typed report. No variant is retried automatically; each failure is
/// terminal for that attempt and requires an explicit resubmission.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("regulation text must not be empty")]
    EmptyText,

    #[error("no document selected for upload")]
    EmptyDocument,

    #[error("date_of_law must be YYYY-MM-DD, got {0:?}")]
    InvalidDate(String),

    /// Non-2xx response. The status code is all the client inspects; a
    /// structured error body, if any, is ignored.
    #[error("analysis service returned status {0}")]
    Status(u16),

    /// Network unreachable, request aborted, timeout.
    #[error("could not reach analysis service: {0}")]
    Transport(String),

    /// A 2xx body that does not parse into a complete report. The
    /// partially populated value is discarded, never surfaced.
    #[error("malformed analysis response: {0}")]
    Parse(String),
}
