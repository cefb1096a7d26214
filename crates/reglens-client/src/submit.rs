//! The submission state machine.

use reglens_types::ComplianceReport;

use crate::error::SubmitError;
use crate::input::AnalyzeRequest;
use crate::transport::AnalysisTransport;

/// Exactly one of these at any time. A new submit from any terminal
/// state first resets to `Submitting`, discarding the prior report or
/// error.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(ComplianceReport),
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn report(&self) -> Option<&ComplianceReport> {
        match self {
            SubmissionState::Succeeded(report) => Some(report),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Owns the request lifecycle for at most one in-flight analysis.
///
/// `submit` is blocking and takes `&mut self`, so a second submission
/// cannot start while one is unresolved; the UI layer additionally
/// disables resubmission while `Submitting`. There is no queue, no
/// cancellation, and no automatic retry.
#[derive(Clone, Debug, Default)]
pub struct SubmissionController {
    state: SubmissionState,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn report(&self) -> Option<&ComplianceReport> {
        self.state.report()
    }

    /// Issue exactly one transport call and resolve to a terminal state.
    ///
    /// The request is assumed valid (see [`AnalyzeRequest::validate`]);
    /// a malformed success body resolves to `Failed` with a parse-error
    /// message rather than a partially populated report.
    pub fn submit<T>(&mut self, request: &AnalyzeRequest, transport: &T) -> &SubmissionState
    where
        T: AnalysisTransport + ?Sized,
    {
        self.state = SubmissionState::Submitting;

        self.state = match transport.analyze(request) {
            Ok(body) => match reglens_types::parse_report_json(&body) {
                Ok(report) => SubmissionState::Succeeded(report),
                Err(err) => {
                    SubmissionState::Failed(SubmitError::Parse(format!("{err:#}")).to_string())
                }
            },
            Err(err) => SubmissionState::Failed(err.to_string()),
        };

        &self.state
    }

    /// Back to `Idle`, dropping any held report or error.
    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
    }
}
