use reglens_client::{AnalysisTransport, AnalyzeRequest, SubmissionController, SubmissionState};
use reglens_domain::{RevealSchedule, SectionKey};
use reglens_types::ComplianceReport;

/// One analysis session: the submission lifecycle plus the per-report
/// reveal state.
///
/// A new submission always starts from a blank reveal set, whether the
/// previous attempt succeeded or failed.
#[derive(Clone, Debug, Default)]
pub struct Session {
    controller: SubmissionController,
    reveals: RevealSchedule,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one submission end to end and return the resulting state.
    pub fn submit<T: AnalysisTransport + ?Sized>(
        &mut self,
        request: &AnalyzeRequest,
        transport: &T,
    ) -> &SubmissionState {
        self.reveals.reset();
        self.controller.submit(request, transport)
    }

    pub fn state(&self) -> &SubmissionState {
        self.controller.state()
    }

    pub fn report(&self) -> Option<&ComplianceReport> {
        self.controller.state().report()
    }

    /// Record that a section entered view. Returns true the first time.
    pub fn observe_section(&mut self, key: &SectionKey) -> bool {
        self.reveals.observe(key)
    }

    pub fn is_revealed(&self, key: &SectionKey) -> bool {
        self.reveals.is_revealed(key)
    }

    pub fn reveals_mut(&mut self) -> &mut RevealSchedule {
        &mut self.reveals
    }

    /// Drop the current report and any reveal state, back to idle.
    pub fn clear(&mut self) {
        self.controller.reset();
        self.reveals.reset();
    }
}
