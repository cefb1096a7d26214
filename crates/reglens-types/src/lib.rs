//! Stable DTOs for the reglens client.
//!
//! This crate is intentionally boring:
//! - data types mirroring the analysis service's report payload
//! - strict parsing of a service response body into a typed report
//! - the breakdown-consistency check used by the test suites

#![forbid(unsafe_code)]

pub mod model;

pub use model::{ComplianceReport, Finding, RiskBreakdown, Severity};

/// Parse a service response body into a typed report.
///
/// Missing required fields fail the parse outright; callers never see a
/// partially populated report.
pub fn parse_report_json(input: &str) -> anyhow::Result<ComplianceReport> {
    use anyhow::Context;
    let report: ComplianceReport =
        serde_json::from_str(input).context("parse compliance report json")?;
    Ok(report)
}
