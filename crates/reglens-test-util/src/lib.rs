//! Shared test fixtures for the reglens workspace.
//!
//! This is a normal crate (not a `#[cfg(test)]` module) because the CLI
//! integration tests and several crates' unit tests all need the same
//! sample reports.

use reglens_types::{ComplianceReport, Finding, RiskBreakdown, Severity};

/// A minimal finding with the given policy id and severity.
pub fn finding(policy_id: &str, severity: Severity) -> Finding {
    Finding {
        policy_id: policy_id.to_string(),
        severity,
        divergence_summary: format!("{policy_id} diverges from the submitted regulation"),
        conflicting_policy_excerpt: None,
        new_rule_excerpt: None,
        recommendation: format!("review {policy_id} against the new text"),
    }
}

/// The canonical three-finding fixture: severities emitted in the order
/// `[MEDIUM, HIGH, MEDIUM]` with a breakdown of `HIGH:1, MEDIUM:2, LOW:0`.
pub fn sample_report() -> ComplianceReport {
    ComplianceReport {
        regulation_id: "REG-42".to_string(),
        date_of_law: "2025-12-06".to_string(),
        date_processed: "2025-12-07".to_string(),
        time_processed: "14:03:22".to_string(),
        total_risks_flagged: 3,
        risk_breakdown: RiskBreakdown {
            high: 1,
            medium: 2,
            low: 0,
        },
        risks: vec![
            finding("POL-007", Severity::Medium),
            finding("POL-001", Severity::High),
            finding("POL-019", Severity::Medium),
        ],
        recommendation: "URGENT: 1 high-priority conflicts require immediate legal review and policy updates.".to_string(),
        uploaded_file: None,
        file_size_bytes: None,
    }
}

/// The fixture above, as a PDF-submission response (upload metadata set).
pub fn sample_report_with_upload() -> ComplianceReport {
    let mut report = sample_report();
    report.uploaded_file = Some("gdpr_article7.pdf".to_string());
    report.file_size_bytes = Some(48_213);
    report
}

/// An empty report: no conflicts detected.
pub fn empty_report() -> ComplianceReport {
    ComplianceReport {
        regulation_id: "REG-EMPTY".to_string(),
        date_of_law: "Not specified".to_string(),
        date_processed: "2025-12-07".to_string(),
        time_processed: "14:10:05".to_string(),
        total_risks_flagged: 0,
        risk_breakdown: RiskBreakdown::default(),
        risks: Vec::new(),
        recommendation: "No critical conflicts detected. Minor discrepancies should be reviewed during next policy update cycle.".to_string(),
        uploaded_file: None,
        file_size_bytes: None,
    }
}

/// The sample report as a raw service response body.
pub fn sample_report_body() -> String {
    serde_json::to_string(&sample_report()).expect("fixture serializes")
}
