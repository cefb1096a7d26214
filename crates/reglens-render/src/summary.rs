//! The results summary: the human-facing view of a completed analysis.

use reglens_domain::{RevealSchedule, SectionKey, rank_findings};
use reglens_types::{ComplianceReport, Severity};

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "HIGH",
        Severity::Medium => "MEDIUM",
        Severity::Low => "LOW",
        Severity::Unrecognized => "UNRECOGNIZED",
    }
}

/// Render the results summary, marking each section revealed on the
/// schedule as it is emitted. In a terminal the whole surface scrolls
/// into view at once, so emission is the visibility event; the schedule
/// still enforces the reveal-once contract across re-renders.
///
/// Findings appear in ranked order (`HIGH` first, ties in emission
/// order), never in raw service order.
pub fn render_summary(report: &ComplianceReport, reveals: &mut RevealSchedule) -> String {
    let mut out = String::new();

    reveals.observe(&SectionKey::stats_hero());
    out.push_str("# Compliance analysis\n\n");
    out.push_str(&format!("- Regulation ID: {}\n", report.regulation_id));
    out.push_str(&format!(
        "- Processed: {} at {}\n",
        report.date_processed, report.time_processed
    ));
    if let Some(file) = &report.uploaded_file {
        out.push_str(&format!("- Uploaded file: {}\n", file));
    }
    out.push_str(&format!(
        "- Risks: HIGH {} / MEDIUM {} / LOW {}\n\n",
        report.risk_breakdown.high, report.risk_breakdown.medium, report.risk_breakdown.low
    ));

    reveals.observe(&SectionKey::recommendation());
    out.push_str("## Overall recommendation\n\n");
    out.push_str(&format!("{}\n\n", report.recommendation));

    reveals.observe(&SectionKey::conflicts_header());
    out.push_str(&format!("## Identified conflicts ({})\n\n", report.risks.len()));

    if report.risks.is_empty() {
        out.push_str("No conflicts identified.\n");
        return out;
    }

    for (index, finding) in rank_findings(&report.risks).iter().enumerate() {
        reveals.observe(&SectionKey::conflict(index));
        out.push_str(&format!(
            "- [{}] {} — {}\n",
            severity_tag(finding.severity),
            finding.policy_id,
            finding.divergence_summary
        ));
        if let Some(excerpt) = &finding.conflicting_policy_excerpt {
            out.push_str(&format!("  - policy excerpt: {}\n", excerpt));
        }
        if let Some(excerpt) = &finding.new_rule_excerpt {
            out.push_str(&format!("  - new rule excerpt: {}\n", excerpt));
        }
        out.push_str(&format!("  - action: {}\n", finding.recommendation));
    }

    out
}
