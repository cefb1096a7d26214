//! Severity ranking for display order.

use reglens_types::Finding;

/// Order findings for display: `HIGH` first, then `MEDIUM`, then `LOW`,
/// with unrecognized severities last. Ties keep the service's emission
/// order (the sort is stable). The input is not mutated.
pub fn rank_findings(findings: &[Finding]) -> Vec<Finding> {
    let mut ranked = findings.to_vec();
    ranked.sort_by_key(|f| f.severity.precedence());
    ranked
}
