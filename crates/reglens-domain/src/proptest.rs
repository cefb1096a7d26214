//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Severity ranking as a stable, grouped permutation
//! - Reveal monotonicity under arbitrary observation sequences

use crate::rank::rank_findings;
use crate::reveal::{RevealSchedule, SectionKey};
use proptest::prelude::*;
use reglens_types::{Finding, Severity};

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::High),
        Just(Severity::Medium),
        Just(Severity::Low),
        Just(Severity::Unrecognized),
    ]
}

/// Findings with unique policy ids so permutation checks can track
/// identity through the sort.
fn arb_findings() -> impl Strategy<Value = Vec<Finding>> {
    prop::collection::vec(arb_severity(), 0..24).prop_map(|severities| {
        severities
            .into_iter()
            .enumerate()
            .map(|(i, severity)| Finding {
                policy_id: format!("POL-{i:03}"),
                severity,
                divergence_summary: "generated".to_string(),
                conflicting_policy_excerpt: None,
                new_rule_excerpt: None,
                recommendation: "generated".to_string(),
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn rank_is_a_permutation(findings in arb_findings()) {
        let ranked = rank_findings(&findings);
        prop_assert_eq!(ranked.len(), findings.len());

        let mut input_ids: Vec<_> = findings.iter().map(|f| f.policy_id.clone()).collect();
        let mut output_ids: Vec<_> = ranked.iter().map(|f| f.policy_id.clone()).collect();
        input_ids.sort();
        output_ids.sort();
        prop_assert_eq!(input_ids, output_ids);
    }

    #[test]
    fn rank_groups_by_precedence(findings in arb_findings()) {
        let ranked = rank_findings(&findings);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].severity.precedence() <= pair[1].severity.precedence());
        }
    }

    #[test]
    fn rank_preserves_order_within_a_severity(findings in arb_findings()) {
        let ranked = rank_findings(&findings);
        for severity in [
            Severity::High,
            Severity::Medium,
            Severity::Low,
            Severity::Unrecognized,
        ] {
            let input_order: Vec<_> = findings
                .iter()
                .filter(|f| f.severity == severity)
                .map(|f| f.policy_id.clone())
                .collect();
            let ranked_order: Vec<_> = ranked
                .iter()
                .filter(|f| f.severity == severity)
                .map(|f| f.policy_id.clone())
                .collect();
            prop_assert_eq!(input_order, ranked_order);
        }
    }

    #[test]
    fn rank_is_deterministic(findings in arb_findings()) {
        prop_assert_eq!(rank_findings(&findings), rank_findings(&findings));
    }

    #[test]
    fn reveals_are_monotone(indices in prop::collection::vec(0usize..8, 0..64)) {
        let mut schedule = RevealSchedule::new();
        let mut observed: Vec<usize> = Vec::new();
        for &i in &indices {
            schedule.observe(&SectionKey::conflict(i));
            observed.push(i);
            // Everything observed so far stays revealed.
            for &j in &observed {
                prop_assert!(schedule.is_revealed(&SectionKey::conflict(j)));
            }
        }
    }
}
