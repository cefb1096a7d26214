//! Reveal scheduling for result sections.
//!
//! The presentation layer reports when a tagged section becomes at least
//! partially visible; the schedule records the one-way `Hidden ->
//! Revealed` flip per section key. Nothing here observes the viewport
//! itself; the schedule is a passive, queryable state machine, so the
//! reveal-once contract is testable without a rendering environment.

use std::collections::BTreeSet;
use std::fmt;

use reglens_types::ComplianceReport;

/// Fraction of a section that must be visible before the presentation
/// layer reports it. The schedule itself does not consume this; it is the
/// single shared constant for whoever drives [`RevealSchedule::observe`].
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Opaque key identifying one result section.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionKey(String);

impl SectionKey {
    /// The statistics hero card (id, processed-at, breakdown counts).
    pub fn stats_hero() -> Self {
        SectionKey("stats-hero".to_string())
    }

    /// The overall recommendation panel.
    pub fn recommendation() -> Self {
        SectionKey("recommendation".to_string())
    }

    /// The "Identified Conflicts" heading.
    pub fn conflicts_header() -> Self {
        SectionKey("conflicts-header".to_string())
    }

    /// The conflict card at the given display index.
    pub fn conflict(index: usize) -> Self {
        SectionKey(format!("conflict-{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Section keys for a report's results surface, in render order: the
/// stats hero, the recommendation, the conflicts header, then one key per
/// finding. Render order is a convenience only; sections reveal
/// independently and in any order.
pub fn section_keys(report: &ComplianceReport) -> Vec<SectionKey> {
    let mut keys = vec![
        SectionKey::stats_hero(),
        SectionKey::recommendation(),
        SectionKey::conflicts_header(),
    ];
    keys.extend((0..report.risks.len()).map(SectionKey::conflict));
    keys
}

/// Monotone set of revealed section keys.
///
/// Grows one-way until [`RevealSchedule::reset`], which clears the whole
/// set when a new report replaces the old one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSchedule {
    seen: BTreeSet<SectionKey>,
}

impl RevealSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the section entered the viewport. Returns `true` only
    /// the first time a key is observed in the current report lifetime;
    /// repeat observations are idempotent.
    pub fn observe(&mut self, key: &SectionKey) -> bool {
        self.seen.insert(key.clone())
    }

    /// `false` for any key never observed, including before observation
    /// has started at all.
    pub fn is_revealed(&self, key: &SectionKey) -> bool {
        self.seen.contains(key)
    }

    pub fn revealed_count(&self) -> usize {
        self.seen.len()
    }

    /// Whole-set clear. The only transition from `Revealed` back to
    /// `Hidden`; used when the report is replaced.
    pub fn reset(&mut self) {
        self.seen.clear();
    }
}
