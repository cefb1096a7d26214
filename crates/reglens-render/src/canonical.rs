//! Canonical report serialization.
//!
//! One fixed textual encoding backs the colorized view, the clipboard
//! text, and the download artifact: pretty JSON with 2-space indentation
//! and keys in the service's emission order (struct declaration order).
//! The three surfaces must stay byte-identical, so nobody serializes a
//! report any other way.

use anyhow::Context;
use reglens_types::ComplianceReport;

pub fn canonical_json(report: &ComplianceReport) -> anyhow::Result<String> {
    serde_json::to_string_pretty(report).context("serialize report")
}

/// Line count of a canonical serialization: newlines + 1. This is the
/// number shown in the viewer header and the number of colorized lines.
pub fn canonical_line_count(text: &str) -> usize {
    text.split('\n').count()
}
