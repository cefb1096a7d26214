use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Severity of a single finding, as emitted by the analysis service.
///
/// The wire set is closed (`HIGH`/`MEDIUM`/`LOW`), but an out-of-enum value
/// deserializes to [`Severity::Unrecognized`] instead of failing the whole
/// report. Unrecognized values rank after `LOW`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Medium,
    Low,
    #[serde(other)]
    Unrecognized,
}

impl Severity {
    /// Total-order sort key: `HIGH < MEDIUM < LOW < Unrecognized`.
    pub fn precedence(self) -> u8 {
        match self {
            Severity::High => 0,
            Severity::Medium => 1,
            Severity::Low => 2,
            Severity::Unrecognized => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Unrecognized => "UNRECOGNIZED",
        }
    }
}

/// Per-severity finding counts, service-computed.
///
/// The client trusts these values and never recomputes them; fixtures are
/// checked for consistency by the test suites via
/// [`ComplianceReport::breakdown_consistent`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RiskBreakdown {
    #[serde(rename = "HIGH")]
    pub high: u32,
    #[serde(rename = "MEDIUM")]
    pub medium: u32,
    #[serde(rename = "LOW")]
    pub low: u32,
}

/// One detected conflict between the submitted regulation and an internal
/// policy. Immutable once received.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub policy_id: String,
    pub severity: Severity,
    pub divergence_summary: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicting_policy_excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_rule_excerpt: Option<String>,

    pub recommendation: String,
}

/// The full compliance report, one per successful analysis.
///
/// Field order is the service's emission order and is also the canonical
/// serialization order; do not reorder fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComplianceReport {
    /// Opaque identifier assigned by the service.
    pub regulation_id: String,
    /// Effective date echoed back by the service, or `"Not specified"`.
    pub date_of_law: String,
    pub date_processed: String,
    pub time_processed: String,
    pub total_risks_flagged: u32,
    pub risk_breakdown: RiskBreakdown,
    /// Findings in the service's emission order; not assumed sorted.
    pub risks: Vec<Finding>,
    /// Overall free-text guidance.
    pub recommendation: String,

    /// Present only for PDF submissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size_bytes: Option<u64>,
}

impl ComplianceReport {
    /// Number of findings carrying the given severity.
    pub fn severity_count(&self, severity: Severity) -> usize {
        self.risks.iter().filter(|f| f.severity == severity).count()
    }

    /// Whether `risk_breakdown` and `total_risks_flagged` agree with the
    /// actual findings. The client never recomputes the breakdown; this
    /// exists so test suites can verify fixtures.
    pub fn breakdown_consistent(&self) -> bool {
        self.severity_count(Severity::High) == self.risk_breakdown.high as usize
            && self.severity_count(Severity::Medium) == self.risk_breakdown.medium as usize
            && self.severity_count(Severity::Low) == self.risk_breakdown.low as usize
            && self.risks.len() == self.total_risks_flagged as usize
    }
}
