//! Per-line classification of the canonical serialization.

use std::sync::LazyLock;

use regex::Regex;
use reglens_types::ComplianceReport;

use crate::canonical::canonical_json;

/// Display classification of one canonical line. First-match precedence:
/// severity literals, then key, then string value, then number value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineClass {
    SeverityHigh,
    SeverityMedium,
    SeverityLow,
    Key,
    StringValue,
    NumberValue,
    Plain,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorizedLine {
    /// 1-based display line number.
    pub number: usize,
    pub text: String,
    pub class: LineClass,
}

static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"]+"\s*:"#).expect("key regex compiles"));
static STRING_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#":\s*"[^"]+""#).expect("string value regex compiles"));
static NUMBER_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s*\d+").expect("number value regex compiles"));

/// Classify one line of canonical text. Pure: depends only on the line
/// itself, so re-rendering never changes a classification.
///
/// Severity literals are matched in their quoted wire form; a
/// risk-breakdown count line like `"HIGH": 1` is therefore a severity
/// line, not a key line.
pub fn classify(line: &str) -> LineClass {
    if line.contains("\"HIGH\"") {
        LineClass::SeverityHigh
    } else if line.contains("\"MEDIUM\"") {
        LineClass::SeverityMedium
    } else if line.contains("\"LOW\"") {
        LineClass::SeverityLow
    } else if KEY_RE.is_match(line) {
        LineClass::Key
    } else if STRING_VALUE_RE.is_match(line) {
        LineClass::StringValue
    } else if NUMBER_VALUE_RE.is_match(line) {
        LineClass::NumberValue
    } else {
        LineClass::Plain
    }
}

/// Lazily classify each line of an already-canonical text. The iterator
/// is finite and restartable: calling this again on the same text yields
/// identical output.
pub fn colorize(text: &str) -> impl Iterator<Item = ColorizedLine> + '_ {
    text.split('\n').enumerate().map(|(i, line)| ColorizedLine {
        number: i + 1,
        text: line.to_string(),
        class: classify(line),
    })
}

/// Canonicalize and classify a report in one step.
pub fn colorize_report(report: &ComplianceReport) -> anyhow::Result<Vec<ColorizedLine>> {
    let text = canonical_json(report)?;
    Ok(colorize(&text).collect())
}

fn ansi_code(class: LineClass) -> Option<&'static str> {
    match class {
        LineClass::SeverityHigh => Some("31"),
        LineClass::SeverityMedium => Some("33"),
        LineClass::SeverityLow => Some("32"),
        LineClass::Key => Some("34"),
        LineClass::StringValue => Some("35"),
        LineClass::NumberValue => Some("93"),
        LineClass::Plain => None,
    }
}

/// Terminal presentation: right-aligned line numbers plus (optionally)
/// ANSI color per classification. The numbers and colors are overlay
/// only; joining the raw line texts reproduces the canonical
/// serialization byte for byte.
pub fn render_terminal(lines: &[ColorizedLine], color: bool) -> String {
    let mut out = String::new();
    for line in lines {
        match ansi_code(line.class).filter(|_| color) {
            Some(code) => {
                out.push_str(&format!(
                    "\x1b[90m{:>4}\x1b[0m  \x1b[{}m{}\x1b[0m\n",
                    line.number, code, line.text
                ));
            }
            None => {
                out.push_str(&format!("{:>4}  {}\n", line.number, line.text));
            }
        }
    }
    out
}
