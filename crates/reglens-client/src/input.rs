//! Submission input model and boundary validation.

use time::Date;
use time::macros::format_description;

use crate::error::SubmitError;

/// The service rejects texts shorter than this; mirrored client-side as
/// a warning only, never a hard rejection.
pub const MIN_TEXT_CHARS: usize = 50;
/// The service's declared maximum text length; same soft treatment.
pub const MAX_TEXT_CHARS: usize = 2000;

/// One analysis submission: manual text entry or a document upload, each
/// with an optional effective-date hint passed through unmodified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalyzeRequest {
    Text {
        text: String,
        date_of_law: Option<String>,
    },
    Document {
        filename: String,
        bytes: Vec<u8>,
        date_of_law: Option<String>,
    },
}

impl AnalyzeRequest {
    pub fn date_of_law(&self) -> Option<&str> {
        match self {
            AnalyzeRequest::Text { date_of_law, .. }
            | AnalyzeRequest::Document { date_of_law, .. } => date_of_law.as_deref(),
        }
    }

    /// Hard validation at the submission boundary. An invalid request is
    /// rejected here and never reaches the controller.
    pub fn validate(&self) -> Result<(), SubmitError> {
        match self {
            AnalyzeRequest::Text { text, .. } => {
                if text.trim().is_empty() {
                    return Err(SubmitError::EmptyText);
                }
            }
            AnalyzeRequest::Document { bytes, .. } => {
                if bytes.is_empty() {
                    return Err(SubmitError::EmptyDocument);
                }
            }
        }
        if let Some(date) = self.date_of_law() {
            validate_date(date)?;
        }
        Ok(())
    }

    /// Soft warnings mirroring the service's length constraints. These
    /// never block a submission; the service stays authoritative.
    pub fn length_warnings(&self) -> Vec<String> {
        let AnalyzeRequest::Text { text, .. } = self else {
            return Vec::new();
        };
        let len = text.trim().chars().count();
        let mut warnings = Vec::new();
        if len < MIN_TEXT_CHARS {
            warnings.push(format!(
                "regulation text is {len} characters; the service requires at least {MIN_TEXT_CHARS}"
            ));
        }
        if len > MAX_TEXT_CHARS {
            warnings.push(format!(
                "regulation text is {len} characters; the service caps input at {MAX_TEXT_CHARS}"
            ));
        }
        warnings
    }
}

fn validate_date(date: &str) -> Result<(), SubmitError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(date, &format)
        .map(|_| ())
        .map_err(|_| SubmitError::InvalidDate(date.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_request(text: &str, date: Option<&str>) -> AnalyzeRequest {
        AnalyzeRequest::Text {
            text: text.to_string(),
            date_of_law: date.map(str::to_string),
        }
    }

    #[test]
    fn empty_or_whitespace_text_is_rejected() {
        assert_eq!(
            text_request("", None).validate(),
            Err(SubmitError::EmptyText)
        );
        assert_eq!(
            text_request("   \n\t", None).validate(),
            Err(SubmitError::EmptyText)
        );
    }

    #[test]
    fn empty_document_is_rejected() {
        let request = AnalyzeRequest::Document {
            filename: "empty.pdf".to_string(),
            bytes: Vec::new(),
            date_of_law: None,
        };
        assert_eq!(request.validate(), Err(SubmitError::EmptyDocument));
    }

    #[test]
    fn dates_must_be_iso_calendar_dates() {
        assert!(text_request("some regulation", Some("2025-12-06")).validate().is_ok());

        for bad in ["06-12-2025", "2025/12/06", "tomorrow", "2025-13-40"] {
            assert_eq!(
                text_request("some regulation", Some(bad)).validate(),
                Err(SubmitError::InvalidDate(bad.to_string()))
            );
        }
    }

    #[test]
    fn short_text_warns_but_passes_validation() {
        let request = text_request("too short", None);
        assert!(request.validate().is_ok());
        let warnings = request.length_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("at least 50"));
    }

    #[test]
    fn oversized_text_warns() {
        let request = text_request(&"x".repeat(MAX_TEXT_CHARS + 1), None);
        assert!(request.validate().is_ok());
        assert!(request.length_warnings()[0].contains("caps input"));
    }

    #[test]
    fn in_range_text_has_no_warnings() {
        let request = text_request(&"x".repeat(200), None);
        assert!(request.length_warnings().is_empty());
    }

    #[test]
    fn documents_have_no_length_warnings() {
        let request = AnalyzeRequest::Document {
            filename: "reg.pdf".to_string(),
            bytes: vec![0x25, 0x50, 0x44, 0x46],
            date_of_law: None,
        };
        assert!(request.length_warnings().is_empty());
    }
}
