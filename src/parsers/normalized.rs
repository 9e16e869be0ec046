//! Reader for documents that are already in normalized `{AAS, SM}` form.
//!
//! Lets the output of `transform` be fed back into the viewer.

use super::traits::{has_json_key, DocumentParser, FormatConfidence, FormatDetection, ParseError};
use crate::model::NormalizedDocument;

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizedParser;

impl NormalizedParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentParser for NormalizedParser {
    fn parse_str(&self, content: &str) -> Result<NormalizedDocument, ParseError> {
        Ok(serde_json::from_str(content)?)
    }

    fn format_name(&self) -> &str {
        "Normalized"
    }

    fn detect(&self, content: &str) -> FormatDetection {
        if !content.trim_start().starts_with('{') {
            return FormatDetection::no_match();
        }

        match (has_json_key(content, "AAS"), has_json_key(content, "SM")) {
            (true, true) => {
                FormatDetection::with_confidence(FormatConfidence::HIGH).variant("JSON")
            }
            (true, false) | (false, true) => {
                FormatDetection::with_confidence(FormatConfidence::LOW)
                    .variant("JSON")
                    .warning("Only one of 'AAS' and 'SM' present")
            }
            (false, false) => FormatDetection::no_match(),
        }
    }
}
