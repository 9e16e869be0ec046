//! Reader for AAS environment documents (`assetAdministrationShells` + `submodels`).
//!
//! Supports metamodel V3 (`"modelType": "Property"`) and the older V2 form
//! (`"modelType": {"name": "Property"}`).

use super::traits::{has_json_key, DocumentParser, FormatConfidence, FormatDetection, ParseError};
use super::transform::{transform_str, SHELLS_KEY, SUBMODELS_KEY};
use crate::model::NormalizedDocument;

/// Parser for AAS environment JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentParser;

impl EnvironmentParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Metamodel version inferred from the first `modelType` in the content.
    fn detect_version(content: &str) -> Option<&'static str> {
        const MARKER: &str = "\"modelType\"";
        let pos = content.find(MARKER)?;
        let rest = content[pos + MARKER.len()..].trim_start();
        let value = rest.strip_prefix(':')?.trim_start();
        match value.chars().next()? {
            '"' => Some("3"),
            '{' => Some("2"),
            _ => None,
        }
    }
}

impl DocumentParser for EnvironmentParser {
    fn parse_str(&self, content: &str) -> Result<NormalizedDocument, ParseError> {
        transform_str(content)?.ok_or_else(|| {
            ParseError::NotAnAasDocument(format!(
                "expected truthy '{SHELLS_KEY}' and '{SUBMODELS_KEY}'"
            ))
        })
    }

    fn format_name(&self) -> &str {
        "AAS environment"
    }

    fn detect(&self, content: &str) -> FormatDetection {
        if !content.trim_start().starts_with('{') {
            return FormatDetection::no_match();
        }

        let has_shells = has_json_key(content, SHELLS_KEY);
        let has_submodels = has_json_key(content, SUBMODELS_KEY);
        let version = Self::detect_version(content);

        let detection = match (has_shells, has_submodels) {
            (true, true) => FormatDetection::with_confidence(FormatConfidence::CERTAIN),
            (true, false) => FormatDetection::with_confidence(FormatConfidence::MEDIUM)
                .warning(&format!("Missing '{SUBMODELS_KEY}' key")),
            (false, true) => FormatDetection::with_confidence(FormatConfidence::MEDIUM)
                .warning(&format!("Missing '{SHELLS_KEY}' key")),
            (false, false) if version.is_some() => {
                FormatDetection::with_confidence(FormatConfidence::LOW)
                    .warning("Found modelType markers but no environment keys")
            }
            (false, false) => return FormatDetection::no_match(),
        };

        detection.variant("JSON").maybe_version(version)
    }
}
