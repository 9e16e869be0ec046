//! AAS document readers and the environment transformer.
//!
//! Two input kinds are accepted: an AAS environment
//! (`{assetAdministrationShells, submodels}`), which goes through
//! [`transform`], and an already normalized `{AAS, SM}` document.
//!
//! ## Format Detection
//!
//! Each reader reports a confidence score (0.0-1.0) for handling content and
//! the reader with the highest confidence is selected. Detection also
//! reports the metamodel version when `modelType` markers give it away.
//!
//! ## Usage
//!
//! ```no_run
//! use aasx_tools::parsers::{detect_format, parse_document};
//! use std::path::Path;
//!
//! let doc = parse_document(Path::new("environment.json")).unwrap();
//!
//! let content = std::fs::read_to_string("environment.json").unwrap();
//! if let Some(detection) = detect_format(&content) {
//!     println!("Detected: {} ({})", detection.format_name, detection.confidence);
//! }
//! ```

mod detection;
mod environment;
mod normalized;
mod traits;
pub mod transform;

pub use detection::{DetectionResult, FormatDetector, ParserKind, MIN_CONFIDENCE_THRESHOLD};
pub use environment::EnvironmentParser;
pub use normalized::NormalizedParser;
pub use traits::{DocumentParser, FormatConfidence, FormatDetection, ParseError};
pub use transform::{is_truthy, transform, transform_str};

use crate::error::{AasError, ErrorContext, ParseErrorKind};
use crate::model::NormalizedDocument;
use std::path::Path;

/// Result of format detection
#[derive(Debug, Clone)]
pub struct DetectedFormat {
    pub format_name: String,
    /// Confidence score (0.0-1.0)
    pub confidence: f32,
    /// Detected variant (always "JSON" today)
    pub variant: Option<String>,
    /// Metamodel version if available
    pub version: Option<String>,
    pub warnings: Vec<String>,
}

/// Detect the document kind from content without parsing.
///
/// Returns None if nothing could be detected with sufficient confidence.
#[must_use]
pub fn detect_format(content: &str) -> Option<DetectedFormat> {
    let result = FormatDetector::new().detect_from_content(content);

    if result.can_parse() {
        Some(DetectedFormat {
            format_name: result
                .parser
                .map(|p| p.name().to_string())
                .unwrap_or_default(),
            confidence: result.confidence.value(),
            variant: result.variant,
            version: result.version,
            warnings: result.warnings,
        })
    } else {
        None
    }
}

/// Maximum document file size (256 MB).
pub const MAX_DOCUMENT_FILE_SIZE: u64 = 256 * 1024 * 1024;

/// Read a document file after checking it against [`MAX_DOCUMENT_FILE_SIZE`].
pub fn read_document_file(path: &Path) -> crate::Result<String> {
    let metadata = std::fs::metadata(path).map_err(|e| AasError::io(path, e))?;
    if metadata.len() > MAX_DOCUMENT_FILE_SIZE {
        return Err(AasError::parse(
            path.display().to_string(),
            ParseErrorKind::FileTooLarge {
                size_mb: metadata.len() / (1024 * 1024),
                limit_mb: MAX_DOCUMENT_FILE_SIZE / (1024 * 1024),
            },
        ));
    }
    std::fs::read_to_string(path).map_err(|e| AasError::io(path, e))
}

/// Read and parse a document file, detecting its kind.
///
/// Parse failures carry the file path as context.
pub fn parse_document(path: &Path) -> crate::Result<NormalizedDocument> {
    let content = read_document_file(path)?;
    parse_document_str(&content).with_context(|| path.display().to_string())
}

/// Parse a document from string content, detecting its kind.
pub fn parse_document_str(content: &str) -> crate::Result<NormalizedDocument> {
    Ok(FormatDetector::new().parse_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_environment_v3() {
        let content = r#"{"assetAdministrationShells": [], "submodels": [
            {"submodelElements": [{"modelType": "SubmodelElementCollection"}]}]}"#;
        let detected = detect_format(content).expect("Should detect format");
        assert_eq!(detected.format_name, "AAS environment");
        assert!((detected.confidence - 1.0).abs() < f32::EPSILON);
        assert_eq!(detected.variant, Some("JSON".to_string()));
        assert_eq!(detected.version, Some("3".to_string()));
    }

    #[test]
    fn test_detect_unknown_format() {
        assert!(detect_format(r#"{"some": "random", "json": "content"}"#).is_none());
        assert!(detect_format("").is_none());
    }

    #[test]
    fn test_parse_document_str_both_kinds() {
        let env = parse_document_str(
            r#"{"assetAdministrationShells": [{"idShort": "A1", "id": "urn:a1"}], "submodels": []}"#,
        )
        .unwrap();
        let reparsed = parse_document_str(&serde_json::to_string(&env).unwrap()).unwrap();
        assert_eq!(env, reparsed);
    }

    #[test]
    fn test_parse_document_missing_file() {
        let err = parse_document(Path::new("/nonexistent/aas.json")).unwrap_err();
        match err {
            AasError::Io { path, .. } => {
                assert_eq!(path.as_deref(), Some(Path::new("/nonexistent/aas.json")));
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_document_error_names_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("other.json");
        std::fs::write(&path, r#"{"hello": "world"}"#).unwrap();

        let err = parse_document(&path).unwrap_err();
        assert!(matches!(err.parse_kind(), Some(ParseErrorKind::NotAnAasDocument)));
        assert!(err.to_string().contains("other.json"));

        let err = parse_document_str(r#"{"assetAdministrationShells": [], "submodels": ["#)
            .unwrap_err();
        assert!(matches!(err.parse_kind(), Some(ParseErrorKind::InvalidJson(_))));
    }
}
