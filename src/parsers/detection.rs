//! Centralized format detection for AAS documents.
//!
//! Both readers are asked for a confidence score and the best one above the
//! threshold wins. Ties go to the environment reader.

use super::environment::EnvironmentParser;
use super::normalized::NormalizedParser;
use super::traits::{DocumentParser, FormatConfidence, FormatDetection, ParseError};
use crate::model::NormalizedDocument;

/// Minimum confidence threshold for accepting a format detection.
pub const MIN_CONFIDENCE_THRESHOLD: f32 = 0.25;

/// Reader identified during detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserKind {
    AasEnvironment,
    Normalized,
}

impl ParserKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AasEnvironment => "AAS environment",
            Self::Normalized => "Normalized",
        }
    }
}

/// Result of format detection.
#[derive(Debug, Clone)]
pub struct DetectionResult {
    /// The reader that should handle this content, if detected.
    pub parser: Option<ParserKind>,
    pub confidence: FormatConfidence,
    pub variant: Option<String>,
    /// Metamodel version (`"3"` or `"2"`) when it could be inferred.
    pub version: Option<String>,
    pub warnings: Vec<String>,
}

impl DetectionResult {
    #[must_use]
    pub fn unknown(reason: &str) -> Self {
        Self {
            parser: None,
            confidence: FormatConfidence::NONE,
            variant: None,
            version: None,
            warnings: vec![reason.to_string()],
        }
    }

    fn detected(kind: ParserKind, detection: FormatDetection) -> Self {
        Self {
            parser: Some(kind),
            confidence: detection.confidence,
            variant: detection.variant,
            version: detection.version,
            warnings: detection.warnings,
        }
    }

    /// Check if the detection is confident enough to parse.
    #[must_use]
    pub fn can_parse(&self) -> bool {
        self.parser.is_some() && self.confidence.value() >= MIN_CONFIDENCE_THRESHOLD
    }
}

/// Format detector over the supported document readers.
pub struct FormatDetector {
    environment: EnvironmentParser,
    normalized: NormalizedParser,
    min_confidence: f32,
}

impl Default for FormatDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatDetector {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            environment: EnvironmentParser::new(),
            normalized: NormalizedParser::new(),
            min_confidence: MIN_CONFIDENCE_THRESHOLD,
        }
    }

    /// Create a format detector with a custom confidence threshold.
    #[must_use]
    pub fn with_threshold(min_confidence: f32) -> Self {
        Self {
            min_confidence: min_confidence.clamp(0.0, 1.0),
            ..Self::new()
        }
    }

    pub fn detect_from_content(&self, content: &str) -> DetectionResult {
        let env_detection = self.environment.detect(content);
        let norm_detection = self.normalized.detect(content);
        self.select_best_parser(env_detection, norm_detection)
    }

    fn select_best_parser(
        &self,
        env_detection: FormatDetection,
        norm_detection: FormatDetection,
    ) -> DetectionResult {
        let env_conf = env_detection.confidence.value();
        let norm_conf = norm_detection.confidence.value();

        tracing::debug!(
            "Format detection: environment={:.2}, normalized={:.2}, threshold={:.2}",
            env_conf,
            norm_conf,
            self.min_confidence
        );

        if env_conf >= self.min_confidence && env_conf >= norm_conf {
            DetectionResult::detected(ParserKind::AasEnvironment, env_detection)
        } else if norm_conf >= self.min_confidence {
            DetectionResult::detected(ParserKind::Normalized, norm_detection)
        } else {
            let mut result =
                DetectionResult::unknown("Could not detect an AAS document with sufficient confidence");
            if env_conf > 0.0 {
                result.warnings.push(format!(
                    "AAS environment detection: {:.0}% confidence (threshold: {:.0}%)",
                    env_conf * 100.0,
                    self.min_confidence * 100.0
                ));
            }
            result
        }
    }

    /// Detect and parse in a single operation.
    pub fn parse_str(&self, content: &str) -> Result<NormalizedDocument, ParseError> {
        let detection = self.detect_from_content(content);

        for warning in &detection.warnings {
            tracing::warn!("{}", warning);
        }

        match detection.parser {
            Some(ParserKind::AasEnvironment) if detection.can_parse() => {
                self.environment.parse_str(content)
            }
            Some(ParserKind::Normalized) if detection.can_parse() => {
                self.normalized.parse_str(content)
            }
            _ => Err(ParseError::NotAnAasDocument(
                "expected an AAS environment or a normalized {AAS, SM} document".to_string(),
            )),
        }
    }
}
