//! Validate command handler.
//!
//! Implements the `validate` subcommand: format detection followed by the
//! reference diagnostics of the normalized document.

use crate::config::ValidateConfig;
use crate::parsers::{detect_format, parse_document_str, read_document_file};
use crate::pipeline::exit_codes;
use anyhow::{Context, Result};

/// Run the validate command
#[allow(clippy::needless_pass_by_value)]
pub fn run_validate(config: ValidateConfig) -> Result<i32> {
    let content = read_document_file(&config.path)
        .with_context(|| format!("Failed to read AAS document: {}", config.path.display()))?;

    let (lines, code) = validate_content(&content, config.behavior.strict);
    println!("{}: {}", config.path.display(), lines.join("\n  "));
    Ok(code)
}

/// Validate document content, returning report lines and the exit code.
///
/// The exit code is [`exit_codes::INVALID_DOCUMENT`] when the content is not
/// an AAS document and [`exit_codes::DIAGNOSTICS_FOUND`] when `strict` is set
/// and the document has reference diagnostics.
#[must_use]
pub fn validate_content(content: &str, strict: bool) -> (Vec<String>, i32) {
    let Some(detected) = detect_format(content) else {
        return (
            vec!["not an AAS document".to_string()],
            exit_codes::INVALID_DOCUMENT,
        );
    };

    let mut lines = vec![format!(
        "{} ({}, metamodel {}) at {:.0}% confidence",
        detected.format_name,
        detected.variant.as_deref().unwrap_or("unknown variant"),
        detected.version.as_deref().map_or_else(|| "version unknown".to_string(), |v| format!("v{v}")),
        detected.confidence * 100.0
    )];
    lines.extend(detected.warnings.iter().map(|w| format!("warning: {w}")));

    let document = match parse_document_str(content) {
        Ok(document) => document,
        Err(e) => {
            lines.push(format!("invalid: {:#}", anyhow::Error::new(e)));
            return (lines, exit_codes::INVALID_DOCUMENT);
        }
    };

    lines.push(format!(
        "{} shells, {} submodels, {} collections, {} properties",
        document.shell_count(),
        document.submodel_count(),
        document.collection_count(),
        document.property_count()
    ));

    let diagnostics = document.diagnostics();
    if diagnostics.is_clean() {
        lines.push("no diagnostics".to_string());
        return (lines, exit_codes::SUCCESS);
    }

    lines.extend(diagnostics.messages().into_iter().map(|m| format!("diagnostic: {m}")));
    let code = if strict {
        exit_codes::DIAGNOSTICS_FOUND
    } else {
        exit_codes::SUCCESS
    };
    (lines, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINKED: &str = r#"{
        "assetAdministrationShells": [{"idShort": "A1", "id": "urn:a1",
            "submodels": [{"keys": [{"value": "urn:sm1"}]}]}],
        "submodels": [{"idShort": "Nameplate", "id": "urn:sm1"}]
    }"#;

    #[test]
    fn test_validate_clean_document() {
        let (lines, code) = validate_content(LINKED, true);
        assert_eq!(code, exit_codes::SUCCESS);
        assert!(lines[0].starts_with("AAS environment (JSON"));
        assert_eq!(lines.last().map(String::as_str), Some("no diagnostics"));
    }

    #[test]
    fn test_validate_not_aas() {
        let (lines, code) = validate_content(r#"{"bom": []}"#, false);
        assert_eq!(code, exit_codes::INVALID_DOCUMENT);
        assert_eq!(lines, vec!["not an AAS document".to_string()]);
    }

    #[test]
    fn test_validate_malformed_json() {
        let (lines, code) = validate_content(r#"{"assetAdministrationShells": [], "submodels": ["#, false);
        assert_eq!(code, exit_codes::INVALID_DOCUMENT);
        assert!(lines.last().unwrap().starts_with("invalid:"));
    }

    #[test]
    fn test_validate_diagnostics_strict_and_lenient() {
        let orphaned = r#"{"assetAdministrationShells": [], "submodels": [{"idShort": "Lost", "id": "urn:lost"}]}"#;

        let (lines, code) = validate_content(orphaned, false);
        assert_eq!(code, exit_codes::SUCCESS);
        assert!(lines.iter().any(|l| l.contains("'Lost' is not referenced")));

        let (_, code) = validate_content(orphaned, true);
        assert_eq!(code, exit_codes::DIAGNOSTICS_FOUND);
    }
}
