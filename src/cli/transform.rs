//! Transform command handler.
//!
//! Implements the `transform` subcommand, which prints the normalized form
//! of an AAS environment as JSON.

use crate::config::TransformConfig;
use crate::model::NormalizedDocument;
use crate::parsers::{read_document_file, transform_str};
use crate::pipeline::{exit_codes, write_output, OutputTarget};
use anyhow::{Context, Result};

/// Run the transform command
#[allow(clippy::needless_pass_by_value)]
pub fn run_transform(config: TransformConfig) -> Result<i32> {
    let path = &config.path;
    let content = read_document_file(path)
        .with_context(|| format!("Failed to read AAS environment: {}", path.display()))?;

    let Some(document) = transform_str(&content)
        .with_context(|| format!("Failed to parse JSON: {}", path.display()))?
    else {
        eprintln!(
            "{}: not an AAS environment (needs assetAdministrationShells and submodels)",
            path.display()
        );
        return Ok(exit_codes::INVALID_DOCUMENT);
    };

    if !config.quiet {
        tracing::info!(
            "Transformed {} shells, {} submodels",
            document.shell_count(),
            document.submodel_count()
        );
    }

    let json = to_json(&document, config.output.compact_json)?;
    let target = OutputTarget::from_option(config.output.file.clone());
    write_output(&json, &target, config.quiet)?;

    Ok(exit_codes::SUCCESS)
}

fn to_json(document: &NormalizedDocument, compact: bool) -> Result<String> {
    if compact {
        serde_json::to_string(document)
    } else {
        serde_json::to_string_pretty(document)
    }
    .context("Failed to serialize normalized document")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn transform_config(path: PathBuf, out: PathBuf, compact: bool) -> TransformConfig {
        TransformConfig {
            path,
            output: OutputConfig {
                file: Some(out),
                compact_json: compact,
                ..OutputConfig::default()
            },
            quiet: true,
        }
    }

    #[test]
    fn test_transform_writes_normalized_json() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("env.json");
        std::fs::write(
            &input,
            r#"{"assetAdministrationShells": [{"idShort": "A1", "id": "urn:a1"}], "submodels": []}"#,
        )
        .unwrap();
        let out = tmp.path().join("out.json");

        let code = run_transform(transform_config(input, out.clone(), true)).unwrap();
        assert_eq!(code, exit_codes::SUCCESS);
        assert_eq!(
            std::fs::read_to_string(out).unwrap(),
            r#"{"AAS":[{"name":"A1","url":"urn:a1","of":"","AssetInformation":{"Unit1":""},"submodelRefs":[]}],"SM":[]}"#
        );
    }

    #[test]
    fn test_transform_rejects_non_environment() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("normalized.json");
        std::fs::write(&input, r#"{"AAS": [], "SM": []}"#).unwrap();
        let out = tmp.path().join("out.json");

        let code = run_transform(transform_config(input, out.clone(), false)).unwrap();
        assert_eq!(code, exit_codes::INVALID_DOCUMENT);
        assert!(!out.exists());
    }

    #[test]
    fn test_transform_malformed_json_is_error() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("broken.json");
        std::fs::write(&input, "{\"assetAdministrationShells\": [").unwrap();

        let err = run_transform(transform_config(input, tmp.path().join("o.json"), false))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }
}
