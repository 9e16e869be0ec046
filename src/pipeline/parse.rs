//! Document parsing pipeline.
//!
//! Reads a file under the size guard, detects its kind and normalizes it.

use crate::model::{DocumentDiagnostics, NormalizedDocument};
use crate::parsers::{parse_document_str, read_document_file};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// A parsed document with the source text it came from
#[derive(Debug)]
pub struct ParsedDocument {
    /// The normalized document
    pub document: NormalizedDocument,
    /// Original file content
    pub raw_content: String,
    /// Reference diagnostics computed at parse time
    pub diagnostics: DocumentDiagnostics,
}

impl ParsedDocument {
    /// Create a `ParsedDocument`, computing its diagnostics
    #[must_use]
    pub fn new(document: NormalizedDocument, raw_content: String) -> Self {
        let diagnostics = document.diagnostics();
        Self {
            document,
            raw_content,
            diagnostics,
        }
    }

    #[must_use]
    pub const fn document(&self) -> &NormalizedDocument {
        &self.document
    }

    #[must_use]
    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    #[must_use]
    pub const fn diagnostics(&self) -> &DocumentDiagnostics {
        &self.diagnostics
    }

    /// Consume and return the inner document
    #[must_use]
    pub fn into_document(self) -> NormalizedDocument {
        self.document
    }

    /// Consume and return both the document and the raw content
    #[must_use]
    pub fn into_parts(self) -> (NormalizedDocument, String) {
        (self.document, self.raw_content)
    }

    /// Drop the raw content to free memory once reports no longer need it.
    pub fn drop_raw_content(&mut self) {
        self.raw_content = String::new();
    }
}

/// Parse a document with context for error messages
pub fn parse_document_with_context(path: &Path, quiet: bool) -> Result<ParsedDocument> {
    if !quiet {
        tracing::info!("Parsing AAS document: {:?}", path);
    }

    let raw_content = read_document_file(path)
        .with_context(|| format!("Failed to read AAS document: {}", path.display()))?;
    let document = parse_document_str(&raw_content)
        .with_context(|| format!("Failed to parse AAS document: {}", path.display()))?;

    if !quiet {
        tracing::info!(
            "Parsed {} shells, {} submodels",
            document.shell_count(),
            document.submodel_count()
        );
    }

    let parsed = ParsedDocument::new(document, raw_content);
    for message in parsed.diagnostics.messages() {
        tracing::warn!("{}", message);
    }

    Ok(parsed)
}

/// Parse many documents in parallel.
///
/// Results come back in input order, one per path.
pub fn parse_many(paths: &[PathBuf], quiet: bool) -> Vec<(PathBuf, Result<ParsedDocument>)> {
    paths
        .par_iter()
        .map(|path| (path.clone(), parse_document_with_context(path, quiet)))
        .collect()
}
