//! Report generation for AAS documents.
//!
//! Three output formats are provided:
//! - Tree: indented, box-drawn view of shells and submodels
//! - JSON: normalized document plus metadata for programmatic use
//! - Summary: compact counts and diagnostics for the shell

mod json;
mod summary;
mod tree;
mod types;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use tree::TreeReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::model::{DocumentDiagnostics, NormalizedDocument};
use crate::tree::{RenderOptions, TreeNode};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Everything a reporter needs about one document.
#[derive(Debug, Clone, Copy)]
pub struct ParsedView<'a> {
    pub document: &'a NormalizedDocument,
    pub tree: &'a [TreeNode],
    pub diagnostics: &'a DocumentDiagnostics,
}

impl<'a> ParsedView<'a> {
    #[must_use]
    pub const fn new(
        document: &'a NormalizedDocument,
        tree: &'a [TreeNode],
        diagnostics: &'a DocumentDiagnostics,
    ) -> Self {
        Self {
            document,
            tree,
            diagnostics,
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for a single document
    fn generate_view_report(
        &self,
        view: &ParsedView<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_view_report(
        &self,
        view: &ParsedView<'_>,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_view_report(view, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true, RenderOptions::new())
}

/// Create a report generator with color and tree rendering control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
    render_options: RenderOptions,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Tree => Box::new(TreeReporter::new(render_options.colored(use_color))),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_formats() {
        assert_eq!(
            create_reporter(ReportFormat::Json).format(),
            ReportFormat::Json
        );
        assert_eq!(
            create_reporter(ReportFormat::Tree).format(),
            ReportFormat::Tree
        );
        assert_eq!(
            create_reporter(ReportFormat::Auto).format(),
            ReportFormat::Summary
        );
    }

    #[test]
    fn test_write_view_report() {
        let doc = NormalizedDocument::default();
        let tree = crate::tree::build_tree(&doc);
        let diagnostics = doc.diagnostics();
        let view = ParsedView::new(&doc, &tree, &diagnostics);

        let mut out = Vec::new();
        create_reporter_with_options(ReportFormat::Tree, false, RenderOptions::new())
            .write_view_report(&view, &ReportConfig::default(), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Submodels\n");
    }
}
