//! JSON report generator.

use super::{ParsedView, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{DocumentDiagnostics, NormalizedDocument};
use crate::tree::TreeNode;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonViewReport<'a> {
    tool_version: &'a str,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    content_hash: String,
    document: &'a NormalizedDocument,
    diagnostics: &'a DocumentDiagnostics,
    #[serde(skip_serializing_if = "Option::is_none")]
    tree: Option<&'a [TreeNode]>,
}

impl ReportGenerator for JsonReporter {
    fn generate_view_report(
        &self,
        view: &ParsedView<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let report = JsonViewReport {
            tool_version: &config.metadata.tool_version,
            generated_at: Utc::now().to_rfc3339(),
            source: config.metadata.source_path.as_deref(),
            content_hash: format!("{:016x}", view.document.content_hash()),
            document: view.document,
            diagnostics: view.diagnostics,
            tree: config.include_tree.then_some(view.tree),
        };

        if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
