//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ParsedView, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::{DocumentDiagnostics, NormalizedDocument};
use crate::tree::ansi_color;

/// Summary reporter for shell output
pub struct SummaryReporter {
    colored: bool,
}

impl SummaryReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn diagnostics_cell(&self, diagnostics: &DocumentDiagnostics) -> String {
        if diagnostics.is_clean() {
            self.color("none", "green")
        } else {
            self.color(
                &format!(
                    "{} orphan, {} dangling, {} keyless",
                    diagnostics.orphan_submodels.len(),
                    diagnostics.dangling_refs.len(),
                    diagnostics.keyless_refs.len()
                ),
                "yellow",
            )
        }
    }

    /// One line for a document in a multi-file summary.
    #[must_use]
    pub fn file_line(
        &self,
        name: &str,
        document: &NormalizedDocument,
        diagnostics: &DocumentDiagnostics,
    ) -> String {
        format!(
            "{}  {} shells, {} submodels, {} collections, {} properties  [{}]",
            self.color(name, "cyan"),
            document.shell_count(),
            document.submodel_count(),
            document.collection_count(),
            document.property_count(),
            self.diagnostics_cell(diagnostics)
        )
    }

    /// One line for a file that could not be read.
    #[must_use]
    pub fn error_line(&self, name: &str, error: &str) -> String {
        format!("{}  {}", self.color(name, "cyan"), self.color(error, "red"))
    }

    /// Totals across a multi-file summary.
    #[must_use]
    pub fn totals_line(&self, documents: &[&NormalizedDocument], failed: usize) -> String {
        let shells: usize = documents.iter().map(|d| d.shell_count()).sum();
        let submodels: usize = documents.iter().map(|d| d.submodel_count()).sum();
        let mut line = format!(
            "{} {} files, {shells} shells, {submodels} submodels",
            self.color("Total:", "bold"),
            documents.len() + failed
        );
        if failed > 0 {
            line.push_str(&format!(", {}", self.color(&format!("{failed} failed"), "red")));
        }
        line
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_view_report(
        &self,
        view: &ParsedView<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let doc = view.document;
        let mut lines = Vec::new();

        lines.push(self.color("AAS Document Summary", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        if let Some(source) = &config.metadata.source_path {
            lines.push(format!("{}       {source}", self.color("Source:", "cyan")));
        }
        lines.push(format!("{}       {}", self.color("Shells:", "cyan"), doc.shell_count()));
        lines.push(format!(
            "{}    {}",
            self.color("Submodels:", "cyan"),
            doc.submodel_count()
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Collections:", "cyan"),
            doc.collection_count()
        ));
        lines.push(format!(
            "{}   {}",
            self.color("Properties:", "cyan"),
            doc.property_count()
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Diagnostics:", "cyan"),
            self.diagnostics_cell(view.diagnostics)
        ));
        lines.push(format!(
            "{} {:016x}",
            self.color("Content hash:", "cyan"),
            doc.content_hash()
        ));

        for message in view.diagnostics.messages() {
            lines.push(format!("  {} {message}", self.color("!", "yellow")));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build_tree;

    fn doc() -> NormalizedDocument {
        serde_json::from_str(
            r#"{"AAS": [{"name": "Pump", "url": "urn:pump", "submodelRefs": ["urn:gone"]}],
                "SM": [{"name": "Docs", "url": "urn:docs"}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_summary_report_plain() {
        let doc = doc();
        let tree = build_tree(&doc);
        let diagnostics = doc.diagnostics();
        let out = SummaryReporter::new()
            .no_color()
            .generate_view_report(
                &ParsedView::new(&doc, &tree, &diagnostics),
                &ReportConfig::default(),
            )
            .unwrap();

        assert!(out.starts_with("AAS Document Summary\n"));
        assert!(out.contains("Shells:       1"));
        assert!(out.contains("Diagnostics:  1 orphan, 1 dangling, 0 keyless"));
        assert!(out.contains("submodel 'Docs' is not referenced by any shell"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_summary_report_colored() {
        let doc = NormalizedDocument::default();
        let tree = build_tree(&doc);
        let diagnostics = doc.diagnostics();
        let out = SummaryReporter::new()
            .generate_view_report(
                &ParsedView::new(&doc, &tree, &diagnostics),
                &ReportConfig::default(),
            )
            .unwrap();
        assert!(out.contains("\x1b[32mnone\x1b[0m"));
    }

    #[test]
    fn test_file_and_totals_lines() {
        let doc = doc();
        let reporter = SummaryReporter::new().no_color();
        let line = reporter.file_line("a.json", &doc, &doc.diagnostics());
        assert_eq!(
            line,
            "a.json  1 shells, 1 submodels, 0 collections, 0 properties  [1 orphan, 1 dangling, 0 keyless]"
        );
        assert_eq!(
            reporter.totals_line(&[&doc, &doc], 1),
            "Total: 3 files, 2 shells, 2 submodels, 1 failed"
        );
        assert_eq!(reporter.error_line("b.json", "boom"), "b.json  boom");
    }
}
