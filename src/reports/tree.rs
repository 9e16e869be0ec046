//! Tree report generator.

use super::{ParsedView, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::tree::{render_tree, RenderOptions};

/// Renders the document tree as indented text
pub struct TreeReporter {
    options: RenderOptions,
}

impl TreeReporter {
    #[must_use]
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl Default for TreeReporter {
    fn default() -> Self {
        Self::new(RenderOptions::new())
    }
}

impl ReportGenerator for TreeReporter {
    fn generate_view_report(
        &self,
        view: &ParsedView<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();
        if let Some(title) = &config.title {
            out.push_str(title);
            out.push('\n');
        }
        out.push_str(&render_tree(view.tree, &self.options));
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NormalizedDocument;
    use crate::tree::build_tree;

    #[test]
    fn test_tree_report_with_title() {
        let doc: NormalizedDocument = serde_json::from_str(
            r#"{"AAS": [{"name": "Pump", "url": "urn:pump", "of": "Type"}], "SM": []}"#,
        )
        .unwrap();
        let tree = build_tree(&doc);
        let diagnostics = doc.diagnostics();
        let config = ReportConfig {
            title: Some("plant.json".to_string()),
            ..ReportConfig::default()
        };

        let out = TreeReporter::default()
            .generate_view_report(&ParsedView::new(&doc, &tree, &diagnostics), &config)
            .unwrap();
        assert!(out.starts_with("plant.json\nPump (urn:pump)\n"));
        assert!(out.contains("├── AssetInformation\n"));
        assert!(out.contains("└── kind: Type\n"));
        assert!(out.ends_with("Submodels\n"));
    }
}
