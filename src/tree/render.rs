//! Plain-text tree rendering with box-drawing guides.

use super::node::TreeNode;
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Apply ANSI color formatting if colored output is enabled.
pub(crate) fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Options for [`render_tree`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append `[id]` after each label
    pub show_ids: bool,
    /// Number of levels to draw; deeper levels collapse into a count
    pub max_depth: Option<usize>,
    /// Maximum label width in terminal columns
    pub max_label_width: Option<usize>,
    /// ANSI colors for group labels
    pub colored: bool,
}

impl RenderOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            show_ids: false,
            max_depth: None,
            max_label_width: None,
            colored: false,
        }
    }

    #[must_use]
    pub const fn show_ids(mut self, show: bool) -> Self {
        self.show_ids = show;
        self
    }

    #[must_use]
    pub const fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub const fn max_label_width(mut self, width: Option<usize>) -> Self {
        self.max_label_width = width;
        self
    }

    #[must_use]
    pub const fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn line(&self, node: &TreeNode, top_level: bool) -> String {
        let label = match self.max_label_width {
            Some(width) => truncate_label(node.label(), width),
            None => node.label().to_string(),
        };
        let label = match (node.is_group(), top_level) {
            (true, true) => ansi_color(&label, "bold", self.colored),
            (true, false) => ansi_color(&label, "cyan", self.colored),
            (false, _) => label,
        };
        if self.show_ids {
            format!("{label} {}", ansi_color(&format!("[{}]", node.id()), "dim", self.colored))
        } else {
            label
        }
    }
}

/// Render `nodes` as an indented text tree, one line per node.
#[must_use]
pub fn render_tree(nodes: &[TreeNode], options: &RenderOptions) -> String {
    let mut out = String::new();
    for node in nodes {
        out.push_str(&options.line(node, true));
        out.push('\n');
        render_children(node, "", 1, options, &mut out);
    }
    out
}

fn render_children(
    node: &TreeNode,
    prefix: &str,
    depth: usize,
    options: &RenderOptions,
    out: &mut String,
) {
    let children = node.children();
    if children.is_empty() {
        return;
    }

    if options.max_depth.is_some_and(|max| depth >= max) {
        let hidden: usize = children.iter().map(TreeNode::node_count).sum();
        let marker = format!("{ELLIPSIS} ({hidden} hidden)");
        let _ = writeln!(out, "{prefix}└── {}", ansi_color(&marker, "dim", options.colored));
        return;
    }

    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let (branch, continuation) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        let _ = writeln!(out, "{prefix}{branch}{}", options.line(child, false));
        render_children(
            child,
            &format!("{prefix}{continuation}"),
            depth + 1,
            options,
            out,
        );
    }
}

/// Truncate `label` to at most `max_width` display columns, ending in `…` when cut.
#[must_use]
pub fn truncate_label(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut truncated = String::new();
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        truncated.push(c);
    }
    truncated.push(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TreeNode> {
        vec![
            TreeNode::group(
                "AAS-0",
                "Pump (urn:pump)",
                vec![
                    TreeNode::group(
                        "AAS-0-AssetInformation",
                        "AssetInformation",
                        vec![TreeNode::leaf("AAS-0-AssetInformation-0", "globalAssetId: x")],
                    ),
                    TreeNode::leaf("AAS-0-attr-0", "kind: Instance"),
                ],
            ),
            TreeNode::group("Submodels", "Submodels", vec![]),
        ]
    }

    #[test]
    fn test_render_guides() {
        let out = render_tree(&sample(), &RenderOptions::new());
        let expected = "\
Pump (urn:pump)
├── AssetInformation
│   └── globalAssetId: x
└── kind: Instance
Submodels
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_render_ids() {
        let out = render_tree(&sample(), &RenderOptions::new().show_ids(true));
        assert!(out.starts_with("Pump (urn:pump) [AAS-0]\n"));
        assert!(out.contains("└── kind: Instance [AAS-0-attr-0]"));
    }

    #[test]
    fn test_render_depth_limit() {
        let out = render_tree(&sample(), &RenderOptions::new().max_depth(Some(1)));
        assert_eq!(out, "Pump (urn:pump)\n└── … (3 hidden)\nSubmodels\n");

        let out = render_tree(&sample(), &RenderOptions::new().max_depth(Some(2)));
        assert!(out.contains("│   └── … (1 hidden)"));
    }

    #[test]
    fn test_render_colored() {
        let out = render_tree(&sample(), &RenderOptions::new().colored(true));
        assert!(out.contains("\x1b[1mPump (urn:pump)\x1b[0m"));
        assert!(out.contains("\x1b[36mAssetInformation\x1b[0m"));
        assert!(out.contains("└── kind: Instance\n"));
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 8), "short");
        assert_eq!(truncate_label("exactly8", 8), "exactly8");
        assert_eq!(truncate_label("much too long", 8), "much to…");
        assert_eq!(truncate_label("日本語のラベル", 8), "日本語…");
        assert_eq!(truncate_label("日本語のラベル", 8).width(), 7);
    }
}
