//! Labeled tree nodes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A node in the document tree.
///
/// Ids are derived from the node's path (`SM-0-SMC-1-item-2`) and are unique
/// within one tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNode {
    /// A node with children (shell, submodel, collection, item, ...)
    Group {
        id: String,
        label: String,
        children: Vec<Self>,
    },
    /// A `key: value` leaf
    Leaf { id: String, label: String },
}

impl TreeNode {
    pub fn group(id: impl Into<String>, label: impl Into<String>, children: Vec<Self>) -> Self {
        Self::Group {
            id: id.into(),
            label: label.into(),
            children,
        }
    }

    pub fn leaf(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Leaf {
            id: id.into(),
            label: label.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Group { id, .. } | Self::Leaf { id, .. } => id,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Group { label, .. } | Self::Leaf { label, .. } => label,
        }
    }

    #[must_use]
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// Children of a group; empty for a leaf.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Group { children, .. } => children,
            Self::Leaf { .. } => &[],
        }
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Self::node_count).sum::<usize>()
    }

    /// Depth-first lookup by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Self> {
        if self.id() == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    /// Visit every node in the subtree depth-first, pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Self)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}

/// Depth-first lookup across a forest of nodes.
#[must_use]
pub fn find_in<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    nodes.iter().find_map(|node| node.find(id))
}

/// Render a JSON value as leaf text: strings unquoted, null empty, others compact.
#[must_use]
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
