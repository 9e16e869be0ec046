//! Normalized document to labeled tree.
//!
//! Top-level order is one node per shell followed by a single `Submodels`
//! root, which is emitted even when there are no submodels. Absent optional
//! data skips its branch; building never fails.

use super::node::{display_value, TreeNode};
use crate::model::{AasItem, ElementCollection, NormalizedDocument, PropList, SubmodelItem};
use serde_json::Value;
use std::iter::FusedIterator;

/// Placeholder shown when a shell or submodel has no url.
pub const NO_URL: &str = "no url";
/// Id and label of the submodel root node.
pub const SUBMODELS_ROOT: &str = "Submodels";

/// Build the full tree for `doc`.
#[must_use]
pub fn build_tree(doc: &NormalizedDocument) -> Vec<TreeNode> {
    TreeBuilder::new(doc).collect()
}

/// Lazy iterator over the top-level nodes of a document tree.
///
/// Yields `doc.shells.len() + 1` nodes, then `None` forever.
#[derive(Debug, Clone)]
pub struct TreeBuilder<'a> {
    doc: &'a NormalizedDocument,
    next: usize,
}

impl<'a> TreeBuilder<'a> {
    #[must_use]
    pub const fn new(doc: &'a NormalizedDocument) -> Self {
        Self { doc, next: 0 }
    }

    fn total(&self) -> usize {
        self.doc.shells.len() + 1
    }
}

impl Iterator for TreeBuilder<'_> {
    type Item = TreeNode;

    fn next(&mut self) -> Option<TreeNode> {
        let index = self.next;
        let node = match self.doc.shells.get(index) {
            Some(shell) => shell_node(index, shell),
            None if index == self.doc.shells.len() => submodels_root(&self.doc.submodels),
            None => return None,
        };
        self.next += 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TreeBuilder<'_> {}

impl FusedIterator for TreeBuilder<'_> {}

fn titled(name: &str, url: Option<&str>) -> String {
    format!("{name} ({})", url.unwrap_or(NO_URL))
}

fn shell_node(index: usize, shell: &AasItem) -> TreeNode {
    let id = format!("AAS-{index}");
    let mut children = Vec::new();

    if let Some(info) = &shell.asset_information {
        let info_id = format!("{id}-AssetInformation");
        let info_leaves = info
            .entries()
            .enumerate()
            .map(|(k, (_, value))| {
                TreeNode::leaf(
                    format!("{info_id}-{k}"),
                    format!("globalAssetId: {}", display_value(Some(&value))),
                )
            })
            .collect();
        children.push(TreeNode::group(info_id, "AssetInformation", info_leaves));
    }

    let of = shell.of.clone().map(Value::String);
    let attributes = of.iter().chain(shell.extra.values());
    children.extend(attributes.enumerate().map(|(n, value)| {
        TreeNode::leaf(
            format!("{id}-attr-{n}"),
            format!("kind: {}", display_value(Some(value))),
        )
    }));

    let label = titled(shell.title(), shell.url.as_deref());
    TreeNode::group(id, label, children)
}

fn submodels_root(submodels: &[SubmodelItem]) -> TreeNode {
    let children = submodels
        .iter()
        .enumerate()
        .map(|(i, sm)| submodel_node(i, sm))
        .collect();
    TreeNode::group(SUBMODELS_ROOT, SUBMODELS_ROOT, children)
}

fn submodel_node(index: usize, submodel: &SubmodelItem) -> TreeNode {
    let id = format!("SM-{index}");
    let mut children: Vec<TreeNode> = submodel
        .extra
        .iter()
        .enumerate()
        .map(|(n, (key, value))| {
            TreeNode::leaf(
                format!("{id}-attr-{n}"),
                format!("{key}: {}", display_value(Some(value))),
            )
        })
        .collect();

    if let Some(collections) = &submodel.collections {
        children.extend(
            collections
                .iter()
                .enumerate()
                .map(|(k, smc)| collection_node(&format!("{id}-SMC-{k}"), smc)),
        );
    }

    if let Some(props) = &submodel.props {
        children.push(properties_node(&id, props));
    }

    let label = titled(submodel.name.as_deref().unwrap_or_default(), submodel.url.as_deref());
    TreeNode::group(id, label, children)
}

fn collection_node(id: &str, smc: &ElementCollection) -> TreeNode {
    let items = smc
        .items
        .iter()
        .flatten()
        .enumerate()
        .map(|(j, item)| {
            let item_id = format!("{id}-item-{j}");
            let props = item
                .props
                .iter()
                .flatten()
                .enumerate()
                .map(|(p, prop)| {
                    TreeNode::leaf(
                        format!("{item_id}-prop-{p}"),
                        format!(
                            "{}: {}",
                            prop.name.as_deref().unwrap_or_default(),
                            display_value(prop.value.as_ref())
                        ),
                    )
                })
                .collect();
            TreeNode::group(
                item_id,
                item.name.clone().unwrap_or_default(),
                props,
            )
        })
        .collect();

    let label = format!(
        "{} ({} items)",
        smc.name.as_deref().unwrap_or_default(),
        smc.elements
    );
    TreeNode::group(id, label, items)
}

fn properties_node(submodel_id: &str, props: &PropList) -> TreeNode {
    let group_id = format!("{submodel_id}-Properties");
    let leaves = props
        .entries()
        .into_iter()
        .enumerate()
        .map(|(p, (name, value))| {
            TreeNode::leaf(
                format!("{group_id}-{p}"),
                format!("{}: {}", name.unwrap_or_default(), display_value(value)),
            )
        })
        .collect();
    TreeNode::group(group_id, "Properties", leaves)
}
