//! Normalized, display-oriented document model.
//!
//! This is the structure produced by [`crate::parsers::transform`] and
//! consumed by the tree builder. The serialized field names (`AAS`, `SM`,
//! `SMC`, `Prop`, `parentAAS`, ...) are part of the output contract, so a
//! normalized document written by one run can be read back by another.
//!
//! Known fields are typed fields. Anything else a producer attaches lands in
//! the `extra` bag of the owning item, which keeps insertion order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use xxhash_rust::xxh3::xxh3_64;

/// Fallback label for a shell without `idShort`.
pub const DEFAULT_SHELL_NAME: &str = "AAS";

fn default_shell_name() -> String {
    DEFAULT_SHELL_NAME.to_string()
}

/// Normalized document: `{AAS: [...], SM: [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDocument {
    /// Shells in input order
    #[serde(rename = "AAS", default)]
    pub shells: Vec<AasItem>,
    /// Submodels in input order
    #[serde(rename = "SM", default)]
    pub submodels: Vec<SubmodelItem>,
}

impl NormalizedDocument {
    #[must_use]
    pub fn new(shells: Vec<AasItem>, submodels: Vec<SubmodelItem>) -> Self {
        Self { shells, submodels }
    }

    #[must_use]
    pub fn shell_count(&self) -> usize {
        self.shells.len()
    }

    #[must_use]
    pub fn submodel_count(&self) -> usize {
        self.submodels.len()
    }

    /// Total number of top-level collections across all submodels
    #[must_use]
    pub fn collection_count(&self) -> usize {
        self.submodels
            .iter()
            .map(|sm| sm.collections.as_ref().map_or(0, Vec::len))
            .sum()
    }

    /// Total number of flattened properties, including submodel-level `Prop` entries
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.submodels
            .iter()
            .map(|sm| {
                let item_props: usize = sm
                    .collections
                    .iter()
                    .flatten()
                    .flat_map(|c| c.items.iter().flatten())
                    .map(|item| item.props.as_ref().map_or(0, Vec::len))
                    .sum();
                item_props + sm.props.as_ref().map_or(0, PropList::len)
            })
            .sum()
    }

    /// Find a shell by its url (the shell's `id`)
    #[must_use]
    pub fn shell_by_url(&self, url: &str) -> Option<&AasItem> {
        self.shells.iter().find(|s| s.url.as_deref() == Some(url))
    }

    /// Find a submodel by its url (the submodel's `id`)
    #[must_use]
    pub fn submodel_by_url(&self, url: &str) -> Option<&SubmodelItem> {
        self.submodels.iter().find(|s| s.url.as_deref() == Some(url))
    }

    /// Stable fingerprint of the serialized document.
    ///
    /// Equal documents always hash equal, so two transforms of the same
    /// input can be compared without a deep walk.
    #[must_use]
    pub fn content_hash(&self) -> u64 {
        serde_json::to_vec(self).map_or(0, |bytes| xxh3_64(&bytes))
    }

    /// Structural observations that do not affect the transform itself.
    #[must_use]
    pub fn diagnostics(&self) -> DocumentDiagnostics {
        let mut diagnostics = DocumentDiagnostics::default();

        for shell in &self.shells {
            for reference in &shell.submodel_refs {
                match reference {
                    None => diagnostics.keyless_refs.push(shell.name.clone()),
                    Some(target) if self.submodel_by_url(target).is_none() => {
                        diagnostics.dangling_refs.push(DanglingRef {
                            shell: shell.name.clone(),
                            target: target.clone(),
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        diagnostics.orphan_submodels = self
            .submodels
            .iter()
            .filter(|sm| sm.parent_aas.is_none())
            .map(SubmodelItem::display_name)
            .collect();

        diagnostics
    }
}

/// A shell in display form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AasItem {
    /// `idShort`, or `"AAS"` when absent
    #[serde(default = "default_shell_name")]
    pub name: String,
    /// The shell's `id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Asset kind (`Type`/`Instance`); the transform always sets it, empty
    /// when the environment has none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub of: Option<String>,
    #[serde(
        rename = "AssetInformation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub asset_information: Option<AssetInformation>,
    /// One entry per submodel reference; `None` for a reference without keys
    #[serde(rename = "submodelRefs", default)]
    pub submodel_refs: Vec<Option<String>>,
    /// Producer-specific fields not covered above
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl AasItem {
    /// Label used for the shell's tree node: the asset id when known, else the name.
    #[must_use]
    pub fn title(&self) -> &str {
        self.asset_information
            .as_ref()
            .and_then(|info| info.unit1.as_deref())
            .filter(|unit1| !unit1.is_empty())
            .unwrap_or(self.name.as_str())
    }

    /// Whether this shell references the given submodel id
    #[must_use]
    pub fn references(&self, submodel_id: &str) -> bool {
        self.submodel_refs
            .iter()
            .any(|r| r.as_deref() == Some(submodel_id))
    }
}

/// Displayed asset attributes of a shell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetInformation {
    /// The global asset id
    #[serde(rename = "Unit1", default, skip_serializing_if = "Option::is_none")]
    pub unit1: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl AssetInformation {
    #[must_use]
    pub fn new(unit1: impl Into<String>) -> Self {
        Self {
            unit1: Some(unit1.into()),
            extra: IndexMap::new(),
        }
    }

    /// Attributes present as key/value pairs, `Unit1` first.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Value)> + '_ {
        self.unit1
            .iter()
            .map(|unit1| ("Unit1", Value::String(unit1.clone())))
            .chain(self.extra.iter().map(|(k, v)| (k.as_str(), v.clone())))
    }
}

/// A submodel in display form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmodelItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The submodel's `id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Top-level collections; absent when the submodel has no elements at all
    #[serde(rename = "SMC", default, skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<ElementCollection>>,
    /// Urls of every shell referencing this submodel; absent (never empty) when unreferenced
    #[serde(rename = "parentAAS", default, skip_serializing_if = "Option::is_none")]
    pub parent_aas: Option<Vec<Option<String>>>,
    /// Submodel-level properties, only set by external producers
    #[serde(rename = "Prop", default, skip_serializing_if = "Option::is_none")]
    pub props: Option<PropList>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl SubmodelItem {
    /// Name for messages: `name`, else `url`, else a placeholder.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.url.clone())
            .unwrap_or_else(|| "<unnamed submodel>".to_string())
    }
}

/// A top-level submodel element collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementCollection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of direct children
    #[serde(default)]
    pub elements: usize,
    /// Direct children; absent when the collection carries no `value` array
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ChildCollection>>,
}

/// A direct child of a top-level collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildCollection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub elements: usize,
    /// Entries of this child's own nested collections, flattened; absent unless
    /// the child is itself a collection
    #[serde(rename = "Prop", default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Vec<PropEntry>>,
}

/// A named value shown as a leaf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl PropEntry {
    #[must_use]
    pub fn new(name: Option<String>, value: Option<Value>) -> Self {
        Self { name, value }
    }
}

/// Submodel-level properties, in either list or map form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropList {
    List(Vec<PropEntry>),
    Map(IndexMap<String, Value>),
}

impl PropList {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::List(entries) => entries.len(),
            Self::Map(map) => map.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries as `(name, value)` pairs in order.
    #[must_use]
    pub fn entries(&self) -> Vec<(Option<&str>, Option<&Value>)> {
        match self {
            Self::List(entries) => entries
                .iter()
                .map(|e| (e.name.as_deref(), e.value.as_ref()))
                .collect(),
            Self::Map(map) => map
                .iter()
                .map(|(k, v)| (Some(k.as_str()), Some(v)))
                .collect(),
        }
    }
}

/// Non-fatal structural observations about a normalized document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDiagnostics {
    /// Submodels no shell references
    pub orphan_submodels: Vec<String>,
    /// References naming a submodel id not present in the document
    pub dangling_refs: Vec<DanglingRef>,
    /// Names of shells holding a reference without keys (one entry per reference)
    pub keyless_refs: Vec<String>,
}

impl DocumentDiagnostics {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.orphan_submodels.len() + self.dangling_refs.len() + self.keyless_refs.len()
    }

    /// One human-readable line per observation
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        let mut messages = Vec::with_capacity(self.total());
        for name in &self.orphan_submodels {
            messages.push(format!("submodel '{name}' is not referenced by any shell"));
        }
        for dangling in &self.dangling_refs {
            messages.push(format!(
                "shell '{}' references missing submodel '{}'",
                dangling.shell, dangling.target
            ));
        }
        for shell in &self.keyless_refs {
            messages.push(format!("shell '{shell}' holds a submodel reference without keys"));
        }
        messages
    }
}

/// A shell reference whose target is not in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DanglingRef {
    pub shell: String,
    pub target: String,
}
