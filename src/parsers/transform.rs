//! Raw AAS environment to normalized document transformation.
//!
//! The transform is total: every input either produces a document or `None`
//! ("not an AAS document"). Malformed nested shapes degrade to absent
//! fields and never abort the whole document.

use super::traits::ParseError;
use crate::model::raw::{RawShell, RawSubmodel};
use crate::model::{
    AasItem, AssetInformation, ChildCollection, ElementCollection, NormalizedDocument, PropEntry,
    RawEnvironment, SubmodelElement, SubmodelItem, DEFAULT_SHELL_NAME,
};
use indexmap::IndexMap;
use serde_json::Value;

/// Top-level key holding the shells of an environment
pub const SHELLS_KEY: &str = "assetAdministrationShells";
/// Top-level key holding the submodels of an environment
pub const SUBMODELS_KEY: &str = "submodels";

/// Transform a parsed AAS environment into its normalized form.
///
/// Returns `None` unless both [`SHELLS_KEY`] and [`SUBMODELS_KEY`] hold a
/// truthy value (see [`is_truthy`]). Empty arrays are accepted.
#[must_use]
pub fn transform(raw: &Value) -> Option<NormalizedDocument> {
    let has_key = |key: &str| raw.get(key).is_some_and(is_truthy);
    if !has_key(SHELLS_KEY) || !has_key(SUBMODELS_KEY) {
        return None;
    }

    let env = RawEnvironment::from_value(raw);
    let shells: Vec<AasItem> = env.shells().iter().map(shell_item).collect();
    let submodels = env
        .submodels()
        .iter()
        .map(|sm| submodel_item(sm, &shells))
        .collect();

    Some(NormalizedDocument::new(shells, submodels))
}

/// Parse `content` as JSON and transform it.
///
/// Malformed JSON is an error; well-formed JSON that is not an AAS
/// environment is `Ok(None)`.
pub fn transform_str(content: &str) -> Result<Option<NormalizedDocument>, ParseError> {
    let raw: Value = serde_json::from_str(content)?;
    Ok(transform(&raw))
}

/// JavaScript-style truthiness: `null`, `false`, `0`, `NaN` and `""` are falsy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn shell_item(shell: &RawShell) -> AasItem {
    let info = shell.asset_information.as_ref();
    let name = shell
        .id_short
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SHELL_NAME.to_string());

    let submodel_refs: Vec<Option<String>> = shell.submodel_refs().collect();
    let keyless = submodel_refs.iter().filter(|r| r.is_none()).count();
    if keyless > 0 {
        tracing::debug!(shell = %name, keyless, "submodel reference without keys");
    }

    AasItem {
        url: shell.id.clone(),
        of: Some(info.and_then(|i| i.asset_kind.clone()).unwrap_or_default()),
        asset_information: Some(AssetInformation::new(
            info.and_then(|i| i.global_asset_id.clone())
                .unwrap_or_default(),
        )),
        submodel_refs,
        extra: IndexMap::new(),
        name,
    }
}

fn submodel_item(submodel: &RawSubmodel, shells: &[AasItem]) -> SubmodelItem {
    let elements = submodel.elements();
    let collections =
        (!elements.is_empty()).then(|| elements.iter().filter_map(element_collection).collect());

    SubmodelItem {
        name: submodel.id_short.clone(),
        url: submodel.id.clone(),
        collections,
        parent_aas: parent_urls(submodel.id.as_deref(), shells),
        props: None,
        extra: IndexMap::new(),
    }
}

/// Urls of every shell referencing `submodel_id`; `None` when there are none.
///
/// A submodel without an id has no parents, even when a shell holds a
/// keyless reference.
fn parent_urls(submodel_id: Option<&str>, shells: &[AasItem]) -> Option<Vec<Option<String>>> {
    let id = submodel_id?;
    let parents: Vec<Option<String>> = shells
        .iter()
        .filter(|shell| shell.references(id))
        .map(|shell| shell.url.clone())
        .collect();
    (!parents.is_empty()).then_some(parents)
}

fn element_collection(element: &SubmodelElement) -> Option<ElementCollection> {
    let SubmodelElement::Collection { id_short, children } = element else {
        tracing::debug!(
            model_type = element.model_type().unwrap_or("<none>"),
            id_short = element.id_short().unwrap_or_default(),
            "skipping non-collection submodel element"
        );
        return None;
    };

    Some(ElementCollection {
        name: id_short.clone(),
        elements: children.as_ref().map_or(0, Vec::len),
        items: children
            .as_ref()
            .map(|items| items.iter().map(child_collection).collect()),
    })
}

fn child_collection(child: &SubmodelElement) -> ChildCollection {
    let children = child.children();
    ChildCollection {
        name: child.id_short().map(str::to_string),
        elements: children.map_or(0, |c| c.len()),
        props: child
            .is_collection()
            .then(|| flatten_props(children.unwrap_or_default())),
    }
}

/// Entries of every nested collection among `children`, one level deep.
fn flatten_props(children: &[SubmodelElement]) -> Vec<PropEntry> {
    children
        .iter()
        .filter_map(SubmodelElement::children)
        .flatten()
        .map(|entry| {
            PropEntry::new(
                entry.id_short().map(str::to_string),
                entry.scalar_value().cloned(),
            )
        })
        .collect()
}
