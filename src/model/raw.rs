//! Lenient typed view of an external AAS environment document.
//!
//! AAS JSON found in the wild is only loosely conformant: fields go missing,
//! carry the wrong JSON type, or use the older V2 shape. Every field here is
//! optional and every deserializer is total, so one malformed shell or
//! element never aborts the whole document.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Top-level AAS environment (`{assetAdministrationShells, submodels}`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEnvironment {
    #[serde(default, deserialize_with = "lenient::seq")]
    pub asset_administration_shells: Option<Vec<RawShell>>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub submodels: Option<Vec<RawSubmodel>>,
}

impl RawEnvironment {
    /// Read an environment out of an arbitrary JSON value.
    ///
    /// Never fails: anything that is not an object yields an empty environment.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }

    /// Shells in document order (empty when absent or not an array)
    #[must_use]
    pub fn shells(&self) -> &[RawShell] {
        self.asset_administration_shells.as_deref().unwrap_or_default()
    }

    /// Submodels in document order (empty when absent or not an array)
    #[must_use]
    pub fn submodels(&self) -> &[RawSubmodel] {
        self.submodels.as_deref().unwrap_or_default()
    }
}

/// An Asset Administration Shell as it appears on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawShell {
    #[serde(default, deserialize_with = "lenient::opt")]
    pub id_short: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt")]
    pub asset_information: Option<RawAssetInformation>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub submodels: Option<Vec<RawReference>>,
}

impl RawShell {
    /// Identifier of each referenced submodel, one entry per reference.
    ///
    /// A reference without keys contributes `None` rather than being skipped.
    pub fn submodel_refs(&self) -> impl Iterator<Item = Option<String>> + '_ {
        self.submodels
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(RawReference::first_key_value)
    }
}

/// `assetInformation` block of a shell.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAssetInformation {
    #[serde(default, deserialize_with = "lenient::opt")]
    pub asset_kind: Option<String>,
    /// Plain string in AAS 3.0, a `Reference` object in earlier drafts
    #[serde(default, deserialize_with = "lenient::id_or_reference")]
    pub global_asset_id: Option<String>,
}

/// A model reference (`{type, keys: [{type, value}]}`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReference {
    #[serde(default, deserialize_with = "lenient::seq")]
    pub keys: Option<Vec<RawKey>>,
}

impl RawReference {
    /// Value of the first key, which names the referenced submodel.
    #[must_use]
    pub fn first_key_value(&self) -> Option<String> {
        self.keys
            .as_deref()
            .and_then(<[RawKey]>::first)
            .and_then(|key| key.value.clone())
    }
}

/// One key of a reference; only its `value` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawKey {
    #[serde(default, deserialize_with = "lenient::opt")]
    pub value: Option<String>,
}

/// A submodel as it appears on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSubmodel {
    #[serde(default, deserialize_with = "lenient::opt")]
    pub id_short: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub submodel_elements: Option<Vec<SubmodelElement>>,
}

impl RawSubmodel {
    #[must_use]
    pub fn elements(&self) -> &[SubmodelElement] {
        self.submodel_elements.as_deref().unwrap_or_default()
    }
}

/// Model type name of a collection element.
pub const COLLECTION_MODEL_TYPE: &str = "SubmodelElementCollection";
/// Model type name of a property element.
pub const PROPERTY_MODEL_TYPE: &str = "Property";

/// A submodel element, discriminated by its `modelType`.
///
/// Only collections and properties are interpreted. Every other kind
/// (Range, File, Blob, MultiLanguageProperty, ...) and every element without
/// a readable `modelType` lands in [`SubmodelElement::Other`] with its raw
/// `value` kept.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmodelElement {
    Collection {
        id_short: Option<String>,
        /// `None` when the element carries no `value` array
        children: Option<Vec<SubmodelElement>>,
    },
    Property {
        id_short: Option<String>,
        value: Option<Value>,
    },
    Other {
        model_type: Option<String>,
        id_short: Option<String>,
        value: Option<Value>,
    },
}

impl Default for SubmodelElement {
    fn default() -> Self {
        Self::Other {
            model_type: None,
            id_short: None,
            value: None,
        }
    }
}

impl SubmodelElement {
    /// Build an element from an arbitrary JSON value. Never fails.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            return Self::default();
        };

        let model_type = map.get("modelType").and_then(model_type_name);
        let id_short = match map.remove("idShort") {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };
        let value = map.remove("value").filter(|v| !v.is_null());

        match model_type.as_deref() {
            Some(COLLECTION_MODEL_TYPE) => Self::Collection {
                id_short,
                children: match value {
                    Some(Value::Array(items)) => {
                        Some(items.into_iter().map(Self::from_value).collect())
                    }
                    _ => None,
                },
            },
            Some(PROPERTY_MODEL_TYPE) => Self::Property { id_short, value },
            _ => Self::Other {
                model_type,
                id_short,
                value,
            },
        }
    }

    #[must_use]
    pub fn id_short(&self) -> Option<&str> {
        match self {
            Self::Collection { id_short, .. }
            | Self::Property { id_short, .. }
            | Self::Other { id_short, .. } => id_short.as_deref(),
        }
    }

    #[must_use]
    pub fn model_type(&self) -> Option<&str> {
        match self {
            Self::Collection { .. } => Some(COLLECTION_MODEL_TYPE),
            Self::Property { .. } => Some(PROPERTY_MODEL_TYPE),
            Self::Other { model_type, .. } => model_type.as_deref(),
        }
    }

    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::Collection { .. })
    }

    /// Children of a collection; `None` for every other kind.
    #[must_use]
    pub fn children(&self) -> Option<&[Self]> {
        match self {
            Self::Collection { children, .. } => children.as_deref(),
            _ => None,
        }
    }

    /// Scalar payload of a non-collection element.
    #[must_use]
    pub const fn scalar_value(&self) -> Option<&Value> {
        match self {
            Self::Property { value, .. } | Self::Other { value, .. } => value.as_ref(),
            Self::Collection { .. } => None,
        }
    }
}

impl<'de> Deserialize<'de> for SubmodelElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}

/// Read a `modelType` in either V3 (`"Property"`) or V2 (`{"name": "Property"}`) form.
fn model_type_name(value: &Value) -> Option<String> {
    match value {
        Value::String(name) => Some(name.clone()),
        Value::Object(map) => map.get("name").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

/// Deserializers that turn type mismatches into absence instead of errors.
mod lenient {
    use super::{DeserializeOwned, Deserializer, Value};
    use serde::Deserialize;

    /// Any value that does not fit `T` becomes `None`.
    pub fn opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(T::deserialize(value).ok())
    }

    /// Arrays map element-wise; an element that does not fit `T` becomes
    /// `T::default()` so positions and counts are preserved. Non-arrays become `None`.
    pub fn seq<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => Ok(Some(
                items
                    .into_iter()
                    .map(|item| T::deserialize(item).unwrap_or_default())
                    .collect(),
            )),
            _ => Ok(None),
        }
    }

    /// A plain identifier string, or the first key value of a `Reference` object.
    pub fn id_or_reference<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(id) => Ok(Some(id)),
            reference @ Value::Object(_) => Ok(super::RawReference::deserialize(reference)
                .ok()
                .and_then(|r| r.first_key_value())),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_element_kinds() {
        let collection = SubmodelElement::from_value(json!({
            "modelType": "SubmodelElementCollection",
            "idShort": "Nameplate",
            "value": [{"modelType": "Property", "idShort": "Serial", "value": "42"}]
        }));
        assert!(collection.is_collection());
        assert_eq!(collection.id_short(), Some("Nameplate"));
        assert_eq!(collection.children().map(|c| c.len()), Some(1));

        let range = SubmodelElement::from_value(json!({"modelType": "Range", "idShort": "R"}));
        assert_eq!(range.model_type(), Some("Range"));
        assert!(!range.is_collection());
        assert!(range.children().is_none());
    }

    #[test]
    fn test_v2_model_type_object() {
        let element = SubmodelElement::from_value(json!({
            "modelType": {"name": "SubmodelElementCollection"},
            "idShort": "Legacy",
            "value": []
        }));
        assert!(element.is_collection());
        assert_eq!(element.children(), Some(&[][..]));
    }

    #[test]
    fn test_non_object_element_is_other() {
        assert_eq!(SubmodelElement::from_value(json!(7)), SubmodelElement::default());
        assert_eq!(SubmodelElement::from_value(json!(null)).model_type(), None);
    }

    #[test]
    fn test_collection_without_value_array() {
        let element = SubmodelElement::from_value(json!({
            "modelType": "SubmodelElementCollection",
            "idShort": "Empty",
            "value": "not-a-list"
        }));
        assert!(element.is_collection());
        assert!(element.children().is_none());
    }

    #[test]
    fn test_lenient_field_types() {
        let env = RawEnvironment::from_value(&json!({
            "assetAdministrationShells": [
                {"idShort": 5, "id": "urn:a", "assetInformation": "bogus"},
                "not-a-shell"
            ],
            "submodels": {"not": "an array"}
        }));

        assert_eq!(env.shells().len(), 2);
        assert_eq!(env.shells()[0].id_short, None);
        assert_eq!(env.shells()[0].id.as_deref(), Some("urn:a"));
        assert!(env.shells()[0].asset_information.is_none());
        assert!(env.shells()[1].id.is_none());
        assert!(env.submodels().is_empty());
    }

    #[test]
    fn test_submodel_refs_keep_keyless_entries() {
        let env = RawEnvironment::from_value(&json!({
            "assetAdministrationShells": [{
                "submodels": [
                    {"keys": [{"type": "Submodel", "value": "urn:sm:1"}]},
                    {"keys": []},
                    {"type": "ModelReference"},
                    {"keys": [{"type": 7, "value": "urn:sm:2"}, {"value": "urn:other"}]}
                ]
            }],
            "submodels": []
        }));

        let refs: Vec<_> = env.shells()[0].submodel_refs().collect();
        assert_eq!(
            refs,
            vec![
                Some("urn:sm:1".to_string()),
                None,
                None,
                Some("urn:sm:2".to_string())
            ]
        );
    }

    #[test]
    fn test_global_asset_id_reference_form() {
        let env = RawEnvironment::from_value(&json!({
            "assetAdministrationShells": [{
                "assetInformation": {
                    "assetKind": "Instance",
                    "globalAssetId": {"keys": [{"type": "GlobalReference", "value": "urn:asset:9"}]}
                }
            }],
            "submodels": []
        }));

        let info = env.shells()[0].asset_information.as_ref().unwrap();
        assert_eq!(info.asset_kind.as_deref(), Some("Instance"));
        assert_eq!(info.global_asset_id.as_deref(), Some("urn:asset:9"));
    }

    #[test]
    fn test_non_object_environment() {
        let env = RawEnvironment::from_value(&json!([1, 2, 3]));
        assert!(env.shells().is_empty());
        assert!(env.submodels().is_empty());
    }
}
