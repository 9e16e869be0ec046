//! Property-based tests for the transformer, detection and tree builder.
//!
//! Random input must never panic. Generated environments must always
//! produce a well-formed tree.

use aasx_tools::parsers::{detect_format, parse_document_str, transform, transform_str};
use aasx_tools::tree::{build_tree, TreeBuilder, TreeNode};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::HashSet;

fn element() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        "[A-Za-z]{1,8}".prop_map(|id| json!({"modelType": "Property", "idShort": id, "value": "v"})),
        "[A-Za-z]{1,8}".prop_map(|id| json!({"modelType": "Range", "idShort": id, "min": 0})),
        Just(json!({"idShort": "untyped"})),
        Just(json!(null)),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        ("[A-Za-z]{1,8}", prop::collection::vec(inner, 0..4)).prop_map(|(id, children)| {
            json!({"modelType": "SubmodelElementCollection", "idShort": id, "value": children})
        })
    })
}

fn environment() -> impl Strategy<Value = Value> {
    let shells = prop::collection::vec(
        (
            prop::option::of("[a-z]{1,6}"),
            prop::collection::vec(prop::option::of(0..4usize), 0..3),
        ),
        0..4,
    );
    let submodels = prop::collection::vec(
        (
            prop::option::of("[A-Za-z]{1,6}"),
            prop::collection::vec(element(), 0..4),
        ),
        0..4,
    );
    (shells, submodels).prop_map(|(shells, submodels)| {
        let shells: Vec<Value> = shells
            .into_iter()
            .map(|(id, refs)| {
                let refs: Vec<Value> = refs
                    .into_iter()
                    .map(|r| match r {
                        Some(i) => json!({"keys": [{"value": format!("sm{i}")}]}),
                        None => json!({"keys": []}),
                    })
                    .collect();
                json!({"id": id, "submodels": refs})
            })
            .collect();
        let submodels: Vec<Value> = submodels
            .into_iter()
            .enumerate()
            .map(|(i, (name, elements))| {
                json!({"idShort": name, "id": format!("sm{i}"), "submodelElements": elements})
            })
            .collect();
        json!({"assetAdministrationShells": shells, "submodels": submodels})
    })
}

fn collect_ids<'a>(nodes: &'a [TreeNode], ids: &mut Vec<&'a str>) {
    for node in nodes {
        node.walk(&mut |n| ids.push(n.id()));
    }
}

proptest! {
    // Random-input tests only assert no-panic; almost all of it is rejected.
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn transform_str_doesnt_panic(s in "\\PC{0,2000}") {
        let _ = transform_str(&s);
    }

    #[test]
    fn detect_format_doesnt_panic(s in "\\PC{0,2000}") {
        let _ = detect_format(&s);
    }

    #[test]
    fn json_like_input_doesnt_panic(
        s in prop::string::string_regex(r#"\{[^\}]{0,500}\}"#).unwrap()
    ) {
        let _ = parse_document_str(&s);
    }

    #[test]
    fn generated_environments_build_unique_ids(raw in environment()) {
        let doc = transform(&raw).expect("generated environments are valid");
        prop_assert_eq!(doc.shells.len(), raw["assetAdministrationShells"].as_array().unwrap().len());

        let tree = build_tree(&doc);
        prop_assert_eq!(tree.len(), doc.shells.len() + 1);
        prop_assert_eq!(TreeBuilder::new(&doc).len(), tree.len());

        let mut ids = Vec::new();
        collect_ids(&tree, &mut ids);
        let unique: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), ids.len());

        prop_assert_eq!(build_tree(&doc), tree);
    }

    #[test]
    fn parent_links_match_references(raw in environment()) {
        let doc = transform(&raw).expect("generated environments are valid");
        for sm in &doc.submodels {
            let url = sm.url.as_deref().unwrap();
            let expected = doc.shells.iter().filter(|s| s.references(url)).count();
            let actual = sm.parent_aas.as_ref().map_or(0, Vec::len);
            prop_assert_eq!(actual, expected);
            prop_assert!(sm.parent_aas.as_ref().map_or(true, |p| !p.is_empty()));
        }
    }
}
