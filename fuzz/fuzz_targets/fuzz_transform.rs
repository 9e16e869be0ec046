#![no_main]
use libfuzzer_sys::fuzz_target;
use aasx_tools::parsers::transform_str;
use aasx_tools::tree::build_tree;

const MAX_WRAPPED_INPUT_LEN: usize = 10_000;

/// Fuzz the transformer and tree builder.
///
/// Input is also wrapped as a submodel element list so the fuzzer reaches
/// the element unpacking rather than stopping at the top-level key check.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(Some(doc)) = transform_str(s) {
            let _ = build_tree(&doc);
        }

        if s.len() < MAX_WRAPPED_INPUT_LEN {
            let wrapped = format!(
                r#"{{"assetAdministrationShells":[{{"id":"urn:f","submodels":[{{"keys":[{{"value":"urn:sm"}}]}}]}}],"submodels":[{{"id":"urn:sm","submodelElements":[{s}]}}]}}"#,
            );
            if let Ok(Some(doc)) = transform_str(&wrapped) {
                let _ = build_tree(&doc);
                let _ = serde_json::to_string(&doc);
            }
        }
    }
});
