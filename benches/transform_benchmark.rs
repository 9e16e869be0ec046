//! Performance benchmarks for the transformer and tree builder.
//!
//! Run with: cargo bench --bench transform_benchmark

use aasx_tools::parsers::{detect_format, transform, transform_str};
use aasx_tools::tree::{build_tree, render_tree, RenderOptions};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};
use std::hint::black_box;

/// Generate an environment with `count` shells and submodels, each shell
/// referencing its own submodel and its neighbour's.
fn generate_environment(count: usize) -> Value {
    let shells: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "idShort": format!("Shell{i}"),
                "id": format!("urn:bench:shell:{i}"),
                "assetInformation": {"assetKind": "Instance", "globalAssetId": format!("urn:bench:asset:{i}")},
                "submodels": [
                    {"keys": [{"type": "Submodel", "value": format!("urn:bench:sm:{i}")}]},
                    {"keys": [{"type": "Submodel", "value": format!("urn:bench:sm:{}", (i + 1) % count)}]}
                ]
            })
        })
        .collect();

    let submodels: Vec<Value> = (0..count)
        .map(|i| {
            let items: Vec<Value> = (0..4)
                .map(|j| {
                    json!({
                        "modelType": "SubmodelElementCollection",
                        "idShort": format!("Item{j}"),
                        "value": [{
                            "modelType": "SubmodelElementCollection",
                            "idShort": "Values",
                            "value": [
                                {"modelType": "Property", "idShort": "Min", "value": j},
                                {"modelType": "Property", "idShort": "Max", "value": j * 10}
                            ]
                        }]
                    })
                })
                .collect();
            json!({
                "idShort": format!("Submodel{i}"),
                "id": format!("urn:bench:sm:{i}"),
                "submodelElements": [
                    {"modelType": "SubmodelElementCollection", "idShort": "General", "value": items},
                    {"modelType": "Range", "idShort": "Temperature", "min": 0, "max": 90}
                ]
            })
        })
        .collect();

    json!({"assetAdministrationShells": shells, "submodels": submodels})
}

fn benchmark_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    for size in [10, 100, 1000] {
        let raw = generate_environment(size);
        let content = raw.to_string();

        group.bench_with_input(BenchmarkId::new("value", size), &raw, |b, raw| {
            b.iter(|| black_box(transform(raw)));
        });
        group.bench_with_input(BenchmarkId::new("str", size), &content, |b, content| {
            b.iter(|| black_box(transform_str(content)));
        });
    }
    group.finish();
}

fn benchmark_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree");
    for size in [10, 100, 1000] {
        let Some(doc) = transform(&generate_environment(size)) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("build", size), &doc, |b, doc| {
            b.iter(|| black_box(build_tree(doc)));
        });

        let tree = build_tree(&doc);
        let options = RenderOptions::new().show_ids(true).colored(false);
        group.bench_with_input(BenchmarkId::new("render", size), &tree, |b, tree| {
            b.iter(|| black_box(render_tree(tree, &options)));
        });
    }
    group.finish();
}

fn benchmark_detection(c: &mut Criterion) {
    let content = generate_environment(1000).to_string();
    c.bench_function("detect_format_1000", |b| {
        b.iter(|| black_box(detect_format(&content)));
    });
}

criterion_group!(benches, benchmark_transform, benchmark_tree, benchmark_detection);
criterion_main!(benches);
