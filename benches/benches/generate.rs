//! Whole-document generation throughput.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use schemats_typegen::{SchemaMap, TypegenOptions, generate_typescript_types, parse_document};
use serde_json::json;

/// `count` object schemas, each referencing the next and a shared enum.
fn chained_schemas(count: usize) -> SchemaMap {
    let mut schemas = serde_json::Map::new();
    schemas.insert(
        "Status".to_string(),
        json!({ "type": "string", "enum": ["active", "on-hold", "archived"] }),
    );
    for i in 0..count {
        schemas.insert(
            format!("Model{}", i),
            json!({
                "type": "object",
                "required": ["id"],
                "properties": {
                    "id": { "type": "integer" },
                    "display-name": { "type": "string" },
                    "status": { "$ref": "#/components/schemas/Status" },
                    "tags": { "type": "array", "items": { "type": "string" } },
                    "next": { "$ref": format!("#/components/schemas/Model{}", (i + 1) % count) }
                }
            }),
        );
    }
    parse_document(&json!({ "openapi": "3.0.3", "components": { "schemas": schemas } })).unwrap()
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for count in [10, 100, 1000] {
        let schemas = chained_schemas(count);
        for (label, options) in [
            ("named", TypegenOptions::default()),
            ("inline", TypegenOptions::inline()),
        ] {
            // Inline expansion follows the whole chain from every declaration.
            if options.inline_ref && count > 100 {
                continue;
            }
            group.bench_with_input(BenchmarkId::new(label, count), &schemas, |b, schemas| {
                b.iter(|| generate_typescript_types(black_box(schemas), &options))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
