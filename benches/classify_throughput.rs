//! Classification and search throughput benchmark.
//!
//! Measures classify + count_matches over built-in-catalog listings of a
//! few hundred tools using Criterion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tool_catalog::tools::{count_matches, format_label};
use tool_catalog::{Catalog, CatalogDefinition, ToolItem};

/// Every built-in tool name plus unmapped extras, repeated up to `size`.
fn listing(size: usize) -> Vec<ToolItem> {
    let definition = CatalogDefinition::builtin();
    let mut names: Vec<String> = definition.index.keys().cloned().collect();
    names.extend((0..32).map(|i| format!("unmapped_tool_{}", i)));
    names
        .iter()
        .cycle()
        .take(size)
        .enumerate()
        .map(|(i, name)| ToolItem::new(name.clone(), format!("Databricks tool number {}", i)))
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let catalog = Catalog::builtin().unwrap();
    let sizes: &[usize] = &[50, 200, 800];

    let mut group = c.benchmark_group("classify");
    for &size in sizes {
        let tools = listing(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &tools, |b, t| {
            b.iter(|| catalog.classify(black_box(t)).total());
        });
    }
    group.finish();
}

fn bench_count_matches(c: &mut Criterion) {
    let catalog = Catalog::builtin().unwrap();
    let tools = listing(200);
    let classified = catalog.classify(&tools);
    let queries: &[&str] = &["", "secret", "CLUSTER", "zzz"];

    let mut group = c.benchmark_group("count_matches");
    for &query in queries {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, q| {
            b.iter(|| count_matches(&classified, black_box(q)).total);
        });
    }
    group.finish();
}

fn bench_format_label(c: &mut Criterion) {
    let tools = listing(200);
    c.bench_function("format_label", |b| {
        b.iter(|| {
            tools
                .iter()
                .map(|t| format_label(black_box(&t.name)).len())
                .sum::<usize>()
        });
    });
}

criterion_group!(benches, bench_classify, bench_count_matches, bench_format_label);
criterion_main!(benches);
