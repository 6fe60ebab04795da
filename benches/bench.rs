//! Criterion benchmarks for Glaive.
//!
//! Covers term expansion, boolean query building and two-tier search over an
//! in-memory catalog.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use glaive::catalog::{CatalogRecord, MemoryCatalog};
use glaive::expansion::{SynonymTermExpander, TermExpander};
use glaive::query::BooleanQueryBuilder;
use glaive::search::{SearchConfig, SearchOrchestrator};
use glaive::synonym::SynonymStore;

const WORDS: &[&str] = &[
    "capacete", "elmo", "casco", "azul", "blue", "luva", "bota", "jaqueta", "casaco", "moto",
    "couro", "preto", "vermelho", "viseira", "oculos", "joelheira", "bolsa", "mochila",
];

/// Generate a dictionary of `count` synonym groups.
fn generate_store(count: usize) -> Arc<SynonymStore> {
    let store = Arc::new(SynonymStore::empty());
    store.add("capacete", ["elmo", "casco"]);
    store.add("azul", ["blue"]);
    for i in 0..count {
        store.add(&format!("main{i}"), [format!("syn{i}a"), format!("syn{i}b")]);
    }
    store
}

/// Generate catalog records with names built from the word list.
fn generate_catalog(count: usize) -> Arc<MemoryCatalog> {
    let records = (0..count).map(|i| {
        let name = (0..4)
            .map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()])
            .collect::<Vec<_>>()
            .join(" ");
        CatalogRecord::new(i as u64).with_field("name", name)
    });
    Arc::new(MemoryCatalog::with_records(records))
}

fn bench_expansion(c: &mut Criterion) {
    let store = generate_store(5_000);
    let expander = SynonymTermExpander::new(store.clone());
    let builder = BooleanQueryBuilder::new(Arc::new(expander.clone()));

    let mut group = c.benchmark_group("expansion");
    group.throughput(Throughput::Elements(1));

    group.bench_function("expand_main_term", |b| {
        b.iter(|| expander.expand_term(black_box("capacete")))
    });
    group.bench_function("expand_reverse_term", |b| {
        b.iter(|| expander.expand_term(black_box("syn4999b")))
    });
    group.bench_function("build_boolean_query", |b| {
        b.iter(|| builder.build(black_box("capacete azul de couro preto")))
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let orchestrator = SearchOrchestrator::new(
        generate_catalog(10_000),
        generate_store(1_000),
        SearchConfig::default(),
    );

    let mut group = c.benchmark_group("search");
    group.bench_function("full_text_with_synonyms", |b| {
        b.iter(|| orchestrator.search(black_box("capacete azul"), true, true))
    });
    group.bench_function("substring_fallback", |b| {
        b.iter(|| orchestrator.search(black_box("oculos jo"), false, false))
    });
    group.finish();
}

criterion_group!(benches, bench_expansion, bench_search);
criterion_main!(benches);
