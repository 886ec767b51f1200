//! Rewriting benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mapstyle_core::{ResourceKind, StyleDocument};
use mapstyle_resolver::{rewrite_reference, rewrite_style_document, ResolverOptions};

const STREETS_STYLE: &str = include_str!("../tests/fixtures/streets.json");

fn rewrite_single(c: &mut Criterion) {
    let options = ResolverOptions::default();
    c.bench_function("rewrite_sprite_reference", |b| {
        b.iter(|| {
            rewrite_reference(
                black_box("mapbox://sprites/mapbox/streets-v12/draft@2x"),
                ResourceKind::Sprite,
                "pk.test",
                &options,
            )
        })
    });
}

fn rewrite_document(c: &mut Criterion) {
    let style = StyleDocument::from_json(STREETS_STYLE).expect("fixture parses");
    c.bench_function("rewrite_streets_style", |b| {
        b.iter(|| {
            let mut doc = style.clone();
            rewrite_style_document(black_box(&mut doc), "pk.test");
            doc
        })
    });
}

criterion_group!(benches, rewrite_single, rewrite_document);
criterion_main!(benches);
