//! Benchmarks for markdown rendering and print assembly.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use docgen::print::build_document;
use docgen::render::render;

fn bench_render_simple(c: &mut Criterion) {
    let md = "# Hello\n\nWorld with **bold** and `code`";
    c.bench_function("render_simple", |b| b.iter(|| render(black_box(md))));
}

fn bench_render_sample(c: &mut Criterion) {
    let md = include_str!("../tests/fixtures/sample.md");
    c.bench_function("render_sample", |b| b.iter(|| render(black_box(md))));
}

fn bench_render_large(c: &mut Criterion) {
    let md = include_str!("../tests/fixtures/sample.md").repeat(50);
    c.bench_function("render_large", |b| b.iter(|| render(black_box(&md))));
}

fn bench_build_document(c: &mut Criterion) {
    let body = render(include_str!("../tests/fixtures/sample.md"));
    c.bench_function("build_document", |b| {
        b.iter(|| build_document(black_box("User Service"), black_box("v2.1.0"), black_box(&body)))
    });
}

criterion_group!(
    benches,
    bench_render_simple,
    bench_render_sample,
    bench_render_large,
    bench_build_document
);
criterion_main!(benches);
