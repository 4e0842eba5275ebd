use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use notedown_engine::{parse, parsing::parse_inline, render_html};
mod common;

fn bench_parse_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_flat");
    group.sample_size(10);

    for size in [10, 100] {
        let content = common::generate_flat_document(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| parse(std::hint::black_box(content)));
        });
    }

    group.finish();
}

fn bench_parse_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_nested");
    group.sample_size(10);

    for depth in [2, 5, 10] {
        let content = common::generate_nested_collapses(10, depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &content, |b, content| {
            b.iter(|| parse(std::hint::black_box(content)));
        });
    }

    group.finish();
}

fn bench_inline(c: &mut Criterion) {
    let content = common::generate_inline_heavy(200);
    c.bench_function("parse_inline", |b| {
        b.iter(|| parse_inline(std::hint::black_box(&content)));
    });
}

fn bench_render(c: &mut Criterion) {
    let doc = parse(&common::generate_flat_document(100));
    c.bench_function("render_html", |b| {
        b.iter(|| render_html(std::hint::black_box(&doc)));
    });
}

criterion_group!(
    benches,
    bench_parse_flat,
    bench_parse_nested,
    bench_inline,
    bench_render
);
criterion_main!(benches);
