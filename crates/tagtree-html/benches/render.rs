//! Benchmarks for tree rendering performance.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tagtree_html::helpers::map;
use tagtree_html::tags::{a, body, div, html, li, p, span, table, td, tr, ul};
use tagtree_html::{Element, Render};

/// Build a table with `rows` rows of five cells each.
fn generate_table(rows: usize) -> Element {
    table().child(map(0..rows, |i| {
        tr().attr("class", if i % 2 == 0 { "even" } else { "odd" })
            .child(map(0..5, move |j| {
                td().attr("data-col", j.to_string())
                    .child(format!("row {i} col {j}"))
            }))
    }))
}

/// Build a document with `sections` sections of mixed inline content.
fn generate_document(sections: usize) -> Element {
    html().attr("lang", "en").child(body().child(map(0..sections, |i| {
        div()
            .attr("id", format!("section-{i}"))
            .attr("hidden", i % 3 == 0)
            .child(p().child("  Some   <escaped> & collapsed   text ").child(span().child("inline")))
            .child(ul().child(map(0..3, |k| {
                li().child(a().attr("href", format!("#item-{k}")).child(format!("Item {k}")))
            })))
    })))
}

fn bench_render_simple(c: &mut Criterion) {
    let page = div().attr("class", "container").child(p().child("Hello"));

    c.bench_function("render_simple_element", |b| {
        b.iter(|| page.render());
    });
}

fn bench_render_text_normalization(c: &mut Criterion) {
    let text = "  lots   of \t\t whitespace \n and <markup> & entities  ".repeat(100);
    let page = p().child(text);

    c.bench_function("render_text_normalization", |b| {
        b.iter(|| page.render());
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_table");

    for rows in [10, 100, 1000] {
        let page = generate_table(rows);
        let bytes = page.render().map(|s| s.len()).unwrap_or_default();
        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &page, |b, page| {
            b.iter(|| page.render());
        });
    }

    group.finish();
}

fn bench_render_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_document");

    for sections in [10, 100] {
        let page = generate_document(sections);
        group.bench_with_input(BenchmarkId::from_parameter(sections), &page, |b, page| {
            b.iter(|| page.render());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_simple,
    bench_render_text_normalization,
    bench_render_varying_sizes,
    bench_render_document,
);
criterion_main!(benches);
