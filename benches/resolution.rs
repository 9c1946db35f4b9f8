//! Benchmarks for include resolution.
//!
//! Measures directive scanning and recursive resolution over an in-memory
//! source, so the numbers exclude disk I/O.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rulestitch::directive::scan;
use rulestitch::filesystem::MemoryFS;
use rulestitch::resolver::Resolver;
use rulestitch::roots::compute_roots;
use std::path::Path;

/// A document of `lines` lines where every tenth line is a directive.
fn document_with_directives(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        if i % 10 == 0 {
            content.push_str(&format!("@include part{}.md\n", i / 10));
        } else {
            content.push_str(&format!("Rule line {}\n", i));
        }
    }
    content
}

/// A chain of `depth` documents, each including the next.
fn chained_fs(depth: usize) -> MemoryFS {
    let mut fs = MemoryFS::new();
    for i in 0..depth {
        let content = format!("level {}\n@include level{}.md\n", i, i + 1);
        fs.add_file_string(format!("/rules/level{}.md", i), &content)
            .unwrap();
    }
    fs.add_file_string(format!("/rules/level{}.md", depth), "bottom\n")
        .unwrap();
    fs
}

/// One root document including `width` leaves that all include a shared file.
fn fan_out_fs(width: usize) -> MemoryFS {
    let mut fs = MemoryFS::new();
    let mut root = String::new();
    for i in 0..width {
        root.push_str(&format!("@include leaf{}.md\n", i));
        fs.add_file_string(format!("/rules/leaf{}.md", i), "@include shared.md\n")
            .unwrap();
    }
    fs.add_file_string("/rules/root.md", &root).unwrap();
    fs.add_file_string("/rules/shared.md", "shared body\n").unwrap();
    fs
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("directive_scan");
    for lines in [100, 1_000, 10_000] {
        let content = document_with_directives(lines);
        group.bench_with_input(BenchmarkId::from_parameter(lines), &content, |b, content| {
            b.iter(|| scan(black_box(content)))
        });
    }
    group.finish();
}

fn bench_resolve_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_chain");
    for depth in [5, 25, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter_batched(
                || {
                    let roots = compute_roots::<&str, &str>(&[], &[], Path::new("/rules"));
                    Resolver::with_source(roots, Box::new(chained_fs(depth)))
                },
                |mut resolver| black_box(resolver.resolve("/rules/level0.md")),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_resolve_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_fan_out");
    for width in [10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter_batched(
                || {
                    let roots = compute_roots::<&str, &str>(&[], &[], Path::new("/rules"));
                    Resolver::with_source(roots, Box::new(fan_out_fs(width)))
                },
                |mut resolver| black_box(resolver.resolve("/rules/root.md")),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scan, bench_resolve_chain, bench_resolve_fan_out);
criterion_main!(benches);
