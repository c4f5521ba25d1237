//! Benchmarks for splitting and joining clipboard payloads.

#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use neoclip::{SelectionKind, join, split};
use std::hint::black_box;

fn bench_split(c: &mut Criterion) {
    let ascii = "The quick brown fox jumps over the lazy dog.\r\n".repeat(2_000);
    let mixed = "héllo 世界 🦀 mixed width text\n".repeat(2_000);

    c.bench_function("split_ascii_crlf", |b| {
        b.iter(|| split(black_box(ascii.as_bytes()), SelectionKind::Auto));
    });
    c.bench_function("split_multibyte", |b| {
        b.iter(|| split(black_box(mixed.as_bytes()), SelectionKind::Auto));
    });
}

fn bench_join(c: &mut Criterion) {
    let lines: Vec<String> = (0..2_000).map(|i| format!("line number {i}")).collect();

    c.bench_function("join_lf", |b| {
        b.iter(|| join(black_box(&lines), b"\n"));
    });
}

criterion_group!(benches, bench_split, bench_join);
criterion_main!(benches);
