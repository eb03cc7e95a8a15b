//! Benchmark – `wolfram_scanner::Scanner`
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use wolfram_scanner::{Scanner, SliceLexer};

/// A single comment of exactly `target_len` bytes with a flat body.
fn make_flat_comment(target_len: usize) -> String {
    assert!(target_len >= 4, "target_len must be >= 4");
    let mut s = String::with_capacity(target_len);
    s.push_str("(*");
    s.extend(std::iter::repeat_n('a', target_len - 4));
    s.push_str("*)");
    s
}

/// A comment nested `depth` levels deep: `(* (* ... *) *)`.
fn make_nested_comment(depth: usize) -> String {
    let mut s = "(* ".repeat(depth);
    s.push_str(&"*) ".repeat(depth));
    s
}

/// Body dense with near-miss delimiters: `*`, `(` and `)` that never open
/// or close anything.
fn make_noisy_comment(target_len: usize) -> String {
    let mut s = String::with_capacity(target_len + 4);
    s.push_str("(*");
    while s.len() + 6 < target_len {
        s.push_str("* ( ) ");
    }
    s.push_str("*)");
    s
}

fn scan_once(scanner: &Scanner, input: &str) -> usize {
    let mut lexer = SliceLexer::new(input.as_bytes());
    assert!(scanner.scan(&mut lexer, &[true]));
    lexer.position()
}

fn bench_comments(c: &mut Criterion) {
    let scanner = Scanner::new();
    let mut group = c.benchmark_group("scan_comment");

    for &len in &[1_000usize, 100_000] {
        let flat = make_flat_comment(len);
        group.throughput(Throughput::Bytes(flat.len() as u64));
        group.bench_with_input(BenchmarkId::new("flat", len), &flat, |b, input| {
            b.iter(|| scan_once(&scanner, black_box(input)));
        });

        let noisy = make_noisy_comment(len);
        group.throughput(Throughput::Bytes(noisy.len() as u64));
        group.bench_with_input(BenchmarkId::new("noisy", len), &noisy, |b, input| {
            b.iter(|| scan_once(&scanner, black_box(input)));
        });
    }

    for &depth in &[16usize, 4_096] {
        let nested = make_nested_comment(depth);
        group.throughput(Throughput::Bytes(nested.len() as u64));
        group.bench_with_input(BenchmarkId::new("nested", depth), &nested, |b, input| {
            b.iter(|| scan_once(&scanner, black_box(input)));
        });
    }

    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_comments }
criterion_main!(benches);
