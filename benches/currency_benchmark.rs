// ============================================================================
// Currency Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parsing - decimal strings and floats into nano counts
// 2. Formatting - canonical 9-digit decimal rendering
// 3. Arithmetic - checked add/sub/mul on the hot path
// 4. Sampling - uniform amounts within bounds
// ============================================================================

use coda_currency::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for input in ["42", "1.5", "123456789.123456789"] {
        group.bench_with_input(BenchmarkId::new("decimal_string", input), &input, |b, s| {
            b.iter(|| black_box(Currency::from_whole(black_box(*s))));
        });
    }

    group.bench_function("float", |b| {
        b.iter(|| black_box(Currency::from_whole(black_box(0.123_456_789))));
    });

    group.finish();
}

fn benchmark_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    for nanos in [123i128, 5_000_000_000, 123_456_789_123_456_789] {
        let value = Currency::from_nano(nanos);
        group.bench_with_input(BenchmarkId::new("decimal_string", nanos), &value, |b, v| {
            b.iter(|| black_box(v.to_decimal_string()));
        });
    }

    group.finish();
}

fn benchmark_arithmetic(c: &mut Criterion) {
    let a = Currency::from_whole("1234.5").unwrap();
    let b = Currency::from_whole("0.000000017").unwrap();

    c.bench_function("checked_add", |bench| {
        bench.iter(|| black_box(black_box(a).checked_add(black_box(b))));
    });

    c.bench_function("checked_sub", |bench| {
        bench.iter(|| black_box(black_box(a).checked_sub(black_box(b))));
    });

    c.bench_function("checked_mul_scalar", |bench| {
        bench.iter(|| black_box(black_box(a).checked_mul_scalar(black_box(1_000))));
    });
}

fn benchmark_sampling(c: &mut Criterion) {
    let lower = Currency::from_whole("0.01").unwrap();
    let upper = Currency::from_whole(1_000).unwrap();
    let mut rng = StdRng::seed_from_u64(0);

    c.bench_function("random_between", |b| {
        b.iter(|| black_box(Currency::random_between_with(&mut rng, lower, upper)));
    });
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_formatting,
    benchmark_arithmetic,
    benchmark_sampling,
);
criterion_main!(benches);
