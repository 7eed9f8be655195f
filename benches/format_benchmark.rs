// ============================================================================
// Formatting Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Decimal Engine - digit generation for 64- and 256-bit values
// 2. Fixed-Point - full denomination rendering
// 3. Hex - byte blob encoding at typical sizes
// ============================================================================

use amount_fmt::numeric::{U256Digits, U64Digits};
use amount_fmt::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

// ============================================================================
// Decimal Engine Benchmarks
// Digit generation only, no output buffer
// ============================================================================

fn benchmark_digit_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("digit_generation");

    group.bench_function("u64_max", |b| {
        let mut digits = U64Digits::new();
        b.iter(|| {
            digits.fill_from(black_box(&U64::MAX));
            black_box(digits.len())
        });
    });

    for (name, value) in [
        ("u256_small", U256::from(1_500_000_000u64)),
        ("u256_u128", U256::from(u128::MAX)),
        ("u256_max", U256::MAX),
    ] {
        group.bench_with_input(BenchmarkId::new("u256", name), &value, |b, value| {
            let mut digits = U256Digits::new();
            b.iter(|| {
                digits.fill_from(black_box(value));
                black_box(digits.len())
            });
        });
    }

    group.finish();
}

// ============================================================================
// Fixed-Point Benchmarks
// ============================================================================

fn benchmark_denominations(c: &mut Criterion) {
    let mut group = c.benchmark_group("denominations");
    let mut buf = [0u8; 96];

    group.bench_function("nano_avax", |b| {
        b.iter(|| black_box(nano_avax_to_string(black_box(12_340_000_000), &mut buf)));
    });

    group.bench_function("gwei_256", |b| {
        let wei = U256::from(25_000_000_000u64);
        b.iter(|| black_box(wei_to_gwei_string_256(black_box(&wei), &mut buf)));
    });

    group.bench_function("avax_wei_max", |b| {
        b.iter(|| black_box(wei_to_avax_string_256(black_box(&U256::MAX), &mut buf)));
    });

    group.bench_function("truncated", |b| {
        let mut small = [0u8; 8];
        b.iter(|| black_box(wei_to_avax_string_256(black_box(&U256::MAX), &mut small)));
    });

    group.finish();
}

// ============================================================================
// Hex Benchmarks
// ============================================================================

fn benchmark_hex(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_encode");

    // Address, tx id and a longer calldata blob
    for len in [20usize, 32, 256].iter() {
        let bytes: Vec<u8> = (0..*len).map(|i| i as u8).collect();
        let mut buf = vec![0u8; 2 * len + 1];

        group.bench_with_input(BenchmarkId::new("upper", len), &bytes, |b, bytes| {
            b.iter(|| black_box(bin_to_hex(black_box(bytes), &mut buf)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_digit_generation,
    benchmark_denominations,
    benchmark_hex,
);
criterion_main!(benches);
