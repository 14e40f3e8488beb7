//! Criterion benchmarks: FFT multiplication vs native num-bigint.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;

use fourmul_bigint::fft_mul;

/// Deterministic operand with `bytes` significant bytes.
fn operand(bytes: usize, seed: u32) -> BigInt {
    let data: Vec<u8> = std::iter::once(0x01)
        .chain((0..bytes as u32).map(|i| {
            (i.wrapping_mul(2_654_435_761).wrapping_add(seed) >> 24) as u8
        }))
        .collect();
    BigInt::from_signed_bytes_be(&data)
}

fn bench_multiplication(c: &mut Criterion) {
    let sizes: Vec<usize> = vec![1 << 10, 1 << 12, 1 << 14, 1 << 16];

    let mut group = c.benchmark_group("Native");
    for &bytes in &sizes {
        let a = operand(bytes, 17);
        let b = operand(bytes, 101);
        group.bench_with_input(BenchmarkId::from_parameter(bytes), &bytes, |bench, _| {
            bench.iter(|| &a * &b);
        });
    }
    group.finish();

    let mut group = c.benchmark_group("FFT");
    for &bytes in &sizes {
        let a = operand(bytes, 17);
        let b = operand(bytes, 101);
        group.bench_with_input(BenchmarkId::from_parameter(bytes), &bytes, |bench, _| {
            bench.iter(|| fft_mul(&a, &b).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_multiplication);
criterion_main!(benches);
