//! Benchmarks for fixed-capacity polynomial arithmetic.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use statpoly::prelude::*;

/// Generates a deterministic polynomial filling the whole capacity.
fn sample_poly_i64<const N: usize>() -> Poly<i64, N> {
    (0..N).map(|i| (i as i64 % 100) - 50).collect()
}

fn sample_poly_q<const N: usize>() -> Poly<Q, N> {
    (0..N).map(|i| Q::from_integer((i as i64 % 100) - 50)).collect()
}

/// `x^(N-1) - 1`.
fn unity<const N: usize>() -> Poly<i64, N> {
    Poly::monomial(1, N - 1) - 1
}

// Capacities are type parameters, so each size is its own instantiation.
macro_rules! bench_mul_sizes {
    ($group:ident, $($n:literal => $p:literal),*) => {$(
        let a = sample_poly_i64::<$n>();
        let b = sample_poly_i64::<$n>();
        $group.bench_with_input(BenchmarkId::new("Poly<i64>", $n), &$n, |bench, _| {
            bench.iter(|| black_box(a.mul_poly::<$n, $p>(&b)))
        });

        let a = sample_poly_q::<$n>();
        let b = sample_poly_q::<$n>();
        $group.bench_with_input(BenchmarkId::new("Poly<Q>", $n), &$n, |bench, _| {
            bench.iter(|| black_box(a.mul_poly::<$n, $p>(&b)))
        });
    )*};
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_mul");
    bench_mul_sizes!(group, 8 => 15, 32 => 63, 128 => 255);
    group.finish();
}

fn bench_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_div");

    // pseudo-division with a monic divisor
    let phi1 = Poly::new([-1i64, 1]);
    group.bench_function("x^64 - 1 / (x - 1)", |b| {
        let dividend = unity::<65>();
        b.iter(|| black_box(dividend.quotient::<2, 64>(&phi1)));
    });

    // pseudo-division with growing leading coefficient powers
    let divisor = Poly::new([1i64, 0, 3]);
    group.bench_function("pseudo, lc = 3", |b| {
        let dividend = sample_poly_i64::<12>();
        b.iter(|| black_box(dividend.div_rem::<3, 10, 3>(&divisor)));
    });

    // field division over the rationals
    let divisor = Poly::new([Q::from_integer(1), Q::from_integer(0), Q::from_integer(3)]);
    group.bench_function("field, Q", |b| {
        let dividend = sample_poly_q::<32>();
        b.iter(|| black_box(dividend.div_rem::<3, 30, 3>(&divisor)));
    });

    group.finish();
}

fn bench_power(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_pow");

    let p = Poly::new([1i64, 1]);
    group.bench_function("(x + 1)^16", |b| {
        b.iter(|| black_box(p.pow::<16, 32>()));
    });

    let p = Poly::new([Q::from_integer(2), Q::from_integer(-1), Q::from_integer(1)]);
    group.bench_function("(x^2 - x + 2)^8 over Q", |b| {
        b.iter(|| black_box(p.pow::<8, 24>()));
    });

    group.finish();
}

criterion_group!(benches, bench_multiplication, bench_division, bench_power);
criterion_main!(benches);
