//! Benchmarks for the element-wise and product engines.
//!
//! Run with:
//! ```bash
//! cargo bench --bench matrix_ops
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use matrso_core::functional::{logical_and, logical_or, multiplies, plus};
use matrso_core::{element_wise, mat_mul, Matrix};
use std::hint::black_box;

/// Benchmark scalar and matrix-matrix element-wise operations
fn bench_element_wise(c: &mut Criterion) {
    let mut group = c.benchmark_group("element_wise");

    for n in [64usize, 256, 512] {
        let a = Matrix::<f64>::random_uniform(n, n, -1.0, 1.0);
        let b = Matrix::<f64>::random_uniform(n, n, -1.0, 1.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_with_input(BenchmarkId::new("scalar_add", n), &a, |bench, a| {
            bench.iter(|| black_box(a + black_box(2.0f64)));
        });

        group.bench_with_input(BenchmarkId::new("matrix_add", n), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(*a + *b));
        });

        group.bench_with_input(BenchmarkId::new("fused_axpy", n), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(element_wise(|(x, y, s)| x * s + y, (*a, *b, 0.5))));
        });
    }

    group.finish();
}

/// Benchmark element-wise operations over transposed views
fn bench_element_wise_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("element_wise_views");
    let n = 256;
    let a = Matrix::<f64>::random_uniform(n, n, -1.0, 1.0);
    let t = a.share_transpose();
    group.throughput(Throughput::Elements((n * n) as u64));

    group.bench_function("contiguous", |bench| bench.iter(|| black_box(&a + &a)));
    group.bench_function("transposed", |bench| bench.iter(|| black_box(&a + &t)));

    group.finish();
}

/// Benchmark numeric and boolean products
fn bench_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("product");

    for n in [16usize, 64, 128] {
        let a = Matrix::<f64>::random_uniform(n, n, 0.0, 1.0);
        let mask = a.gt(0.5);
        group.throughput(Throughput::Elements((n * n * n) as u64));

        group.bench_with_input(BenchmarkId::new("plus_times", n), &a, |bench, a| {
            bench.iter(|| black_box(mat_mul(plus, multiplies, a, a)));
        });

        group.bench_with_input(BenchmarkId::new("semiring", n), &a, |bench, a| {
            bench.iter(|| black_box(a.product(a)));
        });

        group.bench_with_input(BenchmarkId::new("boolean", n), &mask, |bench, m| {
            bench.iter(|| black_box(mat_mul(logical_or, logical_and, m, m)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_element_wise,
    bench_element_wise_views,
    bench_product
);
criterion_main!(benches);
