//! Benchmark for CartesianProduct views.
//!
//! Compares random access and full enumeration of the lazy product with
//! nested loops over the same axes.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use setwise::collect::CartesianProduct;
use std::hint::black_box;

fn axes(axis_length: usize, axis_count: usize) -> Vec<Vec<usize>> {
    (0..axis_count)
        .map(|axis| (0..axis_length).map(|value| value + axis).collect())
        .collect()
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for axis_count in [2, 4, 8] {
        let product = CartesianProduct::new(axes(4, axis_count)).unwrap();
        let size = product.len();

        group.bench_with_input(
            BenchmarkId::new("CartesianProduct", axis_count),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut sum = 0_usize;
                    for index in (0..size).step_by(7) {
                        if let Ok(tuple) = product.get(black_box(index)) {
                            sum += tuple.iter().sum::<usize>();
                        }
                    }
                    black_box(sum)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// iterate Benchmark
// =============================================================================

fn benchmark_iterate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iterate");

    for axis_length in [10, 30, 100] {
        let product = CartesianProduct::new(axes(axis_length, 3)).unwrap();
        let nested = axes(axis_length, 3);

        group.bench_with_input(
            BenchmarkId::new("CartesianProduct", axis_length),
            &axis_length,
            |bencher, _| {
                bencher.iter(|| {
                    let total: usize = product
                        .iter()
                        .map(|tuple| tuple.iter().sum::<usize>())
                        .sum();
                    black_box(total)
                });
            },
        );

        // Nested loops for comparison
        group.bench_with_input(
            BenchmarkId::new("NestedLoops", axis_length),
            &axis_length,
            |bencher, _| {
                bencher.iter(|| {
                    let mut total = 0_usize;
                    for first in &nested[0] {
                        for second in &nested[1] {
                            for third in &nested[2] {
                                total += first + second + third;
                            }
                        }
                    }
                    black_box(total)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_get, benchmark_iterate);
criterion_main!(benches);
