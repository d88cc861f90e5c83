//! Criterion micro-benchmarks for packed array access, reordering, and
//! reduction.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use wordpack_bench::{access_pattern, int_grid_profile, scatter_profile, SIZES};
use wordpack_core::Vector2;

/// Benchmark: random-order `get` over the whole array.
fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_random");
    for n in SIZES {
        let a = scatter_profile(n, 1);
        let idx = access_pattern(n, n, 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let mut acc = Vector2::ZERO;
                for &i in &idx {
                    acc = acc + a.get_or_none(i).unwrap_or(Vector2::ZERO);
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

/// Benchmark: sequential `set` of every element.
fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_sequential");
    for n in SIZES {
        let mut a = scatter_profile(n, 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                for i in 0..n {
                    a.set(i, Vector2::splat(i as f32)).unwrap();
                }
                black_box(a.len())
            });
        });
    }
    group.finish();
}

/// Benchmark: componentwise `sum` and a projected `sum_of`.
fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");
    for n in SIZES {
        let a = scatter_profile(n, 3);
        group.bench_with_input(BenchmarkId::new("sum", n), &n, |b, _| {
            b.iter(|| black_box(a.sum()));
        });
        group.bench_with_input(BenchmarkId::new("sum_of_length", n), &n, |b, _| {
            b.iter(|| black_box(a.sum_of(Vector2::length)));
        });
    }
    group.finish();
}

/// Benchmark: seeded Fisher-Yates shuffle in place.
fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");
    for n in SIZES {
        let mut a = scatter_profile(n, 4);
        let mut seed = 0u64;
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                a.shuffle_seeded(seed);
                seed += 1;
                black_box(a.first_or_none())
            });
        });
    }
    group.finish();
}

/// Benchmark: stable sorted copy by a float key.
fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted_by_key");
    for n in SIZES {
        let a = scatter_profile(n, 5);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(a.sorted_by_key(Vector2::length_squared)));
        });
    }
    group.finish();
}

/// Benchmark: gather a shuffled index list into a new array.
fn bench_gather(c: &mut Criterion) {
    let grid = int_grid_profile(316, 316);
    let idx = access_pattern(grid.len(), grid.len(), 6);
    c.bench_function("slice_array_100k", |b| {
        b.iter(|| black_box(grid.slice_array(&idx).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_get,
    bench_set,
    bench_sum,
    bench_shuffle,
    bench_sort,
    bench_gather
);
criterion_main!(benches);
