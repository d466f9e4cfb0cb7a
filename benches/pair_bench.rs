//! Benchmark for the eager `Pair` algebra against `Vec`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use radiance::persistent::{Pair, pair};
use std::hint::black_box;

// =============================================================================
// prepend Benchmark
// =============================================================================

fn benchmark_prepend(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("prepend");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("Pair", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut list = Pair::Empty;
                for index in 0..size {
                    list = pair::prepend(black_box(index), list);
                }
                black_box(list)
            });
        });
    }

    group.finish();
}

// =============================================================================
// map / filter Benchmark
// =============================================================================

fn benchmark_map_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter");

    for size in [100, 1000, 10000] {
        let list: Pair<i64> = (0..size).collect();
        let vector: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Pair", size), &list, |bencher, list| {
            bencher.iter(|| {
                let doubled = pair::map(|x: &i64| x * 2, black_box(list));
                black_box(pair::filter(|x: &i64| x % 3 == 0, &doubled))
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &vector, |bencher, vector| {
            bencher.iter(|| {
                let result: Vec<i64> = black_box(vector)
                    .iter()
                    .map(|x| x * 2)
                    .filter(|x| x % 3 == 0)
                    .collect();
                black_box(result)
            });
        });
    }

    group.finish();
}

// =============================================================================
// concat / reverse Benchmark
// =============================================================================

fn benchmark_concat_reverse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("concat_reverse");

    for size in [100, 1000, 10000] {
        let list: Pair<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("concat", size), &list, |bencher, list| {
            bencher.iter(|| black_box(pair::concat(black_box(list), list)));
        });

        group.bench_with_input(BenchmarkId::new("reverse", size), &list, |bencher, list| {
            bencher.iter(|| black_box(pair::reverse(black_box(list))));
        });

        group.bench_with_input(BenchmarkId::new("foldl", size), &list, |bencher, list| {
            bencher.iter(|| black_box(pair::foldl(|acc, x| acc + x, 0, black_box(list))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_prepend,
    benchmark_map_filter,
    benchmark_concat_reverse
);
criterion_main!(benches);
