//! Benchmark for lazy streams.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use radiance::facade::Stream;
use radiance::persistent::lazy_pair;
use std::hint::black_box;

// =============================================================================
// take Benchmark
// =============================================================================

fn benchmark_take(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("stream_take");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("range_from", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(Stream::range_from(0).take(black_box(size))));
        });

        group.bench_with_input(
            BenchmarkId::new("map_filter_take", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let pipeline = Stream::range_from(0)
                        .map(|x: &i64| x * 3)
                        .filter(|x: &i64| x % 2 == 0);
                    black_box(pipeline.take(black_box(size)))
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// foldl Benchmark
// =============================================================================

fn benchmark_foldl(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("stream_foldl");

    for size in [1000_i64, 10000, 100_000] {
        group.bench_with_input(BenchmarkId::new("range", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let stream = lazy_pair::range(0, black_box(size));
                black_box(lazy_pair::foldl(|acc: i64, x: &i64| acc + x, 0, &stream))
            });
        });

        group.bench_with_input(BenchmarkId::new("memoized", size), &size, |bencher, &size| {
            let stream = lazy_pair::range(0, size);
            let _ = lazy_pair::length(&stream);
            bencher.iter(|| black_box(lazy_pair::foldl(|acc: i64, x: &i64| acc + x, 0, &stream)));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_take, benchmark_foldl);
criterion_main!(benches);
