//! Benchmark for curried application against direct calls.

use criterion::{Criterion, criterion_group, criterion_main};
use radiance::compose::{Apply, curry};
use radiance::ops::{BinaryOperator, binary_op};
use std::hint::black_box;

fn add3(first: i64, second: i64, third: i64) -> i64 {
    first + second + third
}

fn benchmark_apply(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("curry_apply");
    let curried = curry(add3);

    group.bench_function("direct", |bencher| {
        bencher.iter(|| black_box(add3(black_box(1), black_box(2), black_box(3))));
    });

    group.bench_function("tupled", |bencher| {
        bencher.iter(|| black_box(curried.apply((black_box(1), black_box(2), black_box(3)))));
    });

    group.bench_function("stepwise", |bencher| {
        bencher.iter(|| {
            black_box(
                curried
                    .apply((black_box(1),))
                    .apply((black_box(2),))
                    .apply((black_box(3),)),
            )
        });
    });

    group.bench_function("reused_partial", |bencher| {
        let partial = curried.apply((1, 2));
        bencher.iter(|| black_box(partial.apply((black_box(3),))));
    });

    group.finish();
}

fn benchmark_binary_op(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("binary_op");
    let less_than = binary_op::curried::<i64>().apply((BinaryOperator::LessThan, 500));

    group.bench_function("section", |bencher| {
        bencher.iter(|| {
            (0..1000_i64)
                .filter(|x| less_than.apply((black_box(*x),)).boolean() == Some(true))
                .count()
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_apply, benchmark_binary_op);
criterion_main!(benches);
