// Copyright 2025 the VeloGraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use velograph_compare::ComparisonSet;

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison/add");

    // Every add scans for the key, so filling is quadratic; lists stay short
    // in practice.
    for len in [4usize, 16, 64, 256] {
        let keys: Vec<u64> = (0..len as u64).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("fresh", len), &keys, |b, keys| {
            b.iter_batched(
                ComparisonSet::<u64>::new,
                |mut set| {
                    for &k in keys {
                        set.add(k);
                    }
                    black_box(set);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("duplicate", len), &keys, |b, keys| {
            b.iter_batched(
                || ComparisonSet::from_items(keys.iter().copied()),
                |mut set| {
                    for &k in keys {
                        set.add(k);
                    }
                    black_box(set);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_toggle_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison/mutate");
    for len in [16usize, 256] {
        let keys: Vec<u64> = (0..len as u64).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("toggle", len), &keys, |b, keys| {
            b.iter_batched(
                || ComparisonSet::from_items(keys.iter().copied()),
                |mut set| {
                    for &k in keys.iter().rev() {
                        set.toggle(k);
                    }
                    black_box(set);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("remove_front", len), &keys, |b, keys| {
            b.iter_batched(
                || ComparisonSet::from_items(keys.iter().copied()),
                |mut set| {
                    for k in keys {
                        black_box(set.remove(k));
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add, bench_toggle_remove);
criterion_main!(benches);
