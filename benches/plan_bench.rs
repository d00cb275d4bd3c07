//! Benchmarks for splitrs.
//!
//! Run with:
//!     cargo bench

use bytes::Bytes;
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use splitrs::{ChunkPlan, SizingDirective, split_bytes};

fn bench_planner(c: &mut Criterion) {
    let mut group = c.benchmark_group("planner");

    for size in [64u64 * 1024, 1024 * 1024, 10 * 1024 * 1024] {
        group.bench_function(format!("by_count_{}kb", size / 1024), |b| {
            b.iter(|| {
                let plan =
                    ChunkPlan::for_input(black_box(size), SizingDirective::ByCount(17)).unwrap();
                black_box(plan.chunk_count())
            });
        });

        group.bench_function(format!("by_max_size_{}kb", size / 1024), |b| {
            b.iter(|| {
                let plan =
                    ChunkPlan::for_input(black_box(size), SizingDirective::ByMaxSize(4096))
                        .unwrap();
                black_box(plan.chunk_count())
            });
        });
    }

    group.finish();
}

fn bench_split_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_bytes");

    for size in [64 * 1024, 1024 * 1024] {
        // Deterministic pseudo-random data
        let data: Vec<u8> = (0..size).map(|i| (i * 7 + 13) as u8).collect();
        let data = Bytes::from(data);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            format!("max_4k_{}kb", size / 1024),
            &data,
            |b, data| {
                let plan =
                    ChunkPlan::for_input(data.len() as u64, SizingDirective::ByMaxSize(4096))
                        .unwrap();
                b.iter(|| {
                    let chunks = split_bytes(black_box(data.clone()), &plan);
                    black_box(chunks.len())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_planner, bench_split_bytes);
criterion_main!(benches);
