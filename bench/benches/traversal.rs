//! Traversal benchmarks over the synthetic generators.
//!
//! ```bash
//! cargo bench -p bfs-bench
//! cargo bench -p bfs-bench -- lsystem
//! ```

use std::hint::black_box;
use std::time::Duration;

use bfs_bench::GENERATORS;
use bfs_core::{shortest_path, traverse, traverse_with, TraversalDirection, TraversalOptions};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const VERTEX_COUNTS: [u64; 2] = [10_000, 100_000];

fn bench_full_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(3));

    for (name, generator) in GENERATORS {
        for vertex_count in VERTEX_COUNTS {
            let graph = generator(vertex_count);
            let view = graph.view(TraversalDirection::Both);
            group.throughput(Throughput::Elements(graph.edge_count() as u64));
            group.bench_with_input(BenchmarkId::new(name, vertex_count), &view, |b, view| {
                b.iter(|| traverse(black_box(view), &0).map(|tree| tree.reached_count()))
            });
        }
    }

    group.finish();
}

fn bench_depth_bounded(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse_depth");
    group.measurement_time(Duration::from_secs(2));

    for (name, generator) in GENERATORS {
        let graph = generator(100_000);
        let view = graph.view(TraversalDirection::Both);
        for depth in [1u32, 2, 3, 5] {
            let options = TraversalOptions::new().with_max_depth(depth);
            group.bench_with_input(
                BenchmarkId::new(name, depth),
                &options,
                |b, options| {
                    b.iter(|| {
                        traverse_with(black_box(&view), &0, options).map(|tree| tree.reached_count())
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    group.measurement_time(Duration::from_secs(2));

    for (name, generator) in GENERATORS {
        let graph = generator(100_000);
        let view = graph.view(TraversalDirection::Both);
        let far = graph.vertex_count() as u64 - 1;
        group.bench_function(name, |b| {
            b.iter(|| shortest_path(black_box(&view), &0, &far).map(|path| path.map(|p| p.len())))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_full_traversal,
    bench_depth_bounded,
    bench_shortest_path
);
criterion_main!(benches);
