use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use graphlet::algo::DftPathFinder;
use graphlet::graph::{
    ConcurrentGraph, DirectedWeightedGraph, Graph, MutableGraph, UndirectedWeightedGraph,
};

/// Benchmark edge insertion throughput on a chain graph.
fn bench_edge_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_insertion");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("directed", size), size, |b, &size| {
            b.iter(|| {
                let graph: DirectedWeightedGraph<u32, u32> = DirectedWeightedGraph::new();
                for i in 0..size {
                    graph.put_edge(i, i + 1, i);
                }
                criterion::black_box(graph.vertices().len());
            });
        });
        group.bench_with_input(BenchmarkId::new("undirected", size), size, |b, &size| {
            b.iter(|| {
                let graph: UndirectedWeightedGraph<u32, u32> = UndirectedWeightedGraph::new();
                for i in 0..size {
                    graph.put_edge(i, i + 1, i);
                }
                criterion::black_box(graph.vertices().len());
            });
        });
    }
    group.finish();
}

/// Benchmark the overhead the readers-writer-lock decorator adds per call.
fn bench_decorated_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("decorated_insertion");

    for size in [100, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let graph = ConcurrentGraph::new(DirectedWeightedGraph::<u32, u32>::new());
                for i in 0..size {
                    graph.put_edge(i, i + 1, i);
                }
                criterion::black_box(graph.vertices().len());
            });
        });
    }
    group.finish();
}

/// Benchmark depth-first path search latency across a long chain.
fn bench_path_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_search");

    for size in [100, 1000, 10_000].iter() {
        let graph: DirectedWeightedGraph<u32, u32> = DirectedWeightedGraph::new();
        for i in 0..*size {
            graph.put_edge(i, i + 1, i);
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let finder = DftPathFinder::new(&graph);
            b.iter(|| {
                let path = finder.find_path(&0, &size).unwrap();
                criterion::black_box(path.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_edge_insertion,
    bench_decorated_insertion,
    bench_path_search
);
criterion_main!(benches);
