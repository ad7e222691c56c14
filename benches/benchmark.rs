//! Benchmarks for chain ordering.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use flowchain::{find_head, order_edges, order_stages, ChainManager, Edge, Stage};

/// Builds an n-edge chain 0 -> 1 -> ... -> n with the edges interleaved so
/// the traversal cannot ride input order.
fn shuffled_chain(n: i64) -> Vec<Edge> {
    let mut edges: Vec<Edge> = Vec::with_capacity(n as usize);
    let mut low = 0;
    let mut high = n - 1;
    while low <= high {
        edges.push(Edge::new(high, high + 1));
        if low < high {
            edges.push(Edge::new(low, low + 1));
        }
        low += 1;
        high -= 1;
    }
    edges
}

fn stages_for(n: i64) -> Vec<Stage> {
    (0..=n).map(|i| Stage::new(i, format!("Stage {}", i))).collect()
}

fn bench_find_head(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_head");
    for n in [10i64, 100, 1000].iter() {
        let edges = shuffled_chain(*n);
        group.bench_with_input(BenchmarkId::new("edges", n), n, |b, _| {
            b.iter(|| black_box(find_head(&edges)))
        });
    }
    group.finish();
}

fn bench_order_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_edges");
    for n in [10i64, 100, 1000].iter() {
        let edges = shuffled_chain(*n);
        group.bench_with_input(BenchmarkId::new("edges", n), n, |b, _| {
            b.iter(|| black_box(order_edges(&edges)))
        });
    }
    group.finish();
}

fn bench_order_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_stages");
    for n in [10i64, 100, 1000].iter() {
        let edges = shuffled_chain(*n);
        let stages = stages_for(*n);
        group.bench_with_input(BenchmarkId::new("stages", n), n, |b, _| {
            b.iter(|| black_box(order_stages(&stages, &edges)))
        });
    }
    group.finish();
}

fn bench_manager_create_and_link(c: &mut Criterion) {
    c.bench_function("manager_create_and_link_100", |b| {
        b.iter(|| {
            let mut manager = ChainManager::new();
            for i in 0..100i64 {
                manager
                    .create_and_link(Stage::new(i, format!("Stage {}", i)))
                    .unwrap();
            }
            black_box(manager.ordered_ids())
        })
    });
}

fn bench_manager_insert_after(c: &mut Criterion) {
    c.bench_function("manager_insert_after", |b| {
        let mut manager = ChainManager::new();
        manager.create_and_link(Stage::new(0i64, "Head")).unwrap();
        manager.create_and_link(Stage::new(1i64, "Tail")).unwrap();

        let mut i = 2i64;
        b.iter(|| {
            manager
                .insert_after(&flowchain::StageId::from(0i64), Stage::new(i, "Mid"))
                .unwrap();
            i += 1;
        })
    });
}

criterion_group!(
    benches,
    bench_find_head,
    bench_order_edges,
    bench_order_stages,
    bench_manager_create_and_link,
    bench_manager_insert_after,
);

criterion_main!(benches);
