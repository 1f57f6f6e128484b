//! Benchmarks for graph construction, queries and outbreak computation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mailflow_core::{Interaction, InteractionGraph, SendOrReceive};

fn synthetic_log(len: u64) -> Vec<Interaction> {
    (0..len)
        .map(|i| Interaction::new((i * 7) % 97, (i * 13 + 5) % 97, i * 30))
        .collect()
}

fn bench_construct(c: &mut Criterion) {
    let records = synthetic_log(10_000);
    c.bench_function("construct_10k_records", |b| {
        b.iter(|| InteractionGraph::new(black_box(records.clone())))
    });
}

fn bench_queries(c: &mut Criterion) {
    let graph = InteractionGraph::new(synthetic_log(10_000));
    c.bench_function("nth_most_active_send", |b| {
        b.iter(|| graph.nth_most_active(black_box(5), SendOrReceive::Send))
    });
    c.bench_function("bfs_path", |b| b.iter(|| graph.bfs_path(black_box(0), black_box(96))));
    c.bench_function("dfs_path", |b| b.iter(|| graph.dfs_path(black_box(0), black_box(96))));
}

fn bench_outbreak(c: &mut Criterion) {
    let graph = InteractionGraph::new(synthetic_log(1_000));
    c.bench_function("max_breached_user_count_1h", |b| {
        b.iter(|| graph.max_breached_user_count(black_box(1)))
    });
}

criterion_group!(benches, bench_construct, bench_queries, bench_outbreak);
criterion_main!(benches);
