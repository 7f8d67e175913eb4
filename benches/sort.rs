use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tsort::prelude::*;

const N_NODES: usize = 2_000;

/// Layered graph where every node points to the next few ids.
fn edges() -> impl Iterator<Item = (NodeId, NodeId)> {
    (0..N_NODES).flat_map(|from| (from + 1..N_NODES.min(from + 8)).map(move |to| (from, to)))
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let matrix = AdjacencyMatrix::from_edges(N_NODES, edges()).unwrap();
    let list = AdjacencyList::from(&matrix);

    c.bench_function("topo_sort_dfs", |b| {
        b.iter(|| topo_sort_dfs(black_box(&matrix), black_box(0)))
    });

    c.bench_function("topo_sort_removal", |b| {
        b.iter(|| topo_sort_removal(black_box(&list)))
    });

    c.bench_function("adjacency_list_from_matrix", |b| {
        b.iter(|| AdjacencyList::from(black_box(&matrix)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = criterion_benchmark
}

criterion_main!(benches);
