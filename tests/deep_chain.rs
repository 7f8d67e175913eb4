use ntest_timeout::timeout;
use tsort::prelude::*;

const CHAIN_LEN: usize = 5_000;

#[test]
#[timeout(10000)]
fn dfs_handles_long_chains_without_recursion() {
    let matrix = AdjacencyMatrix::from_edges(CHAIN_LEN, (1..CHAIN_LEN).map(|i| (i - 1, i))).unwrap();
    let order = topo_sort_dfs(&matrix, 0).unwrap();
    assert!(order.iter().copied().eq(0..CHAIN_LEN));
}

#[test]
#[timeout(10000)]
fn dfs_detects_a_cycle_closing_a_long_chain() {
    let mut matrix =
        AdjacencyMatrix::from_edges(CHAIN_LEN, (1..CHAIN_LEN).map(|i| (i - 1, i))).unwrap();
    matrix.add_edge(CHAIN_LEN - 1, 0).unwrap();
    assert_eq!(topo_sort_dfs(&matrix, 0), Err(SortError::CycleDetected));
}

#[test]
#[timeout(5000)]
fn removal_handles_long_chains() {
    let n_nodes = 200_000;
    let list = AdjacencyList::from_edges(n_nodes, (1..n_nodes).rev().map(|i| (i, i - 1))).unwrap();
    let order = topo_sort_removal(&list).unwrap();
    assert!(order.iter().copied().eq((0..n_nodes).rev()));
}
