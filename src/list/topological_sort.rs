use crate::prelude::*;

/// Topologically sorts `graph` by repeatedly removing nodes without
/// incoming edges (Kahn's algorithm).
///
/// Nodes waiting to be emitted are kept on a stack: ids with no incoming
/// edges are pushed in ascending order, successors are pushed in the order
/// they are listed once their last incoming edge is removed, and the most
/// recently pushed node is always emitted next.
pub fn topo_sort_removal(graph: &AdjacencyList) -> Result<Vec<NodeId>, SortError> {
    let n_nodes = graph.n_nodes();

    for (node, successors) in graph.iter() {
        if let Some(&successor) = successors.iter().find(|&&successor| successor >= n_nodes) {
            return Err(InvalidInput::SuccessorOutOfRange {
                node,
                successor,
                n_nodes,
            }
            .into());
        }
    }

    log::debug!(
        "Removal sort of {} nodes and {} edges",
        n_nodes,
        graph.n_edges()
    );

    let mut n_incoming = vec![0usize; n_nodes];
    for (_, successors) in graph.iter() {
        for &successor in successors {
            n_incoming[successor] += 1;
        }
    }

    let mut no_deps: Vec<NodeId> = (0..n_nodes).filter(|&node| n_incoming[node] == 0).collect();
    let mut res = Vec::with_capacity(n_nodes);

    while let Some(node) = no_deps.pop() {
        res.push(node);

        for &successor in graph.successors(node) {
            n_incoming[successor] -= 1;
            if n_incoming[successor] == 0 {
                log::trace!("{} has no incoming edges left", successor);
                no_deps.push(successor);
            }
        }
    }

    if res.len() != n_nodes {
        log::debug!(
            "Removal sort stalled after {} of {} nodes",
            res.len(),
            n_nodes
        );
        return Err(SortError::CycleDetected);
    }

    Ok(res)
}
