use crate::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Visit {
    Unvisited,
    InProgress,
    Done,
}

/// Topologically sorts `graph` with a depth first search that starts at
/// `start`.
///
/// Nodes are emitted in reverse post-order. Once the search from `start`
/// is exhausted it restarts from the lowest unvisited node, so every
/// component of the graph ends up in the result. Neighbors are explored
/// in ascending order.
///
/// An empty graph sorts to an empty ordering whatever `start` is.
pub fn topo_sort_dfs(graph: &AdjacencyMatrix, start: NodeId) -> Result<Vec<NodeId>, SortError> {
    let n_nodes = graph.n_nodes();

    if let Some((row, len)) = graph
        .rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != n_nodes)
    {
        return Err(InvalidInput::NotSquare { row, len, n_nodes }.into());
    }

    if n_nodes == 0 {
        return Ok(Vec::new());
    }

    if start >= n_nodes {
        return Err(InvalidInput::StartOutOfRange { start, n_nodes }.into());
    }

    log::debug!("DFS sort of {} nodes starting at {}", n_nodes, start);

    let mut visited = vec![Visit::Unvisited; n_nodes];
    let mut post_order = Vec::with_capacity(n_nodes);
    // Frames of (node, next column to look at)
    let mut stack: Vec<(NodeId, usize)> = Vec::new();
    let mut next_root = Some(start);
    let mut scan_from = 0;

    while let Some(root) = next_root {
        visited[root] = Visit::InProgress;
        stack.push((root, 0));

        while let Some((node, column)) = stack.last_mut() {
            let row = &graph.rows[*node];
            match (*column..n_nodes).find(|&neighbor| row[neighbor]) {
                Some(neighbor) => {
                    *column = neighbor + 1;
                    match visited[neighbor] {
                        Visit::InProgress => {
                            log::trace!("Back edge {} -> {}", node, neighbor);
                            return Err(SortError::CycleDetected);
                        }
                        Visit::Unvisited => {
                            visited[neighbor] = Visit::InProgress;
                            stack.push((neighbor, 0));
                        }
                        Visit::Done => {}
                    }
                }
                None => {
                    let node = *node;
                    stack.pop();
                    visited[node] = Visit::Done;
                    post_order.push(node);
                }
            }
        }

        // Nodes never go back to unvisited, so the scan only moves forward
        next_root = visited[scan_from..]
            .iter()
            .position(|&state| state == Visit::Unvisited)
            .map(|offset| scan_from + offset);
        if let Some(root) = next_root {
            log::trace!("Restarting DFS at {}", root);
            scan_from = root;
        }
    }

    post_order.reverse();
    log::debug!("DFS sort finished with {} nodes", post_order.len());
    Ok(post_order)
}
