use crate::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod topological_sort;
pub use topological_sort::topo_sort_dfs;

/// Dense graph representation. `rows[i][j] == true` means there is an
/// edge from `i` to `j`.
///
/// The matrix is allowed to be jagged so that callers can hand over
/// whatever they parsed; [`topo_sort_dfs`] refuses to sort it unless
/// every row has exactly [`n_nodes`](AdjacencyMatrix::n_nodes) columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AdjacencyMatrix {
    pub(crate) rows: Vec<Vec<bool>>,
}

impl AdjacencyMatrix {
    /// Creates an `n_nodes` x `n_nodes` matrix without edges.
    pub fn new(n_nodes: usize) -> Self {
        AdjacencyMatrix {
            rows: vec![vec![false; n_nodes]; n_nodes],
        }
    }

    /// Wraps the rows as they are, without checking that they are square.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        AdjacencyMatrix { rows }
    }

    pub fn from_edges(
        n_nodes: usize,
        edges: impl IntoIterator<Item = (NodeId, NodeId)>,
    ) -> Result<Self, InvalidInput> {
        let mut matrix = AdjacencyMatrix::new(n_nodes);
        for (from, to) in edges {
            matrix.add_edge(from, to)?;
        }
        Ok(matrix)
    }

    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.rows.len()
    }

    pub fn n_edges(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&edge| edge).count())
            .sum()
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        let n_nodes = self.n_nodes();
        self.rows.iter().all(|row| row.len() == n_nodes)
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<&mut Self, InvalidInput> {
        let n_nodes = self.n_nodes();
        match self.rows.get_mut(from).and_then(|row| row.get_mut(to)) {
            Some(cell) => {
                *cell = true;
                Ok(self)
            }
            None => Err(InvalidInput::SuccessorOutOfRange {
                node: from,
                successor: to,
                n_nodes,
            }),
        }
    }

    #[inline]
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.rows
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .unwrap_or(false)
    }

    /// Direct successors of `node` in ascending order. Unknown nodes
    /// have none.
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.rows
            .get(node)
            .map(|row| row.as_slice())
            .unwrap_or_default()
            .iter()
            .enumerate()
            .filter_map(|(to, &edge)| edge.then_some(to))
    }

    /// Sorts the graph with [`topo_sort_dfs`].
    pub fn topological_sort(&self, start: NodeId) -> Result<Vec<NodeId>, SortError> {
        topo_sort_dfs(self, start)
    }
}

impl From<Vec<Vec<bool>>> for AdjacencyMatrix {
    fn from(rows: Vec<Vec<bool>>) -> Self {
        AdjacencyMatrix::from_rows(rows)
    }
}

impl TryFrom<&AdjacencyList> for AdjacencyMatrix {
    type Error = InvalidInput;

    fn try_from(list: &AdjacencyList) -> Result<Self, Self::Error> {
        let mut matrix = AdjacencyMatrix::new(list.n_nodes());
        for (node, successors) in list.iter() {
            for &successor in successors {
                matrix.add_edge(node, successor)?;
            }
        }
        Ok(matrix)
    }
}
