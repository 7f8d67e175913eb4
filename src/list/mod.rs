use crate::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod topological_sort;
pub use topological_sort::topo_sort_removal;

/// Sparse graph representation. Node `i` points to every id listed in
/// `successors[i]`, in that order.
///
/// Successors are not checked on construction, [`topo_sort_removal`]
/// rejects lists that point outside of the graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AdjacencyList {
    pub(crate) successors: Vec<Vec<NodeId>>,
}

impl AdjacencyList {
    pub fn new(n_nodes: usize) -> Self {
        AdjacencyList {
            successors: vec![Vec::new(); n_nodes],
        }
    }

    pub fn from_successors(successors: Vec<Vec<NodeId>>) -> Self {
        AdjacencyList { successors }
    }

    pub fn from_edges(
        n_nodes: usize,
        edges: impl IntoIterator<Item = (NodeId, NodeId)>,
    ) -> Result<Self, InvalidInput> {
        let mut list = AdjacencyList::new(n_nodes);
        for (from, to) in edges {
            list.add_edge(from, to)?;
        }
        Ok(list)
    }

    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.successors.len()
    }

    /// Counts every listed successor, duplicates included.
    pub fn n_edges(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<&mut Self, InvalidInput> {
        let n_nodes = self.n_nodes();
        if to >= n_nodes || from >= n_nodes {
            return Err(InvalidInput::SuccessorOutOfRange {
                node: from,
                successor: to,
                n_nodes,
            });
        }
        self.successors[from].push(to);
        Ok(self)
    }

    #[inline]
    pub fn successors(&self, node: NodeId) -> &[NodeId] {
        self.successors
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[NodeId])> + '_ {
        self.successors
            .iter()
            .enumerate()
            .map(|(node, successors)| (node, successors.as_slice()))
    }

    /// Sorts the graph with [`topo_sort_removal`].
    pub fn topological_sort(&self) -> Result<Vec<NodeId>, SortError> {
        topo_sort_removal(self)
    }
}

impl From<Vec<Vec<NodeId>>> for AdjacencyList {
    fn from(successors: Vec<Vec<NodeId>>) -> Self {
        AdjacencyList::from_successors(successors)
    }
}

impl From<&AdjacencyMatrix> for AdjacencyList {
    fn from(matrix: &AdjacencyMatrix) -> Self {
        AdjacencyList {
            successors: (0..matrix.n_nodes())
                .map(|node| matrix.successors(node).collect())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_keeps_insertion_order() {
        let mut list = AdjacencyList::new(3);
        list.add_edge(0, 2).unwrap().add_edge(0, 1).unwrap();
        assert_eq!(list.successors(0), [2, 1]);
        assert!(list.successors(1).is_empty());
        assert_eq!(list.n_edges(), 2);
    }

    #[test]
    fn add_edge_out_of_range_is_rejected() {
        let mut list = AdjacencyList::new(1);
        assert_eq!(
            list.add_edge(0, 1).unwrap_err(),
            InvalidInput::SuccessorOutOfRange {
                node: 0,
                successor: 1,
                n_nodes: 1
            }
        );
        assert!(list.add_edge(3, 0).is_err());
        assert_eq!(list.n_edges(), 0);
    }

    #[test]
    fn unknown_node_has_no_successors() {
        let list = AdjacencyList::new(1);
        assert!(list.successors(4).is_empty());
    }

    #[test]
    fn converts_from_adjacency_matrix() {
        let matrix = AdjacencyMatrix::from_edges(3, [(0, 2), (0, 1), (2, 1)]).unwrap();
        let list = AdjacencyList::from(&matrix);
        assert_eq!(list.successors(0), [1, 2]);
        assert_eq!(list.successors(2), [1]);
        assert_eq!(list.n_edges(), 3);
    }
}
