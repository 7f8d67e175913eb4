use crate::prelude::*;
use crate::utils::interner::{InternerBuilder, Resolver};

/// Collects named nodes and the edges between them, then hands out
/// graphs over dense ids.
#[derive(Clone, Default)]
pub struct GraphBuilder {
    pub(crate) parents: Vec<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) interner: InternerBuilder,
}

impl GraphBuilder {
    pub fn new() -> Self {
        GraphBuilder {
            interner: InternerBuilder::new(),
            children: Vec::new(),
            parents: Vec::new(),
        }
    }

    /// Declares a node. Ids are handed out in declaration order starting
    /// at zero.
    pub fn add_node(&mut self, name: impl AsRef<str>) -> Result<NodeId, DuplicateNode> {
        self.interner
            .intern_new(&name)
            .ok_or_else(|| DuplicateNode(name.as_ref().into()))
    }

    /// Adds an edge, declaring either end if it has not been seen yet.
    pub fn add_edge(&mut self, from: impl AsRef<str>, to: impl AsRef<str>) -> &mut Self {
        let from = self.interner.get_or_intern(&from);
        let to = self.interner.get_or_intern(&to);
        self.parents.push(from);
        self.children.push(to);
        self
    }

    pub fn add_path(&mut self, path: impl IntoIterator<Item = impl AsRef<str>>) -> &mut Self {
        let mut path = path.into_iter().peekable();
        while let (Some(from), Some(to)) = (path.next(), path.peek()) {
            self.add_edge(from.as_ref(), to.as_ref());
        }
        self
    }

    #[inline]
    pub fn get(&self, name: impl AsRef<str>) -> Option<NodeId> {
        self.interner.get(name.as_ref())
    }

    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.interner.len()
    }

    pub fn build(self) -> NamedGraph {
        let mut edges: Vec<(NodeId, NodeId)> = self.parents.into_iter().zip(self.children).collect();
        let mut seen = fxhash::FxHashSet::default();
        edges.retain(|edge| seen.insert(*edge));
        edges.shrink_to_fit();

        NamedGraph {
            resolver: self.interner.build(),
            edges,
        }
    }
}

/// A graph whose nodes carry names. Converts into either representation
/// the sorters take and maps their results back to names.
#[derive(Clone, Debug)]
pub struct NamedGraph {
    resolver: Resolver,
    edges: Vec<(NodeId, NodeId)>,
}

impl NamedGraph {
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.resolver.len()
    }

    #[inline]
    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    /// Edges in the order they were first added.
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    pub fn id(&self, name: impl AsRef<str>) -> Option<NodeId> {
        self.resolver.get(name.as_ref())
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.resolver.resolve(id)
    }

    pub fn to_matrix(&self) -> AdjacencyMatrix {
        let mut matrix = AdjacencyMatrix::new(self.n_nodes());
        for &(from, to) in &self.edges {
            matrix.rows[from][to] = true;
        }
        matrix
    }

    pub fn to_list(&self) -> AdjacencyList {
        let mut list = AdjacencyList::new(self.n_nodes());
        for &(from, to) in &self.edges {
            list.successors[from].push(to);
        }
        list
    }

    /// Maps ids back to names, skipping ids that do not belong to the
    /// graph.
    pub fn resolve(&self, order: &[NodeId]) -> NodeVec<'_> {
        NodeVec {
            values: order
                .iter()
                .filter_map(|&id| self.resolver.resolve(id))
                .collect(),
        }
    }

    /// Sorts with [`topo_sort_dfs`] starting at the node called `start`.
    pub fn sort_dfs(&self, start: impl AsRef<str>) -> Result<NodeVec<'_>, SortError> {
        let start = self
            .id(start.as_ref())
            .ok_or_else(|| InvalidInput::UnknownNode(start.as_ref().into()))?;
        let order = topo_sort_dfs(&self.to_matrix(), start)?;
        Ok(self.resolve(&order))
    }

    /// Sorts with [`topo_sort_removal`].
    pub fn sort_removal(&self) -> Result<NodeVec<'_>, SortError> {
        let order = topo_sort_removal(&self.to_list())?;
        Ok(self.resolve(&order))
    }
}
