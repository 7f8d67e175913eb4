//! Topological sorting with cycle detection.
//!
//! Two independent sorters are provided:
//!
//! - [`topo_sort_dfs`](matrix::topo_sort_dfs) works on an
//!   [`AdjacencyMatrix`](matrix::AdjacencyMatrix) and emits nodes in
//!   reverse post-order of a depth first search.
//! - [`topo_sort_removal`](list::topo_sort_removal) works on an
//!   [`AdjacencyList`](list::AdjacencyList) and repeatedly removes nodes
//!   without incoming edges.
//!
//! Both return every node exactly once, or
//! [`SortError::CycleDetected`](error::SortError::CycleDetected)
//! when no ordering exists.
//!
//! ```
//! use tsort::prelude::*;
//!
//! let matrix = AdjacencyMatrix::from_edges(3, [(0, 1), (1, 2)]).unwrap();
//! assert_eq!(topo_sort_dfs(&matrix, 0).unwrap(), [0, 1, 2]);
//!
//! let list = AdjacencyList::from_edges(2, [(0, 1), (1, 0)]).unwrap();
//! assert_eq!(topo_sort_removal(&list), Err(SortError::CycleDetected));
//! ```

pub mod builder;
pub mod error;
pub mod list;
pub mod matrix;
mod readwrite;
pub mod schedule;
mod utils;

pub use utils::node_vec::NodeVec;

/// Dense, zero based node identifier.
pub type NodeId = usize;

/// Prelude of data types and functionality.
pub mod prelude {
    pub use crate::builder::{GraphBuilder, NamedGraph};
    pub use crate::error::*;
    pub use crate::list::{topo_sort_removal, AdjacencyList};
    pub use crate::matrix::{topo_sort_dfs, AdjacencyMatrix};
    pub use crate::schedule::{parse_schedule, read_schedule};
    pub use crate::NodeId;
    pub use crate::NodeVec;
}
