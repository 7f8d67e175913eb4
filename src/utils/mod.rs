pub(crate) mod interner;
pub(crate) mod node_vec;
