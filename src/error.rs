use crate::NodeId;

/// The graph handed to a sorter is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    /// Row `row` of the matrix has `len` columns instead of `n_nodes`.
    NotSquare {
        row: usize,
        len: usize,
        n_nodes: usize,
    },
    StartOutOfRange {
        start: NodeId,
        n_nodes: usize,
    },
    SuccessorOutOfRange {
        node: NodeId,
        successor: NodeId,
        n_nodes: usize,
    },
    UnknownNode(Box<str>),
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSquare { row, len, n_nodes } => write!(
                f,
                "Adjacency matrix is not square, row {} has {} columns but the graph has {} nodes",
                row, len, n_nodes
            ),
            Self::StartOutOfRange { start, n_nodes } => write!(
                f,
                "Start node {} is out of range for a graph with {} nodes",
                start, n_nodes
            ),
            Self::SuccessorOutOfRange {
                node,
                successor,
                n_nodes,
            } => write!(
                f,
                "Node {} points to {}, which is out of range for a graph with {} nodes",
                node, successor, n_nodes
            ),
            Self::UnknownNode(name) => write!(f, "Node `{}` does not exist", name),
        }
    }
}

impl std::error::Error for InvalidInput {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    InvalidInput(InvalidInput),
    CycleDetected,
}

impl SortError {
    /// Returns `true` if the sort failed because of [`CycleDetected`].
    ///
    /// [`CycleDetected`]: SortError::CycleDetected
    #[must_use]
    pub fn is_cycle_detected(&self) -> bool {
        matches!(self, Self::CycleDetected)
    }

    /// Returns `true` if the sort failed because of [`InvalidInput`].
    ///
    /// [`InvalidInput`]: SortError::InvalidInput
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(..))
    }
}

impl From<InvalidInput> for SortError {
    fn from(v: InvalidInput) -> Self {
        Self::InvalidInput(v)
    }
}

impl std::fmt::Display for SortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "Invalid input: {}", err),
            Self::CycleDetected => write!(
                f,
                "Unable to topologically sort, graph has at least one cycle"
            ),
        }
    }
}

impl std::error::Error for SortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            Self::CycleDetected => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateNode(pub Box<str>);

impl std::fmt::Display for DuplicateNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unable to insert node, `{}` already exists", self.0)
    }
}

impl std::error::Error for DuplicateNode {}

/// Failure while reading a schedule description. Line numbers start at 1.
#[derive(Debug)]
pub enum ParseError {
    Io(std::io::Error),
    MissingLine { line: usize, expected: &'static str },
    InvalidCount { line: usize, value: Box<str> },
    DuplicateNode { line: usize, name: Box<str> },
    MalformedEdge { line: usize },
    UnknownNode { line: usize, name: Box<str> },
}

impl From<std::io::Error> for ParseError {
    fn from(v: std::io::Error) -> Self {
        Self::Io(v)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Unable to read schedule: {}", err),
            Self::MissingLine { line, expected } => {
                write!(f, "Line {}: expected {}, found end of input", line, expected)
            }
            Self::InvalidCount { line, value } => {
                write!(f, "Line {}: `{}` is not a valid count", line, value)
            }
            Self::DuplicateNode { line, name } => {
                write!(f, "Line {}: node `{}` is declared twice", line, name)
            }
            Self::MalformedEdge { line } => {
                write!(f, "Line {}: edges must be written as `from,to`", line)
            }
            Self::UnknownNode { line, name } => {
                write!(f, "Line {}: node `{}` was never declared", line, name)
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_message_matches_graph_has_cycle() {
        assert_eq!(
            SortError::CycleDetected.to_string(),
            "Unable to topologically sort, graph has at least one cycle"
        );
    }

    #[test]
    fn invalid_input_converts_into_sort_error() {
        let err: SortError = InvalidInput::StartOutOfRange {
            start: 4,
            n_nodes: 2,
        }
        .into();
        assert!(err.is_invalid_input());
        assert!(!err.is_cycle_detected());
        assert_eq!(
            err.to_string(),
            "Invalid input: Start node 4 is out of range for a graph with 2 nodes"
        );
    }
}
