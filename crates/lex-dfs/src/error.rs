use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Positions `left < middle < right` of an umbrella in a vertex ordering.
///
/// The vertices at `left` and `right` are adjacent, while the vertex at
/// `middle` is adjacent to neither of them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Umbrella {
    /// Position of the left end of the umbrella.
    pub left: usize,
    /// Position of the vertex below the umbrella.
    pub middle: usize,
    /// Position of the right end of the umbrella.
    pub right: usize,
}

impl Display for Umbrella {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "positions {} < {} < {}", self.left, self.middle, self.right)
    }
}

/// Malformed input to [lex_dfs](crate::lex_dfs).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum InputError {
    /// The ordering does not contain every vertex exactly once.
    #[error("ordering has {actual} vertices, but the graph has {expected}")]
    LengthMismatch {
        /// Number of vertices of the graph.
        expected: usize,
        /// Length of the ordering.
        actual: usize,
    },
    /// A vertex occurs twice in the ordering.
    #[error("vertex {0} occurs more than once in the ordering")]
    DuplicateVertex(usize),
    /// An edge or an ordering entry refers to a vertex outside of the graph.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    UnknownVertex {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices of the graph.
        vertex_count: usize,
    },
    /// The graph has an edge from a vertex to itself.
    #[error("self loop at vertex {0}")]
    SelfLoop(usize),
    /// The graph has more than one edge between the same pair of vertices.
    #[error("parallel edge between vertices {0} and {1}")]
    ParallelEdge(usize, usize),
    /// The ordering contains an umbrella and is not a cocomparability ordering.
    #[error("ordering is not umbrella-free ({0})")]
    Umbrella(Umbrella),
}
