use petgraph::visit::{GraphBase, GraphProp, IntoNeighbors, NodeCompactIndexable, NodeCount, NodeIndexable};
use petgraph::Undirected;

use crate::error::InputError;
use crate::index::VertexIndex;

/// A simple, undirected graph stored as adjacency vectors.
///
/// Vertices are `0..vertex_count`. Neighbors are reported in the order the edges were added, which makes
/// results reproducible independent of `petgraph`'s internal edge order.
///
/// ```rust
/// # use std::error::Error;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use lex_dfs::{Graph, InputError};
///
/// let graph = Graph::from_edges(3, [(0, 1), (1, 2)])?;
/// assert_eq!(graph.neighbors(1), &[0, 2]);
///
/// assert_eq!(Graph::from_edges(3, [(0, 3)]), Err(InputError::UnknownVertex { vertex: 3, vertex_count: 3 }));
/// assert_eq!(Graph::from_edges(3, [(1, 1)]), Err(InputError::SelfLoop(1)));
/// assert_eq!(Graph::from_edges(3, [(0, 1), (1, 0)]), Err(InputError::ParallelEdge(0, 1)));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Graph {
    adj: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self { adj: vec![vec![]; vertex_count], edge_count: 0 }
    }

    /// Creates a graph from an edge list.
    ///
    /// # Errors
    ///
    /// Returns an [InputError] for edges with an endpoint outside of `0..vertex_count`, self loops, and
    /// repeated edges.
    pub fn from_edges(vertex_count: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Result<Self, InputError> {
        let mut graph = Self::new(vertex_count);
        for (u, v) in edges {
            graph.check_endpoints(u, v)?;
            graph.adj[u].push(v);
            graph.adj[v].push(u);
            graph.edge_count += 1;
        }

        // A single pass with stamps finds repeated edges in O(n + m).
        let mut stamp = vec![usize::MAX; vertex_count];
        for (u, neighbors) in graph.adj.iter().enumerate() {
            for &v in neighbors {
                if stamp[v] == u {
                    return Err(InputError::ParallelEdge(u, v));
                }
                stamp[v] = u;
            }
        }
        Ok(graph)
    }

    /// Adds the edge `uv`.
    ///
    /// # Errors
    ///
    /// Returns an [InputError] if the edge is invalid or already present.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), InputError> {
        self.check_endpoints(u, v)?;
        if self.adj[u].contains(&v) {
            return Err(InputError::ParallelEdge(u, v));
        }
        self.adj[u].push(v);
        self.adj[v].push(u);
        self.edge_count += 1;
        Ok(())
    }

    fn check_endpoints(&self, u: usize, v: usize) -> Result<(), InputError> {
        let vertex_count = self.adj.len();
        if let Some(&vertex) = [u, v].iter().find(|&&x| x >= vertex_count) {
            return Err(InputError::UnknownVertex { vertex, vertex_count });
        }
        if u == v {
            return Err(InputError::SelfLoop(u));
        }
        Ok(())
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the neighbors of `u` in insertion order.
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.adj[u]
    }
}

impl GraphBase for Graph {
    type EdgeId = usize;
    type NodeId = usize;
}

impl GraphProp for Graph {
    type EdgeType = Undirected;
}

/// Iterator over the neighbors of a vertex of a [Graph].
#[derive(Debug, Clone)]
pub struct Neighbors<'a>(std::slice::Iter<'a, usize>);

impl<'a> Iterator for Neighbors<'a> {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().copied()
    }
}

impl<'a> IntoNeighbors for &'a Graph {
    type Neighbors = Neighbors<'a>;
    fn neighbors(self, a: Self::NodeId) -> Self::Neighbors {
        Neighbors(self.adj[a].iter())
    }
}

impl NodeCount for Graph {
    fn node_count(&self) -> usize {
        self.adj.len()
    }
}

impl NodeIndexable for Graph {
    fn node_bound(&self) -> usize {
        self.node_count()
    }
    fn to_index(&self, a: Self::NodeId) -> usize {
        a
    }
    fn from_index(&self, i: usize) -> Self::NodeId {
        i
    }
}

impl NodeCompactIndexable for Graph {}

/// Compressed adjacency lists over dense vertex indices.
///
/// The edge reorderer replaces the whole structure, so "the neighbors of `u`" always refers to the current
/// order of the lists.
#[derive(Clone, Debug)]
pub(crate) struct Adjacency {
    pub(crate) offsets: Vec<u32>,
    pub(crate) targets: Vec<VertexIndex>,
}

impl Adjacency {
    /// Copies the neighborhoods of `graph`, rejecting self loops and parallel edges.
    pub(crate) fn from_graph<G>(graph: G) -> Result<Self, InputError>
    where
        G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
    {
        let n = graph.node_bound();
        let mut offsets = Vec::with_capacity(n + 1);
        let mut targets = Vec::new();
        let mut stamp = vec![VertexIndex::end(); n];
        offsets.push(0);
        for i in 0..n {
            let u = VertexIndex::new(i);
            for v in graph.neighbors(graph.from_index(i)) {
                let v = VertexIndex::new(graph.to_index(v));
                if v == u {
                    return Err(InputError::SelfLoop(i));
                }
                if stamp[v.index()] == u {
                    return Err(InputError::ParallelEdge(i, v.index()));
                }
                stamp[v.index()] = u;
                targets.push(v);
            }
            offsets.push(targets.len() as u32);
        }
        Ok(Self { offsets, targets })
    }

    #[cfg(test)]
    pub(crate) fn from_lists(lists: &[&[usize]]) -> Self {
        let mut offsets = vec![0];
        let mut targets = vec![];
        for list in lists {
            targets.extend(list.iter().copied().map(VertexIndex::new));
            offsets.push(targets.len() as u32);
        }
        Self { offsets, targets }
    }

    #[inline]
    pub(crate) fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of undirected edges.
    pub(crate) fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }

    #[inline]
    pub(crate) fn neighbors(&self, u: VertexIndex) -> &[VertexIndex] {
        let start = self.offsets[u.index()] as usize;
        let end = self.offsets[u.index() + 1] as usize;
        &self.targets[start..end]
    }
}
