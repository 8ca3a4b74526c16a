//! Generators for cocomparability graphs together with an umbrella-free ordering.

use petgraph::graph::{NodeIndex, UnGraph};
use rand::seq::SliceRandom;
use rand::Rng;

/// A graph and an umbrella-free ordering of its vertices.
#[derive(Debug, Clone)]
pub struct Instance {
    pub graph: UnGraph<(), ()>,
    pub sigma: Vec<NodeIndex>,
}

impl Instance {
    /// Builds an instance whose ordering is `0..n` in terms of the given edge endpoints.
    fn from_ordered_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut graph = UnGraph::with_capacity(n, 0);
        for _ in 0..n {
            graph.add_node(());
        }
        for (u, v) in edges {
            graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        }
        let sigma = graph.node_indices().collect();
        Self { graph, sigma }
    }

    /// Returns an isomorphic instance with randomly permuted vertex indices and edge order.
    pub fn shuffled<R: Rng>(&self, rng: &mut R) -> Self {
        let n = self.graph.node_count();
        let mut labels: Vec<usize> = (0..n).collect();
        labels.shuffle(rng);
        let mut edges: Vec<_> = self.graph.edge_indices().filter_map(|e| self.graph.edge_endpoints(e)).collect();
        edges.shuffle(rng);

        let mut graph = UnGraph::with_capacity(n, edges.len());
        for _ in 0..n {
            graph.add_node(());
        }
        let relabel = |u: NodeIndex| NodeIndex::new(labels[u.index()]);
        for (u, v) in edges {
            graph.add_edge(relabel(u), relabel(v), ());
        }
        let sigma = self.sigma.iter().map(|&u| relabel(u)).collect();
        Self { graph, sigma }
    }
}

/// Vertex names of [example].
pub const EXAMPLE_NAMES: [char; 11] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k'];

/// A cocomparability graph on 11 vertices `a..=k` whose alphabetical order is umbrella-free.
pub fn example() -> Instance {
    let edges = [
        (0, 1),
        (0, 2),
        (0, 3),
        (1, 2),
        (1, 4),
        (2, 3),
        (3, 4),
        (3, 5),
        (3, 6),
        (4, 5),
        (5, 6),
        (5, 7),
        (6, 8),
        (7, 8),
        (7, 9),
        (7, 10),
    ];
    Instance::from_ordered_edges(11, edges)
}

/// The permutation graph of a uniformly random permutation `p` of `0..n`.
///
/// Positions `i < j` are adjacent iff `p[i] > p[j]`. The positions in increasing order are umbrella-free,
/// because `p` increases along any umbrella.
pub fn permutation_graph<R: Rng>(rng: &mut R, n: usize) -> Instance {
    let mut p: Vec<usize> = (0..n).collect();
    p.shuffle(rng);
    let edges = (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j))).filter(|&(i, j)| p[i] > p[j]);
    Instance::from_ordered_edges(n, edges.collect::<Vec<_>>())
}

/// The intersection graph of `n` random closed intervals with left ends in `0..=2n` and lengths in
/// `0..=max_length`.
///
/// The intervals sorted by left end are umbrella-free, because an interval starting between the ends of an
/// edge still intersects the left one.
pub fn interval_graph<R: Rng>(rng: &mut R, n: usize, max_length: usize) -> Instance {
    let mut intervals: Vec<(usize, usize)> = (0..n)
        .map(|_| {
            let left = rng.gen_range(0..=2 * n);
            (left, left + rng.gen_range(0..=max_length))
        })
        .collect();
    intervals.sort_unstable();

    // The intervals intersecting `i` from the right form a prefix of the ones after it.
    let mut edges = vec![];
    for (i, &(_, right)) in intervals.iter().enumerate() {
        let overlapping = intervals[i + 1..].iter().take_while(|&&(left, _)| left <= right).count();
        edges.extend((i + 1..i + 1 + overlapping).map(|j| (i, j)));
    }
    Instance::from_ordered_edges(n, edges)
}
