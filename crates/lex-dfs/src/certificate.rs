//! Independent checks for the input and the output of [lex_dfs](crate::lex_dfs).
//!
//! Both checks are straightforward and much slower than the algorithm itself. They are meant for
//! validating untrusted input and for testing.

use std::fmt::{Display, Formatter};

use petgraph::visit::{IntoNeighbors, NodeCompactIndexable};

use crate::error::Umbrella;
use crate::graph::Adjacency;
use crate::index::VertexIndex;

/// Positions `a < b < c` of an ordering that cannot occur in a Lex-DFS ordering.
///
/// The vertices at `a` and `c` are adjacent, `a` and `b` are not, and no vertex between `a` and `b` is
/// adjacent to `b` without being adjacent to `c`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexDfsViolation {
    /// Position of the vertex adjacent to `c` but not to `b`.
    pub a: usize,
    /// Position of the vertex visited too early.
    pub b: usize,
    /// Position of the vertex that should have been visited before `b`.
    pub c: usize,
}

impl Display for LexDfsViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "positions {} < {} < {}", self.a, self.b, self.c)
    }
}

/// Returns an umbrella in `sigma`, if there is one.
///
/// An umbrella consists of positions `i < j < k` where `sigma[i]` and `sigma[k]` are adjacent and `sigma[j]`
/// is adjacent to neither. The returned umbrella is the smallest one in lexicographic order of
/// `(left, middle, right)`. Takes O(n · m) time.
///
/// # Panics
///
/// Panics if `sigma` is not a permutation of the vertices of `graph`.
///
/// # Examples
///
/// ```rust
/// # use std::error::Error;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use lex_dfs::{find_umbrella, Graph, Umbrella};
///
/// let graph = Graph::from_edges(3, [(0, 2)])?;
/// assert_eq!(find_umbrella(&graph, &[0, 1, 2]), Some(Umbrella { left: 0, middle: 1, right: 2 }));
/// assert_eq!(find_umbrella(&graph, &[1, 0, 2]), None);
/// # Ok(())
/// # }
/// ```
pub fn find_umbrella<G>(graph: G, sigma: &[G::NodeId]) -> Option<Umbrella>
where
    G: NodeCompactIndexable + IntoNeighbors,
{
    let sigma = to_indices(graph, sigma);
    umbrella(&sigma, |u| graph.neighbors(graph.from_index(u)).map(move |v| graph.to_index(v)))
}

/// Returns `true` if `sigma` has no umbrella. See [find_umbrella].
pub fn is_umbrella_free<G>(graph: G, sigma: &[G::NodeId]) -> bool
where
    G: NodeCompactIndexable + IntoNeighbors,
{
    find_umbrella(graph, sigma).is_none()
}

/// Returns a triple of positions showing that `order` is not a Lex-DFS ordering, if there is one.
///
/// An ordering is a Lex-DFS ordering of the graph exactly if no such triple exists. Takes O(n³) time and
/// O(n²) space.
///
/// # Panics
///
/// Panics if `order` is not a permutation of the vertices of `graph`.
pub fn find_lex_dfs_violation<G>(graph: G, order: &[G::NodeId]) -> Option<LexDfsViolation>
where
    G: NodeCompactIndexable + IntoNeighbors,
{
    let order = to_indices(graph, order);
    lex_dfs_violation(&order, |u| graph.neighbors(graph.from_index(u)).map(move |v| graph.to_index(v)))
}

/// Returns `true` if `order` is a Lex-DFS ordering of the graph. See [find_lex_dfs_violation].
pub fn is_lex_dfs_ordering<G>(graph: G, order: &[G::NodeId]) -> bool
where
    G: NodeCompactIndexable + IntoNeighbors,
{
    find_lex_dfs_violation(graph, order).is_none()
}

pub(crate) fn find_umbrella_in(adjacency: &Adjacency, sigma: &[VertexIndex]) -> Option<Umbrella> {
    let sigma: Vec<usize> = sigma.iter().map(|u| u.index()).collect();
    umbrella(&sigma, |u| adjacency.neighbors(VertexIndex::new(u)).iter().map(|v| v.index()))
}

#[cfg(test)]
pub(crate) fn find_lex_dfs_violation_in(adjacency: &Adjacency, order: &[VertexIndex]) -> Option<LexDfsViolation> {
    let order: Vec<usize> = order.iter().map(|u| u.index()).collect();
    lex_dfs_violation(&order, |u| adjacency.neighbors(VertexIndex::new(u)).iter().map(|v| v.index()))
}

fn to_indices<G: NodeCompactIndexable>(graph: G, order: &[G::NodeId]) -> Vec<usize> {
    assert_eq!(order.len(), graph.node_bound(), "ordering must contain every vertex");
    order.iter().map(|&u| graph.to_index(u)).collect()
}

fn positions(order: &[usize]) -> Vec<usize> {
    let mut position = vec![usize::MAX; order.len()];
    for (i, &u) in order.iter().enumerate() {
        assert_eq!(position[u], usize::MAX, "vertex {u} occurs more than once");
        position[u] = i;
    }
    position
}

fn umbrella<N, I>(sigma: &[usize], neighbors: N) -> Option<Umbrella>
where
    N: Fn(usize) -> I,
    I: IntoIterator<Item = usize>,
{
    let n = sigma.len();
    let position = positions(sigma);

    // left_stamp[v] == i + 1 iff v is adjacent to sigma[i]. Same for middle_stamp and the current middle.
    let mut left_stamp = vec![0; n];
    let mut middle_stamp = vec![0; n];
    let mut round = 0;
    let mut right = vec![];

    for (i, &u) in sigma.iter().enumerate() {
        right.clear();
        for v in neighbors(u) {
            left_stamp[v] = i + 1;
            if position[v] > i {
                right.push(position[v]);
            }
        }
        let Some(&last) = right.iter().max() else { continue };

        for j in i + 1..last {
            let w = sigma[j];
            if left_stamp[w] == i + 1 {
                continue;
            }
            round += 1;
            for x in neighbors(w) {
                middle_stamp[x] = round;
            }
            let k = right.iter().copied().filter(|&k| k > j && middle_stamp[sigma[k]] != round).min();
            if let Some(k) = k {
                return Some(Umbrella { left: i, middle: j, right: k });
            }
        }
    }
    None
}

fn lex_dfs_violation<N, I>(order: &[usize], neighbors: N) -> Option<LexDfsViolation>
where
    N: Fn(usize) -> I,
    I: IntoIterator<Item = usize>,
{
    let n = order.len();
    let position = positions(order);

    let mut matrix = vec![false; n * n];
    for (i, &u) in order.iter().enumerate() {
        for v in neighbors(u) {
            matrix[i * n + position[v]] = true;
        }
    }
    let adjacent = |x: usize, y: usize| matrix[x * n + y];

    for b in 0..n {
        for c in b + 1..n {
            // Every a behind the last vertex adjacent to b but not to c lacks a witness.
            let witness = (0..b).rev().find(|&d| adjacent(d, b) && !adjacent(d, c));
            let start = witness.map_or(0, |d| d + 1);
            if let Some(a) = (start..b).find(|&a| !adjacent(a, b) && adjacent(a, c)) {
                return Some(LexDfsViolation { a, b, c });
            }
        }
    }
    None
}
