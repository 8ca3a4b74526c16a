//! This is a library to compute a lexicographic depth-first search (Lex-DFS) ordering of a cocomparability
//! graph in linear time.
//!
//! A Lex-DFS visits the vertices such that each next vertex is an unvisited vertex whose label is largest,
//! where the label of a vertex lists the visited neighbors from most recent to least recent. Computing such
//! an ordering in linear time is a building block for many algorithms on cocomparability graphs.
//!
//! The algorithm starts from an *umbrella-free* ordering `sigma` of the graph. An umbrella is a triple of
//! positions `i < j < k` where `sigma[i]` and `sigma[k]` are adjacent and `sigma[j]` is adjacent to neither.
//! A graph has an umbrella-free ordering exactly if it is a cocomparability graph.
//!
//! # Examples
//!
//! ```rust
//! # use std::error::Error;
//! #
//! # fn main() -> Result<(), Box<dyn Error>> {
//! use petgraph::graph::UnGraph;
//! use lex_dfs::{find_lex_dfs_violation, is_lex_dfs_ordering, lex_dfs, lex_dfs_checked};
//!
//! // the path 1 - 0 - 2 - 3, its node order is umbrella-free
//! let graph = UnGraph::<(), ()>::from_edges([(1, 0), (0, 2), (2, 3)]);
//! let sigma: Vec<_> = graph.node_indices().collect();
//! let order = lex_dfs_checked(&graph, &sigma)?;
//!
//! assert_eq!(order.len(), 4);
//! assert_eq!(lex_dfs(&graph, &sigma)?, order);
//! assert!(is_lex_dfs_ordering(&graph, &order));
//! assert_eq!(find_lex_dfs_violation(&graph, &order), None);
//! # Ok(())
//! # }
//! ```
//!
//! Orderings with an umbrella are rejected by [lex_dfs_checked].
//! ```rust
//! use lex_dfs::{lex_dfs_checked, Graph, InputError, Umbrella};
//!
//! // 1 is not adjacent to the edge 02 spanning over it
//! let graph = Graph::from_edges(3, [(0, 2)]).unwrap();
//! let result = lex_dfs_checked(&graph, &[0, 1, 2]);
//!
//! assert_eq!(result, Err(InputError::Umbrella(Umbrella { left: 0, middle: 1, right: 2 })));
//! ```
//!
//! # Generics
//!
//! The algorithm is implemented for structs that implement the `petgraph`
//! traits `NodeCompactIndexable`, `IntoNeighbors`, and `GraphProp<EdgeType =
//! Undirected>`. [Graph] is a small implementation that reports neighbors in
//! insertion order.
//!
//! # References
//! + \[CDH13\]: Derek G. Corneil, Barnaby Dalton, and Michel Habib. “LDFS-Based Certifying Algorithm for the
//!   Minimum Path Cover Problem on Cocomparability Graphs”. SIAM Journal on Computing 42(3), 2013.
//! + \[KM14\]: Ekkehard Köhler and Lalla Mouatadid. “Linear Time LexDFS on Cocomparability Graphs”. SWAT 2014.

#![forbid(unsafe_code)]
#![doc(test(attr(deny(warnings, rust_2018_idioms), allow(dead_code))))]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

mod certificate;
mod error;
mod graph;
mod index;
mod linked_list;
/// The linear time Lex-DFS algorithm.
pub mod linear;
mod segmented_stack;

pub use crate::linear::{lex_dfs, lex_dfs_checked};
pub use certificate::{find_lex_dfs_violation, find_umbrella, is_lex_dfs_ordering, is_umbrella_free, LexDfsViolation};
pub use error::{InputError, Umbrella};
pub use graph::{Graph, Neighbors};

#[cfg(test)]
mod test {
    use super::*;

    fn check(graph: &Graph, sigma: &[usize]) -> Vec<usize> {
        assert!(is_umbrella_free(graph, sigma));
        let order = lex_dfs(graph, sigma).unwrap();
        assert!(is_lex_dfs_ordering(graph, &order), "{order:?}");
        order
    }

    #[test]
    fn empty_0() {
        let graph = tests::empty_graph(0);
        assert_eq!(check(&graph, &[]), Vec::<usize>::new());
    }

    #[test]
    fn empty_1() {
        let graph = tests::empty_graph(1);
        assert_eq!(check(&graph, &[0]), [0]);
    }

    #[test]
    fn empty_5() {
        let graph = tests::empty_graph(5);
        assert_eq!(check(&graph, &[0, 1, 2, 3, 4]), [4, 3, 2, 1, 0]);
    }

    #[test]
    fn complete_2() {
        let graph = tests::complete_graph(2);
        assert_eq!(check(&graph, &[0, 1]), [1, 0]);
    }

    #[test]
    fn complete_32() {
        let graph = tests::complete_graph(32);
        let sigma: Vec<_> = (0..32).collect();
        let expected: Vec<_> = (0..32).rev().collect();
        assert_eq!(check(&graph, &sigma), expected);
    }

    #[test]
    fn path_4() {
        let graph = tests::path_graph(4);
        assert_eq!(check(&graph, &[0, 1, 2, 3]), [3, 2, 1, 0]);
    }

    #[test]
    fn path_32() {
        let graph = tests::path_graph(32);
        let sigma: Vec<_> = (0..32).collect();
        let expected: Vec<_> = (0..32).rev().collect();
        assert_eq!(check(&graph, &sigma), expected);
    }

    #[test]
    fn path_starting_next_to_an_end() {
        // 0 - 1 - 2 - 3 - 4 in the umbrella-free order 1, 0, 2, 3, 4
        let graph = tests::path_graph(5);
        assert_eq!(check(&graph, &[1, 0, 2, 3, 4]), [4, 3, 2, 1, 0]);
    }
}
