mod bins;
mod partition;
mod reorder;

use petgraph::visit::{GraphProp, IntoNeighbors, NodeCompactIndexable};
use petgraph::Undirected;
use tracing::{info, instrument};

use crate::certificate::find_umbrella_in;
use crate::error::InputError;
use crate::graph::Adjacency;
use crate::index::VertexIndex;
use crate::linear::bins::create_bins;
use crate::linear::partition::{initial_partition, Backlog, Partition};
use crate::linear::reorder::reorder_edges;

/// Computes a Lex-DFS ordering of the graph from an umbrella-free ordering `sigma`.
///
/// `sigma` must list every vertex exactly once and must not contain an umbrella, i.e. positions `i < j < k`
/// where `sigma[i]` and `sigma[k]` are adjacent while `sigma[j]` is adjacent to neither. Such an ordering
/// exists exactly for cocomparability graphs. The structure of the input is validated, the umbrella-freeness
/// is not. Use [lex_dfs_checked] or [is_umbrella_free](crate::is_umbrella_free) if the ordering is not
/// trusted. For an ordering with an umbrella the result is a permutation of the vertices, but not
/// necessarily a Lex-DFS ordering.
///
/// Runs in O(n + m) time.
///
/// # Errors
///
/// Returns an [InputError] if `sigma` is not a permutation of the vertices or if the graph has self loops
/// or parallel edges.
///
/// # Examples
///
/// ```rust
/// # use std::error::Error;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use lex_dfs::{is_lex_dfs_ordering, lex_dfs, Graph};
///
/// // A path is a cocomparability graph and the path order is umbrella-free.
/// let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)])?;
/// let order = lex_dfs(&graph, &[0, 1, 2, 3])?;
///
/// assert_eq!(order, [3, 2, 1, 0]);
/// assert!(is_lex_dfs_ordering(&graph, &order));
/// # Ok(())
/// # }
/// ```
#[instrument(skip_all)]
pub fn lex_dfs<G>(graph: G, sigma: &[G::NodeId]) -> Result<Vec<G::NodeId>, InputError>
where
    G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
{
    let adjacency = Adjacency::from_graph(graph)?;
    let sigma = to_permutation(graph, sigma)?;
    info!(n = adjacency.vertex_count(), m = adjacency.edge_count());

    let order = compute(adjacency, &sigma);
    Ok(order.into_iter().map(|u| graph.from_index(u.index())).collect())
}

/// Like [lex_dfs], but first verifies that `sigma` is umbrella-free.
///
/// The check takes O(n · m) time, which dominates the running time.
///
/// # Errors
///
/// Additionally returns [InputError::Umbrella] if `sigma` contains an umbrella.
#[instrument(skip_all)]
pub fn lex_dfs_checked<G>(graph: G, sigma: &[G::NodeId]) -> Result<Vec<G::NodeId>, InputError>
where
    G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
{
    let adjacency = Adjacency::from_graph(graph)?;
    let sigma = to_permutation(graph, sigma)?;
    if let Some(umbrella) = find_umbrella_in(&adjacency, &sigma) {
        return Err(InputError::Umbrella(umbrella));
    }
    info!(n = adjacency.vertex_count(), m = adjacency.edge_count());

    let order = compute(adjacency, &sigma);
    Ok(order.into_iter().map(|u| graph.from_index(u.index())).collect())
}

/// Maps `sigma` to vertex indices and checks that it is a permutation.
pub(crate) fn to_permutation<G>(graph: G, sigma: &[G::NodeId]) -> Result<Vec<VertexIndex>, InputError>
where
    G: NodeCompactIndexable,
{
    let n = graph.node_bound();
    if sigma.len() != n {
        return Err(InputError::LengthMismatch { expected: n, actual: sigma.len() });
    }
    let mut seen = vec![false; n];
    sigma
        .iter()
        .map(|&u| {
            let i = graph.to_index(u);
            if i >= n {
                return Err(InputError::UnknownVertex { vertex: i, vertex_count: n });
            }
            if std::mem::replace(&mut seen[i], true) {
                return Err(InputError::DuplicateVertex(i));
            }
            Ok(VertexIndex::new(i))
        })
        .collect()
}

/// Runs the pipeline on validated input.
pub(crate) fn compute(adjacency: Adjacency, sigma: &[VertexIndex]) -> Vec<VertexIndex> {
    let mut bins = create_bins(&adjacency, sigma);
    let mut partition = initial_partition(&adjacency, &mut bins);
    drop(bins);

    let adjacency = reorder_edges(&adjacency, partition.vertices());
    assemble(&adjacency, &mut partition)
}

/// Refines the initial classes one after another and emits their vertices.
///
/// Emitting `u` records a batch for every class that still holds unemitted neighbors of `u`. The batches
/// of a class are only applied once all classes in front of it have been emitted.
#[instrument(skip_all)]
fn assemble(adjacency: &Adjacency, partition: &mut Partition) -> Vec<VertexIndex> {
    let n = adjacency.vertex_count();
    let mut backlogs: Vec<Backlog> = partition.initial_classes().map(|_| Backlog::default()).collect();
    let mut refined = vec![false; n];
    let mut order = Vec::with_capacity(n);

    for class in partition.initial_classes() {
        let first = partition.refine(class, &mut backlogs[class.index()]);

        let start = order.len();
        for part in partition.sequence(first) {
            order.extend(partition.members(part));
        }
        for &u in &order[start..] {
            refined[u.index()] = true;
        }

        for &u in &order[start..] {
            for &v in adjacency.neighbors(u) {
                if refined[v.index()] {
                    continue;
                }
                let owner = partition.owner(v);
                debug_assert!(owner > class, "unrefined vertices belong to later initial classes");
                backlogs[owner.index()].push(u, v);
            }
        }
    }

    debug_assert_eq!(order.len(), n);
    order
}

#[cfg(test)]
mod test {
    use petgraph::graph::{NodeIndex, UnGraph};

    use super::*;
    use crate::certificate::is_lex_dfs_ordering;
    use crate::graph::Graph;
    use crate::tests::{cocomparability_instances, example_graph, EXAMPLE_NAMES};

    #[test]
    fn example_graph_golden_order() {
        let graph = example_graph();
        let sigma: Vec<_> = (0..11).collect();
        let order = lex_dfs(&graph, &sigma).unwrap();
        let names: String = order.iter().map(|&u| EXAMPLE_NAMES[u]).collect();
        assert_eq!(names, "khjigfdebac");
        assert!(is_lex_dfs_ordering(&graph, &order));
    }

    #[test]
    fn example_graph_is_deterministic() {
        let graph = example_graph();
        let sigma: Vec<_> = (0..11).collect();
        let first = lex_dfs(&graph, &sigma).unwrap();
        for _ in 0..3 {
            assert_eq!(lex_dfs(&graph, &sigma).unwrap(), first);
        }
        assert_eq!(lex_dfs_checked(&graph, &sigma).unwrap(), first);
    }

    #[test]
    fn null_graph() {
        let graph = Graph::new(0);
        assert_eq!(lex_dfs(&graph, &[]), Ok(vec![]));
    }

    #[test]
    fn single_vertex() {
        let graph = Graph::new(1);
        assert_eq!(lex_dfs(&graph, &[0]), Ok(vec![0]));
    }

    #[test]
    fn edgeless_graph_reverses_sigma() {
        // All labels differ, so every vertex gets its own initial class in backward sigma order.
        let graph = Graph::new(4);
        assert_eq!(lex_dfs(&graph, &[2, 0, 3, 1]), Ok(vec![1, 3, 0, 2]));
    }

    #[test]
    fn complete_graph_keeps_one_class() {
        let edges = (0..4).flat_map(|u| (u + 1..4).map(move |v| (u, v)));
        let graph = Graph::from_edges(4, edges).unwrap();
        let order = lex_dfs(&graph, &[1, 3, 0, 2]).unwrap();
        assert_eq!(order, [2, 0, 3, 1]);
    }

    #[test]
    fn rejects_malformed_sigma() {
        let graph = Graph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        assert_eq!(lex_dfs(&graph, &[0, 1]), Err(InputError::LengthMismatch { expected: 3, actual: 2 }));
        assert_eq!(lex_dfs(&graph, &[0, 1, 1]), Err(InputError::DuplicateVertex(1)));
        assert_eq!(lex_dfs(&graph, &[0, 1, 3]), Err(InputError::UnknownVertex { vertex: 3, vertex_count: 3 }));
    }

    #[test]
    fn rejects_umbrella_when_checked() {
        // 0 - 2 with 1 isolated in between.
        let graph = Graph::from_edges(3, [(0, 2)]).unwrap();
        let err = lex_dfs_checked(&graph, &[0, 1, 2]).unwrap_err();
        assert_eq!(err, InputError::Umbrella(crate::Umbrella { left: 0, middle: 1, right: 2 }));
        // The unchecked variant still returns a permutation.
        let mut order = lex_dfs(&graph, &[0, 1, 2]).unwrap();
        order.sort();
        assert_eq!(order, [0, 1, 2]);
    }

    #[test]
    fn petgraph_input() {
        let mut graph = UnGraph::<char, ()>::new_undirected();
        let nodes: Vec<_> = EXAMPLE_NAMES.iter().map(|&name| graph.add_node(name)).collect();
        for u in 0..11 {
            for &v in example_graph().neighbors(u) {
                if u < v {
                    graph.add_edge(nodes[u], nodes[v], ());
                }
            }
        }

        let order = lex_dfs(&graph, &nodes).unwrap();
        let mut sorted: Vec<_> = order.iter().map(|u| u.index()).collect();
        sorted.sort();
        assert_eq!(sorted, (0..11).collect::<Vec<_>>());
        assert!(is_lex_dfs_ordering(&graph, &order));
        assert_eq!(lex_dfs(&graph, &nodes).unwrap(), order);

        let missing: Vec<_> = nodes[..10].to_vec();
        assert_eq!(lex_dfs(&graph, &missing), Err(InputError::LengthMismatch { expected: 11, actual: 10 }));
        let unknown: Vec<_> = nodes[..10].iter().copied().chain([NodeIndex::new(11)]).collect();
        assert_eq!(lex_dfs(&graph, &unknown), Err(InputError::UnknownVertex { vertex: 11, vertex_count: 11 }));
    }

    #[test]
    fn outputs_are_lex_dfs_orderings() {
        for (adjacency, sigma) in cocomparability_instances() {
            let n = adjacency.vertex_count();
            let order = compute(adjacency.clone(), &sigma);

            let mut sorted = order.clone();
            sorted.sort();
            assert_eq!(sorted, (0..n).map(VertexIndex::new).collect::<Vec<_>>());
            assert!(
                crate::certificate::find_lex_dfs_violation_in(&adjacency, &order).is_none(),
                "sigma = {sigma:?}, order = {order:?}"
            );
            assert_eq!(compute(adjacency, &sigma), order);
        }
    }

    #[test]
    fn emission_never_pushes_refined_vertices() {
        // `assemble` asserts in debug builds that pushes only target later classes. Run it on every
        // instance with the whole pipeline.
        for (adjacency, sigma) in cocomparability_instances() {
            let mut bins = create_bins(&adjacency, &sigma);
            let mut partition = initial_partition(&adjacency, &mut bins);
            let reordered = reorder_edges(&adjacency, partition.vertices());
            let order = assemble(&reordered, &mut partition);
            assert_eq!(order.len(), adjacency.vertex_count());
        }
    }
}
