use tracing::instrument;

use crate::graph::Adjacency;
use crate::index::VertexIndex;

/// Rewrites every adjacency list into the order given by `order`.
///
/// Each vertex `u` is appended to the lists of its neighbors when it is reached in `order`. This is a stable
/// bucket sort of all neighborhoods at once and takes O(n + m) time. Degrees and offsets are unchanged.
#[instrument(skip_all)]
pub(crate) fn reorder_edges(adjacency: &Adjacency, order: impl IntoIterator<Item = VertexIndex>) -> Adjacency {
    let offsets = adjacency.offsets.clone();
    let mut cursor: Vec<usize> = offsets[..adjacency.vertex_count()].iter().map(|&o| o as usize).collect();
    let mut targets = vec![VertexIndex::end(); adjacency.targets.len()];

    for u in order {
        for &v in adjacency.neighbors(u) {
            targets[cursor[v.index()]] = u;
            cursor[v.index()] += 1;
        }
    }
    debug_assert!(targets.iter().all(|v| v.is_valid()), "order must contain every vertex");

    Adjacency { offsets, targets }
}
