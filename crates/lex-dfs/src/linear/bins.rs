use tracing::instrument;

use crate::graph::Adjacency;
use crate::index::VertexIndex;
use crate::linked_list::{Iter, Lists};

/// Buckets of vertices keyed by an integer label in `0..n`.
///
/// A vertex can be moved to the next bin in O(1), which is all the partition constructor needs.
#[derive(Debug)]
pub(crate) struct Bins {
    lists: Lists,
    labels: Vec<u32>,
}

impl Bins {
    pub(crate) fn bin_count(&self) -> usize {
        self.labels.len()
    }

    #[cfg(test)]
    pub(crate) fn label(&self, u: VertexIndex) -> u32 {
        self.labels[u.index()]
    }

    pub(crate) fn members(&self, label: usize) -> Iter<'_> {
        self.lists.iter(label)
    }

    /// Moves `u` from its bin to the end of the next one.
    pub(crate) fn promote(&mut self, u: VertexIndex) {
        let bin_count = self.bin_count();
        let label = &mut self.labels[u.index()];
        self.lists.remove(*label as usize, u);
        *label += 1;
        debug_assert!((*label as usize) < bin_count);
        self.lists.push_back(*label as usize, u);
    }
}

/// Distributes the vertices into bins with a single backward scan over `sigma`.
///
/// The vertex at position `i` gets the label `(n - 1 - i) - r`, where `r` is the number of its neighbors
/// positioned after `i`, i.e. the number of its non-neighbors to the right. Vertices enter their bin in
/// backward `sigma` order.
#[instrument(skip_all)]
pub(crate) fn create_bins(adjacency: &Adjacency, sigma: &[VertexIndex]) -> Bins {
    let n = sigma.len();
    debug_assert_eq!(n, adjacency.vertex_count());

    let mut lists = Lists::new(n, n);
    let mut labels = vec![0; n];
    let mut right_edges_in_sigma = vec![0_u32; n];
    let mut processed = vec![false; n];

    for (i, &u) in sigma.iter().enumerate().rev() {
        let label = (n - 1 - i) as u32 - right_edges_in_sigma[u.index()];
        labels[u.index()] = label;
        lists.push_back(label as usize, u);
        processed[u.index()] = true;

        for &v in adjacency.neighbors(u) {
            if !processed[v.index()] {
                right_edges_in_sigma[v.index()] += 1;
            }
        }
    }

    Bins { lists, labels }
}
