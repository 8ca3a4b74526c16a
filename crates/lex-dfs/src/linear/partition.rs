use tracing::{info, instrument, trace};

use crate::graph::Adjacency;
use crate::index::{ClassIndex, VertexIndex};
use crate::linear::bins::Bins;
use crate::linked_list::{Iter, Lists};
use crate::segmented_stack::SegmentedStack;

/// Deferred split instructions of a partition class.
///
/// Each batch holds the vertices of the class that one emitted vertex is adjacent to. Consecutive pushes
/// by the same emitter go into the same batch.
#[derive(Debug, Default)]
pub(crate) struct Backlog {
    batches: SegmentedStack<VertexIndex>,
    last_emitter: VertexIndex,
}

impl Backlog {
    pub(crate) fn push(&mut self, emitter: VertexIndex, v: VertexIndex) {
        if self.last_emitter != emitter {
            self.last_emitter = emitter;
            self.batches.open_segment();
        }
        self.batches.add(v);
    }

    /// Removes the most recently started batch.
    pub(crate) fn pop(&mut self) -> Option<&[VertexIndex]> {
        self.batches.pop()
    }

    #[cfg(test)]
    pub(crate) fn batch_count(&self) -> usize {
        self.batches.segment_count()
    }
}

#[derive(Clone, Debug)]
struct Class {
    /// First vertex that is not confirmed to stay left.
    marker: VertexIndex,
    splittable: bool,
    prev: ClassIndex,
    next: ClassIndex,
}

impl Class {
    fn new(marker: VertexIndex) -> Self {
        Self { marker, splittable: false, prev: ClassIndex::end(), next: ClassIndex::end() }
    }
}

/// An arena of partition classes.
///
/// Class `i` owns list `i` of `members`. Every vertex is in exactly one class and `owner` points back to
/// it. The initial classes are `0..initial_class_count` in constructor order. Classes created by splits are
/// appended to the arena and linked into the sequence of the initial class they were split from, directly
/// in front of their origin.
#[derive(Debug)]
pub(crate) struct Partition {
    members: Lists,
    classes: Vec<Class>,
    owner: Vec<ClassIndex>,
    initial_class_count: usize,
}

impl Partition {
    fn with_capacity(vertex_count: usize) -> Self {
        Self {
            members: Lists::new(0, vertex_count),
            classes: Vec::with_capacity(vertex_count),
            owner: vec![ClassIndex::end(); vertex_count],
            initial_class_count: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_classes(vertex_count: usize, classes: &[&[usize]]) -> Self {
        let mut partition = Self::with_capacity(vertex_count);
        for class in classes {
            let vertices: Vec<_> = class.iter().copied().map(VertexIndex::new).collect();
            partition.push_initial_class(&vertices);
        }
        partition
    }

    fn push_initial_class(&mut self, vertices: &[VertexIndex]) -> ClassIndex {
        debug_assert_eq!(self.classes.len(), self.initial_class_count, "initial classes must precede splits");
        let list = self.members.add_list();
        let class = ClassIndex::new(list);
        for &u in vertices {
            self.members.push_back(list, u);
            self.owner[u.index()] = class;
        }
        self.classes.push(Class::new(vertices[0]));
        self.initial_class_count += 1;
        class
    }

    pub(crate) fn initial_class_count(&self) -> usize {
        self.initial_class_count
    }

    pub(crate) fn initial_classes(&self) -> impl Iterator<Item = ClassIndex> {
        (0..self.initial_class_count).map(ClassIndex::new)
    }

    pub(crate) fn owner(&self, u: VertexIndex) -> ClassIndex {
        self.owner[u.index()]
    }

    pub(crate) fn members(&self, class: ClassIndex) -> Iter<'_> {
        self.members.iter(class.index())
    }

    /// Iterates over the classes of a refinement sequence, starting at its first class.
    pub(crate) fn sequence(&self, first: ClassIndex) -> impl Iterator<Item = ClassIndex> + '_ {
        debug_assert!(!self.classes[first.index()].prev.is_valid());
        std::iter::successors(Some(first), move |class| {
            let next = self.classes[class.index()].next;
            next.is_valid().then_some(next)
        })
    }

    /// All vertices in initial class order. Only meaningful before any refinement.
    pub(crate) fn vertices(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.initial_classes().flat_map(move |class| self.members(class))
    }

    /// Refines an initial class by draining its backlog, most recent batch first.
    ///
    /// Returns the first class of the resulting sequence. Use [Partition::sequence] to walk it.
    pub(crate) fn refine(&mut self, class: ClassIndex, backlog: &mut Backlog) -> ClassIndex {
        debug_assert!(class.index() < self.initial_class_count);
        let mut first = class;
        while let Some(batch) = backlog.pop() {
            for &u in batch {
                self.confirm_left(u);
            }
            for &u in batch {
                let owner = self.owner[u.index()];
                if self.classes[owner.index()].splittable {
                    self.classes[owner.index()].splittable = false;
                    let left = self.split(owner);
                    if owner == first {
                        first = left;
                    }
                }
            }
        }
        first
    }

    /// Moves `u` in front of the split marker of its class.
    ///
    /// Invariant: before each batch the marker of every class is its first vertex. The vertices in front of
    /// the marker are exactly those confirmed by the current batch.
    fn confirm_left(&mut self, u: VertexIndex) {
        let list = self.owner[u.index()].index();
        let class = &mut self.classes[list];
        if u == class.marker {
            match self.members.next(u) {
                Some(next) => class.marker = next,
                None => {
                    // The whole class is confirmed. Nothing to split off, start over for the next batch.
                    class.marker = self.members.first(list).unwrap_or(u);
                    class.splittable = false;
                    return;
                }
            }
        }
        self.members.move_before(list, u, class.marker);
        class.splittable = true;
    }

    /// Cuts the vertices in front of the marker off `class` into a new class directly in front of it.
    fn split(&mut self, class: ClassIndex) -> ClassIndex {
        let Class { marker, prev, .. } = self.classes[class.index()];
        let list = self.members.split_front(class.index(), marker);
        debug_assert_eq!(list, self.classes.len());
        let left = ClassIndex::new(list);

        let first = self.members.first(list).unwrap_or(marker);
        self.classes.push(Class { marker: first, splittable: false, prev, next: class });
        if prev.is_valid() {
            self.classes[prev.index()].next = left;
        }
        self.classes[class.index()].prev = left;

        let Self { members, owner, .. } = self;
        for u in members.iter(list) {
            owner[u.index()] = left;
        }
        trace!(%class, %left, "split");
        left
    }
}

/// Turns the bins into the ordered sequence of initial partition classes.
///
/// Bins are finalized by increasing label. After a bin becomes a class, every neighbor of its vertices that
/// is still waiting in a bin is moved one bin up. Each edge causes at most one move, so the total work is
/// O(n + m).
#[instrument(skip_all)]
pub(crate) fn initial_partition(adjacency: &Adjacency, bins: &mut Bins) -> Partition {
    let n = adjacency.vertex_count();
    let mut partition = Partition::with_capacity(n);
    let mut partitioned = vec![false; n];
    let mut finalized = Vec::new();

    for label in 0..bins.bin_count() {
        finalized.clear();
        finalized.extend(bins.members(label));
        if finalized.is_empty() {
            continue;
        }

        partition.push_initial_class(&finalized);
        for &u in &finalized {
            partitioned[u.index()] = true;
        }
        for &u in &finalized {
            for &v in adjacency.neighbors(u) {
                if !partitioned[v.index()] {
                    bins.promote(v);
                }
            }
        }
    }

    info!(number_of_initial_classes = partition.initial_class_count());
    partition
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::linear::bins::create_bins;
    use crate::tests::{example_adjacency, identity};

    fn v(i: usize) -> VertexIndex {
        VertexIndex::new(i)
    }

    fn to_vecs(partition: &Partition, first: ClassIndex) -> Vec<Vec<usize>> {
        partition.sequence(first).map(|class| partition.members(class).map(|u| u.index()).collect()).collect()
    }

    fn initial_classes(partition: &Partition) -> Vec<Vec<usize>> {
        partition.initial_classes().map(|class| partition.members(class).map(|u| u.index()).collect()).collect()
    }

    #[test]
    fn backlog_coalesces_pushes_of_the_same_emitter() {
        let mut backlog = Backlog::default();
        backlog.push(v(7), v(1));
        backlog.push(v(7), v(2));
        backlog.push(v(8), v(3));
        backlog.push(v(7), v(4));
        assert_eq!(backlog.batch_count(), 3);
        assert_eq!(backlog.pop(), Some(&[v(4)][..]));
        assert_eq!(backlog.pop(), Some(&[v(3)][..]));
        assert_eq!(backlog.pop(), Some(&[v(1), v(2)][..]));
        assert_eq!(backlog.pop(), None);
    }

    #[test]
    fn example_initial_partition() {
        let adjacency = example_adjacency();
        let mut bins = create_bins(&adjacency, &identity(11));
        let partition = initial_partition(&adjacency, &mut bins);

        // [[k, h], [j], [g, i], [e, d, f], [b, a, c]]
        assert_eq!(initial_classes(&partition), [vec![10, 7], vec![9], vec![6, 8], vec![4, 3, 5], vec![1, 0, 2]]);

        // a  b  c  d  e  f  g  h  i  j  k
        let labels: Vec<_> = (0..11).map(|u| bins.label(v(u))).collect();
        assert_eq!(labels, [8, 8, 8, 5, 5, 5, 3, 0, 3, 2, 0]);

        for class in partition.initial_classes() {
            assert!(partition.members(class).all(|u| partition.owner(u) == class));
        }
    }

    #[test]
    fn flattened_initial_classes_have_non_decreasing_labels() {
        for (adjacency, sigma) in crate::tests::cocomparability_instances() {
            let mut bins = create_bins(&adjacency, &sigma);
            let partition = initial_partition(&adjacency, &mut bins);

            let vertices: Vec<_> = partition.vertices().collect();
            let mut sorted = vertices.clone();
            sorted.sort();
            assert_eq!(sorted, identity(adjacency.vertex_count()));

            let labels: Vec<_> = vertices.iter().map(|&u| bins.label(u)).collect();
            assert!(labels.windows(2).all(|w| w[0] <= w[1]), "{labels:?}");
        }
    }

    #[test]
    fn refine_without_backlog_keeps_the_class() {
        let mut partition = Partition::from_classes(3, &[&[2, 0, 1]]);
        let mut backlog = Backlog::default();
        let first = partition.refine(ClassIndex::new(0), &mut backlog);
        assert_eq!(to_vecs(&partition, first), [vec![2, 0, 1]]);
    }

    #[test]
    fn refine_applies_the_latest_batch_first() {
        let mut partition = Partition::from_classes(3, &[&[0, 1, 2]]);
        let mut backlog = Backlog::default();
        backlog.push(v(5), v(2));
        backlog.push(v(6), v(1));

        let first = partition.refine(ClassIndex::new(0), &mut backlog);
        assert_eq!(to_vecs(&partition, first), [vec![1], vec![2], vec![0]]);
    }

    #[test]
    fn refine_in_push_order_differs() {
        let mut partition = Partition::from_classes(3, &[&[0, 1, 2]]);
        let mut backlog = Backlog::default();
        backlog.push(v(6), v(1));
        backlog.push(v(5), v(2));

        let first = partition.refine(ClassIndex::new(0), &mut backlog);
        assert_eq!(to_vecs(&partition, first), [vec![2], vec![1], vec![0]]);
    }

    #[test]
    fn batch_covering_a_class_resets_the_marker() {
        let mut partition = Partition::from_classes(3, &[&[0, 1, 2]]);
        let mut backlog = Backlog::default();
        backlog.push(v(5), v(2));
        for u in [0, 1, 2] {
            backlog.push(v(6), v(u));
        }

        let first = partition.refine(ClassIndex::new(0), &mut backlog);
        assert_eq!(to_vecs(&partition, first), [vec![2], vec![0, 1]]);
    }

    #[test]
    fn split_off_class_holds_exactly_the_confirmed_vertices() {
        let mut partition = Partition::from_classes(4, &[&[0, 1, 2, 3]]);
        let mut backlog = Backlog::default();
        backlog.push(v(8), v(3));
        backlog.push(v(8), v(1));
        backlog.push(v(9), v(2));
        backlog.push(v(9), v(3));

        let first = partition.refine(ClassIndex::new(0), &mut backlog);
        assert_eq!(to_vecs(&partition, first), [vec![3], vec![2], vec![1], vec![0]]);
        for class in partition.sequence(first) {
            assert!(partition.members(class).all(|u| partition.owner(u) == class));
        }
    }

    #[test]
    fn confirmed_vertices_keep_their_batch_order() {
        let mut partition = Partition::from_classes(5, &[&[0, 1, 2, 3, 4]]);
        let mut backlog = Backlog::default();
        for u in [4, 1, 3] {
            backlog.push(v(7), v(u));
        }

        let first = partition.refine(ClassIndex::new(0), &mut backlog);
        assert_eq!(to_vecs(&partition, first), [vec![4, 1, 3], vec![0, 2]]);
    }

    #[test]
    fn refinement_only_touches_its_own_sequence() {
        let mut partition = Partition::from_classes(4, &[&[0, 1], &[2, 3]]);
        let mut first_backlog = Backlog::default();
        first_backlog.push(v(3), v(1));

        let first = partition.refine(ClassIndex::new(0), &mut first_backlog);
        assert_eq!(to_vecs(&partition, first), [vec![1], vec![0]]);
        assert_eq!(to_vecs(&partition, ClassIndex::new(1)), [vec![2, 3]]);
        assert_eq!(partition.owner(v(2)), ClassIndex::new(1));
    }
}
