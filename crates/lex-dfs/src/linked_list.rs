use std::iter::FusedIterator;

use crate::index::VertexIndex;

/// A family of disjoint doubly-linked lists over the vertices `0..n`.
///
/// Every vertex is in at most one list at a time. Links are stored per vertex, so a vertex is its own
/// handle: removal, relinking and membership tests are O(1) without any pointers.
///
/// Lists are identified by a dense `usize` id. The bins of the bin builder use the label as id, the
/// partition classes use their class index.
#[derive(Clone, Debug)]
pub(crate) struct Lists {
    first: Vec<VertexIndex>,
    last: Vec<VertexIndex>,
    prev: Vec<VertexIndex>,
    next: Vec<VertexIndex>,
}

impl Lists {
    pub(crate) fn new(list_count: usize, vertex_count: usize) -> Self {
        Self {
            first: vec![VertexIndex::end(); list_count],
            last: vec![VertexIndex::end(); list_count],
            prev: vec![VertexIndex::end(); vertex_count],
            next: vec![VertexIndex::end(); vertex_count],
        }
    }

    /// Appends a new empty list and returns its id.
    pub(crate) fn add_list(&mut self) -> usize {
        self.first.push(VertexIndex::end());
        self.last.push(VertexIndex::end());
        self.first.len() - 1
    }

    #[cfg(test)]
    pub(crate) fn list_count(&self) -> usize {
        self.first.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self, list: usize) -> bool {
        !self.first[list].is_valid()
    }

    pub(crate) fn first(&self, list: usize) -> Option<VertexIndex> {
        self.first[list].into_option()
    }

    pub(crate) fn next(&self, x: VertexIndex) -> Option<VertexIndex> {
        self.next[x.index()].into_option()
    }

    pub(crate) fn push_back(&mut self, list: usize, x: VertexIndex) {
        let old_last = self.last[list];
        self.prev[x.index()] = old_last;
        self.next[x.index()] = VertexIndex::end();
        if old_last.is_valid() {
            self.next[old_last.index()] = x;
        } else {
            self.first[list] = x;
        }
        self.last[list] = x;
    }

    pub(crate) fn remove(&mut self, list: usize, x: VertexIndex) {
        let prev = std::mem::replace(&mut self.prev[x.index()], VertexIndex::end());
        let next = std::mem::replace(&mut self.next[x.index()], VertexIndex::end());
        if prev.is_valid() {
            self.next[prev.index()] = next;
        } else {
            debug_assert_eq!(self.first[list], x);
            self.first[list] = next;
        }
        if next.is_valid() {
            self.prev[next.index()] = prev;
        } else {
            debug_assert_eq!(self.last[list], x);
            self.last[list] = prev;
        }
    }

    /// Relinks `x` directly in front of `before`. Both must be in `list`.
    pub(crate) fn move_before(&mut self, list: usize, x: VertexIndex, before: VertexIndex) {
        debug_assert_ne!(x, before);
        // x-1, x, x+1      -->     x-1, x+1
        // b-1, b, b+1              b-1, x, b, b+1
        if self.next[x.index()] == before {
            return;
        }
        self.remove(list, x);
        let b_prev = self.prev[before.index()];
        self.prev[x.index()] = b_prev;
        self.next[x.index()] = before;
        self.prev[before.index()] = x;
        if b_prev.is_valid() {
            self.next[b_prev.index()] = x;
        } else {
            self.first[list] = x;
        }
    }

    /// Cuts the elements strictly before `at` off `list` and returns them as a new list.
    ///
    /// `at` must be in `list` and must not be its first element.
    pub(crate) fn split_front(&mut self, list: usize, at: VertexIndex) -> usize {
        let tail = self.prev[at.index()];
        assert!(tail.is_valid(), "nothing in front of the split position");
        let head = self.first[list];

        let new_list = self.add_list();
        self.first[new_list] = head;
        self.last[new_list] = tail;
        self.next[tail.index()] = VertexIndex::end();

        self.first[list] = at;
        self.prev[at.index()] = VertexIndex::end();
        new_list
    }

    pub(crate) fn iter(&self, list: usize) -> Iter<'_> {
        Iter { lists: self, current: self.first[list] }
    }
}

/// Iterator over one list of [Lists].
#[derive(Clone)]
pub(crate) struct Iter<'a> {
    lists: &'a Lists,
    current: VertexIndex,
}

impl<'a> Iterator for Iter<'a> {
    type Item = VertexIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.into_option()?;
        self.current = self.lists.next[current.index()];
        Some(current)
    }
}

impl<'a> FusedIterator for Iter<'a> {}

#[cfg(test)]
mod test {
    use super::*;

    fn v(i: usize) -> VertexIndex {
        VertexIndex::new(i)
    }

    fn to_vec(lists: &Lists, list: usize) -> Vec<usize> {
        lists.iter(list).map(|x| x.index()).collect()
    }

    #[test]
    fn push_back_and_remove() {
        let mut lists = Lists::new(2, 5);
        assert!(lists.is_empty(0));
        for i in [3, 1, 4] {
            lists.push_back(0, v(i));
        }
        lists.push_back(1, v(0));
        assert_eq!(to_vec(&lists, 0), [3, 1, 4]);
        assert_eq!(to_vec(&lists, 1), [0]);

        lists.remove(0, v(1));
        assert_eq!(to_vec(&lists, 0), [3, 4]);
        lists.remove(0, v(3));
        assert_eq!(lists.first(0), Some(v(4)));
        lists.remove(0, v(4));
        assert!(lists.is_empty(0));

        lists.push_back(0, v(1));
        assert_eq!(to_vec(&lists, 0), [1]);
        assert_eq!(lists.next(v(1)), None);
    }

    #[test]
    fn move_before() {
        let mut lists = Lists::new(1, 4);
        for i in 0..4 {
            lists.push_back(0, v(i));
        }
        lists.move_before(0, v(3), v(1));
        assert_eq!(to_vec(&lists, 0), [0, 3, 1, 2]);
        lists.move_before(0, v(2), v(0));
        assert_eq!(to_vec(&lists, 0), [2, 0, 3, 1]);
        // Already in front of the target.
        lists.move_before(0, v(2), v(0));
        assert_eq!(to_vec(&lists, 0), [2, 0, 3, 1]);
        lists.move_before(0, v(2), v(1));
        assert_eq!(to_vec(&lists, 0), [0, 3, 2, 1]);
    }

    #[test]
    fn split_front() {
        let mut lists = Lists::new(1, 5);
        for i in [4, 2, 0, 1, 3] {
            lists.push_back(0, v(i));
        }
        let left = lists.split_front(0, v(0));
        assert_eq!(left, 1);
        assert_eq!(lists.list_count(), 2);
        assert_eq!(to_vec(&lists, left), [4, 2]);
        assert_eq!(to_vec(&lists, 0), [0, 1, 3]);

        // Both halves stay usable.
        lists.remove(0, v(3));
        lists.push_back(left, v(3));
        assert_eq!(to_vec(&lists, left), [4, 2, 3]);
        assert_eq!(to_vec(&lists, 0), [0, 1]);
    }
}
