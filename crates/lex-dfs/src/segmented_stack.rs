/// A stack of segments stored back to back in one vector.
///
/// Values are always added to the topmost segment and whole segments are popped at once. A popped segment
/// stays readable until the next mutation, which avoids copying it out.
#[derive(Clone, Debug)]
pub(crate) struct SegmentedStack<T> {
    values: Vec<T>,
    starts: Vec<u32>,
    len: usize,
}

impl<T> Default for SegmentedStack<T> {
    fn default() -> Self {
        Self { values: Vec::new(), starts: Vec::new(), len: 0 }
    }
}

impl<T> SegmentedStack<T> {
    /// Starts a new, empty topmost segment.
    pub(crate) fn open_segment(&mut self) {
        self.values.truncate(self.len);
        self.starts.push(self.len as u32);
    }

    /// Adds a value to the topmost segment.
    pub(crate) fn add(&mut self, value: T) {
        debug_assert!(!self.starts.is_empty(), "no open segment");
        self.values.truncate(self.len);
        self.values.push(value);
        self.len += 1;
    }

    /// Removes the topmost segment and returns its values in insertion order.
    pub(crate) fn pop(&mut self) -> Option<&[T]> {
        let start = self.starts.pop()?;
        let end = self.len;
        self.len = start as usize;
        Some(&self.values[self.len..end])
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Number of segments on the stack.
    #[cfg(test)]
    pub(crate) fn segment_count(&self) -> usize {
        self.starts.len()
    }
}

#[cfg(test)]
mod test {
    use super::SegmentedStack;

    #[test]
    fn pops_segments_last_in_first_out() {
        let mut s = SegmentedStack::default();
        assert!(s.is_empty());
        s.open_segment();
        s.add(1);
        s.add(2);
        s.open_segment();
        s.add(3);
        assert_eq!(s.segment_count(), 2);

        assert_eq!(s.pop(), Some(&[3][..]));
        assert_eq!(s.pop(), Some(&[1, 2][..]));
        assert_eq!(s.pop(), None);
        assert!(s.is_empty());
    }

    #[test]
    fn add_after_pop_overwrites_popped_values() {
        let mut s = SegmentedStack::default();
        s.open_segment();
        s.add('a');
        s.open_segment();
        s.add('b');
        s.add('c');
        assert_eq!(s.pop(), Some(&['b', 'c'][..]));

        s.open_segment();
        s.add('d');
        assert_eq!(s.pop(), Some(&['d'][..]));
        s.add('e');
        assert_eq!(s.pop(), Some(&['a', 'e'][..]));
        assert!(s.is_empty());
    }

    #[test]
    fn empty_segments() {
        let mut s: SegmentedStack<u32> = SegmentedStack::default();
        s.open_segment();
        s.open_segment();
        assert_eq!(s.pop(), Some(&[][..]));
        assert_eq!(s.pop(), Some(&[][..]));
        assert_eq!(s.pop(), None);
    }
}
