//! Comparison and move counting

use std::cmp::Ordering;

/// Counts the comparisons and element moves of a single sort invocation.
///
/// Every primitive operation of an algorithm goes through one of the methods
/// below, the counters only ever grow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    comparisons: u64,
    moves: u64,
}

impl Metrics {
    /// Create a new zeroed counter pair
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a counter pair holding previously recorded counts
    pub fn from_counts(comparisons: u64, moves: u64) -> Self {
        Self { comparisons, moves }
    }

    /// The number of comparisons counted so far
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// The number of element moves counted so far
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Compare `x` with `y`, counting one comparison
    pub fn compare<T: Ord>(&mut self, x: &T, y: &T) -> Ordering {
        self.comparisons += 1;
        x.cmp(y)
    }

    /// Exchange `slice[i]` and `slice[j]`, counting three moves.
    ///
    /// Swapping an index with itself is a no-op and counts nothing.
    pub fn swap<T>(&mut self, slice: &mut [T], i: usize, j: usize) {
        if i == j {
            return;
        }

        slice.swap(i, j);
        self.moves += 3;
    }

    /// Write `value` to `slice[index]`, counting one move
    pub fn set_at<T>(&mut self, slice: &mut [T], index: usize, value: T) {
        slice[index] = value;
        self.moves += 1;
    }

    /// Count a single move that does not write into a slice, e.g. holding a key aside
    pub fn count_move(&mut self) {
        self.moves += 1;
    }

    /// Add the counters of `other` to `self`
    pub fn merge(&mut self, other: &Metrics) {
        self.comparisons += other.comparisons;
        self.moves += other.moves;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_counts() {
        let mut metrics = Metrics::new();
        assert_eq!(metrics.compare(&1, &2), Ordering::Less);
        assert_eq!(metrics.compare(&2, &2), Ordering::Equal);
        assert_eq!(metrics.compare(&3, &2), Ordering::Greater);
        assert_eq!(metrics.comparisons(), 3);
        assert_eq!(metrics.moves(), 0);
    }

    #[test]
    fn swap_counts() {
        let mut metrics = Metrics::new();
        let mut values = [1, 2, 3];

        metrics.swap(&mut values, 1, 1);
        assert_eq!(values, [1, 2, 3]);
        assert_eq!(metrics.moves(), 0);

        metrics.swap(&mut values, 0, 2);
        assert_eq!(values, [3, 2, 1]);
        assert_eq!(metrics.moves(), 3);
        assert_eq!(metrics.comparisons(), 0);
    }

    #[test]
    fn set_at_counts() {
        let mut metrics = Metrics::new();
        let mut values = [0; 4];

        metrics.set_at(&mut values, 2, 7);
        metrics.count_move();
        assert_eq!(values, [0, 0, 7, 0]);
        assert_eq!(metrics.moves(), 2);
    }

    #[test]
    fn merge_adds() {
        let mut first = Metrics::new();
        first.compare(&0, &1);
        first.swap(&mut [0, 1], 0, 1);

        let mut second = Metrics::new();
        second.compare(&0, &1);
        second.compare(&0, &1);
        second.count_move();

        first.merge(&second);
        assert_eq!(first.comparisons(), 3);
        assert_eq!(first.moves(), 4);
    }
}
