//! Insertion sort, used on its own and as the finishing pass of the partitioning sorts

use crate::metrics::Metrics;

/// The insertion [`super::Sort`]
pub struct InsertionSort;

impl super::Sort for InsertionSort {
    const IS_STABLE: bool = true;

    fn sort<T: Ord + Copy>(slice: &mut [T], metrics: &mut Metrics) {
        insertion_sort(slice, metrics);
    }
}

/// Sort `slice` by shifting each element left past all larger predecessors.
///
/// Each element is held aside (one move), every shift costs a comparison and a
/// move, and the held element is written back into the gap (one move).
pub fn insertion_sort<T: Ord + Copy>(slice: &mut [T], metrics: &mut Metrics) {
    for i in 1..slice.len() {
        let key = slice[i];
        metrics.count_move();

        let mut j = i;
        while j > 0 && metrics.compare(&slice[j - 1], &key).is_gt() {
            let shifted = slice[j - 1];
            metrics.set_at(slice, j, shifted);
            j -= 1;
        }

        metrics.set_at(slice, j, key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNS: usize = 20;
    const TEST_SIZE: usize = 500;

    #[test]
    fn empty() {
        crate::test::test_empty::<InsertionSort>();
    }

    #[test]
    fn random() {
        crate::test::test_random_sorted::<RUNS, TEST_SIZE, InsertionSort>();
    }

    #[test]
    fn random_stable() {
        crate::test::test_random_stable_sorted::<RUNS, TEST_SIZE, InsertionSort>();
    }

    #[test]
    fn sorted_best_case() {
        let mut values: Vec<i64> = (0..100).collect();
        let mut metrics = Metrics::new();
        insertion_sort(&mut values, &mut metrics);

        assert_eq!(values, (0..100).collect::<Vec<i64>>());
        assert_eq!(metrics.comparisons(), 99);
        // Holding and writing back each key, no shifts
        assert_eq!(metrics.moves(), 2 * 99);
    }

    #[test]
    fn reversed_worst_case() {
        let mut values: Vec<i64> = (0..10).rev().collect();
        let mut metrics = Metrics::new();
        insertion_sort(&mut values, &mut metrics);

        assert_eq!(values, (0..10).collect::<Vec<i64>>());
        // Every pair gets compared and shifted once
        assert_eq!(metrics.comparisons(), 45);
        assert_eq!(metrics.moves(), 45 + 2 * 9);
    }

    #[test]
    fn subrange() {
        let mut values = [9, 4, 3, 2, 1, 0];
        let mut metrics = Metrics::new();
        insertion_sort(&mut values[1..5], &mut metrics);

        assert_eq!(values, [9, 1, 2, 3, 4, 0]);
    }
}
