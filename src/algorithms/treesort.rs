//! Sorting by bucketing into an ordered map

use std::collections::BTreeMap;

use crate::metrics::Metrics;

/// The ordered map [`super::Sort`].
///
/// Equal elements share one bucket and keep their encounter order inside it.
pub struct TreeSort;

impl TreeSort {
    /// Bucket every element of `slice` under its key in an ordered map, then emit the
    /// buckets in ascending key order into a new vector.
    ///
    /// Each map update and each emitted value counts as one move. The comparisons done
    /// inside the map are not counted.
    pub fn sorted<T: Ord + Copy>(slice: &[T], metrics: &mut Metrics) -> Vec<T> {
        let mut buckets: BTreeMap<T, Vec<T>> = BTreeMap::new();
        for &value in slice {
            buckets.entry(value).or_default().push(value);
            metrics.count_move();
        }

        let mut sorted = Vec::with_capacity(slice.len());
        for bucket in buckets.into_values() {
            for value in bucket {
                sorted.push(value);
                metrics.count_move();
            }
        }

        sorted
    }
}

impl super::Sort for TreeSort {
    const IS_STABLE: bool = true;

    fn sort<T: Ord + Copy>(slice: &mut [T], metrics: &mut Metrics) {
        let sorted = Self::sorted(slice, metrics);
        slice.copy_from_slice(&sorted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::Sort as _;

    const RUNS: usize = 50;
    const TEST_SIZE: usize = 5_000;

    #[test]
    fn empty() {
        crate::test::test_empty::<TreeSort>();
        assert!(TreeSort::sorted::<i64>(&[], &mut Metrics::new()).is_empty());
    }

    #[test]
    fn random() {
        crate::test::test_random_sorted::<RUNS, TEST_SIZE, TreeSort>();
    }

    #[test]
    fn random_stable() {
        crate::test::test_random_stable_sorted::<RUNS, TEST_SIZE, TreeSort>();
    }

    #[test]
    fn keeps_equal_elements() {
        use crate::test::Tagged;

        let mut tagged: Vec<Tagged> = Tagged::map_iter([2, 1, 2, 1].into_iter()).collect();
        TreeSort::sort(&mut tagged, &mut Metrics::new());

        assert!(Tagged::is_stable_sorted(&tagged));
        assert_eq!(tagged.iter().map(Tagged::tag).collect::<Vec<_>>(), [1, 3, 0, 2]);
    }

    #[test]
    fn sorted_input() {
        let mut values: Vec<i64> = (0..100).collect();
        let mut metrics = Metrics::new();
        TreeSort::sort(&mut values, &mut metrics);

        assert!(values.iter().copied().eq(0..100));
        assert_eq!(metrics.comparisons(), 0);
        assert_eq!(metrics.moves(), 2 * 100);
    }

    #[test]
    fn leaves_input() {
        let values = [3, 1, 2, 1];
        let mut metrics = Metrics::new();
        let sorted = TreeSort::sorted(&values, &mut metrics);

        assert_eq!(values, [3, 1, 2, 1]);
        assert_eq!(sorted, vec![1, 1, 2, 3]);
        assert_eq!(metrics.moves(), 8);
        assert_eq!(metrics.comparisons(), 0);
    }

    #[test]
    fn many_duplicates() {
        let mut generator = crate::data::DatasetGenerator::default();
        let base = generator.many_duplicates(20, 3).unwrap();
        let sorted = TreeSort::sorted(&base, &mut Metrics::new());

        assert!(sorted.iter().all(|value| [0, 1, 2].contains(value)));
        crate::test::assert_sorted_permutation(&base, &sorted);
    }

    #[test]
    fn negative_values() {
        let sorted = TreeSort::sorted(&[0, -5, i64::MAX, i64::MIN, -5], &mut Metrics::new());
        assert_eq!(sorted, vec![i64::MIN, -5, -5, 0, i64::MAX]);
    }
}
