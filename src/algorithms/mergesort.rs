//! The top-down mergesort implementation

use crate::metrics::Metrics;

/// The Top-Down Mergesort [`super::Sort`]
pub struct MergeSort;

impl super::Sort for MergeSort {
    const IS_STABLE: bool = true;

    fn sort<T: Ord + Copy>(slice: &mut [T], metrics: &mut Metrics) {
        if slice.len() < 2 {
            return;
        }

        // One buffer big enough to merge the complete slice, shared by all recursion levels
        let mut buffer = slice.to_vec();

        merge_sort(slice, &mut buffer, metrics);
    }
}

/// The actual top-down mergesort, sorts `slice` using the first `slice.len()` elements of `buffer`
fn merge_sort<T: Ord + Copy>(slice: &mut [T], buffer: &mut [T], metrics: &mut Metrics) {
    if slice.len() < 2 {
        return;
    }

    // The left half gets the extra element of odd lengths
    let middle = slice.len().div_ceil(2);

    let (left, right) = slice.split_at_mut(middle);
    merge_sort(left, buffer, metrics);
    merge_sort(right, buffer, metrics);

    merge(slice, middle, buffer, metrics);
}

/// Merge the sorted runs `slice[..middle]` and `slice[middle..]` through `buffer`
fn merge<T: Ord + Copy>(slice: &mut [T], middle: usize, buffer: &mut [T], metrics: &mut Metrics) {
    assert!(
        buffer.len() >= slice.len(),
        "Buffer needs to have at least the size of slice"
    );

    let mut left = 0;
    let mut right = middle;
    let mut out = 0;

    while left < middle && right < slice.len() {
        // Taking from the left on ties keeps the sort stable
        if metrics.compare(&slice[left], &slice[right]).is_le() {
            metrics.set_at(buffer, out, slice[left]);
            left += 1;
        } else {
            metrics.set_at(buffer, out, slice[right]);
            right += 1;
        }
        out += 1;
    }

    // At most one of the runs has elements left
    for index in (left..middle).chain(right..slice.len()) {
        metrics.set_at(buffer, out, slice[index]);
        out += 1;
    }

    for (index, &value) in buffer[..slice.len()].iter().enumerate() {
        metrics.set_at(slice, index, value);
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
        crate::test::test_empty::<MergeSort>();
    }

    #[test]
    fn random() {
        crate::test::test_random_sorted::<RUNS, TEST_SIZE, MergeSort>();
    }

    #[test]
    fn random_stable() {
        crate::test::test_random_stable_sorted::<RUNS, TEST_SIZE, MergeSort>();
    }

    #[test]
    fn merge_runs() {
        let mut values = [1, 4, 6, 9, 2, 3, 7];
        let mut buffer = [0; 7];
        let mut metrics = Metrics::new();
        merge(&mut values, 4, &mut buffer, &mut metrics);

        assert_eq!(values, [1, 2, 3, 4, 6, 7, 9]);
        // Each element is written to the buffer and back
        assert_eq!(metrics.moves(), 14);
    }

    #[test]
    fn sorted_input() {
        let mut values: Vec<i64> = (0..8).collect();
        let mut metrics = Metrics::new();
        MergeSort::sort(&mut values, &mut metrics);

        assert_eq!(values, (0..8).collect::<Vec<i64>>());
        // Merging runs whose left side is entirely smaller takes one comparison per left element
        assert_eq!(metrics.comparisons(), 4 + 2 * 2 + 4);
    }
}
