//! Introsort, quicksort with a recursion depth budget falling back to heapsort

use crate::metrics::Metrics;

use super::quicksort::{CUTOFF, hoare_partition};

/// The introsort [`super::Sort`]
pub struct IntroSort;

impl super::Sort for IntroSort {
    const IS_STABLE: bool = false;

    fn sort<T: Ord + Copy>(slice: &mut [T], metrics: &mut Metrics) {
        if slice.len() < 2 {
            return;
        }

        introsort(slice, max_depth(slice.len()), metrics);
        super::insertionsort::insertion_sort(slice, metrics);
    }
}

/// The partitioning depth budget for a slice of length `len`, `2 * floor(log2(len))`
pub fn max_depth(len: usize) -> usize {
    2 * len.ilog2() as usize
}

/// Partition `slice` like quicksort, heapsorting any range still longer than [`CUTOFF`]
/// once `depth` partitioning steps have been spent on it
fn introsort<T: Ord + Copy>(mut slice: &mut [T], mut depth: usize, metrics: &mut Metrics) {
    while slice.len() > CUTOFF {
        if depth == 0 {
            super::heapsort::heap_sort(slice, metrics);
            return;
        }
        depth -= 1;

        let split = hoare_partition(slice, metrics);
        let (left, right) = std::mem::take(&mut slice).split_at_mut(split + 1);

        if left.len() <= right.len() {
            introsort(left, depth, metrics);
            slice = right;
        } else {
            introsort(right, depth, metrics);
            slice = left;
        }
    }
}
