//! Quicksort with Hoare partitioning, plus the partition routine shared with introsort

use crate::metrics::Metrics;

/// Ranges of at most this length are left for the final insertion sort pass
pub const CUTOFF: usize = 16;

/// The quicksort [`super::Sort`]
pub struct QuickSort;

impl super::Sort for QuickSort {
    const IS_STABLE: bool = false;

    fn sort<T: Ord + Copy>(slice: &mut [T], metrics: &mut Metrics) {
        quicksort(slice, metrics);
        super::insertionsort::insertion_sort(slice, metrics);
    }
}

/// Partition `slice` until every remaining unsorted range is at most [`CUTOFF`] long.
///
/// Only the smaller side is recursed into, the larger one is handled by the loop,
/// bounding the stack depth logarithmically.
fn quicksort<T: Ord + Copy>(mut slice: &mut [T], metrics: &mut Metrics) {
    while slice.len() > CUTOFF {
        let split = hoare_partition(slice, metrics);
        let (left, right) = std::mem::take(&mut slice).split_at_mut(split + 1);

        if left.len() <= right.len() {
            quicksort(left, metrics);
            slice = right;
        } else {
            quicksort(right, metrics);
            slice = left;
        }
    }
}

/// Partition `slice` around the value at its middle index.
///
/// Returns the split point `p`, such that no element of `slice[..=p]` is greater than any
/// element of `slice[p + 1..]`. Both sides are non-empty, `slice` needs at least two elements.
pub fn hoare_partition<T: Ord + Copy>(slice: &mut [T], metrics: &mut Metrics) -> usize {
    debug_assert!(slice.len() >= 2);

    let pivot = slice[(slice.len() - 1) / 2];
    let mut i = 0;
    let mut j = slice.len() - 1;

    loop {
        while metrics.compare(&slice[i], &pivot).is_lt() {
            i += 1;
        }
        while metrics.compare(&slice[j], &pivot).is_gt() {
            j -= 1;
        }

        if i >= j {
            return j;
        }

        metrics.swap(slice, i, j);
        i += 1;
        j -= 1;
    }
}
