//! The heapsort implementation

use crate::metrics::Metrics;

/// The heapsort [`super::Sort`]
pub struct HeapSort;

impl super::Sort for HeapSort {
    const IS_STABLE: bool = false;

    fn sort<T: Ord + Copy>(slice: &mut [T], metrics: &mut Metrics) {
        heap_sort(slice, metrics);
    }
}

/// Heapsort `slice` in place.
///
/// Callers sorting only part of a larger array pass the sub-slice, all heap
/// indices are then relative to its start.
pub fn heap_sort<T: Ord>(slice: &mut [T], metrics: &mut Metrics) {
    build_max_heap(slice, metrics);

    // Move the current maximum behind the shrinking heap
    for end in (1..slice.len()).rev() {
        metrics.swap(slice, 0, end);
        sift_down(slice, end, 0, metrics);
    }
}

/// Rearrange `slice` into a max-heap, sifting down from the last internal node
pub fn build_max_heap<T: Ord>(slice: &mut [T], metrics: &mut Metrics) {
    build_max_heap_with(slice, metrics, |_, _| {});
}

/// Like [`build_max_heap`], calling `on_sift` with the node and the whole slice after
/// every sift-down
pub fn build_max_heap_with<T: Ord>(
    slice: &mut [T],
    metrics: &mut Metrics,
    mut on_sift: impl FnMut(usize, &[T]),
) {
    let len = slice.len();
    for node in (0..len / 2).rev() {
        sift_down(slice, len, node, metrics);
        on_sift(node, slice);
    }
}

/// Restore the max-heap property below `node`, considering only `slice[..len]`
fn sift_down<T: Ord>(slice: &mut [T], len: usize, mut node: usize, metrics: &mut Metrics) {
    loop {
        let left = 2 * node + 1;
        let right = left + 1;
        let mut largest = node;

        if left < len && metrics.compare(&slice[left], &slice[largest]).is_gt() {
            largest = left;
        }
        if right < len && metrics.compare(&slice[right], &slice[largest]).is_gt() {
            largest = right;
        }
        if largest == node {
            break;
        }

        metrics.swap(slice, node, largest);
        node = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng as _;

    const RUNS: usize = 50;
    const TEST_SIZE: usize = 5_000;

    #[test]
    fn empty() {
        crate::test::test_empty::<HeapSort>();
    }

    #[test]
    fn random() {
        crate::test::test_random_sorted::<RUNS, TEST_SIZE, HeapSort>();
    }

    #[test]
    fn build_phase() {
        let mut values = [8, 6, 7, 5, 3, 0, 9];
        let mut metrics = Metrics::new();
        build_max_heap(&mut values, &mut metrics);

        assert_eq!(values, [9, 6, 8, 5, 3, 0, 7]);
        // Two exchanges: 7 <-> 9 at node 2, then 8 <-> 9 at the root
        assert_eq!(metrics.moves(), 6);
    }

    #[test]
    fn build_steps() {
        let mut values = [8, 6, 7, 5, 3, 0, 9];
        let mut steps = Vec::new();
        build_max_heap_with(&mut values, &mut Metrics::new(), |node, heap| {
            steps.push((node, heap.to_vec()));
        });

        assert_eq!(
            steps,
            [
                (2, vec![8, 6, 9, 5, 3, 0, 7]),
                (1, vec![8, 6, 9, 5, 3, 0, 7]),
                (0, vec![9, 6, 8, 5, 3, 0, 7]),
            ]
        );
    }

    #[test]
    fn max_heap_property() {
        let mut rng = crate::test::test_rng();
        let mut values: Vec<u32> = (0..1000).map(|_| rng.random_range(0..100)).collect();
        build_max_heap(&mut values, &mut Metrics::new());

        for child in 1..values.len() {
            assert!(values[(child - 1) / 2] >= values[child]);
        }
    }

    #[test]
    fn range() {
        let mut values = [100, 5, 9, 1, 7, 3, -100];
        heap_sort(&mut values[1..=5], &mut Metrics::new());

        assert_eq!(values, [100, 1, 3, 5, 7, 9, -100]);
    }

    #[test]
    fn sorted_input() {
        const LEN: usize = 64;

        let mut values: Vec<i64> = (0..LEN as i64).collect();
        let mut metrics = Metrics::new();
        heap_sort(&mut values, &mut metrics);

        assert!(values.iter().copied().eq(0..LEN as i64));
        // Sorted input is the worst case for building the heap, still within 2n log2 n
        let bound = 2 * LEN as u64 * LEN.ilog2() as u64;
        assert!(metrics.comparisons() <= bound, "{} > {bound}", metrics.comparisons());
    }
}
