//! A step by step walkthrough of the algorithms on a small fixed array

use std::io::Write;

use crate::{
    algorithms::{Algorithm, heapsort, quicksort, treesort::TreeSort},
    data::{DatasetGenerator, DatasetShape},
    error::Result,
    metrics::Metrics,
    runner,
};

/// The array every walkthrough starts from
pub const BASE: [i64; 7] = [8, 6, 7, 5, 3, 0, 9];

/// Length and bound of the sample array printed before the walkthrough
const SAMPLE_SIZE: usize = 10;
const SAMPLE_BOUND: i64 = 100;

/// Print a random sample array drawn from `generator` and whether it happens to be sorted
pub fn write_sample(generator: &mut DatasetGenerator, out: &mut impl Write) -> Result<()> {
    let sample = generator.random_array(SAMPLE_SIZE, SAMPLE_BOUND)?;
    writeln!(out, "Sample: {sample:?}")?;
    writeln!(out, "Sorted? {}", sample.is_sorted())?;

    Ok(())
}

/// Walk through the algorithms on [`BASE`], printing the states they actually pass through.
///
/// Finishes with the counters of every algorithm in `names`, which are resolved like the
/// benchmark's algorithm names.
pub fn write_walkthrough(names: &[String], out: &mut impl Write) -> Result<()> {
    writeln!(out, "HEAP: build max-heap from {BASE:?}")?;
    let mut heap = BASE;
    let mut result = Ok(());
    heapsort::build_max_heap_with(&mut heap, &mut Metrics::new(), |node, state| {
        if result.is_ok() {
            result = writeln!(out, "  sift_down at {node}: {state:?}");
        }
    });
    result?;
    writeln!(out, "  max-heap: {heap:?}")?;
    write_sorted(Algorithm::Heap, out)?;

    writeln!(out, "MERGE: split in halves, merge taking ties from the left")?;
    write_sorted(Algorithm::Merge, out)?;

    let mut partitioned = BASE;
    let pivot = BASE[(BASE.len() - 1) / 2];
    let split = quicksort::hoare_partition(&mut partitioned, &mut Metrics::new());
    writeln!(out, "QUICK: Hoare partition around the middle value {pivot}")?;
    writeln!(
        out,
        "  partitioned: {left:?} | {right:?}",
        left = &partitioned[..=split],
        right = &partitioned[split + 1..]
    )?;
    write_sorted(Algorithm::Quick, out)?;

    writeln!(out, "TREE: bucket into an ordered map, emit in key order")?;
    writeln!(out, "  insert order: {BASE:?}")?;
    let sorted = TreeSort::sorted(&BASE, &mut Metrics::new());
    writeln!(out, "  in-order traversal: {sorted:?}")?;

    writeln!(
        out,
        "INTRO: quicksort with a depth budget of {depth}, falling back to heapsort",
        depth = crate::algorithms::introsort::max_depth(BASE.len())
    )?;
    if BASE.len() <= quicksort::CUTOFF {
        writeln!(out, "  {} elements only take the insertion sort pass", BASE.len())?;
    }
    write_sorted(Algorithm::Intro, out)?;

    writeln!(out, "Counters on {BASE:?}:")?;
    for name in names {
        let result = runner::run_algorithm(name, &BASE, DatasetShape::Random)?;
        writeln!(
            out,
            "  {algorithm:<10} {comparisons:>4} comparisons {moves:>4} moves",
            algorithm = result.algorithm.to_string(),
            comparisons = result.comparisons,
            moves = result.moves,
        )?;
    }

    Ok(())
}

fn write_sorted(algorithm: Algorithm, out: &mut impl Write) -> std::io::Result<()> {
    let sorted = algorithm.run(BASE.to_vec(), &mut Metrics::new());
    writeln!(out, "  sorted: {sorted:?}")
}
