//! The instrumented sorting algorithms

use crate::{
    error::{Error, Result},
    metrics::Metrics,
};

pub mod heapsort;
pub mod insertionsort;
pub mod introsort;
pub mod mergesort;
pub mod quicksort;
pub mod treesort;

/// Specifies a sorting algorithm which counts its work in a [`Metrics`]
pub trait Sort {
    /// Whether the sort is stable
    const IS_STABLE: bool;

    /// Sort the given slice, threading every comparison and move through `metrics`
    fn sort<T: Ord + Copy>(slice: &mut [T], metrics: &mut Metrics);
}

/// The algorithms available for benchmarking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Insertion sort
    Insertion,
    /// Heapsort
    Heap,
    /// Top-down mergesort
    Merge,
    /// Quicksort with Hoare partitioning
    Quick,
    /// Introsort
    Intro,
    /// Ordered map counting sort
    Tree,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(clap::ValueEnum::to_possible_value(self).unwrap().get_name())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        <Self as clap::ValueEnum>::from_str(name.trim(), true)
            .map_err(|_| Error::UnknownAlgorithm(name.to_string()))
    }
}

impl Algorithm {
    /// The algorithms run by a batch unless told otherwise, insertion sort is left out
    /// since it is quadratic
    pub const DEFAULT: [Algorithm; 5] = [
        Algorithm::Heap,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Tree,
        Algorithm::Intro,
    ];

    /// Return whether the sort is stable
    pub fn is_stable(self) -> bool {
        match self {
            Algorithm::Insertion => insertionsort::InsertionSort::IS_STABLE,
            Algorithm::Heap => heapsort::HeapSort::IS_STABLE,
            Algorithm::Merge => mergesort::MergeSort::IS_STABLE,
            Algorithm::Quick => quicksort::QuickSort::IS_STABLE,
            Algorithm::Intro => introsort::IntroSort::IS_STABLE,
            Algorithm::Tree => treesort::TreeSort::IS_STABLE,
        }
    }

    /// Sort `values`, returning the sorted sequence.
    ///
    /// All algorithms but [`Algorithm::Tree`] sort in place and hand back the same allocation.
    pub fn run<T: Ord + Copy>(self, mut values: Vec<T>, metrics: &mut Metrics) -> Vec<T> {
        match self {
            Algorithm::Insertion => insertionsort::InsertionSort::sort(&mut values, metrics),
            Algorithm::Heap => heapsort::HeapSort::sort(&mut values, metrics),
            Algorithm::Merge => mergesort::MergeSort::sort(&mut values, metrics),
            Algorithm::Quick => quicksort::QuickSort::sort(&mut values, metrics),
            Algorithm::Intro => introsort::IntroSort::sort(&mut values, metrics),
            Algorithm::Tree => return treesort::TreeSort::sorted(&values, metrics),
        }

        values
    }
}
