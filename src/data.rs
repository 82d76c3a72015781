//! Deterministic dataset generation

use rand::{Rng as _, SeedableRng as _, rngs::StdRng};

use crate::error::{Error, Result};

/// The seed a full benchmark run uses unless told otherwise
pub const DEFAULT_SEED: u64 = 212;

/// The different shapes of generated data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetShape {
    /// Uniform random values in `[0, 5n)`
    Random,
    /// The identity permutation with a few random exchanges
    NearlySorted,
    /// A strictly descending sequence
    Reversed,
    /// Uniform random values from a small set of distinct values
    ManyDuplicates,
}

impl DatasetShape {
    /// All shapes in their canonical order
    pub const ALL: [DatasetShape; 4] = [
        DatasetShape::Random,
        DatasetShape::NearlySorted,
        DatasetShape::Reversed,
        DatasetShape::ManyDuplicates,
    ];
}

impl std::fmt::Display for DatasetShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(clap::ValueEnum::to_possible_value(self).unwrap().get_name())
    }
}

/// Produces integer sequences from a single seeded random stream.
///
/// Two generators created with the same seed produce identical sequences as
/// long as they see the same sequence of calls.
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    rng: StdRng,
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl DatasetGenerator {
    /// Create a generator seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a dataset of the given shape with the default parameters for `size`
    pub fn generate(&mut self, shape: DatasetShape, size: usize) -> Result<Vec<i64>> {
        log::trace!("generating {shape} dataset of size {size}");

        match shape {
            DatasetShape::Random => {
                let bound = checked_size(size)?
                    .checked_mul(5)
                    .ok_or_else(|| Error::invalid_parameter("size", format!("{size} is too large")))?;
                self.random_array(size, bound)
            }
            DatasetShape::NearlySorted => self.nearly_sorted(size, (size / 50).max(1)),
            DatasetShape::Reversed => Self::reversed(size),
            DatasetShape::ManyDuplicates => self.many_duplicates(size, (size / 50).max(3)),
        }
    }

    /// `size` values drawn uniformly from `[0, bound)`
    pub fn random_array(&mut self, size: usize, bound: i64) -> Result<Vec<i64>> {
        checked_size(size)?;
        if bound <= 0 {
            return Err(Error::invalid_parameter(
                "bound",
                format!("{bound} has to be positive"),
            ));
        }

        Ok((0..size)
            .map(|_| self.rng.random_range(0..bound))
            .collect())
    }

    /// The sequence `[size, size - 1, ..., 1]`, draws nothing from the random stream
    pub fn reversed(size: usize) -> Result<Vec<i64>> {
        let size = checked_size(size)?;

        Ok((1..=size).rev().collect())
    }

    /// The identity permutation `[0, size)` with `swap_count` random index pairs exchanged
    pub fn nearly_sorted(&mut self, size: usize, swap_count: usize) -> Result<Vec<i64>> {
        let mut values: Vec<i64> = (0..checked_size(size)?).collect();

        for _ in 0..swap_count {
            let i = self.rng.random_range(0..size);
            let j = self.rng.random_range(0..size);
            values.swap(i, j);
        }

        Ok(values)
    }

    /// `size` values drawn uniformly from `[0, max(1, distinct_count))`
    pub fn many_duplicates(&mut self, size: usize, distinct_count: usize) -> Result<Vec<i64>> {
        let bound = i64::try_from(distinct_count.max(1)).map_err(|_| {
            Error::invalid_parameter(
                "distinct_count",
                format!("{distinct_count} is too large"),
            )
        })?;

        self.random_array(size, bound)
    }
}

/// Dataset sizes have to be positive and fit the value type
fn checked_size(size: usize) -> Result<i64> {
    match i64::try_from(size) {
        Ok(0) => Err(Error::invalid_parameter("size", "has to be at least 1")),
        Ok(size) => Ok(size),
        Err(_) => Err(Error::invalid_parameter("size", format!("{size} is too large"))),
    }
}
