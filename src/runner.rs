//! Running algorithms on generated datasets and collecting the results

use crate::{
    algorithms::Algorithm,
    data::{DatasetGenerator, DatasetShape},
    error::{Error, Result},
    metrics::Metrics,
};

/// The outcome of running one algorithm on one dataset instance
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub algorithm: Algorithm,
    pub shape: DatasetShape,
    pub size: usize,
    pub elapsed: std::time::Duration,
    pub comparisons: u64,
    pub moves: u64,
    pub sorted: bool,
}

/// Run the algorithm called `name` on a copy of `base`, see [`run`]
pub fn run_algorithm(name: &str, base: &[i64], shape: DatasetShape) -> Result<RunResult> {
    run(name.parse()?, base, shape)
}

/// Sort a copy of `base` with `algorithm` under fresh [`Metrics`], timing it and
/// verifying the output afterwards
pub fn run(algorithm: Algorithm, base: &[i64], shape: DatasetShape) -> Result<RunResult> {
    let values = base.to_vec();
    let mut metrics = Metrics::new();

    let now = std::time::Instant::now();
    let values = algorithm.run(std::hint::black_box(values), &mut metrics);
    let elapsed = now.elapsed();

    verify_sorted(algorithm, &values)?;

    log::debug!(
        "{algorithm} on {shape} (n = {size}): {elapsed:?}, {comparisons} comparisons, {moves} moves",
        size = values.len(),
        comparisons = metrics.comparisons(),
        moves = metrics.moves(),
    );

    Ok(RunResult {
        algorithm,
        shape,
        size: values.len(),
        elapsed,
        comparisons: metrics.comparisons(),
        moves: metrics.moves(),
        sorted: true,
    })
}

/// Check `values` is non-descending, reporting the first offending adjacent pair
pub fn verify_sorted(algorithm: Algorithm, values: &[i64]) -> Result<()> {
    match values.windows(2).position(|pair| pair[0] > pair[1]) {
        Some(index) => Err(Error::SortInvariantViolation {
            algorithm,
            first: index,
            second: index + 1,
        }),
        None => Ok(()),
    }
}

/// A sweep over dataset shapes, sizes and trials, running every algorithm on each dataset
#[derive(Debug, Clone)]
pub struct Batch {
    pub sizes: Vec<usize>,
    pub trials: usize,
    pub shapes: Vec<DatasetShape>,
    pub algorithms: Vec<Algorithm>,
}

impl Batch {
    /// A batch running the default algorithms
    pub fn new(sizes: Vec<usize>, trials: usize, shapes: Vec<DatasetShape>) -> Self {
        Self {
            sizes,
            trials,
            shapes,
            algorithms: Algorithm::DEFAULT.to_vec(),
        }
    }

    /// Replace the algorithms to run
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// The total number of algorithm runs this batch performs
    pub fn run_count(&self) -> usize {
        self.shapes.len() * self.sizes.len() * self.trials * self.algorithms.len()
    }

    /// Check the batch describes at least one run on valid sizes
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::invalid_parameter("sizes", "no sizes given"));
        }
        if self.sizes.contains(&0) {
            return Err(Error::invalid_parameter("sizes", "sizes have to be at least 1"));
        }
        if self.trials == 0 {
            return Err(Error::invalid_parameter("trials", "has to be at least 1"));
        }
        if self.shapes.is_empty() {
            return Err(Error::invalid_parameter("shapes", "no shapes given"));
        }
        if self.algorithms.is_empty() {
            return Err(Error::invalid_parameter("algorithms", "no algorithms given"));
        }

        Ok(())
    }

    /// Run the whole batch, collecting all results in generation order.
    ///
    /// Each shape × size × trial draws one base dataset from `generator`, which
    /// every algorithm then sorts an identical copy of. `on_result` is called
    /// after every single run. The first error aborts the batch.
    pub fn run_all(
        &self,
        generator: &mut DatasetGenerator,
        mut on_result: impl FnMut(&RunResult),
    ) -> Result<Vec<RunResult>> {
        self.validate()?;

        let mut results = Vec::with_capacity(self.run_count());

        for &shape in &self.shapes {
            for &size in &self.sizes {
                for _ in 0..self.trials {
                    let base = generator.generate(shape, size)?;

                    for &algorithm in &self.algorithms {
                        let result = run(algorithm, &base, shape)?;
                        on_result(&result);
                        results.push(result);
                    }
                }
            }
        }

        Ok(results)
    }
}
