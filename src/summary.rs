//! Aggregation of run results across trials

use std::io::Write;

use crate::{algorithms::Algorithm, data::DatasetShape, metrics::Metrics, runner::RunResult};

/// The aggregated trials of one algorithm on one shape and size
#[derive(Debug)]
pub struct Summary {
    pub algorithm: Algorithm,
    pub shape: DatasetShape,
    pub size: usize,
    /// Streaming statistics over the elapsed milliseconds of each trial
    pub millis: rolling_stats::Stats<f64>,
    /// The counters of all trials added up
    pub totals: Metrics,
    trials: u64,
}

impl Summary {
    fn new(result: &RunResult) -> Self {
        Self {
            algorithm: result.algorithm,
            shape: result.shape,
            size: result.size,
            millis: rolling_stats::Stats::new(),
            totals: Metrics::new(),
            trials: 0,
        }
    }

    /// The number of aggregated trials
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// The mean comparisons per trial
    pub fn mean_comparisons(&self) -> f64 {
        self.totals.comparisons() as f64 / self.trials.max(1) as f64
    }

    /// The mean moves per trial
    pub fn mean_moves(&self) -> f64 {
        self.totals.moves() as f64 / self.trials.max(1) as f64
    }

    fn add(&mut self, result: &RunResult) {
        self.millis.update(crate::report::millis(result.elapsed));
        self.totals
            .merge(&Metrics::from_counts(result.comparisons, result.moves));
        self.trials += 1;
    }
}

/// Group `results` by algorithm, shape and size, keeping the order of first appearance
pub fn summarize(results: &[RunResult]) -> Vec<Summary> {
    let mut summaries: Vec<Summary> = Vec::new();
    let mut indices = std::collections::HashMap::new();

    for result in results {
        let index = *indices
            .entry((result.algorithm, result.shape, result.size))
            .or_insert_with(|| {
                summaries.push(Summary::new(result));
                summaries.len() - 1
            });

        summaries[index].add(result);
    }

    summaries
}

/// Write `summaries` as a fixed width table
pub fn write_summary(summaries: &[Summary], out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<10} {:<16} {:>9} {:>6} {:>10} {:>10} {:>10} {:>10} {:>16} {:>16}",
        "Algo",
        "Dataset",
        "N",
        "trials",
        "mean ms",
        "std dev",
        "min ms",
        "max ms",
        "comparisons",
        "moves"
    )?;

    for summary in summaries {
        writeln!(
            out,
            "{:<10} {:<16} {:>9} {:>6} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>16.1} {:>16.1}",
            summary.algorithm.to_string(),
            summary.shape.to_string(),
            summary.size,
            summary.trials(),
            summary.millis.mean,
            summary.millis.std_dev,
            summary.millis.min,
            summary.millis.max,
            summary.mean_comparisons(),
            summary.mean_moves(),
        )?;
    }

    Ok(())
}
