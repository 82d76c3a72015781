//! Command line input handling

use crate::{
    algorithms::Algorithm,
    data::{DEFAULT_SEED, DatasetShape},
    error::Result,
};

/// Command line arguments
#[derive(clap::Parser)]
#[command(author, version, about)]
pub struct Args {
    /// The sizes of the datasets to sort
    #[arg(short, long, value_delimiter = ',', default_values_t = [1_000, 10_000, 50_000])]
    pub sizes: Vec<usize>,
    /// The number of datasets to generate per shape and size
    #[arg(short, long, default_value_t = 3)]
    pub trials: usize,
    /// The dataset shapes to generate
    #[arg(long, value_delimiter = ',', default_values_t = DatasetShape::ALL)]
    pub shapes: Vec<DatasetShape>,
    /// The sorting algorithms to run, one of insertion, heap, merge, quick, intro or tree
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = Algorithm::DEFAULT.map(|algorithm| algorithm.to_string())
    )]
    pub algorithms: Vec<String>,
    /// Seed for the dataset generator
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
    /// The csv file to write the results to
    #[arg(short, long)]
    pub output: Option<std::path::PathBuf>,
    /// Skip the per-configuration summary
    #[arg(long)]
    pub no_summary: bool,
    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,
    /// Print a walkthrough of the algorithms on a small array instead of benchmarking
    #[arg(long)]
    pub visualize: bool,
}

impl Args {
    /// Resolve the requested algorithm names
    pub fn algorithms(&self) -> Result<Vec<Algorithm>> {
        self.algorithms.iter().map(|name| name.parse()).collect()
    }
}
