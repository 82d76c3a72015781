//! Rendering run results as a table or csv

use std::io::Write;

use crate::{
    algorithms::Algorithm,
    data::DatasetShape,
    error::Result,
    runner::RunResult,
};

/// The csv header, matching the fields of [`Record`]
const CSV_HEADER: [&str; 7] = ["algo", "dataset", "n", "millis", "comparisons", "moves", "sorted"];

/// A single csv row
#[derive(Debug, serde::Serialize)]
struct Record {
    algo: Algorithm,
    dataset: DatasetShape,
    n: usize,
    millis: f64,
    comparisons: u64,
    moves: u64,
    sorted: bool,
}

impl From<&RunResult> for Record {
    fn from(result: &RunResult) -> Self {
        Self {
            algo: result.algorithm,
            dataset: result.shape,
            n: result.size,
            millis: millis(result.elapsed),
            comparisons: result.comparisons,
            moves: result.moves,
            sorted: result.sorted,
        }
    }
}

/// Fractional milliseconds of `duration`
pub fn millis(duration: std::time::Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}

/// Write `results` as a fixed width table, one row per result
pub fn write_table(results: &[RunResult], out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<10} {:<16} {:>9} {:>10} {:>14} {:>14} {:>7}",
        "Algo", "Dataset", "N", "ms", "comparisons", "moves", "sorted"
    )?;

    for result in results {
        writeln!(
            out,
            "{:<10} {:<16} {:>9} {:>10.3} {:>14} {:>14} {:>7}",
            result.algorithm.to_string(),
            result.shape.to_string(),
            result.size,
            millis(result.elapsed),
            result.comparisons,
            result.moves,
            result.sorted,
        )?;
    }

    Ok(())
}

/// Write `results` as csv with the header `algo,dataset,n,millis,comparisons,moves,sorted`
pub fn write_csv(results: &[RunResult], out: impl Write) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for result in results {
        writer.serialize(Record::from(result))?;
    }
    writer.flush()?;

    Ok(())
}

/// Write `results` as csv to the file at `path`, replacing it if it exists
pub fn write_csv_file(results: &[RunResult], path: &std::path::Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv(results, std::io::BufWriter::new(file))?;

    log::info!("wrote {} results to {}", results.len(), path.display());
    Ok(())
}
