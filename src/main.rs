use clap::Parser as _;

mod algorithms;
mod cli;
mod data;
mod error;
mod metrics;
mod report;
mod runner;
mod summary;
mod visualize;


/// Program entry point
fn main() -> error::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Args::parse();

    if args.visualize {
        let mut stdout = std::io::stdout().lock();
        visualize::write_sample(&mut data::DatasetGenerator::new(args.seed), &mut stdout)?;
        return visualize::write_walkthrough(&args.algorithms, &mut stdout);
    }

    let algorithms = args.algorithms()?;

    let batch = runner::Batch::new(args.sizes.clone(), args.trials, args.shapes.clone())
        .with_algorithms(algorithms);
    batch.validate()?;

    for algorithm in &batch.algorithms {
        log::info!(
            "{algorithm} (stable: {stable})",
            stable = algorithm.is_stable()
        );
    }
    log::info!(
        "Sizes: {:?}, trials: {}, shapes: {:?}, seed: {}",
        batch.sizes,
        batch.trials,
        batch.shapes,
        args.seed
    );

    let mut generator = data::DatasetGenerator::new(args.seed);

    let bar = if args.quiet {
        indicatif::ProgressBar::hidden()
    } else {
        indicatif::ProgressBar::new(batch.run_count() as u64)
    };
    let results = batch.run_all(&mut generator, |_| bar.inc(1))?;
    bar.finish_and_clear();

    log::info!("Finished {} runs", results.len());

    let mut stdout = std::io::stdout().lock();
    report::write_table(&results, &mut stdout)?;

    if !args.no_summary {
        use std::io::Write as _;

        writeln!(stdout)?;
        summary::write_summary(&summary::summarize(&results), &mut stdout)?;
    }

    if let Some(path) = &args.output {
        report::write_csv_file(&results, path)?;
    }

    Ok(())
}
