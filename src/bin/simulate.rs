//! Simulate every catalog configuration and print the streak report.
//!
//! With `--output FILE`, also writes the full statistics as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cantstop::constants::{DEFAULT_SEED, DEFAULT_TRIALS};
use cantstop::report;
use cantstop::simulation::Simulation;
use cantstop::types::{Catalog, SeedPolicy};

#[derive(Parser, Debug)]
#[command(name = "cantstop-simulate")]
#[command(about = "Estimate how many re-rolls each Can't Stop lane configuration survives")]
struct Cli {
    /// Trials per configuration
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: u64,

    /// Master seed for reproducible runs
    #[arg(long, default_value_t = DEFAULT_SEED, conflicts_with = "random_seed")]
    seed: u64,

    /// Draw a fresh master seed (printed so the run can be replayed)
    #[arg(long)]
    random_seed: bool,

    /// Write statistics as JSON to FILE
    #[arg(long)]
    output: Option<PathBuf>,

    /// Worker threads (default: RAYON_NUM_THREADS, else one per configuration)
    #[arg(long)]
    threads: Option<usize>,

    /// Print only the summary table
    #[arg(long)]
    no_histograms: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cantstop=info,cantstop_simulate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> cantstop::Result<()> {
    let catalog = Catalog::standard()?;
    let num_threads = cantstop::env_config::init_rayon_threads(cli.threads, catalog.len())?;
    info!(threads = num_threads, "rayon pool ready");

    let policy = if cli.random_seed {
        SeedPolicy::Random
    } else {
        SeedPolicy::Fixed(cli.seed)
    };

    let sim = Simulation::new(catalog, policy);
    let result = sim.run(cli.trials)?;

    println!(
        "Can't Stop re-roll streaks ({} trials per configuration, seed {})",
        result.trials, result.master_seed
    );
    println!();
    if cli.no_histograms {
        print!("{}", report::summary_table(&result));
    } else {
        print!("{}", report::render(&result));
    }

    let per_trial_ns = result.elapsed.as_secs_f64() * 1e9
        / (result.trials as f64 * result.results.len() as f64);
    info!(
        elapsed_ms = result.elapsed.as_secs_f64() * 1000.0,
        per_trial_ns, "done"
    );

    if let Some(path) = &cli.output {
        report::save_statistics(&result, path)?;
        info!("statistics written to {}", path.display());
    }

    Ok(())
}
