//! Simulation coordinator — runs every catalog configuration in parallel.
//!
//! Each configuration becomes one rayon task that owns its own
//! [`DiceRoller`] and [`RunningStats`]; nothing mutable is shared between
//! tasks. The parallel `collect` is the completion barrier: `run` returns only
//! after every task has finished, and results come back in catalog order.
//!
//! Failure is all-or-nothing. A panicking task is caught at its boundary and
//! the run reports [`SimError::WorkerPanicked`] instead of a result set with a
//! configuration silently missing.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::dice_mechanics::DiceRoller;
use crate::error::{Result, SimError};
use crate::types::{Catalog, Config, SeedPolicy};

use super::engine::run_trials_cancellable;
use super::fast_prng::derive_config_seed;
use super::statistics::{RunningStats, StatsSummary};

/// Cooperative cancellation flag, checked by workers between trials.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline(always)]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Finished statistics for one configuration.
#[derive(Clone, Debug)]
pub struct ConfigResult {
    pub config: Config,
    /// Seed of this configuration's dice roller.
    pub seed: u64,
    pub stats: RunningStats,
}

/// Results of a completed run, one entry per configuration in catalog order.
#[derive(Clone, Debug)]
pub struct SimulationResult {
    pub trials: u64,
    /// Master seed the per-configuration seeds were derived from.
    pub master_seed: u64,
    pub results: Vec<ConfigResult>,
    pub elapsed: Duration,
}

impl SimulationResult {
    /// Largest histogram bucket across all configurations.
    pub fn max_bucket(&self) -> u64 {
        self.results
            .iter()
            .map(|r| r.stats.max_bucket())
            .max()
            .unwrap_or(0)
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            trials: self.trials,
            master_seed: self.master_seed,
            elapsed_ms: self.elapsed.as_secs_f64() * 1000.0,
            configs: self
                .results
                .iter()
                .map(|r| ConfigReport {
                    lanes: r.config.lanes().to_vec(),
                    seed: r.seed,
                    stats: r.stats.summary(),
                })
                .collect(),
        }
    }
}

/// JSON-serializable form of a [`SimulationResult`].
#[derive(Clone, Debug, Serialize)]
pub struct SimulationReport {
    pub trials: u64,
    pub master_seed: u64,
    pub elapsed_ms: f64,
    pub configs: Vec<ConfigReport>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ConfigReport {
    pub lanes: Vec<u8>,
    pub seed: u64,
    #[serde(flatten)]
    pub stats: StatsSummary,
}

/// Owns the catalog and runs it.
pub struct Simulation {
    catalog: Catalog,
    seed_policy: SeedPolicy,
}

impl Simulation {
    pub fn new(catalog: Catalog, seed_policy: SeedPolicy) -> Self {
        Self {
            catalog,
            seed_policy,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn resolve_master_seed(&self) -> u64 {
        match self.seed_policy {
            SeedPolicy::Fixed(seed) => seed,
            SeedPolicy::Random => rand::random(),
        }
    }

    /// Run `trials` trials of every configuration and wait for all of them.
    pub fn run(&self, trials: u64) -> Result<SimulationResult> {
        self.run_with_cancel(trials, &CancelToken::new())
    }

    /// Like [`Simulation::run`], stopping every worker once `cancel` is set.
    ///
    /// The token belongs to this call only; later runs are unaffected.
    pub fn run_with_cancel(&self, trials: u64, cancel: &CancelToken) -> Result<SimulationResult> {
        if trials == 0 {
            return Err(SimError::NoTrials);
        }

        let master_seed = self.resolve_master_seed();
        info!(
            configs = self.catalog.len(),
            trials,
            master_seed,
            threads = rayon::current_num_threads(),
            "starting simulation"
        );
        let start = Instant::now();

        let outcomes: Vec<Result<ConfigResult>> = self
            .catalog
            .configs()
            .par_iter()
            .map(|config| {
                let seed = derive_config_seed(master_seed, config.lanes());
                run_guarded(config, || {
                    debug!(%config, seed, "worker started");
                    let mut roller = DiceRoller::new(seed);
                    let mut stats = RunningStats::new();
                    run_trials_cancellable(config, trials, &mut roller, &mut stats, cancel)?;
                    debug!(%config, mean = ?stats.expected_value(), "worker finished");
                    Ok(ConfigResult {
                        config: config.clone(),
                        seed,
                        stats,
                    })
                })
            })
            .collect();

        // First failure in catalog order wins; every worker has already joined.
        let results = outcomes.into_iter().collect::<Result<Vec<_>>>()?;

        let elapsed = start.elapsed();
        info!(elapsed_ms = elapsed.as_secs_f64() * 1000.0, "simulation finished");

        Ok(SimulationResult {
            trials,
            master_seed,
            results,
            elapsed,
        })
    }
}

/// Run one worker body, turning a panic into [`SimError::WorkerPanicked`].
fn run_guarded<T>(config: &Config, body: impl FnOnce() -> Result<T>) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(body)).unwrap_or_else(|payload| {
        Err(SimError::WorkerPanicked {
            config: config.to_string(),
            message: panic_message(payload.as_ref()),
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
