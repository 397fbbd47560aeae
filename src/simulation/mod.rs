//! Monte Carlo simulation of re-roll streaks.
//!
//! - [`engine`]: Trial loop (roll until a miss, count the streak)
//! - [`statistics`]: Streaming mean / variance / histogram accumulator
//! - [`coordinator`]: Runs every catalog configuration in parallel
//! - [`fast_prng`]: Per-configuration seed derivation

pub mod coordinator;
pub mod engine;
pub mod fast_prng;
pub mod statistics;

// Re-export commonly used items
pub use coordinator::{
    CancelToken, ConfigReport, ConfigResult, Simulation, SimulationReport, SimulationResult,
};
pub use engine::{play_trial, run_trials, run_trials_cancellable, simulate_config};
pub use fast_prng::derive_config_seed;
pub use statistics::{RunningStats, StatsSummary};
