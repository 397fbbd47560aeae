//! # Can't Stop — re-roll streak simulator
//!
//! Estimates, for each fixed lane configuration of the dice game Can't Stop,
//! how many times in a row a player can roll four dice and still advance one
//! of the chosen lanes before the first miss.
//!
//! ## Model
//!
//! A roll is four dice. It advances a configuration if any of the six pairings
//! of two dice sums to one of the configuration's lanes. A trial counts
//! consecutive advancing rolls and ends at the first roll that advances
//! nothing. With per-roll match probability p the count is geometric with
//! mean p / (1 − p), which [`dice_mechanics::expected_tries`] computes exactly
//! for comparison.
//!
//! ## Layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`constants`] | Dice bounds, histogram width, the configuration catalog |
//! | [`types`] | Validated [`types::Config`], [`types::Catalog`], [`types::SeedPolicy`] |
//! | [`dice_mechanics`] | Per-worker dice roller and the lane matcher |
//! | [`simulation`] | Trial loop, streaming statistics, parallel coordinator |
//! | [`report`] | Summary table, ASCII histograms, JSON export |
//! | [`env_config`] | Thread-pool configuration from flags and environment |
//!
//! ## Determinism
//!
//! Each configuration's dice come from its own generator seeded from the
//! run's master seed and the configuration's lanes, so a fixed seed
//! reproduces every configuration bit for bit regardless of thread count.

pub mod constants;
pub mod dice_mechanics;
pub mod env_config;
pub mod error;
pub mod report;
pub mod simulation;
pub mod types;

pub use error::{Result, SimError};
