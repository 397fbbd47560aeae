//! Trial loop — plays N turns of a single configuration.
//!
//! One trial keeps re-rolling four dice while some pair lands on one of the
//! configuration's lanes. The trial's outcome is the number of matching
//! rolls before the first miss.

use crate::dice_mechanics::DiceRoller;
use crate::error::{Result, SimError};
use crate::types::Config;

use super::coordinator::CancelToken;
use super::statistics::RunningStats;

/// Play one trial: count matching rolls until the first miss.
#[inline(always)]
pub fn play_trial(config: &Config, roller: &mut DiceRoller) -> u32 {
    let mut tries = 0;
    while config.matches(&roller.roll()) {
        tries += 1;
    }
    tries
}

/// Run `trials` trials of `config`, feeding every outcome to `stats`.
pub fn run_trials(config: &Config, trials: u64, roller: &mut DiceRoller, stats: &mut RunningStats) {
    for _ in 0..trials {
        stats.record(play_trial(config, roller));
    }
}

/// Like [`run_trials`], but checks `cancel` between trials.
///
/// Returns [`SimError::Cancelled`] as soon as the token is observed set; the
/// partially filled `stats` must then be discarded by the caller.
pub fn run_trials_cancellable(
    config: &Config,
    trials: u64,
    roller: &mut DiceRoller,
    stats: &mut RunningStats,
    cancel: &CancelToken,
) -> Result<()> {
    for _ in 0..trials {
        if cancel.is_cancelled() {
            return Err(SimError::Cancelled);
        }
        stats.record(play_trial(config, roller));
    }
    Ok(())
}

/// Simulate `trials` trials of `config` from a fresh roller seeded with `seed`.
pub fn simulate_config(config: &Config, trials: u64, seed: u64) -> RunningStats {
    let mut roller = DiceRoller::new(seed);
    let mut stats = RunningStats::new();
    run_trials(config, trials, &mut roller, &mut stats);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(lanes: &[u8]) -> Config {
        Config::new(lanes.to_vec()).unwrap()
    }

    #[test]
    fn test_trial_count_exact() {
        let stats = simulate_config(&cfg(&[4, 6, 8]), 1234, 7);
        assert_eq!(stats.count(), 1234);
    }

    #[test]
    fn test_simulate_config_deterministic() {
        let a = simulate_config(&cfg(&[7]), 5000, 99);
        let b = simulate_config(&cfg(&[7]), 5000, 99);
        assert_eq!(a, b, "Same seed should produce same statistics");
    }

    #[test]
    fn test_play_trial_stops_on_miss() {
        // Replay the roller to check the outcome equals the run of leading matches
        let config = cfg(&[6, 7, 8]);
        let mut roller = DiceRoller::new(2024);
        let mut replay = DiceRoller::new(2024);
        for _ in 0..200 {
            let tries = play_trial(&config, &mut roller);
            for _ in 0..tries {
                assert!(config.matches(&replay.roll()));
            }
            assert!(!config.matches(&replay.roll()));
        }
    }

    #[test]
    fn test_cancelled_before_start() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let mut roller = DiceRoller::new(1);
        let mut stats = RunningStats::new();
        let result = run_trials_cancellable(&cfg(&[7]), 100, &mut roller, &mut stats, &cancel);
        assert!(matches!(result, Err(SimError::Cancelled)));
        assert_eq!(stats.count(), 0);
    }

    #[test]
    fn test_cancellable_matches_plain_when_not_cancelled() {
        let config = cfg(&[2, 3, 12]);
        let plain = simulate_config(&config, 3000, 5);

        let mut roller = DiceRoller::new(5);
        let mut stats = RunningStats::new();
        run_trials_cancellable(&config, 3000, &mut roller, &mut stats, &CancelToken::new())
            .unwrap();
        assert_eq!(plain, stats);
    }
}
