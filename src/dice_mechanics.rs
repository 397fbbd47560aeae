//! Dice rolling and lane matching.
//!
//! A roll is four independent dice. It "matches" a configuration when any of
//! the six pairings of those dice sums to one of the configuration's lanes.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::constants::{DICE_PAIRS, DICE_PER_ROLL, DIE_FACES};
use crate::types::Config;

/// Four dice values, each in 1..=6.
pub type Roll = [u8; DICE_PER_ROLL];

/// Per-worker dice source. Owns its generator; never shared across threads.
pub struct DiceRoller {
    rng: SmallRng,
}

impl DiceRoller {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Roll four dice.
    #[inline(always)]
    pub fn roll(&mut self) -> Roll {
        let mut dice = [0u8; DICE_PER_ROLL];
        for d in &mut dice {
            *d = self.rng.random_range(1..=DIE_FACES);
        }
        dice
    }
}

/// Bitmask of the six pair sums of a roll (bit `s` set iff some pair sums to `s`).
#[inline(always)]
pub fn pair_sum_mask(dice: &Roll) -> u16 {
    let mut mask = 0u16;
    for &(a, b) in &DICE_PAIRS {
        mask |= 1 << (dice[a] + dice[b]);
    }
    mask
}

impl Config {
    /// True iff some pair of the four dice sums to one of this configuration's lanes.
    #[inline(always)]
    pub fn matches(&self, dice: &Roll) -> bool {
        DICE_PAIRS
            .iter()
            .any(|&(a, b)| self.mask() & (1 << (dice[a] + dice[b])) != 0)
    }
}

/// Count of the 1296 equally likely rolls that match `config`.
pub fn count_matching_rolls(config: &Config) -> u32 {
    let mut count = 0;
    for a in 1..=DIE_FACES {
        for b in 1..=DIE_FACES {
            for c in 1..=DIE_FACES {
                for d in 1..=DIE_FACES {
                    if config.matches(&[a, b, c, d]) {
                        count += 1;
                    }
                }
            }
        }
    }
    count
}

/// Exact probability that a single roll matches `config`.
pub fn match_probability(config: &Config) -> f64 {
    count_matching_rolls(config) as f64 / crate::constants::NUM_ROLLS as f64
}

/// Expected number of matching rolls before the first miss: p / (1 - p).
///
/// `None` when every roll matches, since the trial would never end.
/// [`Config::new`] rejects such lane sets, so a validated config always gets `Some`.
pub fn expected_tries(config: &Config) -> Option<f64> {
    let p = match_probability(config);
    if p >= 1.0 {
        None
    } else {
        Some(p / (1.0 - p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(lanes: &[u8]) -> Config {
        Config::new(lanes.to_vec()).unwrap()
    }

    #[test]
    fn test_roll_range() {
        let mut roller = DiceRoller::new(12345);
        for _ in 0..10000 {
            for &d in &roller.roll() {
                assert!((1..=6).contains(&d), "Die out of range: {}", d);
            }
        }
    }

    #[test]
    fn test_roller_deterministic() {
        let mut r1 = DiceRoller::new(42);
        let mut r2 = DiceRoller::new(42);
        for _ in 0..100 {
            assert_eq!(r1.roll(), r2.roll());
        }
    }

    #[test]
    fn test_roll_distribution() {
        let mut roller = DiceRoller::new(42);
        let mut counts = [0u64; 6];
        let n = 100_000;
        for _ in 0..n {
            for &d in &roller.roll() {
                counts[(d - 1) as usize] += 1;
            }
        }
        let expected = (4 * n) as f64 / 6.0;
        for (face, &count) in counts.iter().enumerate() {
            let ratio = count as f64 / expected;
            assert!(
                ratio > 0.97 && ratio < 1.03,
                "Face {} has count {} (expected ~{:.0}, ratio {:.3})",
                face + 1,
                count,
                expected,
                ratio
            );
        }
    }

    #[test]
    fn test_matches_examples() {
        let seven = cfg(&[7]);
        assert!(seven.matches(&[1, 6, 2, 3]));
        assert!(!seven.matches(&[1, 1, 1, 1]));
        assert!(cfg(&[2]).matches(&[1, 5, 1, 6]));
        assert!(!cfg(&[2]).matches(&[1, 5, 2, 6]));
        assert!(cfg(&[10, 11, 12]).matches(&[6, 1, 1, 6]));
    }

    #[test]
    fn test_pair_sum_mask() {
        // 1+2, 1+3, 1+4, 2+3, 2+4, 3+4 -> 3, 4, 5, 5, 6, 7
        let mask = pair_sum_mask(&[1, 2, 3, 4]);
        assert_eq!(mask, (1 << 3) | (1 << 4) | (1 << 5) | (1 << 6) | (1 << 7));
    }

    #[test]
    fn test_match_counts() {
        assert_eq!(count_matching_rolls(&cfg(&[2])), 171);
        assert_eq!(count_matching_rolls(&cfg(&[7])), 834);
        assert_eq!(count_matching_rolls(&cfg(&[6, 7, 8])), 1192);
        // 2 and 12 are mirror images
        assert_eq!(
            count_matching_rolls(&cfg(&[2])),
            count_matching_rolls(&cfg(&[12]))
        );
    }

    #[test]
    fn test_expected_tries() {
        let e7 = expected_tries(&cfg(&[7])).unwrap();
        assert!((e7 - 834.0 / 462.0).abs() < 1e-12);
        let e2 = expected_tries(&cfg(&[2])).unwrap();
        assert!((e2 - 0.152).abs() < 1e-12);
    }
}
