//! Game constants and the fixed configuration catalog.
//!
//! A Can't Stop roll is four six-sided dice. Any two of the four may be paired
//! to advance the lane matching their sum, so lanes run from 2 to 12 and every
//! roll offers C(4,2) = 6 candidate sums.

/// Dice thrown per roll.
pub const DICE_PER_ROLL: usize = 4;

/// Faces per die (values 1..=DIE_FACES).
pub const DIE_FACES: u8 = 6;

/// Smallest lane (1 + 1).
pub const MIN_LANE: u8 = 2;

/// Largest lane (6 + 6).
pub const MAX_LANE: u8 = 12;

/// Histogram buckets kept per configuration.
///
/// Bucket `i` counts trials whose outcome is exactly `i`. Outcomes at or past
/// the width still feed mean and variance and are tallied as overflow.
pub const HISTOGRAM_WIDTH: usize = 20;

/// Display height (in glyphs) the tallest histogram bar is scaled to.
pub const HIST_HEIGHT: u64 = 80;

/// Master seed used when no seed is given.
pub const DEFAULT_SEED: u64 = 12;

/// Trials per configuration when none is given.
pub const DEFAULT_TRIALS: u64 = 100_000;

/// Number of distinct four-dice rolls: 6^4.
pub const NUM_ROLLS: usize = 1296;

/// The six unordered index pairs of a four-dice roll.
pub const DICE_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Lane configurations simulated by a standard run, in report order.
///
/// All single lanes, every triple drawn from 2..=7, and three reference
/// triples around and above the centre.
#[rustfmt::skip]
pub const CONFIG_CATALOG: &[&[u8]] = &[
    &[2], &[3], &[4], &[5], &[6], &[7], &[8], &[9], &[10], &[11], &[12],
    &[2, 3, 4], &[2, 3, 5], &[2, 3, 6], &[2, 3, 7], &[2, 4, 5],
    &[2, 4, 6], &[2, 4, 7], &[2, 5, 6], &[2, 5, 7], &[2, 6, 7],
    &[3, 4, 5], &[3, 4, 6], &[3, 4, 7], &[3, 5, 6], &[3, 5, 7], &[3, 6, 7],
    &[4, 5, 6], &[4, 5, 7], &[4, 6, 7],
    &[5, 6, 7],
    &[6, 7, 8],
    &[7, 8, 9],
    &[10, 11, 12],
];

/// Bit for lane `sum` in a [`crate::types::Config`] target mask.
#[inline(always)]
pub fn lane_bit(sum: u8) -> u16 {
    1 << sum
}
