//! Lane configurations, the catalog that holds them, and the seeding policy.

use std::fmt;

use crate::constants::{lane_bit, CONFIG_CATALOG, MAX_LANE, MIN_LANE, NUM_ROLLS};
use crate::dice_mechanics::count_matching_rolls;
use crate::error::{Result, SimError};

/// A set of lanes advanced simultaneously in one simulated turn.
///
/// Lanes keep their given order for display. Membership tests go through a
/// bitmask with bit `s` set for every target sum `s`, so matching a roll is a
/// handful of shifts rather than a scan over the lane list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Config {
    lanes: Vec<u8>,
    mask: u16,
}

impl Config {
    /// Validate and build a configuration.
    ///
    /// Rejects an empty lane list, any lane outside 2..=12, repeated lanes,
    /// and lane sets that every roll hits (a trial on those never ends).
    pub fn new(lanes: impl Into<Vec<u8>>) -> Result<Self> {
        let lanes = lanes.into();
        if lanes.is_empty() {
            return Err(SimError::EmptyConfig);
        }
        let mut mask = 0u16;
        for &lane in &lanes {
            if !(MIN_LANE..=MAX_LANE).contains(&lane) {
                return Err(SimError::LaneOutOfRange { lane });
            }
            if mask & lane_bit(lane) != 0 {
                return Err(SimError::DuplicateLane { lane });
            }
            mask |= lane_bit(lane);
        }
        let config = Self { lanes, mask };
        if count_matching_rolls(&config) as usize == NUM_ROLLS {
            return Err(SimError::NeverMisses {
                config: config.to_string(),
            });
        }
        Ok(config)
    }

    pub fn lanes(&self) -> &[u8] {
        &self.lanes
    }

    /// Target bitmask: bit `s` is set iff `s` is one of the lanes.
    #[inline(always)]
    pub fn mask(&self) -> u16 {
        self.mask
    }

    #[inline(always)]
    pub fn contains(&self, sum: u8) -> bool {
        sum <= MAX_LANE && self.mask & lane_bit(sum) != 0
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, lane) in self.lanes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", lane)?;
        }
        write!(f, "]")
    }
}

/// Ordered, non-empty list of configurations simulated together.
///
/// Fixed once built; a run reports its results in catalog order.
#[derive(Clone, Debug)]
pub struct Catalog {
    configs: Vec<Config>,
}

impl Catalog {
    pub fn new(configs: Vec<Config>) -> Result<Self> {
        if configs.is_empty() {
            return Err(SimError::EmptyCatalog);
        }
        Ok(Self { configs })
    }

    /// Build a catalog from raw lane lists, validating each one.
    pub fn from_lanes<L: AsRef<[u8]>>(lanes: &[L]) -> Result<Self> {
        let configs = lanes
            .iter()
            .map(|l| Config::new(l.as_ref().to_vec()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(configs)
    }

    /// The standard catalog from [`CONFIG_CATALOG`].
    pub fn standard() -> Result<Self> {
        Self::from_lanes(CONFIG_CATALOG)
    }

    pub fn configs(&self) -> &[Config] {
        &self.configs
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

/// How each configuration's random source is seeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Reproducible: per-configuration seeds derive from this master seed and
    /// the configuration's lanes.
    Fixed(u64),
    /// Fresh master seed drawn from the OS for every run.
    Random,
}

impl Default for SeedPolicy {
    fn default() -> Self {
        SeedPolicy::Fixed(crate::constants::DEFAULT_SEED)
    }
}
