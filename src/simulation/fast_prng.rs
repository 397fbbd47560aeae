//! SplitMix64 — used to derive independent per-configuration seeds.
//!
//! Each configuration's dice stream is seeded from the run's master seed
//! mixed with the configuration's lanes. The result depends only on
//! (master, lanes), never on catalog position or on how many other
//! configurations run alongside it.

/// SplitMix64 PRNG — single u64 state, excellent statistical quality.
#[derive(Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create from seed.
    #[inline(always)]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next u64.
    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

/// Seed for one configuration's dice roller.
///
/// Folds each lane into the generator state in order, so `[2, 3]` and
/// `[3, 2]` get different streams.
pub fn derive_config_seed(master: u64, lanes: &[u8]) -> u64 {
    let mut mixer = SplitMix64::new(master);
    let mut seed = mixer.next_u64();
    for &lane in lanes {
        mixer = SplitMix64::new(seed ^ lane as u64);
        seed = mixer.next_u64();
    }
    seed
}
