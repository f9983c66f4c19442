//! Start-up seed for the game UI's question generator

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::SEED_UPPER_BOUND;

/// Produces seeds uniformly distributed in [0, SEED_UPPER_BOUND)
#[derive(Debug, Clone)]
pub struct SeedGenerator {
    rng: Pcg32,
}

impl SeedGenerator {
    /// Generator seeded from OS / browser entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg32::from_os_rng(),
        }
    }

    /// Deterministic generator
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn next_seed(&mut self) -> u32 {
        self.rng.random_range(0..SEED_UPPER_BOUND)
    }
}
