//! Seeded random number generator shared by the simulation.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG resource.
///
/// Same seed and same inputs give the same respawn positions and pickup
/// placements on every run.
#[derive(Resource)]
pub struct SimRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::new(42)
    }
}
