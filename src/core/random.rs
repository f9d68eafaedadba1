//! Shared random number source.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source for all gameplay rolls (wander direction, jump chance,
/// attack intervals).
///
/// Seed it with [`GameRng::seeded`] to make a run reproducible.
#[derive(Resource)]
pub struct GameRng(StdRng);

impl Default for GameRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Uniform value in `[min, max]`. A degenerate or inverted range yields `min`.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        if max > min {
            self.0.gen_range(min..=max)
        } else {
            min
        }
    }

    /// Uniform value in `[0, 1)`.
    pub fn roll(&mut self) -> f32 {
        self.0.gen::<f32>()
    }
}
