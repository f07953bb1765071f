//! Seeded random source for spawn coordinates and spawn values

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Value of a spawned tile when the draw rounds down
pub const LOW_SPAWN_VALUE: u32 = 2;
/// Value of a spawned tile when the draw rounds up
pub const HIGH_SPAWN_VALUE: u32 = 4;

/// Reproducible random choices made while spawning tiles
#[derive(Debug, Clone)]
pub struct RandomSpawner {
    rng: StdRng,
}

impl RandomSpawner {
    /// Create a deterministic spawner
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a spawn value
    ///
    /// A uniform real in `[0, 1)` rounded to the nearest integer picks the
    /// value: 0 gives 2 and 1 gives 4, an even split between the two.
    pub fn random_value(&mut self) -> u32 {
        let draw = self.rng.random::<f64>();
        if draw.round() as u8 == 0 {
            LOW_SPAWN_VALUE
        } else {
            HIGH_SPAWN_VALUE
        }
    }

    /// Uniform coordinate in `0..size`
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero
    pub fn random_coordinate(&mut self, size: usize) -> usize {
        assert!(size > 0, "cannot draw a coordinate for an empty grid");
        self.rng.random_range(0..size)
    }
}
