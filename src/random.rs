//! Injectable randomness for agent creation and respawn.
//!
//! Every random draw in the simulation goes through [`RandomSource`], so tests can
//! replay exact sequences while the scene uses a seeded `SmallRng`.

use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Source of uniform samples in `[0, 1)`
pub trait RandomSource {
    /// Next uniform sample in `[0, 1)`
    fn next_unit(&mut self) -> f32;

    /// Uniform sample in `[min, max)`
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_unit() * (max - min)
    }

    /// Uniform index in `0..len` (`len` must be non-zero)
    fn index(&mut self, len: usize) -> usize {
        ((self.next_unit() * len as f32) as usize).min(len - 1)
    }

    /// Fair coin flip
    fn coin(&mut self) -> bool {
        self.next_unit() < 0.5
    }
}

/// Production source backed by `rand`'s small fast generator
pub struct SeededRandom {
    rng: SmallRng,
}

impl SeededRandom {
    /// Reproducible source
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from the OS entropy pool
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted
///
/// Values are clamped into `[0, 1)` so a script can't break range contracts.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Source replaying `values` in order (an empty list yields 0.5 forever)
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0.5);
        }
        Self { values, cursor: 0 }
    }

    /// Source that always yields the same value
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f32::EPSILON)
    }
}
