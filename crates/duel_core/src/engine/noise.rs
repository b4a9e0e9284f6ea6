//! Injectable random source
//!
//! Every jitter term in the simulation (dribble wobble, kick variance and
//! lift, wall deflection, contact pop-up) draws from a [`NoiseSource`] owned
//! by the engine. Seeded matches replay exactly; tests can remove noise
//! entirely or script it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub trait NoiseSource: std::fmt::Debug + Send {
    /// A value in `[min, max]`. Implementations must return `min` when the
    /// range is empty.
    fn range(&mut self, min: f32, max: f32) -> f32;

    /// Symmetric noise in `[-amplitude, amplitude]`.
    fn symmetric(&mut self, amplitude: f32) -> f32 {
        self.range(-amplitude, amplitude)
    }
}

/// ChaCha8-backed noise for real matches.
#[derive(Debug, Clone)]
pub struct SeededNoise {
    rng: ChaCha8Rng,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl NoiseSource for SeededNoise {
    fn range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min || !(max - min).is_finite() {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}

/// Always the value in `[min, max]` closest to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroNoise;

impl NoiseSource for ZeroNoise {
    fn range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        0.0_f32.clamp(min, max)
    }
}

/// Replays unit samples in `[0, 1]`, cycling, mapped onto each requested range.
#[derive(Debug, Clone)]
pub struct ScriptedNoise {
    samples: Vec<f32>,
    cursor: usize,
}

impl ScriptedNoise {
    pub fn new(samples: Vec<f32>) -> Self {
        Self { samples, cursor: 0 }
    }
}

impl NoiseSource for ScriptedNoise {
    fn range(&mut self, min: f32, max: f32) -> f32 {
        if self.samples.is_empty() || max <= min {
            return min;
        }
        let t = self.samples[self.cursor % self.samples.len()].clamp(0.0, 1.0);
        self.cursor += 1;
        min + (max - min) * t
    }
}
