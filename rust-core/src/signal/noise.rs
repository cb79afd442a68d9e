//! Additive uniform noise
//!
//! The random source is always passed in explicitly, so a seeded generator
//! (or a scripted source in tests) makes the output reproducible.

use crate::error::{ensure_non_negative, Result};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform values in [0, 1)
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

/// Adapter turning any `rand` generator into a `UniformSource`
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RngSource<ThreadRng> {
    /// Non-deterministic source backed by the thread-local generator
    pub fn from_entropy() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Add uniform noise to a signal
///
/// # Arguments
/// * `signal` - Clean input signal
/// * `intensity` - Noise intensity k >= 0; perturbations lie in [-k, k)
/// * `source` - Uniform random source, drawn once per sample in index order
///
/// # Returns
/// s'[i] = s[i] + (U_i - 0.5) * 2k
pub fn add_noise<U: UniformSource + ?Sized>(
    signal: &[f64],
    intensity: f64,
    source: &mut U,
) -> Result<Vec<f64>> {
    ensure_non_negative("intensity", intensity)?;

    Ok(signal
        .iter()
        .map(|&s| s + (source.next_uniform() - 0.5) * intensity * 2.0)
        .collect())
}
