//! Sinusoid synthesis
//! 
//! Sample i of every generated sequence sits at time i / Fs.

use crate::error::{ensure_finite, ensure_sample_rate, Result};
use std::f64::consts::PI;

/// One sinusoidal component of a test signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Frequency in Hz
    pub frequency: f64,
    
    /// Peak amplitude
    pub amplitude: f64,
}

impl Tone {
    pub fn new(frequency: f64, amplitude: f64) -> Self {
        Self { frequency, amplitude }
    }
    
    /// Render this tone as `sample_count` samples at `sample_rate`
    pub fn render(&self, sample_count: usize, sample_rate: f64) -> Result<Vec<f64>> {
        synthesize(self.frequency, self.amplitude, sample_count, sample_rate)
    }
}

/// Generate a pure sinusoid
/// 
/// # Arguments
/// * `frequency` - Frequency in Hz
/// * `amplitude` - Peak amplitude
/// * `sample_count` - Number of samples N
/// * `sample_rate` - Sample rate Fs in Hz
/// 
/// # Returns
/// s[i] = A * sin(2π * f * i / Fs) for i in 0..N
pub fn synthesize(
    frequency: f64,
    amplitude: f64,
    sample_count: usize,
    sample_rate: f64,
) -> Result<Vec<f64>> {
    ensure_finite("frequency", frequency)?;
    ensure_finite("amplitude", amplitude)?;
    ensure_sample_rate(sample_rate)?;
    
    let omega = 2.0 * PI * frequency / sample_rate;
    Ok((0..sample_count)
        .map(|i| amplitude * (omega * i as f64).sin())
        .collect())
}

/// Sample instants in seconds: t[i] = i / Fs
pub fn time_axis(sample_count: usize, sample_rate: f64) -> Result<Vec<f64>> {
    ensure_sample_rate(sample_rate)?;
    Ok((0..sample_count).map(|i| i as f64 / sample_rate).collect())
}
