//! Local-maximum peak picking on single-sided spectra

use crate::error::{ensure_finite, DspError, Result};

/// Magnitude threshold used by the walkthrough
pub const PEAK_THRESHOLD: f64 = 0.1;

/// A detected spectral peak
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Index into the magnitude sequence
    pub bin: usize,

    /// Frequency in Hz
    pub frequency: f64,

    /// Single-sided magnitude at the peak
    pub magnitude: f64,
}

/// Find strict local maxima above a threshold
///
/// # Arguments
/// * `magnitudes` - Single-sided magnitude sequence M
/// * `frequencies` - Frequency axis paired 1:1 with `magnitudes`
/// * `threshold` - A peak must exceed this magnitude
///
/// # Returns
/// Peaks in increasing bin order. The first and last bins are never peaks,
/// and plateaus (a neighbour of equal value) are not peaks either.
pub fn detect_peaks(magnitudes: &[f64], frequencies: &[f64], threshold: f64) -> Result<Vec<Peak>> {
    ensure_finite("threshold", threshold)?;
    if frequencies.len() != magnitudes.len() {
        return Err(DspError::ShapeMismatch {
            expected: magnitudes.len(),
            found: frequencies.len(),
        });
    }

    let peaks = magnitudes
        .windows(3)
        .enumerate()
        .filter(|(_, w)| w[1] > w[0] && w[1] > w[2] && w[1] > threshold)
        .map(|(i, w)| Peak {
            bin: i + 1,
            frequency: frequencies[i + 1],
            magnitude: w[1],
        })
        .collect();

    Ok(peaks)
}
