//! Single-sided magnitude spectra
//!
//! Folds a full N-bin spectrum onto its non-negative frequencies, the way the
//! spectrum plot of the walkthrough shows it.

use super::{SpectralTransform, Spectrum, TransformBackend};
use crate::error::{ensure_sample_rate, DspError, Result};
use num_complex::Complex64;

/// Single-sided magnitude spectrum paired with its frequency axis
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SingleSidedSpectrum {
    /// Magnitudes, floor(N/2) + 1 entries
    pub magnitudes: Vec<f64>,

    /// Frequency of each magnitude entry in Hz: Fs * i / N
    pub frequencies: Vec<f64>,
}

impl SingleSidedSpectrum {
    /// Number of bins
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Frequency resolution in Hz (0 when there is a single bin)
    pub fn bin_width(&self) -> f64 {
        self.frequencies.get(1).copied().unwrap_or(0.0)
    }
}

/// Scale applied to bin `bin` of an `n`-point spectrum when reading it single-sided
///
/// Bins strictly between DC and floor(n/2) are doubled; DC, Nyquist and every
/// bin above floor(n/2) keep their raw magnitude.
#[inline]
pub fn single_sided_scale(bin: usize, n: usize) -> f64 {
    if bin > 0 && bin < n / 2 {
        2.0
    } else {
        1.0
    }
}

/// Normalized magnitude |X[k]| / N of one bin
#[inline]
pub(crate) fn raw_magnitude(bin: Complex64, n: usize) -> f64 {
    (bin.re * bin.re + bin.im * bin.im).sqrt() / n as f64
}

/// Convert a full spectrum into a single-sided magnitude spectrum
///
/// # Arguments
/// * `spectrum` - Full N-bin spectrum from a forward transform
/// * `sample_rate` - Sample rate Fs of the transformed signal
///
/// # Returns
/// M[i] = scale(i) * |X[i]| / N and f[i] = Fs * i / N for i in 0..=floor(N/2)
pub fn normalize_single_sided(spectrum: &[Complex64], sample_rate: f64) -> Result<SingleSidedSpectrum> {
    ensure_sample_rate(sample_rate)?;
    let n = spectrum.len();
    if n == 0 {
        return Err(DspError::invalid("spectrum", "must contain at least one bin"));
    }

    let num_bins = n / 2 + 1;
    let magnitudes = spectrum[..num_bins]
        .iter()
        .enumerate()
        .map(|(i, &bin)| single_sided_scale(i, n) * raw_magnitude(bin, n))
        .collect();
    let frequencies = (0..num_bins)
        .map(|i| sample_rate * i as f64 / n as f64)
        .collect();

    Ok(SingleSidedSpectrum {
        magnitudes,
        frequencies,
    })
}

/// Transform plus single-sided normalization at a fixed sample rate
pub struct SpectrumAnalyzer {
    sample_rate: f64,
    transform: Box<dyn SpectralTransform + Send>,
}

impl SpectrumAnalyzer {
    /// Create an analyzer
    ///
    /// # Arguments
    /// * `sample_rate` - Sample rate in Hz
    /// * `backend` - Transform implementation
    pub fn new(sample_rate: f64, backend: TransformBackend) -> Result<Self> {
        ensure_sample_rate(sample_rate)?;
        Ok(Self {
            sample_rate,
            transform: backend.build(),
        })
    }

    /// Forward transform, keeping the full spectrum for later filtering
    pub fn transform(&mut self, signal: &[f64]) -> Result<Spectrum> {
        self.transform.forward(signal)
    }

    /// Reconstruct a time-domain signal from a (possibly filtered) spectrum
    pub fn reconstruct(&mut self, spectrum: &[Complex64]) -> Result<Vec<f64>> {
        self.transform.inverse(spectrum)
    }

    /// Single-sided view of a spectrum at this analyzer's sample rate
    pub fn single_sided(&self, spectrum: &[Complex64]) -> Result<SingleSidedSpectrum> {
        normalize_single_sided(spectrum, self.sample_rate)
    }

    /// Transform a signal and return both the full and the single-sided spectrum
    pub fn analyze(&mut self, signal: &[f64]) -> Result<(Spectrum, SingleSidedSpectrum)> {
        let spectrum = self.transform(signal)?;
        let single_sided = self.single_sided(&spectrum)?;
        Ok((spectrum, single_sided))
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::dft::forward_transform;
    use std::f64::consts::PI;

    #[test]
    fn test_output_length() {
        for n in 1..12 {
            let spectrum = vec![Complex64::new(1.0, 0.0); n];
            let ss = normalize_single_sided(&spectrum, 1000.0).unwrap();
            assert_eq!(ss.magnitudes.len(), n / 2 + 1);
            assert_eq!(ss.frequencies.len(), n / 2 + 1);
        }
    }

    #[test]
    fn test_doubling_rule_even() {
        // Flat spectrum: raw magnitude 1/N everywhere
        let n = 8;
        let spectrum = vec![Complex64::new(0.0, 1.0); n];
        let ss = normalize_single_sided(&spectrum, 8.0).unwrap();
        let raw = 1.0 / n as f64;

        assert!((ss.magnitudes[0] - raw).abs() < 1e-15);
        assert!((ss.magnitudes[4] - raw).abs() < 1e-15);
        for i in 1..4 {
            assert!((ss.magnitudes[i] - 2.0 * raw).abs() < 1e-15);
        }
        assert_eq!(ss.frequencies, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_doubling_rule_odd() {
        // N = 7: bins 0..=3, last bin (3) is not doubled
        let n = 7;
        let spectrum = vec![Complex64::new(3.0, 4.0); n];
        let ss = normalize_single_sided(&spectrum, 700.0).unwrap();
        let raw = 5.0 / n as f64;

        assert_eq!(ss.len(), 4);
        assert!((ss.magnitudes[0] - raw).abs() < 1e-15);
        assert!((ss.magnitudes[1] - 2.0 * raw).abs() < 1e-15);
        assert!((ss.magnitudes[2] - 2.0 * raw).abs() < 1e-15);
        assert!((ss.magnitudes[3] - raw).abs() < 1e-15);
        assert!((ss.bin_width() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_sine_amplitude_recovered() {
        let n = 1000;
        let fs = 1000.0;
        let signal: Vec<f64> = (0..n)
            .map(|i| 0.7 * (2.0 * PI * 20.0 * i as f64 / fs).sin())
            .collect();

        let ss = normalize_single_sided(&forward_transform(&signal), fs).unwrap();
        assert!((ss.magnitudes[20] - 0.7).abs() < 1e-9);
        assert!((ss.frequencies[20] - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_input() {
        assert!(normalize_single_sided(&[], 1000.0).is_err());
        assert!(normalize_single_sided(&[Complex64::new(1.0, 0.0)], -1.0).is_err());
    }

    #[test]
    fn test_analyzer_backends_agree() {
        let signal: Vec<f64> = (0..256)
            .map(|i| (2.0 * PI * 12.0 * i as f64 / 256.0).cos() + 0.25)
            .collect();

        let mut direct = SpectrumAnalyzer::new(256.0, TransformBackend::Direct).unwrap();
        let mut fast = SpectrumAnalyzer::new(256.0, TransformBackend::Fast).unwrap();
        let (_, a) = direct.analyze(&signal).unwrap();
        let (_, b) = fast.analyze(&signal).unwrap();

        assert_eq!(a.frequencies, b.frequencies);
        for (x, y) in a.magnitudes.iter().zip(&b.magnitudes) {
            assert!((x - y).abs() < 1e-9);
        }
        assert!((a.magnitudes[0] - 0.25).abs() < 1e-9);
        assert!((a.magnitudes[12] - 1.0).abs() < 1e-9);
    }
}
