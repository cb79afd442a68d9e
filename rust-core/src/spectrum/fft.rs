//! Fast transform backend using realfft / rustfft
//!
//! Numerically interchangeable with the direct sums in `dft`, O(N log N).
//! Plans are kept for the last size seen and rebuilt when the size changes.

use super::{SpectralTransform, Spectrum};
use crate::error::{DspError, Result};
use num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Plans and scratch buffers for one transform size
struct Plans {
    /// Transform size N
    size: usize,

    /// Real-to-complex forward plan (yields N/2 + 1 bins)
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Complex inverse plan; filtered spectra are not Hermitian in general
    inverse: Arc<dyn Fft<f64>>,

    /// Reusable real input buffer
    input_buffer: Vec<f64>,

    /// Reusable half spectrum
    output_buffer: Vec<Complex64>,
}

impl Plans {
    fn new(size: usize) -> Self {
        let mut real_planner = RealFftPlanner::<f64>::new();
        let r2c = real_planner.plan_fft_forward(size);
        let mut complex_planner = FftPlanner::<f64>::new();
        let inverse = complex_planner.plan_fft_inverse(size);

        let input_buffer = r2c.make_input_vec();
        let output_buffer = r2c.make_output_vec();

        Self {
            size,
            r2c,
            inverse,
            input_buffer,
            output_buffer,
        }
    }
}

/// FFT engine for the pipeline's fast backend
#[derive(Default)]
pub struct FftEngine {
    plans: Option<Plans>,
}

impl FftEngine {
    /// Create an engine; planning is deferred to the first transform
    pub fn new() -> Self {
        Self { plans: None }
    }

    /// Size of the currently planned transform, if any
    pub fn fft_size(&self) -> Option<usize> {
        self.plans.as_ref().map(|p| p.size)
    }

    fn plans_for(&mut self, size: usize) -> &mut Plans {
        let needs_new_plan = self.plans.as_ref().map_or(true, |p| p.size != size);
        if needs_new_plan {
            log::trace!("planning FFT of size {}", size);
            self.plans = Some(Plans::new(size));
        }
        self.plans.get_or_insert_with(|| Plans::new(size))
    }
}

impl SpectralTransform for FftEngine {
    fn forward(&mut self, signal: &[f64]) -> Result<Spectrum> {
        let n = signal.len();
        if n == 0 {
            return Ok(Vec::new());
        }

        let plans = self.plans_for(n);
        plans.input_buffer.copy_from_slice(signal);
        plans
            .r2c
            .process(&mut plans.input_buffer, &mut plans.output_buffer)
            .map_err(|e| DspError::Backend(e.to_string()))?;

        // Rebuild the negative-frequency half from conjugate symmetry
        let mut spectrum = Vec::with_capacity(n);
        spectrum.extend_from_slice(&plans.output_buffer);
        for k in (n / 2 + 1)..n {
            spectrum.push(plans.output_buffer[n - k].conj());
        }

        Ok(spectrum)
    }

    fn inverse(&mut self, spectrum: &[Complex64]) -> Result<Vec<f64>> {
        let n = spectrum.len();
        if n == 0 {
            return Ok(Vec::new());
        }

        let plans = self.plans_for(n);
        let mut buffer = spectrum.to_vec();
        plans.inverse.process(&mut buffer);

        Ok(buffer.iter().map(|c| c.re / n as f64).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::dft::{forward_transform, inverse_transform};
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    fn random_signal(len: usize, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..len).map(|_| rng.random_range(-2.0..2.0)).collect()
    }

    #[test]
    fn test_forward_matches_direct() {
        let mut engine = FftEngine::new();

        for &len in &[1usize, 2, 5, 8, 63, 100, 1000] {
            let x = random_signal(len, len as u64);
            let fast = engine.forward(&x).unwrap();
            let direct = forward_transform(&x);

            assert_eq!(fast.len(), len);
            for (a, b) in fast.iter().zip(&direct) {
                assert!((a - b).norm() < 1e-9 * len as f64, "len {}: {} vs {}", len, a, b);
            }
        }
    }

    #[test]
    fn test_inverse_matches_direct_on_asymmetric_spectrum() {
        let mut engine = FftEngine::new();
        let x = random_signal(48, 3);
        let mut spectrum = forward_transform(&x);

        // Break Hermitian symmetry the way the magnitude filter can
        spectrum[45] = Complex64::new(0.0, 0.0);
        spectrum[7] = Complex64::new(0.0, 0.0);

        let fast = engine.inverse(&spectrum).unwrap();
        let direct = inverse_transform(&spectrum);
        for (a, b) in fast.iter().zip(&direct) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_round_trip() {
        let mut engine = FftEngine::new();
        let x = random_signal(1000, 99);
        let spectrum = engine.forward(&x).unwrap();
        let y = engine.inverse(&spectrum).unwrap();

        for (a, b) in x.iter().zip(&y) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_replans_on_size_change() {
        let mut engine = FftEngine::new();
        assert_eq!(engine.fft_size(), None);

        engine.forward(&[1.0; 16]).unwrap();
        assert_eq!(engine.fft_size(), Some(16));

        engine.forward(&[1.0; 10]).unwrap();
        assert_eq!(engine.fft_size(), Some(10));

        assert!(engine.forward(&[]).unwrap().is_empty());
        assert_eq!(engine.fft_size(), Some(10));
    }
}
