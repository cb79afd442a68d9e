//! Direct discrete Fourier transform
//! 
//! Straight double summation, O(N²). No windowing, no zero-padding:
//! the spectrum always has exactly as many bins as the signal has samples.

use super::{SpectralTransform, Spectrum};
use crate::error::Result;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Forward transform
/// 
/// # Arguments
/// * `signal` - Real input x[n], n = 0..N-1
/// 
/// # Returns
/// X[k].re = Σ x[n] cos(2πkn/N), X[k].im = -Σ x[n] sin(2πkn/N)
pub fn forward_transform(signal: &[f64]) -> Spectrum {
    let n_total = signal.len();
    let mut spectrum = vec![Complex64::new(0.0, 0.0); n_total];
    
    for (k, bin) in spectrum.iter_mut().enumerate() {
        for (n, &x) in signal.iter().enumerate() {
            let angle = 2.0 * PI * (k * n) as f64 / n_total as f64;
            bin.re += x * angle.cos();
            bin.im -= x * angle.sin();
        }
    }
    
    spectrum
}

/// Inverse transform
/// 
/// # Arguments
/// * `spectrum` - Complex bins X[k], k = 0..N-1 (need not be Hermitian)
/// 
/// # Returns
/// y[n] = (1/N) Σ (X[k].re cos(2πkn/N) - X[k].im sin(2πkn/N))
pub fn inverse_transform(spectrum: &[Complex64]) -> Vec<f64> {
    let n_total = spectrum.len();
    let mut signal = vec![0.0; n_total];
    
    for (n, y) in signal.iter_mut().enumerate() {
        for (k, bin) in spectrum.iter().enumerate() {
            let angle = 2.0 * PI * (k * n) as f64 / n_total as f64;
            *y += bin.re * angle.cos() - bin.im * angle.sin();
        }
        *y /= n_total as f64;
    }
    
    signal
}

/// Stateless [`SpectralTransform`] over the direct sums
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectTransform;

impl SpectralTransform for DirectTransform {
    fn forward(&mut self, signal: &[f64]) -> Result<Spectrum> {
        Ok(forward_transform(signal))
    }
    
    fn inverse(&mut self, spectrum: &[Complex64]) -> Result<Vec<f64>> {
        Ok(inverse_transform(spectrum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;
    
    #[test]
    fn test_dc_signal() {
        let spectrum = forward_transform(&[2.0; 8]);
        
        // All energy in bin 0: N * value
        assert!((spectrum[0].re - 16.0).abs() < 1e-12);
        assert!(spectrum[0].im.abs() < 1e-12);
        for bin in &spectrum[1..] {
            assert!(bin.norm() < 1e-12);
        }
    }
    
    #[test]
    fn test_impulse_is_flat() {
        let mut signal = vec![0.0; 6];
        signal[0] = 1.0;
        
        for bin in forward_transform(&signal) {
            assert!((bin.re - 1.0).abs() < 1e-12);
            assert!(bin.im.abs() < 1e-12);
        }
    }
    
    #[test]
    fn test_sine_sign_convention() {
        // sin at bin 1 of N=4: [0, 1, 0, -1] -> X[1] = -2j, X[3] = +2j
        let spectrum = forward_transform(&[0.0, 1.0, 0.0, -1.0]);
        assert!(spectrum[1].re.abs() < 1e-12);
        assert!((spectrum[1].im + 2.0).abs() < 1e-12);
        assert!((spectrum[3].im - 2.0).abs() < 1e-12);
    }
    
    #[test]
    fn test_round_trip() {
        let mut rng = StdRng::seed_from_u64(11);
        for &len in &[1usize, 2, 7, 64, 101] {
            let x: Vec<f64> = (0..len).map(|_| rng.random_range(-10.0..10.0)).collect();
            let y = inverse_transform(&forward_transform(&x));
            
            assert_eq!(y.len(), x.len());
            for (a, b) in x.iter().zip(&y) {
                assert!((a - b).abs() <= 1e-9 * a.abs().max(1.0));
            }
        }
    }
    
    #[test]
    fn test_empty() {
        assert!(forward_transform(&[]).is_empty());
        assert!(inverse_transform(&[]).is_empty());
    }
    
    #[test]
    fn test_direct_transform_trait() {
        let mut engine = DirectTransform;
        let x = vec![1.0, -2.0, 0.5, 4.0, 3.0];
        let spectrum = engine.forward(&x).unwrap();
        assert_eq!(spectrum, forward_transform(&x));
        assert_eq!(engine.inverse(&spectrum).unwrap(), inverse_transform(&spectrum));
    }
}
