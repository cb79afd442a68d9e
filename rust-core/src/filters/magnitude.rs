//! Magnitude-threshold spectral filter
//! 
//! Despite the "low-pass" label the walkthrough gives this step, it does not
//! look at frequency at all: every bin whose single-sided magnitude falls
//! below the cutoff is zeroed, wherever it sits in the spectrum.

use crate::error::{ensure_non_negative, Result};
use crate::spectrum::analysis::{raw_magnitude, single_sided_scale};
use crate::spectrum::Spectrum;
use num_complex::Complex64;

/// Default cutoff magnitude of the walkthrough
pub const DEFAULT_CUTOFF: f64 = 0.3;

/// Zero every bin whose single-sided magnitude is strictly below `cutoff`
/// 
/// # Arguments
/// * `spectrum` - Full N-bin spectrum
/// * `cutoff` - Cutoff magnitude c >= 0, in the same units as the single-sided spectrum
/// 
/// # Returns
/// A new spectrum where bin k is kept when scale(k) * |X[k]| / N >= c and set to
/// 0 + 0i otherwise. Bins above N/2 use scale 1.
pub fn filter_by_magnitude(spectrum: &[Complex64], cutoff: f64) -> Result<Spectrum> {
    ensure_non_negative("cutoff", cutoff)?;
    let n = spectrum.len();
    
    Ok(spectrum
        .iter()
        .enumerate()
        .map(|(k, &bin)| {
            let magnitude = single_sided_scale(k, n) * raw_magnitude(bin, n);
            if magnitude < cutoff {
                Complex64::new(0.0, 0.0)
            } else {
                bin
            }
        })
        .collect())
}

/// Number of bins left non-zero by a filter pass
pub fn retained_bins(spectrum: &[Complex64]) -> usize {
    spectrum.iter().filter(|c| c.re != 0.0 || c.im != 0.0).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_zero_cutoff_keeps_everything() {
        let spectrum = vec![
            Complex64::new(0.0, 0.0),
            Complex64::new(1e-12, 0.0),
            Complex64::new(-3.0, 2.0),
            Complex64::new(0.5, -0.5),
        ];
        assert_eq!(filter_by_magnitude(&spectrum, 0.0).unwrap(), spectrum);
    }
    
    #[test]
    fn test_boundary_is_retained() {
        // N = 4, bin 1 is interior: 2 * |X| / 4 = |X| / 2
        let spectrum = vec![
            Complex64::new(1.0, 0.0),  // DC: 0.25
            Complex64::new(0.0, 1.0),  // 0.5, exactly at cutoff
            Complex64::new(1.0, 0.0),  // Nyquist: 0.25
            Complex64::new(0.0, 0.9),  // mirror, raw 0.225
        ];
        let filtered = filter_by_magnitude(&spectrum, 0.5).unwrap();
        
        assert_eq!(filtered[1], spectrum[1]);
        assert_eq!(filtered[0], Complex64::new(0.0, 0.0));
        assert_eq!(filtered[2], Complex64::new(0.0, 0.0));
        assert_eq!(filtered[3], Complex64::new(0.0, 0.0));
        assert_eq!(retained_bins(&filtered), 1);
    }
    
    #[test]
    fn test_dc_and_nyquist_not_doubled() {
        // Raw magnitude 0.3 everywhere; interior bins read 0.6
        let n = 6;
        let spectrum = vec![Complex64::new(1.8, 0.0); n];
        let filtered = filter_by_magnitude(&spectrum, 0.5).unwrap();
        
        let kept: Vec<usize> = (0..n).filter(|&k| filtered[k] != Complex64::new(0.0, 0.0)).collect();
        assert_eq!(kept, vec![1, 2]);
    }
    
    #[test]
    fn test_mirror_bins_use_raw_magnitude() {
        let spectrum = vec![Complex64::new(4.0, 0.0); 8];
        // raw 0.5, interior 1.0; cutoff 0.7 keeps only bins 1..4
        let filtered = filter_by_magnitude(&spectrum, 0.7).unwrap();
        for k in 0..8 {
            let kept = filtered[k] != Complex64::new(0.0, 0.0);
            assert_eq!(kept, (1..4).contains(&k), "bin {}", k);
        }
    }
    
    #[test]
    fn test_rejects_bad_cutoff() {
        let spectrum = vec![Complex64::new(1.0, 0.0); 4];
        assert!(filter_by_magnitude(&spectrum, -0.1).is_err());
        assert!(filter_by_magnitude(&spectrum, f64::NAN).is_err());
    }
    
    #[test]
    fn test_empty_spectrum() {
        assert!(filter_by_magnitude(&[], 0.3).unwrap().is_empty());
    }
}
