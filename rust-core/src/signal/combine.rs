//! Sample-wise summation of equally sized signals

use crate::error::{DspError, Result};

/// Sum signals sample by sample
/// 
/// # Arguments
/// * `signals` - Signals to add; every one must hold exactly `sample_count` samples
/// * `sample_count` - Output length, which also fixes the result when `signals` is empty
/// 
/// # Returns
/// c[i] = Σ signals[j][i]
pub fn combine<S: AsRef<[f64]>>(signals: &[S], sample_count: usize) -> Result<Vec<f64>> {
    let mut combined = vec![0.0; sample_count];
    
    for signal in signals {
        let signal = signal.as_ref();
        if signal.len() != sample_count {
            return Err(DspError::ShapeMismatch {
                expected: sample_count,
                found: signal.len(),
            });
        }
        for (acc, &x) in combined.iter_mut().zip(signal) {
            *acc += x;
        }
    }
    
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_single_signal_is_identity() {
        let a = vec![0.5, -1.25, 3.0];
        assert_eq!(combine(&[a.clone()], 3).unwrap(), a);
    }
    
    #[test]
    fn test_empty_yields_zeros() {
        let none: [Vec<f64>; 0] = [];
        assert_eq!(combine(&none, 4).unwrap(), vec![0.0; 4]);
    }
    
    #[test]
    fn test_sums_elementwise() {
        let a = [1.0, 2.0, 3.0];
        let b = [0.5, -2.0, 1.0];
        let c = combine(&[&a[..], &b[..]], 3).unwrap();
        assert_eq!(c, vec![1.5, 0.0, 4.0]);
    }
    
    #[test]
    fn test_shape_mismatch() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![1.0, 2.0];
        let err = combine(&[a, b], 3).unwrap_err();
        assert_eq!(err, DspError::ShapeMismatch { expected: 3, found: 2 });
    }
}
