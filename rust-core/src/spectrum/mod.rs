//! Frequency-domain analysis: transforms, single-sided spectra and peaks

pub mod dft;
pub mod fft;
pub mod analysis;
pub mod peaks;

use crate::error::Result;
use num_complex::Complex64;

pub use dft::{forward_transform, inverse_transform, DirectTransform};
pub use fft::FftEngine;
pub use analysis::{normalize_single_sided, single_sided_scale, SingleSidedSpectrum};
pub use peaks::{detect_peaks, Peak};

/// Full complex spectrum; bin k of an N-point transform sits at k * Fs / N Hz
pub type Spectrum = Vec<Complex64>;

/// A forward/inverse transform pair over real signals
/// 
/// Implementations must agree with the direct summation in [`dft`]
/// to floating-point tolerance.
pub trait SpectralTransform {
    /// Time domain to full N-bin spectrum
    fn forward(&mut self, signal: &[f64]) -> Result<Spectrum>;
    
    /// Spectrum back to a real signal (real part of the inverse, scaled by 1/N)
    fn inverse(&mut self, spectrum: &[Complex64]) -> Result<Vec<f64>>;
}

/// Which transform implementation a pipeline should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformBackend {
    /// O(N²) double summation
    #[default]
    Direct,
    
    /// realfft/rustfft planners
    Fast,
}

impl TransformBackend {
    /// Instantiate the backend
    pub fn build(self) -> Box<dyn SpectralTransform + Send> {
        match self {
            TransformBackend::Direct => Box::new(DirectTransform),
            TransformBackend::Fast => Box::new(FftEngine::new()),
        }
    }
}
