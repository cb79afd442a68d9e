//! Fourier Lab - Signal Processing Walkthrough Core
//! 
//! Synthesizes tones, adds noise, transforms, filters by magnitude,
//! reconstructs and picks spectral peaks, with optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod signal;
pub mod spectrum;
pub mod filters;
pub mod pipeline;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{DspError, Result};
pub use signal::{add_noise, combine, synthesize, RngSource, Tone, UniformSource};
pub use spectrum::{
    detect_peaks, forward_transform, inverse_transform, normalize_single_sided, Peak,
    SingleSidedSpectrum, SpectralTransform, Spectrum, TransformBackend,
};
pub use filters::filter_by_magnitude;
pub use pipeline::{Pipeline, PipelineConfig, PipelineResults, Stage};
