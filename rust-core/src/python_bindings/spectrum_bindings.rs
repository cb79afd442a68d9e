//! Python bindings for spectral analysis and filtering

use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use num_complex::Complex64;
use crate::filters;
use crate::spectrum::{self, Peak};
use super::signal_bindings::as_slice;

/// Spectral peak exposed to Python
#[pyclass(name = "Peak")]
#[derive(Clone)]
pub struct PyPeak {
    #[pyo3(get)]
    pub bin: usize,
    #[pyo3(get)]
    pub frequency: f64,
    #[pyo3(get)]
    pub magnitude: f64,
}

impl From<Peak> for PyPeak {
    fn from(peak: Peak) -> Self {
        Self {
            bin: peak.bin,
            frequency: peak.frequency,
            magnitude: peak.magnitude,
        }
    }
}

#[pymethods]
impl PyPeak {
    fn __repr__(&self) -> String {
        format!("Peak(frequency={:.3}, magnitude={:.4})", self.frequency, self.magnitude)
    }
}

/// Direct forward transform
/// 
/// Returns:
///     complex128 numpy array with one bin per input sample
#[pyfunction]
pub fn forward_transform<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<Complex64>> {
    let spectrum = spectrum::forward_transform(as_slice(&signal)?);
    Ok(PyArray1::from_vec(py, spectrum))
}

/// Direct inverse transform (real part)
#[pyfunction]
pub fn inverse_transform<'py>(
    py: Python<'py>,
    spectrum: PyReadonlyArray1<Complex64>,
) -> PyResult<&'py PyArray1<f64>> {
    let signal = spectrum::inverse_transform(as_slice(&spectrum)?);
    Ok(PyArray1::from_vec(py, signal))
}

/// Single-sided magnitude spectrum
/// 
/// Returns:
///     Tuple of (magnitudes, frequencies_hz)
#[pyfunction]
#[pyo3(signature = (spectrum, sample_rate=1000.0))]
pub fn normalize_single_sided<'py>(
    py: Python<'py>,
    spectrum: PyReadonlyArray1<Complex64>,
    sample_rate: f64,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let single_sided = spectrum::normalize_single_sided(as_slice(&spectrum)?, sample_rate)?;
    Ok((
        PyArray1::from_vec(py, single_sided.magnitudes),
        PyArray1::from_vec(py, single_sided.frequencies),
    ))
}

/// Zero bins whose single-sided magnitude is below `cutoff`
#[pyfunction]
#[pyo3(signature = (spectrum, cutoff=0.3))]
pub fn filter_by_magnitude<'py>(
    py: Python<'py>,
    spectrum: PyReadonlyArray1<Complex64>,
    cutoff: f64,
) -> PyResult<&'py PyArray1<Complex64>> {
    let filtered = filters::filter_by_magnitude(as_slice(&spectrum)?, cutoff)?;
    Ok(PyArray1::from_vec(py, filtered))
}

/// Strict local maxima above `threshold`
#[pyfunction]
#[pyo3(signature = (magnitudes, frequencies, threshold=0.1))]
pub fn detect_peaks(
    magnitudes: PyReadonlyArray1<f64>,
    frequencies: PyReadonlyArray1<f64>,
    threshold: f64,
) -> PyResult<Vec<PyPeak>> {
    let peaks = spectrum::detect_peaks(as_slice(&magnitudes)?, as_slice(&frequencies)?, threshold)?;
    Ok(peaks.into_iter().map(PyPeak::from).collect())
}
