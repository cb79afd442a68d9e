//! Python bindings for signal generation

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::signal::{self, RngSource};

/// Borrow a numpy array as a contiguous slice
pub(super) fn as_slice<'a, T: numpy::Element>(array: &'a PyReadonlyArray1<T>) -> PyResult<&'a [T]> {
    array
        .as_slice()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Generate a pure sinusoid
/// 
/// Args:
///     frequency: Frequency in Hz
///     amplitude: Peak amplitude
///     sample_count: Number of samples
///     sample_rate: Sample rate in Hz
/// 
/// Returns:
///     Samples as numpy array
#[pyfunction]
#[pyo3(signature = (frequency, amplitude, sample_count=1000, sample_rate=1000.0))]
pub fn synthesize<'py>(
    py: Python<'py>,
    frequency: f64,
    amplitude: f64,
    sample_count: usize,
    sample_rate: f64,
) -> PyResult<&'py PyArray1<f64>> {
    let samples = signal::synthesize(frequency, amplitude, sample_count, sample_rate)?;
    Ok(PyArray1::from_vec(py, samples))
}

/// Sum equally sized signals
/// 
/// Args:
///     signals: List of numpy arrays
///     sample_count: Output length (used as-is when the list is empty)
#[pyfunction]
pub fn combine<'py>(
    py: Python<'py>,
    signals: Vec<PyReadonlyArray1<f64>>,
    sample_count: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let slices = signals.iter().map(as_slice).collect::<PyResult<Vec<_>>>()?;
    let combined = signal::combine(&slices, sample_count)?;
    Ok(PyArray1::from_vec(py, combined))
}

/// Add uniform noise in [-intensity, intensity)
/// 
/// Args:
///     signal: Input signal
///     intensity: Noise intensity (>= 0)
///     seed: Optional seed for reproducible noise
#[pyfunction]
#[pyo3(signature = (signal, intensity=0.5, seed=None))]
pub fn add_noise<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
    intensity: f64,
    seed: Option<u64>,
) -> PyResult<&'py PyArray1<f64>> {
    let input = as_slice(&signal)?;
    let noisy = match seed {
        Some(seed) => signal::add_noise(input, intensity, &mut RngSource::seeded(seed))?,
        None => signal::add_noise(input, intensity, &mut RngSource::from_entropy())?,
    };
    Ok(PyArray1::from_vec(py, noisy))
}
