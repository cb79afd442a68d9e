//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use crate::error::DspError;

mod signal_bindings;
mod spectrum_bindings;
mod pipeline_bindings;

impl From<DspError> for PyErr {
    fn from(err: DspError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn fourier_lab(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(signal_bindings::synthesize, m)?)?;
    m.add_function(wrap_pyfunction!(signal_bindings::combine, m)?)?;
    m.add_function(wrap_pyfunction!(signal_bindings::add_noise, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::forward_transform, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::inverse_transform, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::normalize_single_sided, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::filter_by_magnitude, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::detect_peaks, m)?)?;
    
    m.add_class::<spectrum_bindings::PyPeak>()?;
    m.add_class::<pipeline_bindings::PyPipeline>()?;
    
    Ok(())
}
