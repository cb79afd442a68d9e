//! Python bindings for the walkthrough pipeline

use pyo3::prelude::*;
use pyo3::types::PyDict;
use numpy::PyArray1;
use crate::pipeline::{Pipeline, PipelineConfig, PipelineResults};
use crate::signal::{RngSource, Tone};
use crate::spectrum::TransformBackend;
use super::spectrum_bindings::PyPeak;

/// Walkthrough pipeline exposed to Python
#[pyclass(name = "Pipeline")]
pub struct PyPipeline {
    pipeline: Pipeline,
    last: Option<PipelineResults>,
}

fn results_to_dict(py: Python<'_>, results: &PipelineResults) -> PyResult<PyObject> {
    let dict = PyDict::new(py);
    
    dict.set_item("time", PyArray1::from_slice(py, &results.time))?;
    dict.set_item("combined", PyArray1::from_slice(py, &results.combined))?;
    dict.set_item("noisy", PyArray1::from_slice(py, &results.noisy))?;
    dict.set_item("spectrum", PyArray1::from_slice(py, &results.spectrum))?;
    dict.set_item("magnitude", PyArray1::from_slice(py, &results.single_sided.magnitudes))?;
    dict.set_item("frequencies", PyArray1::from_slice(py, &results.single_sided.frequencies))?;
    dict.set_item("filtered_spectrum", PyArray1::from_slice(py, &results.filtered_spectrum))?;
    dict.set_item(
        "filtered_magnitude",
        PyArray1::from_slice(py, &results.filtered_single_sided.magnitudes),
    )?;
    dict.set_item("reconstructed", PyArray1::from_slice(py, &results.reconstructed))?;
    dict.set_item("cutoff", results.cutoff)?;
    
    let peaks: Vec<PyPeak> = results.peaks.iter().copied().map(PyPeak::from).collect();
    dict.set_item("peaks", peaks.into_py(py))?;
    
    Ok(dict.into())
}

fn source(seed: Option<u64>) -> Box<dyn crate::signal::UniformSource> {
    match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::from_entropy()),
    }
}

#[pymethods]
impl PyPipeline {
    /// Create a pipeline
    /// 
    /// Args:
    ///     tones: List of (frequency_hz, amplitude) tuples
    ///     noise_intensity: Noise intensity
    ///     cutoff: Magnitude filter cutoff
    ///     peak_threshold: Peak detection threshold
    ///     sample_rate: Sample rate in Hz
    ///     sample_count: Samples per signal
    ///     fast: Use the FFT backend
    #[new]
    #[pyo3(signature = (tones=None, noise_intensity=0.5, cutoff=0.3, peak_threshold=0.1, sample_rate=1000.0, sample_count=1000, fast=false))]
    fn new(
        tones: Option<Vec<(f64, f64)>>,
        noise_intensity: f64,
        cutoff: f64,
        peak_threshold: f64,
        sample_rate: f64,
        sample_count: usize,
        fast: bool,
    ) -> PyResult<Self> {
        let mut config = PipelineConfig {
            sample_rate,
            sample_count,
            noise_intensity,
            cutoff,
            peak_threshold,
            backend: if fast { TransformBackend::Fast } else { TransformBackend::Direct },
            ..PipelineConfig::default()
        };
        if let Some(tones) = tones {
            config.tones = tones.into_iter().map(|(f, a)| Tone::new(f, a)).collect();
        }
        
        Ok(Self {
            pipeline: Pipeline::new(config)?,
            last: None,
        })
    }
    
    /// Run every stage
    /// 
    /// Returns:
    ///     Dictionary of arrays, one entry per intermediate result
    #[pyo3(signature = (seed=None))]
    fn run(&mut self, py: Python<'_>, seed: Option<u64>) -> PyResult<PyObject> {
        let results = self.pipeline.run(source(seed).as_mut())?;
        let dict = results_to_dict(py, &results)?;
        self.last = Some(results);
        Ok(dict)
    }
    
    /// Re-run from the noise stage of the last run
    #[pyo3(signature = (intensity, seed=None))]
    fn renoise(&mut self, py: Python<'_>, intensity: f64, seed: Option<u64>) -> PyResult<PyObject> {
        let last = self
            .last
            .as_ref()
            .ok_or_else(|| pyo3::exceptions::PyRuntimeError::new_err("run() has not been called"))?;
        let results = self.pipeline.renoise(last, intensity, source(seed).as_mut())?;
        let dict = results_to_dict(py, &results)?;
        self.last = Some(results);
        Ok(dict)
    }
    
    /// Re-run from the filter stage of the last run
    fn refilter(&mut self, py: Python<'_>, cutoff: f64) -> PyResult<PyObject> {
        let last = self
            .last
            .as_ref()
            .ok_or_else(|| pyo3::exceptions::PyRuntimeError::new_err("run() has not been called"))?;
        let results = self.pipeline.refilter(last, cutoff)?;
        let dict = results_to_dict(py, &results)?;
        self.last = Some(results);
        Ok(dict)
    }
    
    /// Current cutoff
    fn get_cutoff(&self) -> f64 {
        self.pipeline.config().cutoff
    }
    
    /// Current noise intensity
    fn get_noise_intensity(&self) -> f64 {
        self.pipeline.config().noise_intensity
    }
}
