//! End-to-end walkthrough pipeline
//!
//! Runs synthesis → mixing → noise → transform → magnitude filter →
//! reconstruction → peak detection, returning every intermediate array so a
//! front end can plot each step. Nothing derived is kept between runs.

use crate::error::{ensure_finite, ensure_non_negative, ensure_sample_rate, DspError, Result};
use crate::filters::{filter_by_magnitude, retained_bins, DEFAULT_CUTOFF};
use crate::signal::{add_noise, combine, time_axis, Tone, UniformSource};
use crate::spectrum::analysis::SpectrumAnalyzer;
use crate::spectrum::peaks::PEAK_THRESHOLD;
use crate::spectrum::{detect_peaks, Peak, SingleSidedSpectrum, Spectrum, TransformBackend};

/// Sample rate of the walkthrough in Hz
pub const DEFAULT_SAMPLE_RATE: f64 = 1000.0;

/// Samples per signal (one second at the default rate)
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Default noise intensity
pub const DEFAULT_NOISE_INTENSITY: f64 = 0.5;

/// Steps of the walkthrough, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Synthesize,
    Combine,
    AddNoise,
    Transform,
    Filter,
    Reconstruct,
    DetectPeaks,
}

impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::Synthesize,
        Stage::Combine,
        Stage::AddNoise,
        Stage::Transform,
        Stage::Filter,
        Stage::Reconstruct,
        Stage::DetectPeaks,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Stage::Synthesize => "Signal generation",
            Stage::Combine => "Sum of signals",
            Stage::AddNoise => "Noise injection",
            Stage::Transform => "Fourier transform",
            Stage::Filter => "Magnitude filtering",
            Stage::Reconstruct => "Signal reconstruction",
            Stage::DetectPeaks => "Frequency identification",
        }
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Number of samples per signal
    pub sample_count: usize,

    /// Sinusoids summed into the test signal
    pub tones: Vec<Tone>,

    /// Uniform noise intensity (perturbations in [-k, k))
    pub noise_intensity: f64,

    /// Magnitude filter cutoff
    pub cutoff: f64,

    /// Peak detection threshold
    pub peak_threshold: f64,

    /// Transform implementation
    pub backend: TransformBackend,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            sample_count: DEFAULT_SAMPLE_COUNT,
            tones: vec![Tone::new(5.0, 1.0), Tone::new(50.0, 0.5)],
            noise_intensity: DEFAULT_NOISE_INTENSITY,
            cutoff: DEFAULT_CUTOFF,
            peak_threshold: PEAK_THRESHOLD,
            backend: TransformBackend::Direct,
        }
    }
}

impl PipelineConfig {
    /// Check every field, reporting the first invalid one
    pub fn validate(&self) -> Result<()> {
        ensure_sample_rate(self.sample_rate)?;
        if self.sample_count == 0 {
            return Err(DspError::invalid("sample_count", "must be at least 1"));
        }
        for tone in &self.tones {
            ensure_finite("frequency", tone.frequency)?;
            ensure_finite("amplitude", tone.amplitude)?;
        }
        ensure_non_negative("noise_intensity", self.noise_intensity)?;
        ensure_non_negative("cutoff", self.cutoff)?;
        ensure_finite("peak_threshold", self.peak_threshold)?;
        Ok(())
    }
}

/// Every array produced by one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineResults {
    /// Sample instants in seconds
    pub time: Vec<f64>,

    /// One rendered signal per configured tone
    pub tones: Vec<Vec<f64>>,

    /// Sum of all tones
    pub combined: Vec<f64>,

    /// Combined signal plus noise
    pub noisy: Vec<f64>,

    /// Full spectrum of the noisy signal
    pub spectrum: Spectrum,

    /// Single-sided view of `spectrum`
    pub single_sided: SingleSidedSpectrum,

    /// Cutoff the filter stage used
    pub cutoff: f64,

    /// Spectrum after magnitude filtering
    pub filtered_spectrum: Spectrum,

    /// Single-sided view of `filtered_spectrum`
    pub filtered_single_sided: SingleSidedSpectrum,

    /// Inverse transform of `filtered_spectrum`
    pub reconstructed: Vec<f64>,

    /// Peaks of `filtered_single_sided`
    pub peaks: Vec<Peak>,
}

/// Output of the filter stage onward
struct FilterStage {
    filtered_spectrum: Spectrum,
    filtered_single_sided: SingleSidedSpectrum,
    reconstructed: Vec<f64>,
    peaks: Vec<Peak>,
}

/// Walkthrough pipeline
pub struct Pipeline {
    config: PipelineConfig,
    analyzer: SpectrumAnalyzer,
}

impl Pipeline {
    /// Create a pipeline after validating its configuration
    pub fn new(config: PipelineConfig) -> Result<Self> {
        if let Err(e) = config.validate() {
            log::warn!("rejected pipeline config: {}", e);
            return Err(e);
        }
        let analyzer = SpectrumAnalyzer::new(config.sample_rate, config.backend)?;

        Ok(Self { config, analyzer })
    }

    /// Current configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every stage from scratch
    ///
    /// # Arguments
    /// * `source` - Uniform random source for the noise stage
    pub fn run<U: UniformSource + ?Sized>(&mut self, source: &mut U) -> Result<PipelineResults> {
        let n = self.config.sample_count;
        let fs = self.config.sample_rate;

        let time = time_axis(n, fs)?;
        let tones = self
            .config
            .tones
            .iter()
            .map(|tone| tone.render(n, fs))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("{}: {} tone(s), {} samples each", Stage::Synthesize.title(), tones.len(), n);

        let combined = combine(&tones, n)?;
        log::debug!("{}: done", Stage::Combine.title());

        let intensity = self.config.noise_intensity;
        self.finish_from_combined(time, tones, combined, intensity, source)
    }

    /// Redo the noise stage and everything after it with a new intensity
    pub fn renoise<U: UniformSource + ?Sized>(
        &mut self,
        previous: &PipelineResults,
        intensity: f64,
        source: &mut U,
    ) -> Result<PipelineResults> {
        ensure_non_negative("noise_intensity", intensity)?;
        self.ensure_sample_count(previous.combined.len())?;
        self.config.noise_intensity = intensity;

        self.finish_from_combined(
            previous.time.clone(),
            previous.tones.clone(),
            previous.combined.clone(),
            intensity,
            source,
        )
    }

    /// Redo the filter stage and everything after it with a new cutoff
    pub fn refilter(&mut self, previous: &PipelineResults, cutoff: f64) -> Result<PipelineResults> {
        ensure_non_negative("cutoff", cutoff)?;
        self.ensure_sample_count(previous.spectrum.len())?;
        self.config.cutoff = cutoff;

        let stage = self.filter_stage(&previous.spectrum, cutoff)?;
        Ok(PipelineResults {
            cutoff,
            filtered_spectrum: stage.filtered_spectrum,
            filtered_single_sided: stage.filtered_single_sided,
            reconstructed: stage.reconstructed,
            peaks: stage.peaks,
            ..previous.clone()
        })
    }

    fn ensure_sample_count(&self, found: usize) -> Result<()> {
        if found != self.config.sample_count {
            return Err(DspError::ShapeMismatch {
                expected: self.config.sample_count,
                found,
            });
        }
        Ok(())
    }

    fn finish_from_combined<U: UniformSource + ?Sized>(
        &mut self,
        time: Vec<f64>,
        tones: Vec<Vec<f64>>,
        combined: Vec<f64>,
        intensity: f64,
        source: &mut U,
    ) -> Result<PipelineResults> {
        let noisy = add_noise(&combined, intensity, source)?;
        log::debug!("{}: intensity {:.2}", Stage::AddNoise.title(), intensity);

        let (spectrum, single_sided) = self.analyzer.analyze(&noisy)?;
        log::debug!(
            "{}: {} bins, {:.3} Hz resolution",
            Stage::Transform.title(),
            single_sided.len(),
            single_sided.bin_width()
        );

        let cutoff = self.config.cutoff;
        let stage = self.filter_stage(&spectrum, cutoff)?;

        Ok(PipelineResults {
            time,
            tones,
            combined,
            noisy,
            spectrum,
            single_sided,
            cutoff,
            filtered_spectrum: stage.filtered_spectrum,
            filtered_single_sided: stage.filtered_single_sided,
            reconstructed: stage.reconstructed,
            peaks: stage.peaks,
        })
    }

    fn filter_stage(&mut self, spectrum: &[num_complex::Complex64], cutoff: f64) -> Result<FilterStage> {
        let filtered_spectrum = filter_by_magnitude(spectrum, cutoff)?;
        let filtered_single_sided = self.analyzer.single_sided(&filtered_spectrum)?;
        log::debug!(
            "{}: cutoff {:.2}, {} of {} bins retained",
            Stage::Filter.title(),
            cutoff,
            retained_bins(&filtered_spectrum),
            filtered_spectrum.len()
        );

        let reconstructed = self.analyzer.reconstruct(&filtered_spectrum)?;
        log::debug!("{}: {} samples", Stage::Reconstruct.title(), reconstructed.len());

        let peaks = detect_peaks(
            &filtered_single_sided.magnitudes,
            &filtered_single_sided.frequencies,
            self.config.peak_threshold,
        )?;
        log::debug!("{}: {} peak(s)", Stage::DetectPeaks.title(), peaks.len());

        Ok(FilterStage {
            filtered_spectrum,
            filtered_single_sided,
            reconstructed,
            peaks,
        })
    }
}
