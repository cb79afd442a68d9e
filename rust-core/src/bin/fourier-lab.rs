//! Command-line walkthrough of the signal processing pipeline

use clap::Parser;
use fourier_lab::pipeline::{DEFAULT_NOISE_INTENSITY, DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLE_RATE};
use fourier_lab::spectrum::peaks::PEAK_THRESHOLD;
use fourier_lab::filters::{retained_bins, DEFAULT_CUTOFF};
use fourier_lab::{Pipeline, PipelineConfig, PipelineResults, RngSource, Stage, Tone, TransformBackend};
use std::process::ExitCode;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "fourier-lab")]
#[command(about = "Step through tone synthesis, noise, Fourier analysis and peak picking", long_about = None)]
struct Args {
    /// Tone as FREQ:AMP in Hz and linear amplitude (repeatable)
    #[arg(long = "tone", value_name = "FREQ:AMP", value_parser = parse_tone)]
    tones: Vec<Tone>,

    /// Noise intensity (perturbations in [-k, k))
    #[arg(long, value_name = "K", default_value_t = DEFAULT_NOISE_INTENSITY)]
    noise: f64,

    /// Magnitude cutoff of the spectral filter
    #[arg(long, value_name = "MAG", default_value_t = DEFAULT_CUTOFF)]
    cutoff: f64,

    /// Minimum magnitude of a reported peak
    #[arg(long, value_name = "MAG", default_value_t = PEAK_THRESHOLD)]
    threshold: f64,

    /// Sample rate in Hz
    #[arg(long, value_name = "HZ", default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: f64,

    /// Samples per signal
    #[arg(long, value_name = "N", default_value_t = DEFAULT_SAMPLE_COUNT)]
    samples: usize,

    /// Seed for reproducible noise
    #[arg(long)]
    seed: Option<u64>,

    /// Use the FFT backend instead of the direct transform
    #[arg(long)]
    fast: bool,
}

fn parse_tone(s: &str) -> Result<Tone, String> {
    let (freq, amp) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FREQ:AMP, got '{}'", s))?;
    let frequency = freq
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad frequency '{}': {}", freq, e))?;
    let amplitude = amp
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("bad amplitude '{}': {}", amp, e))?;
    Ok(Tone::new(frequency, amplitude))
}

impl Args {
    fn pipeline_config(&self) -> PipelineConfig {
        let defaults = PipelineConfig::default();
        PipelineConfig {
            sample_rate: self.sample_rate,
            sample_count: self.samples,
            tones: if self.tones.is_empty() {
                defaults.tones
            } else {
                self.tones.clone()
            },
            noise_intensity: self.noise,
            cutoff: self.cutoff,
            peak_threshold: self.threshold,
            backend: if self.fast {
                TransformBackend::Fast
            } else {
                TransformBackend::Direct
            },
        }
    }
}

fn peak_to_peak(signal: &[f64]) -> f64 {
    let max = signal.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = signal.iter().cloned().fold(f64::INFINITY, f64::min);
    if signal.is_empty() {
        0.0
    } else {
        max - min
    }
}

fn report(config: &PipelineConfig, results: &PipelineResults) {
    for (step, stage) in Stage::ALL.iter().enumerate() {
        println!("Step {}: {}", step + 1, stage.title());
        match stage {
            Stage::Synthesize => {
                for (tone, signal) in config.tones.iter().zip(&results.tones) {
                    println!(
                        "  {:.1} Hz, amplitude {:.1} ({} samples)",
                        tone.frequency,
                        tone.amplitude,
                        signal.len()
                    );
                }
            }
            Stage::Combine => {
                println!("  peak-to-peak {:.3}", peak_to_peak(&results.combined));
            }
            Stage::AddNoise => {
                println!(
                    "  intensity {:.1}, peak-to-peak {:.3}",
                    config.noise_intensity,
                    peak_to_peak(&results.noisy)
                );
            }
            Stage::Transform => {
                println!(
                    "  {} bins from 0 to {:.1} Hz",
                    results.single_sided.len(),
                    results.single_sided.frequencies.last().copied().unwrap_or(0.0)
                );
            }
            Stage::Filter => {
                println!(
                    "  cutoff {:.2}: {} of {} bins retained",
                    results.cutoff,
                    retained_bins(&results.filtered_spectrum),
                    results.filtered_spectrum.len()
                );
            }
            Stage::Reconstruct => {
                println!("  peak-to-peak {:.3}", peak_to_peak(&results.reconstructed));
            }
            Stage::DetectPeaks => {
                if results.peaks.is_empty() {
                    println!("  no peaks above {:.2}", config.peak_threshold);
                }
                for peak in &results.peaks {
                    println!("  {:.1} Hz, magnitude {:.3}", peak.frequency, peak.magnitude);
                }
            }
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.pipeline_config();

    let mut pipeline = match Pipeline::new(config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let results = match args.seed {
        Some(seed) => pipeline.run(&mut RngSource::seeded(seed)),
        None => pipeline.run(&mut RngSource::from_entropy()),
    };

    match results {
        Ok(results) => {
            report(pipeline.config(), &results);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("pipeline failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
