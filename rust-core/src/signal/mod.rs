//! Time-domain signal generation: pure tones, mixing and additive noise

pub mod synth;
pub mod combine;
pub mod noise;

pub use synth::{synthesize, time_axis, Tone};
pub use combine::combine;
pub use noise::{add_noise, RngSource, UniformSource};
