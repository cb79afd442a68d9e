//! Frequency-domain filtering

pub mod magnitude;

pub use magnitude::{filter_by_magnitude, retained_bins, DEFAULT_CUTOFF};
