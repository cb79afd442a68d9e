//! Error type shared by every pipeline stage

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DspError {
    #[error("Shape mismatch: expected {expected} samples, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Transform backend failed: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, DspError>;

impl DspError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        DspError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Reject NaN and infinities
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DspError::invalid(name, format!("must be finite (got {})", value)))
    }
}

/// Reject non-finite and negative values
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<()> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(DspError::invalid(name, format!("must be >= 0 (got {})", value)));
    }
    Ok(())
}

/// Sample rates divide every time and frequency axis, so zero is rejected too
pub(crate) fn ensure_sample_rate(sample_rate: f64) -> Result<()> {
    ensure_finite("sample_rate", sample_rate)?;
    if sample_rate <= 0.0 {
        return Err(DspError::invalid(
            "sample_rate",
            format!("must be > 0 (got {})", sample_rate),
        ));
    }
    Ok(())
}
