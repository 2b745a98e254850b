//! Error types for spectrum post-processing

use thiserror::Error;

/// Smallest transform length that carries distinguishable frequency content
pub const MIN_TRANSFORM_LEN: usize = 2;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectrumError {
    #[error("FFT length too small: {len} (need at least {MIN_TRANSFORM_LEN})")]
    InvalidInput { len: usize },

    #[error("Sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f64),
}

pub type Result<T> = std::result::Result<T, SpectrumError>;

/// Reject buffers too short for single-sided extraction
pub(crate) fn ensure_min_len(len: usize) -> Result<()> {
    if len < MIN_TRANSFORM_LEN {
        return Err(SpectrumError::InvalidInput { len });
    }
    Ok(())
}
