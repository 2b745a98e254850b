//! Configured single-sided spectrum extractor
//!
//! Holds the sample rate and amplitude scale so callers processing a stream
//! of transform frames don't repeat them on every call.

use super::sample::{Sample, SpectralFloat};
use super::single_sided::{single_sided_len, single_sided_spectrum, SpectrumPoint};
use crate::error::{ensure_min_len, Result, SpectrumError};

/// Amplitude units of extracted spectra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmplitudeScale {
    /// |X[k]| * 2/N
    #[default]
    Linear,

    /// 20*log10(|X[k]| * 2/N + 1e-20)
    Decibel,
}

impl AmplitudeScale {
    pub fn from_db_flag(in_db: bool) -> Self {
        if in_db {
            AmplitudeScale::Decibel
        } else {
            AmplitudeScale::Linear
        }
    }

    pub fn is_db(&self) -> bool {
        matches!(self, AmplitudeScale::Decibel)
    }
}

/// Extractor configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractorConfig<T> {
    /// Sample rate of the transformed signal in Hz
    pub sample_rate: T,

    /// Amplitude units
    pub scale: AmplitudeScale,
}

impl<T: SpectralFloat> Default for ExtractorConfig<T> {
    fn default() -> Self {
        Self {
            sample_rate: T::from_usize(48_000),
            scale: AmplitudeScale::Linear,
        }
    }
}

impl<T: SpectralFloat> ExtractorConfig<T> {
    fn validate(&self) -> Result<()> {
        if !self.sample_rate.is_finite() || self.sample_rate <= T::zero() {
            return Err(SpectrumError::InvalidSampleRate(
                self.sample_rate.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }
}

/// Single-sided spectrum extractor with a fixed sample rate and scale
#[derive(Debug, Clone)]
pub struct SpectrumExtractor<T> {
    config: ExtractorConfig<T>,
}

impl<T: SpectralFloat> SpectrumExtractor<T> {
    /// Create new extractor, rejecting non-positive or non-finite sample rates
    pub fn new(config: ExtractorConfig<T>) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "SpectrumExtractor: sample_rate={:?}, scale={:?}",
            config.sample_rate,
            config.scale
        );
        Ok(Self { config })
    }

    /// Extract the single-sided spectrum of a full forward-transform output
    pub fn extract<S: Sample<Real = T>>(&self, buffer: &[S]) -> Result<Vec<SpectrumPoint<T>>> {
        single_sided_spectrum(buffer, self.config.sample_rate, self.config.scale.is_db())
    }

    /// Frequency spacing between bins of a length-`n` transform
    pub fn frequency_resolution(&self, n: usize) -> Result<T> {
        ensure_min_len(n)?;
        Ok(self.config.sample_rate / T::from_usize(n))
    }

    /// Frequencies in Hz of the bins returned by [`Self::extract`] for length `n`
    pub fn frequencies(&self, n: usize) -> Result<Vec<T>> {
        let df = self.frequency_resolution(n)?;
        Ok((1..=single_sided_len(n))
            .map(|k| T::from_usize(k) * df)
            .collect())
    }

    /// Update configuration
    pub fn update_config(&mut self, config: ExtractorConfig<T>) -> Result<()> {
        config.validate()?;
        log::debug!("SpectrumExtractor reconfigured: {:?} -> {:?}", self.config, config);
        self.config = config;
        Ok(())
    }

    /// Get current configuration
    pub fn config(&self) -> &ExtractorConfig<T> {
        &self.config
    }
}
