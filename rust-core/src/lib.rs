//! Halfspec - Spectrum Post-Processing Core
//! 
//! Turns the full output of an external forward FFT into single-sided
//! spectra (raw bins, scaled magnitudes, dB) and normalizes inverse
//! transform output. Optional Python bindings behind the `python` feature.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod spectrum;
#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{Result, SpectrumError, MIN_TRANSFORM_LEN};
pub use spectrum::{
    scale_in_place, single_sided, single_sided_complex_scaled, single_sided_mut,
    single_sided_spectrum, AmplitudeScale, ExtractorConfig, SpectrumExtractor, SpectrumPoint,
};
