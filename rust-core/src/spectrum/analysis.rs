//! Measures derived from the single-sided spectrum
//!
//! Phase, power and peak lookup built on the same bin selection and `2/N`
//! scaling as the extractor.

use super::sample::{Sample, SpectralFloat};
use super::single_sided::{single_sided, single_sided_complex_scaled, SpectrumPoint};
use crate::error::Result;
use num_complex::Complex;

/// Phase in radians of bins 1..=len
///
/// Taken from the unscaled view, since a positive real scale leaves the
/// argument unchanged.
pub fn phase_spectrum<T: SpectralFloat>(buffer: &[Complex<T>]) -> Result<Vec<T>> {
    Ok(single_sided(buffer)?.iter().map(|c| c.arg()).collect())
}

/// Power of bins 1..=len: `(|X[k]| * 2/N)^2`
pub fn power_spectrum<S: Sample>(buffer: &[S]) -> Result<Vec<S::Real>> {
    Ok(single_sided_complex_scaled(buffer)?
        .into_iter()
        .map(|x| {
            let mag = x.magnitude();
            mag * mag
        })
        .collect())
}

/// Point with the largest amplitude
///
/// NaN amplitudes are skipped; the lowest frequency wins a tie.
pub fn peak<T: SpectralFloat>(points: &[SpectrumPoint<T>]) -> Option<SpectrumPoint<T>> {
    points
        .iter()
        .filter(|p| !p.amplitude.is_nan())
        .fold(None, |best: Option<SpectrumPoint<T>>, p| match best {
            Some(b) if b.amplitude >= p.amplitude => Some(b),
            _ => Some(*p),
        })
}
