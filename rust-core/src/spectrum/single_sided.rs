//! Single-sided spectrum extraction
//!
//! A length-N transform of a real signal is Hermitian-symmetric, so bins
//! 1..=len with `len = N/2 + N%2` carry all the information. Every routine
//! here works on that range: DC (index 0) is skipped and, for even N, the
//! Nyquist bin (index N/2) is the last one included.
//!
//! Amplitude outputs fold the mirrored energy into one bin with a uniform
//! `2/N` factor. That factor is applied to Nyquist too, and DC is dropped
//! rather than scaled by `1/N`.

use super::sample::{Sample, SpectralFloat};
use crate::error::{ensure_min_len, Result};

/// One bin of a single-sided spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumPoint<T> {
    /// Bin frequency in Hz
    pub frequency: T,

    /// Scaled magnitude, linear or in dB
    pub amplitude: T,
}

/// Number of bins in the single-sided spectrum of a length-`n` transform
///
/// `n/2` for even `n`, `(n+1)/2` for odd `n`.
pub fn single_sided_len(n: usize) -> usize {
    n / 2 + n % 2
}

/// Amplitude correction applied to every reported bin
fn amplitude_scale<T: SpectralFloat>(n: usize) -> T {
    (T::one() + T::one()) / T::from_usize(n)
}

/// Convert a scaled magnitude to dB: `20 * log10(magnitude + 1e-20)`
pub fn amplitude_to_db<T: SpectralFloat>(magnitude: T) -> T {
    T::from_usize(20) * (magnitude + T::DB_EPSILON).log10()
}

/// Frequency/amplitude pairs for bins 1..=len of a full spectrum
///
/// # Arguments
/// * `buffer` - Full forward-transform output, DC at index 0
/// * `sample_rate` - Sample rate of the transformed signal in Hz
/// * `in_db` - Return `20*log10(|X[k]|*2/N + 1e-20)` instead of `|X[k]|*2/N`
///
/// # Returns
/// `len` points starting at `sample_rate/N`, or `InvalidInput` when the
/// buffer holds fewer than 2 samples
pub fn single_sided_spectrum<S: Sample>(
    buffer: &[S],
    sample_rate: S::Real,
    in_db: bool,
) -> Result<Vec<SpectrumPoint<S::Real>>> {
    let n = buffer.len();
    ensure_min_len(n)?;

    let len = single_sided_len(n);
    let df = sample_rate / S::Real::from_usize(n);
    let scale = amplitude_scale::<S::Real>(n);
    log::trace!("single_sided_spectrum: n={}, len={}, in_db={}", n, len, in_db);

    let spectrum = buffer[1..=len]
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let magnitude = x.magnitude() * scale;
            let amplitude = if in_db {
                amplitude_to_db(magnitude)
            } else {
                magnitude
            };

            SpectrumPoint {
                frequency: S::Real::from_usize(i + 1) * df,
                amplitude,
            }
        })
        .collect();

    Ok(spectrum)
}

/// Borrow bins 1..=len of a full spectrum without copying or scaling
///
/// Use this when phase matters or the bins feed further frequency-domain
/// work followed by an inverse transform.
pub fn single_sided<S>(buffer: &[S]) -> Result<&[S]> {
    ensure_min_len(buffer.len())?;
    let len = single_sided_len(buffer.len());
    Ok(&buffer[1..=len])
}

/// Mutable variant of [`single_sided`]; writes land in `buffer`
pub fn single_sided_mut<S>(buffer: &mut [S]) -> Result<&mut [S]> {
    ensure_min_len(buffer.len())?;
    let len = single_sided_len(buffer.len());
    Ok(&mut buffer[1..=len])
}

/// Newly allocated copy of bins 1..=len, each multiplied by `2/N`
pub fn single_sided_complex_scaled<S: Sample>(buffer: &[S]) -> Result<Vec<S>> {
    let n = buffer.len();
    let bins = single_sided(buffer)?;
    let scale = amplitude_scale::<S::Real>(n);
    log::trace!("single_sided_complex_scaled: n={}, len={}", n, bins.len());

    Ok(bins.iter().map(|&x| x.scale(scale)).collect())
}
