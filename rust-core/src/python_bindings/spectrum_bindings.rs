//! Python bindings for spectrum post-processing
//!
//! Spectra are 1-D NumPy `complex128` arrays holding a full FFT output.
//! The normalizer also takes real and single-precision arrays.

use numpy::{Complex32, Complex64, PyArray1, PyReadonlyArray1, PyReadwriteArray1};
use pyo3::prelude::*;

use crate::spectrum::{self, AmplitudeScale, ExtractorConfig, SpectrumExtractor, SpectrumPoint};

fn points_to_arrays<'py>(
    py: Python<'py>,
    points: &[SpectrumPoint<f64>],
) -> (&'py PyArray1<f64>, &'py PyArray1<f64>) {
    let freqs: Vec<f64> = points.iter().map(|p| p.frequency).collect();
    let amps: Vec<f64> = points.iter().map(|p| p.amplitude).collect();
    (PyArray1::from_vec(py, freqs), PyArray1::from_vec(py, amps))
}

/// Writable 1-D array accepted by `scale_in_place`
#[derive(FromPyObject)]
pub enum WritableBuffer<'py> {
    RealF64(PyReadwriteArray1<'py, f64>),
    RealF32(PyReadwriteArray1<'py, f32>),
    ComplexF64(PyReadwriteArray1<'py, Complex64>),
    ComplexF32(PyReadwriteArray1<'py, Complex32>),
}

/// Scale an inverse-transform output by 1/N in place
///
/// Args:
///     buffer: Writable float64, float32, complex128 or complex64 array
#[pyfunction]
pub fn scale_in_place(buffer: WritableBuffer) -> PyResult<()> {
    match buffer {
        WritableBuffer::RealF64(mut b) => spectrum::scale_in_place(b.as_slice_mut()?),
        WritableBuffer::RealF32(mut b) => spectrum::scale_in_place(b.as_slice_mut()?),
        WritableBuffer::ComplexF64(mut b) => spectrum::scale_in_place(b.as_slice_mut()?),
        WritableBuffer::ComplexF32(mut b) => spectrum::scale_in_place(b.as_slice_mut()?),
    }
    Ok(())
}

/// Single-sided spectrum of a full FFT output
///
/// Args:
///     buffer: Full spectrum as complex128 array (DC at index 0)
///     sample_rate: Sample rate in Hz
///     in_db: Return amplitudes in dB (default: False)
///
/// Returns:
///     (frequencies, amplitudes) as numpy arrays
#[pyfunction]
#[pyo3(signature = (buffer, sample_rate, in_db=false))]
pub fn single_sided_spectrum<'py>(
    py: Python<'py>,
    buffer: PyReadonlyArray1<Complex64>,
    sample_rate: f64,
    in_db: bool,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let points = spectrum::single_sided_spectrum(buffer.as_slice()?, sample_rate, in_db)?;
    Ok(points_to_arrays(py, &points))
}

/// Bins 1..=len scaled by 2/N, as a new complex128 array
#[pyfunction]
pub fn single_sided_complex_scaled<'py>(
    py: Python<'py>,
    buffer: PyReadonlyArray1<Complex64>,
) -> PyResult<&'py PyArray1<Complex64>> {
    let scaled = spectrum::single_sided_complex_scaled(buffer.as_slice()?)?;
    Ok(PyArray1::from_vec(py, scaled))
}

/// Spectrum extractor exposed to Python
#[pyclass(name = "SpectrumExtractor")]
pub struct PySpectrumExtractor {
    extractor: SpectrumExtractor<f64>,
}

#[pymethods]
impl PySpectrumExtractor {
    /// Create a new spectrum extractor
    ///
    /// Args:
    ///     sample_rate: Sample rate in Hz
    ///     in_db: Whether to return amplitudes in dB
    #[new]
    #[pyo3(signature = (sample_rate=48000.0, in_db=false))]
    fn new(sample_rate: f64, in_db: bool) -> PyResult<Self> {
        let config = ExtractorConfig {
            sample_rate,
            scale: AmplitudeScale::from_db_flag(in_db),
        };

        Ok(Self {
            extractor: SpectrumExtractor::new(config)?,
        })
    }

    /// Extract the single-sided spectrum
    ///
    /// Returns:
    ///     (frequencies, amplitudes) as numpy arrays
    fn extract<'py>(
        &self,
        py: Python<'py>,
        buffer: PyReadonlyArray1<Complex64>,
    ) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
        let points = self.extractor.extract(buffer.as_slice()?)?;
        Ok(points_to_arrays(py, &points))
    }

    /// Frequencies in Hz of the bins `extract` returns for a length-n FFT
    fn frequencies<'py>(&self, py: Python<'py>, n: usize) -> PyResult<&'py PyArray1<f64>> {
        Ok(PyArray1::from_vec(py, self.extractor.frequencies(n)?))
    }

    /// Update configuration
    #[pyo3(signature = (sample_rate=None, in_db=None))]
    fn update_config(&mut self, sample_rate: Option<f64>, in_db: Option<bool>) -> PyResult<()> {
        let mut config = *self.extractor.config();

        if let Some(sr) = sample_rate {
            config.sample_rate = sr;
        }
        if let Some(db) = in_db {
            config.scale = AmplitudeScale::from_db_flag(db);
        }

        self.extractor.update_config(config)?;
        Ok(())
    }

    /// Get current sample rate
    fn get_sample_rate(&self) -> f64 {
        self.extractor.config().sample_rate
    }

    /// Whether amplitudes are returned in dB
    fn is_db(&self) -> bool {
        self.extractor.config().scale.is_db()
    }
}
