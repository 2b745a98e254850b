//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::SpectrumError;

mod spectrum_bindings;

impl From<SpectrumError> for PyErr {
    fn from(err: SpectrumError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn halfspec(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<spectrum_bindings::PySpectrumExtractor>()?;

    m.add_function(wrap_pyfunction!(spectrum_bindings::scale_in_place, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::single_sided_spectrum, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::single_sided_complex_scaled, m)?)?;

    Ok(())
}
