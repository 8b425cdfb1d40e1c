//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::DspError;

mod filter_bindings;
mod spectrum_bindings;

impl From<DspError> for PyErr {
    fn from(err: DspError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn scope_dsp(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<filter_bindings::PyFirFilter>()?;
    m.add_class::<spectrum_bindings::PySpectrumAnalyzer>()?;

    m.add_function(wrap_pyfunction!(filter_bindings::lowpass_kernel, m)?)?;
    m.add_function(wrap_pyfunction!(filter_bindings::frequency_response, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::dft_magnitude, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::radix2_fft_magnitude, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::normalize, m)?)?;

    Ok(())
}
