//! Python bindings for FIR filter operations

use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::filters::{kernels, FirFilter, FrequencyResponse};

/// FIR filter exposed to Python
#[pyclass(name = "FirFilter")]
pub struct PyFirFilter {
    filter: FirFilter,
}

#[pymethods]
impl PyFirFilter {
    /// Create a new FIR filter
    ///
    /// Args:
    ///     coefficients: Filter kernel as numpy array (must be non-empty)
    #[new]
    fn new(coefficients: PyReadonlyArray1<f64>) -> PyResult<Self> {
        let coeffs = coefficients.as_slice()?.to_vec();
        Ok(Self {
            filter: FirFilter::new(coeffs)?,
        })
    }

    /// Filter with the built-in 21-tap 100 Hz low-pass kernel
    #[staticmethod]
    fn lowpass_100hz() -> PyResult<Self> {
        Ok(Self {
            filter: FirFilter::new(kernels::LOWPASS_100HZ_ORDER20.to_vec())?,
        })
    }

    /// Filter one sample, returning the new output
    fn filter_sample(&mut self, sample: f64) -> f64 {
        self.filter.filter_sample(sample)
    }

    /// Filter a sequence, carrying history across calls
    ///
    /// Args:
    ///     input_signal: Input samples as numpy array
    ///
    /// Returns:
    ///     Filtered output as numpy array
    fn filter_sequence<'py>(
        &mut self,
        py: Python<'py>,
        input_signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let input = input_signal.as_slice()?;
        let output = self.filter.filter_sequence(input);

        Ok(PyArray1::from_vec(py, output))
    }

    /// Clear the sample history
    fn reset(&mut self) {
        self.filter.reset();
    }

    fn get_coefficients<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        let coeffs = self.filter.coefficients().to_vec();
        Ok(PyArray1::from_vec(py, coeffs))
    }

    fn length(&self) -> usize {
        self.filter.length()
    }

    /// Get group delay in samples
    fn group_delay(&self) -> f64 {
        self.filter.group_delay_samples()
    }
}

/// Built-in 21-tap low-pass kernel (fc = 100 Hz at fs = 5 kHz)
#[pyfunction]
pub fn lowpass_kernel(py: Python<'_>) -> &PyArray1<f64> {
    PyArray1::from_vec(py, kernels::LOWPASS_100HZ_ORDER20.to_vec())
}

/// Magnitude and phase (degrees) of a kernel's response at `points` bins
#[pyfunction]
#[pyo3(signature = (kernel, points=128))]
pub fn frequency_response<'py>(
    py: Python<'py>,
    kernel: PyReadonlyArray1<f64>,
    points: usize,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let response = FrequencyResponse::evaluate(kernel.as_slice()?, points);
    Ok((
        PyArray1::from_vec(py, response.magnitude()),
        PyArray1::from_vec(py, response.phase_degrees()),
    ))
}
