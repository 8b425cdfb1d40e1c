//! Python bindings for spectrum analysis

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use numpy::{PyArray1, PyReadonlyArray1};
use crate::display;
use crate::spectrum::{self, AnalyzerConfig, SpectrumAnalyzer, TransformKind};

fn parse_transform(name: &str) -> PyResult<TransformKind> {
    match name {
        "direct" => Ok(TransformKind::Direct),
        "radix2" => Ok(TransformKind::Radix2),
        "recursive" => Ok(TransformKind::Recursive),
        "planned" => Ok(TransformKind::Planned),
        other => Err(PyValueError::new_err(format!("unknown transform '{other}'"))),
    }
}

/// Spectrum analyzer exposed to Python
#[pyclass(name = "SpectrumAnalyzer")]
pub struct PySpectrumAnalyzer {
    analyzer: SpectrumAnalyzer,
}

#[pymethods]
impl PySpectrumAnalyzer {
    /// Create a new spectrum analyzer
    ///
    /// Args:
    ///     transform_len: Samples per transform (power of two except for "direct")
    ///     transform: One of "direct", "radix2", "recursive", "planned"
    ///     sample_rate: Sample rate in Hz
    ///     remove_dc: Subtract the frame mean before transforming
    #[new]
    #[pyo3(signature = (transform_len=128, transform="radix2", sample_rate=5000.0, remove_dc=true))]
    fn new(
        transform_len: usize,
        transform: &str,
        sample_rate: f64,
        remove_dc: bool,
    ) -> PyResult<Self> {
        let config = AnalyzerConfig {
            transform_len,
            transform: parse_transform(transform)?,
            remove_dc,
            sample_rate,
        };

        Ok(Self {
            analyzer: SpectrumAnalyzer::new(config)?,
        })
    }

    /// Magnitudes of bins 0..N/2
    fn analyze<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let spectrum = self.analyzer.analyze(signal.as_slice()?)?;
        Ok(PyArray1::from_vec(py, spectrum))
    }

    /// Single-sided magnitudes scaled by 1/N
    fn analyze_scaled<'py>(
        &mut self,
        py: Python<'py>,
        signal: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray1<f64>> {
        let spectrum = self.analyzer.analyze_scaled(signal.as_slice()?)?;
        Ok(PyArray1::from_vec(py, spectrum))
    }

    fn frequency_bins_hz<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        Ok(PyArray1::from_vec(py, self.analyzer.frequency_bins_hz()))
    }

    fn num_bins(&self) -> usize {
        self.analyzer.num_bins()
    }

    fn get_sample_rate(&self) -> f64 {
        self.analyzer.config().sample_rate
    }
}

/// Direct DFT magnitudes (N/2 bins)
#[pyfunction]
#[pyo3(signature = (signal, remove_dc=true))]
pub fn dft_magnitude<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
    remove_dc: bool,
) -> PyResult<&'py PyArray1<f64>> {
    let magnitudes = spectrum::dft_magnitude(signal.as_slice()?, remove_dc);
    Ok(PyArray1::from_vec(py, magnitudes))
}

/// Radix-2 FFT magnitudes over the full length
#[pyfunction]
pub fn radix2_fft_magnitude<'py>(
    py: Python<'py>,
    signal: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let bins = spectrum::radix2_fft(signal.as_slice()?)?;
    Ok(PyArray1::from_vec(py, spectrum::magnitude(&bins)))
}

/// Linear map onto integer display units
#[pyfunction]
pub fn normalize(values: PyReadonlyArray1<f64>, target_min: i32, target_max: i32) -> PyResult<Vec<i32>> {
    Ok(display::normalize(values.as_slice()?, target_min, target_max))
}
