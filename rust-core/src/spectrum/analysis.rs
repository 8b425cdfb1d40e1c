//! High-level spectrum analyzer
//!
//! Chooses a transform path, removes DC and reduces the complex spectrum to
//! the non-negative-frequency magnitudes the display needs.

use super::dft::{dft_complex, remove_mean};
use super::fft::{radix2_fft, recursive_fft, PlannedFft};
use crate::error::DspError;
use num_complex::Complex64;

/// Which transform computes the spectrum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// O(N²) direct summation, any length
    Direct,

    /// Iterative in-place radix-2 (power-of-two length)
    Radix2,

    /// Recursive radix-2 (power-of-two length)
    Recursive,

    /// `rustfft` plan (power-of-two length)
    Planned,
}

impl TransformKind {
    /// Whether this path only accepts power-of-two lengths
    pub fn requires_power_of_two(&self) -> bool {
        !matches!(self, TransformKind::Direct)
    }
}

/// Spectrum analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Transform size N
    pub transform_len: usize,

    /// Transform path
    pub transform: TransformKind,

    /// Subtract the mean before transforming
    pub remove_dc: bool,

    /// Sample rate in Hz
    pub sample_rate: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            transform_len: 128,
            transform: TransformKind::Radix2,
            remove_dc: true,
            sample_rate: 5000.0,
        }
    }
}

/// Spectrum analyzer over fixed-length frames
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    planned: Option<PlannedFft>,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    ///
    /// # Errors
    /// Zero length, or a non-power-of-two length on a fast path
    pub fn new(config: AnalyzerConfig) -> Result<Self, DspError> {
        if config.transform_len == 0 {
            return Err(DspError::ZeroLength);
        }
        if config.transform.requires_power_of_two() && !config.transform_len.is_power_of_two() {
            return Err(DspError::NotPowerOfTwo(config.transform_len));
        }

        let planned = match config.transform {
            TransformKind::Planned => Some(PlannedFft::new(config.transform_len)?),
            _ => None,
        };

        Ok(Self { config, planned })
    }

    /// Full complex spectrum of the first `transform_len` samples
    ///
    /// Shorter input is zero-padded up to the transform length.
    pub fn spectrum(&mut self, signal: &[f64]) -> Result<Vec<Complex64>, DspError> {
        let n = self.config.transform_len;
        let take = signal.len().min(n);

        let mut frame = if self.config.remove_dc {
            remove_mean(&signal[..take])
        } else {
            signal[..take].to_vec()
        };
        frame.resize(n, 0.0);

        match self.config.transform {
            TransformKind::Direct => Ok(dft_complex(&frame, n)),
            TransformKind::Radix2 => radix2_fft(&frame),
            TransformKind::Recursive => recursive_fft(&frame),
            TransformKind::Planned => match self.planned.as_mut() {
                Some(engine) => engine.process(&frame),
                None => Err(DspError::InvalidConfig("planned FFT missing".into())),
            },
        }
    }

    /// Magnitudes |X[k]| for k = 0..N/2 (conjugate mirror discarded)
    pub fn analyze(&mut self, signal: &[f64]) -> Result<Vec<f64>, DspError> {
        let spectrum = self.spectrum(signal)?;
        Ok(spectrum
            .iter()
            .take(self.num_bins())
            .map(|c| c.norm())
            .collect())
    }

    /// Single-sided magnitude scaled by 1/N, bins 0..=N/2
    pub fn analyze_scaled(&mut self, signal: &[f64]) -> Result<Vec<f64>, DspError> {
        let n = self.config.transform_len;
        let spectrum = self.spectrum(signal)?;
        Ok(spectrum
            .iter()
            .take(n / 2 + 1)
            .map(|c| c.norm() / n as f64)
            .collect())
    }

    /// Frequency of each single-sided bin in Hz (0..=fs/2)
    pub fn frequency_bins_hz(&self) -> Vec<f64> {
        frequency_axis(self.config.transform_len, self.config.sample_rate)
    }

    /// Number of displayed bins (N/2)
    pub fn num_bins(&self) -> usize {
        self.config.transform_len / 2
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}

/// Hz of bins 0..=n/2 for an n-point transform at `sample_rate`
pub fn frequency_axis(n: usize, sample_rate: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    (0..=n / 2)
        .map(|k| k as f64 * sample_rate / n as f64)
        .collect()
}
