//! Real-time FIR filter with state management
//!
//! Direct-form convolution over a sliding window of past samples.
//! The window persists across calls, so a stream can be fed in pieces.

use super::window::SlidingWindow;
use crate::error::DspError;

/// FIR filter processor: y[n] = Σ b[k] · x[n-k]
pub struct FirFilter {
    /// Filter coefficients b[k], fixed for the life of the filter
    coefficients: Vec<f64>,

    /// Delay line, owned exclusively by this filter
    window: SlidingWindow,
}

impl FirFilter {
    /// Create a new FIR filter with given coefficients
    ///
    /// # Arguments
    /// * `coefficients` - Filter coefficients b[k] for k = 0..M-1
    ///
    /// # Errors
    /// `DspError::EmptyKernel` when no coefficients are supplied
    pub fn new(coefficients: Vec<f64>) -> Result<Self, DspError> {
        if coefficients.is_empty() {
            return Err(DspError::EmptyKernel);
        }

        let window = SlidingWindow::new(coefficients.len())?;

        Ok(Self {
            coefficients,
            window,
        })
    }

    /// Process single sample
    ///
    /// # Arguments
    /// * `sample` - Input sample x[n]
    ///
    /// # Returns
    /// Filtered output sample y[n]
    #[inline]
    pub fn filter_sample(&mut self, sample: f64) -> f64 {
        let lags = self.window.push(sample);

        self.coefficients
            .iter()
            .zip(lags.iter())
            .map(|(&b, &x)| b * x)
            .sum()
    }

    /// Filter a whole sequence
    ///
    /// The first M-1 outputs contain the cold-start transient of the
    /// zero-filled window.
    ///
    /// # Returns
    /// Filtered output samples (same length as input)
    pub fn filter_sequence(&mut self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&x| self.filter_sample(x)).collect()
    }

    /// Filter a block in-place (overwrites input buffer)
    pub fn filter_inplace(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.filter_sample(*sample);
        }
    }

    /// Reset filter state (clear delay line)
    pub fn reset(&mut self) {
        self.window.reset();
    }

    /// Get filter coefficients
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Get filter length M
    pub fn length(&self) -> usize {
        self.coefficients.len()
    }

    /// Get group delay (for linear phase FIR)
    pub fn group_delay_samples(&self) -> f64 {
        (self.length() - 1) as f64 / 2.0
    }
}
