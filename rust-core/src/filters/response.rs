//! Frequency response of a coefficient kernel
//!
//! Evaluates H(e^jω) on an evenly spaced grid with the direct transform, so a
//! short kernel can be inspected at any resolution.

use crate::spectrum::dft::{dft_complex, magnitude, phase_degrees};
use num_complex::Complex64;

/// Sampled frequency response of an FIR kernel
#[derive(Debug, Clone)]
pub struct FrequencyResponse {
    /// Complex response at bins k = 0..points-1 (ω = 2πk/points)
    pub bins: Vec<Complex64>,
}

impl FrequencyResponse {
    /// Evaluate kernel response at `points` frequencies over [0, 2π)
    ///
    /// # Arguments
    /// * `kernel` - Filter coefficients b[k]
    /// * `points` - Number of frequency bins (e.g. 128)
    pub fn evaluate(kernel: &[f64], points: usize) -> Self {
        Self {
            bins: dft_complex(kernel, points),
        }
    }

    /// Magnitude response |H|
    pub fn magnitude(&self) -> Vec<f64> {
        magnitude(&self.bins)
    }

    /// Phase response in degrees, (-180, 180]
    pub fn phase_degrees(&self) -> Vec<f64> {
        phase_degrees(&self.bins)
    }

    /// Magnitude response in dB
    pub fn magnitude_db(&self) -> Vec<f64> {
        self.magnitude()
            .iter()
            .map(|&m| 20.0 * m.max(1e-10).log10())
            .collect()
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// True when evaluated at zero points
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }
}
