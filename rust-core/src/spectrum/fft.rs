//! Radix-2 fast Fourier transform
//!
//! The iterative in-place decimation-in-time transform is the canonical fast
//! path. A recursive variant and a `rustfft`-planned engine satisfy the same
//! contract and are cross-checked against the direct transform.

use crate::error::DspError;
use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::f64::consts::PI;
use std::sync::Arc;

/// Reverse the low `bits` bits of `index`
#[inline]
pub fn bit_reverse(index: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    index.reverse_bits() >> (usize::BITS - bits)
}

/// Reorder a power-of-two length buffer by bit-reversed index (self-inverse)
pub fn bit_reverse_permute<T>(data: &mut [T]) -> Result<(), DspError> {
    let bits = log2_exact(data.len())?;

    for i in 0..data.len() {
        let j = bit_reverse(i, bits);
        if j > i {
            data.swap(i, j);
        }
    }

    Ok(())
}

/// log2 of a power-of-two length, or the configuration error explaining why not
fn log2_exact(n: usize) -> Result<u32, DspError> {
    if n == 0 {
        return Err(DspError::ZeroLength);
    }
    if !n.is_power_of_two() {
        return Err(DspError::NotPowerOfTwo(n));
    }
    Ok(n.trailing_zeros())
}

/// Iterative radix-2 FFT of a real signal
///
/// # Arguments
/// * `signal` - Real input, length must be a power of two
///
/// # Returns
/// Full N-point complex spectrum in natural frequency order
///
/// # Errors
/// `NotPowerOfTwo` / `ZeroLength`: the input is never padded or truncated
pub fn radix2_fft(signal: &[f64]) -> Result<Vec<Complex64>, DspError> {
    let n = signal.len();
    let bits = log2_exact(n)?;

    let mut x = vec![Complex64::new(0.0, 0.0); n];
    for (i, &sample) in signal.iter().enumerate() {
        x[bit_reverse(i, bits)] = Complex64::new(sample, 0.0);
    }

    let mut size = 2;
    while size <= n {
        let half = size / 2;
        let step = -2.0 * PI / size as f64;

        for start in (0..n).step_by(size) {
            for j in 0..half {
                let twiddle = Complex64::from_polar(1.0, step * j as f64);
                let a = x[start + j];
                let b = x[start + j + half] * twiddle;
                x[start + j] = a + b;
                x[start + j + half] = a - b;
            }
        }

        size *= 2;
    }

    Ok(x)
}

/// Recursive radix-2 FFT (same contract as [`radix2_fft`])
pub fn recursive_fft(signal: &[f64]) -> Result<Vec<Complex64>, DspError> {
    log2_exact(signal.len())?;

    let input: Vec<Complex64> = signal.iter().map(|&s| Complex64::new(s, 0.0)).collect();
    Ok(split_radix2(&input))
}

fn split_radix2(x: &[Complex64]) -> Vec<Complex64> {
    let n = x.len();
    if n == 1 {
        return vec![x[0]];
    }

    let even: Vec<Complex64> = x.iter().step_by(2).copied().collect();
    let odd: Vec<Complex64> = x.iter().skip(1).step_by(2).copied().collect();
    let even = split_radix2(&even);
    let odd = split_radix2(&odd);

    let half = n / 2;
    let mut out = vec![Complex64::new(0.0, 0.0); n];
    for k in 0..half {
        let twiddle = Complex64::from_polar(1.0, -2.0 * PI * k as f64 / n as f64);
        let t = odd[k] * twiddle;
        out[k] = even[k] + t;
        out[k + half] = even[k] - t;
    }
    out
}

/// FFT engine backed by a `rustfft` plan
///
/// Planned once for a fixed power-of-two size; buffers are reused between calls.
pub struct PlannedFft {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Forward FFT plan
    fft: Arc<dyn Fft<f64>>,

    /// Reusable complex working buffer
    buffer: Vec<Complex64>,
}

impl PlannedFft {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size, must be a power of two
    pub fn new(fft_size: usize) -> Result<Self, DspError> {
        log2_exact(fft_size)?;

        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(fft_size);

        Ok(Self {
            fft_size,
            fft,
            buffer: vec![Complex64::new(0.0, 0.0); fft_size],
        })
    }

    /// Compute the full complex spectrum
    ///
    /// # Errors
    /// `InvalidConfig` when the signal length differs from the planned size
    pub fn process(&mut self, signal: &[f64]) -> Result<Vec<Complex64>, DspError> {
        if signal.len() != self.fft_size {
            return Err(DspError::InvalidConfig(format!(
                "planned FFT of size {} given {} samples",
                self.fft_size,
                signal.len()
            )));
        }

        for (slot, &sample) in self.buffer.iter_mut().zip(signal.iter()) {
            *slot = Complex64::new(sample, 0.0);
        }
        self.fft.process(&mut self.buffer);

        Ok(self.buffer.clone())
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }
}
