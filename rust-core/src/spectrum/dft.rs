//! Direct discrete Fourier transform
//!
//! O(N²) summation that works for any length. Used for small inputs such as
//! filter kernels, and as the reference the fast paths are checked against.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Subtract the arithmetic mean from a signal
pub fn remove_mean(signal: &[f64]) -> Vec<f64> {
    if signal.is_empty() {
        return Vec::new();
    }
    let mean = signal.iter().sum::<f64>() / signal.len() as f64;
    signal.iter().map(|&s| s - mean).collect()
}

/// Magnitude spectrum of the non-negative frequencies
///
/// # Arguments
/// * `signal` - Real input of any length N
/// * `remove_dc` - Mean-centre the input first so bin 0 does not swamp the display
///
/// # Returns
/// |X[k]| for k = 0..N/2 (floor), excluding the Nyquist bin
pub fn dft_magnitude(signal: &[f64], remove_dc: bool) -> Vec<f64> {
    let n = signal.len();
    let centred;
    let x = if remove_dc {
        centred = remove_mean(signal);
        &centred[..]
    } else {
        signal
    };

    (0..n / 2)
        .map(|k| {
            let mut re = 0.0;
            let mut im = 0.0;
            for (i, &sample) in x.iter().enumerate() {
                let angle = -2.0 * PI * (k * i) as f64 / n as f64;
                re += sample * angle.cos();
                im += sample * angle.sin();
            }
            (re * re + im * im).sqrt()
        })
        .collect()
}

/// Complex spectrum at an explicitly requested number of bins
///
/// Bin k is evaluated at ω = 2πk / `output_length`. Requesting more bins than
/// samples zero-pads the input; requesting fewer evaluates a coarser grid.
///
/// # Arguments
/// * `signal` - Real input of length L
/// * `output_length` - Number of frequency bins to compute
pub fn dft_complex(signal: &[f64], output_length: usize) -> Vec<Complex64> {
    (0..output_length)
        .map(|k| {
            signal
                .iter()
                .enumerate()
                .fold(Complex64::new(0.0, 0.0), |acc, (i, &sample)| {
                    let angle = -2.0 * PI * (k * i) as f64 / output_length as f64;
                    acc + Complex64::new(sample * angle.cos(), sample * angle.sin())
                })
        })
        .collect()
}

/// Per-bin magnitude sqrt(re² + im²)
pub fn magnitude(spectrum: &[Complex64]) -> Vec<f64> {
    spectrum.iter().map(|c| c.norm()).collect()
}

/// Per-bin phase in radians, (-π, π]
pub fn phase(spectrum: &[Complex64]) -> Vec<f64> {
    spectrum
        .iter()
        .map(|c| {
            let p = c.im.atan2(c.re);
            if p <= -PI {
                p + 2.0 * PI
            } else {
                p
            }
        })
        .collect()
}

/// Per-bin phase in degrees, (-180, 180]
pub fn phase_degrees(spectrum: &[Complex64]) -> Vec<f64> {
    phase(spectrum).into_iter().map(f64::to_degrees).collect()
}
