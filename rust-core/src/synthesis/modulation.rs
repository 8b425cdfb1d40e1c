//! Amplitude modulation and envelope demodulation

use crate::error::DspError;
use crate::filters::FirFilter;
use std::f64::consts::TAU;

/// Double-sideband AM with carrier: (1 + m·x[n]) · cos(2π f_c n / f_s)
///
/// # Arguments
/// * `message` - Modulating signal, expected within [-1, 1]
/// * `carrier_hz` - Carrier frequency
/// * `sample_rate` - Sample rate in Hz
/// * `index` - Modulation index m
pub fn am_modulate(message: &[f64], carrier_hz: f64, sample_rate: f64, index: f64) -> Vec<f64> {
    message
        .iter()
        .enumerate()
        .map(|(n, &x)| {
            let carrier = (TAU * carrier_hz * n as f64 / sample_rate).cos();
            (1.0 + index * x) * carrier
        })
        .collect()
}

/// Scale so the largest magnitude is 1; silence is returned unchanged
pub fn peak_normalize(signal: &[f64]) -> Vec<f64> {
    let peak = signal.iter().fold(0.0_f64, |acc, &s| acc.max(s.abs()));
    if peak == 0.0 {
        return signal.to_vec();
    }
    signal.iter().map(|&s| s / peak).collect()
}

/// Rectifying envelope detector |x[n]|
pub fn envelope(signal: &[f64]) -> Vec<f64> {
    signal.iter().map(|s| s.abs()).collect()
}

/// Recover the message: rectify, smooth with `kernel`, peak-normalize
///
/// The kernel should be a low-pass that rejects the rectified carrier.
pub fn demodulate(signal: &[f64], kernel: Vec<f64>) -> Result<Vec<f64>, DspError> {
    let mut smoother = FirFilter::new(kernel)?;
    let smoothed = smoother.filter_sequence(&envelope(signal));
    Ok(peak_normalize(&smoothed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correlation(a: &[f64], b: &[f64]) -> f64 {
        let n = a.len() as f64;
        let ma = a.iter().sum::<f64>() / n;
        let mb = b.iter().sum::<f64>() / n;
        let cov: f64 = a.iter().zip(b).map(|(x, y)| (x - ma) * (y - mb)).sum();
        let va: f64 = a.iter().map(|x| (x - ma).powi(2)).sum();
        let vb: f64 = b.iter().map(|y| (y - mb).powi(2)).sum();
        cov / (va * vb).sqrt()
    }

    #[test]
    fn test_unmodulated_is_carrier() {
        let am = am_modulate(&[0.0; 8], 1000.0, 4000.0, 1.0);
        let expected = [1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0, 0.0];
        for (a, e) in am.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_peak_normalize() {
        assert_eq!(peak_normalize(&[1.0, -4.0, 2.0]), vec![0.25, -1.0, 0.5]);
        assert_eq!(peak_normalize(&[0.0, 0.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_round_trip_recovers_message() {
        let fs = 8000.0;
        let message: Vec<f64> = (0..800)
            .map(|n| (TAU * 50.0 * n as f64 / fs).sin())
            .collect();

        let am = peak_normalize(&am_modulate(&message, 2000.0, fs, 0.5));
        // Four-sample average spans one carrier period
        let recovered = demodulate(&am, vec![0.25; 4]).unwrap();

        assert_eq!(recovered.len(), message.len());
        assert!(correlation(&recovered[50..], &message[50..]) > 0.99);
        assert!(recovered.iter().all(|&r| r <= 1.0 + 1e-12));
    }

    #[test]
    fn test_demodulate_rejects_empty_kernel() {
        assert_eq!(demodulate(&[1.0], vec![]).err(), Some(DspError::EmptyKernel));
    }
}
