//! Fourier-series synthesis of a square wave
//!
//! Partial sum of odd harmonics, scaled to DAC codes for playback.

use crate::display::quantize;
use crate::error::DspError;
use std::f64::consts::TAU;

/// One period of a synthesized waveform
#[derive(Debug, Clone)]
pub struct Waveform {
    /// Samples of one period
    pub samples: Vec<f64>,

    /// Time between samples in seconds
    pub sample_period: f64,
}

impl Waveform {
    /// Sample period in whole microseconds (DAC pacing)
    pub fn sample_period_us(&self) -> u64 {
        (self.sample_period * 1_000_000.0).round() as u64
    }
}

/// Square wave from odd harmonics: Σ sin(2π k f t) / k for k = 1, 3, ..., N
///
/// # Arguments
/// * `harmonics` - Highest harmonic N (odd, positive)
/// * `frequency` - Fundamental in Hz
/// * `samples_per_cycle` - Samples in one period
pub fn square_wave(
    harmonics: usize,
    frequency: f64,
    samples_per_cycle: usize,
) -> Result<Waveform, DspError> {
    if harmonics == 0 || harmonics % 2 == 0 {
        return Err(DspError::EvenHarmonicCount(harmonics));
    }
    if samples_per_cycle == 0 {
        return Err(DspError::ZeroLength);
    }
    if frequency.is_nan() || frequency <= 0.0 {
        return Err(DspError::InvalidConfig("fundamental must be positive".into()));
    }

    let period = 1.0 / frequency;
    let dt = period / samples_per_cycle as f64;

    let samples = (0..samples_per_cycle)
        .map(|n| {
            let t = n as f64 * dt;
            (1..=harmonics)
                .step_by(2)
                .map(|k| (TAU * k as f64 * frequency * t).sin() / k as f64)
                .sum()
        })
        .collect();

    Ok(Waveform {
        samples,
        sample_period: dt,
    })
}

/// Map a waveform onto 8-bit DAC codes, truncating (only the max reaches 255)
pub fn to_dac_codes(samples: &[f64]) -> Vec<u8> {
    quantize(samples, 256)
        .into_iter()
        .map(|code| code.min(u8::MAX as usize) as u8)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_fundamental_only_is_sine() {
        let wave = square_wave(1, 1000.0, 100).unwrap();

        assert_eq!(wave.samples.len(), 100);
        assert!((wave.sample_period - 1e-5).abs() < 1e-15);
        assert_eq!(wave.sample_period_us(), 10);
        assert!((wave.samples[25] - 1.0).abs() < 1e-12);
        assert!((wave.samples[75] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_sum_converges() {
        // At a quarter period the series tends to π/4
        let wave = square_wave(101, 1000.0, 100).unwrap();
        assert!((wave.samples[25] - PI / 4.0).abs() < 0.01);
        assert!((wave.samples[75] + PI / 4.0).abs() < 0.01);
    }

    #[test]
    fn test_rejects_even_harmonics() {
        assert_eq!(square_wave(4, 1000.0, 100).err(), Some(DspError::EvenHarmonicCount(4)));
        assert_eq!(square_wave(0, 1000.0, 100).err(), Some(DspError::EvenHarmonicCount(0)));
        assert_eq!(square_wave(3, 1000.0, 0).err(), Some(DspError::ZeroLength));
        assert!(square_wave(3, -5.0, 100).is_err());
    }

    #[test]
    fn test_dac_codes_span_full_range() {
        let wave = square_wave(5, 1000.0, 100).unwrap();
        let codes = to_dac_codes(&wave.samples);

        assert_eq!(codes.len(), 100);
        assert_eq!(codes.iter().copied().min(), Some(0));
        assert_eq!(codes.iter().copied().max(), Some(255));
    }

    #[test]
    fn test_dac_codes_truncate() {
        assert_eq!(to_dac_codes(&[-1.0, 0.0, 0.999, 1.0]), vec![0, 127, 254, 255]);
    }

    #[test]
    fn test_dac_codes_flat_input() {
        assert_eq!(to_dac_codes(&[0.3; 4]), vec![0; 4]);
    }
}
