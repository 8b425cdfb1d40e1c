//! Pipeline configuration
//!
//! Supplied once at construction and never mutated while the scope runs.

use crate::error::DspError;
use crate::spectrum::TransformKind;
use tracing::warn;

/// Scope pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Samples acquired per cycle
    pub acquisition_len: usize,

    /// Leading samples fed to the transform (N)
    pub transform_len: usize,

    /// Transform path for the spectrum view
    pub transform: TransformKind,

    /// Optional FIR kernel applied to every acquired frame
    pub kernel: Option<Vec<f64>>,

    /// Display size in pixels
    pub display_width: usize,
    pub display_height: usize,

    /// Time between TIME/FREQUENCY toggles (ms)
    pub toggle_interval_ms: u64,

    /// Keep one sample in `time_stride` for the time trace
    pub time_stride: usize,

    /// Fixed full scale of the acquired samples (4095 for a 12-bit ADC);
    /// `None` autoscales each frame
    pub adc_full_scale: Option<f64>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sample_rate: 5000.0,
            acquisition_len: 512,
            transform_len: 128,
            transform: TransformKind::Radix2,
            kernel: None,
            display_width: 128,
            display_height: 32,
            toggle_interval_ms: 3000,
            time_stride: 4,
            adc_full_scale: Some(4095.0),
        }
    }
}

impl PipelineConfig {
    /// Check every setting, reporting the first problem found
    pub fn validate(&self) -> Result<(), DspError> {
        let result = self.check();
        if let Err(err) = &result {
            warn!(%err, "rejected pipeline configuration");
        }
        result
    }

    fn check(&self) -> Result<(), DspError> {
        if self.acquisition_len == 0 || self.transform_len == 0 {
            return Err(DspError::ZeroLength);
        }
        if self.transform.requires_power_of_two() && !self.transform_len.is_power_of_two() {
            return Err(DspError::NotPowerOfTwo(self.transform_len));
        }
        if self.transform_len > self.acquisition_len {
            return Err(DspError::InvalidConfig(format!(
                "transform length {} exceeds acquisition length {}",
                self.transform_len, self.acquisition_len
            )));
        }
        if matches!(&self.kernel, Some(k) if k.is_empty()) {
            return Err(DspError::EmptyKernel);
        }
        if self.display_width == 0 || self.display_height == 0 {
            return Err(DspError::InvalidConfig("display size must be non-zero".into()));
        }
        if self.time_stride == 0 {
            return Err(DspError::InvalidConfig("time stride must be non-zero".into()));
        }
        if self.sample_rate.is_nan() || self.sample_rate <= 0.0 {
            return Err(DspError::InvalidConfig("sample rate must be positive".into()));
        }
        if matches!(self.adc_full_scale, Some(fs) if fs.is_nan() || fs <= 0.0) {
            return Err(DspError::InvalidConfig("ADC full scale must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(PipelineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_power_of_two_fast_path() {
        let config = PipelineConfig {
            transform_len: 96,
            ..PipelineConfig::default()
        };
        assert_eq!(config.validate(), Err(DspError::NotPowerOfTwo(96)));

        let direct = PipelineConfig {
            transform_len: 96,
            transform: TransformKind::Direct,
            ..PipelineConfig::default()
        };
        assert_eq!(direct.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_lengths() {
        let config = PipelineConfig {
            acquisition_len: 0,
            ..PipelineConfig::default()
        };
        assert_eq!(config.validate(), Err(DspError::ZeroLength));
    }

    #[test]
    fn test_rejects_empty_kernel() {
        let config = PipelineConfig {
            kernel: Some(vec![]),
            ..PipelineConfig::default()
        };
        assert_eq!(config.validate(), Err(DspError::EmptyKernel));
    }

    #[test]
    fn test_rejects_oversized_transform() {
        let config = PipelineConfig {
            transform_len: 1024,
            ..PipelineConfig::default()
        };
        assert!(matches!(config.validate(), Err(DspError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_bad_scales() {
        let config = PipelineConfig {
            adc_full_scale: Some(0.0),
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_err());

        let config = PipelineConfig {
            time_stride: 0,
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
