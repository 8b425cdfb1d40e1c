//! AM scope view
//!
//! Shows one AM frame alternately as a waveform and as a spectrum of thin
//! bars, switching on every frame rather than on a timer.

use crate::display::{needle_bars, pixel_trace, scale_to_peak, scale_to_range, DisplayFrame, DisplayMode};
use crate::error::DspError;
use crate::spectrum::{magnitude, recursive_fft};
use tracing::debug;

/// Alternating waveform/spectrum view of a fixed signal
#[derive(Debug, Clone)]
pub struct AmScope {
    signal: Vec<f64>,

    /// Waveform is drawn on [-full_scale, full_scale]
    full_scale: f64,

    width: usize,
    height: usize,

    /// Mode of the next frame
    mode: DisplayMode,
}

impl AmScope {
    /// # Arguments
    /// * `signal` - Samples to show; length must be a power of two
    /// * `full_scale` - Peak amplitude mapped to the top row
    /// * `width`, `height` - Display size in pixels
    pub fn new(signal: Vec<f64>, full_scale: f64, width: usize, height: usize) -> Result<Self, DspError> {
        if signal.is_empty() {
            return Err(DspError::ZeroLength);
        }
        if !signal.len().is_power_of_two() {
            return Err(DspError::NotPowerOfTwo(signal.len()));
        }
        if width == 0 || height == 0 {
            return Err(DspError::InvalidConfig("display size must be non-zero".into()));
        }
        if full_scale.is_nan() || full_scale <= 0.0 {
            return Err(DspError::InvalidConfig("full scale must be positive".into()));
        }

        Ok(Self {
            signal,
            full_scale,
            width,
            height,
            mode: DisplayMode::Time,
        })
    }

    /// Render the current mode, then flip for the next call
    pub fn next_frame(&mut self) -> Result<(DisplayMode, DisplayFrame), DspError> {
        let mode = self.mode;
        let frame = match mode {
            DisplayMode::Time => self.waveform_frame(),
            DisplayMode::Frequency => self.spectrum_frame()?,
        };

        self.mode = match mode {
            DisplayMode::Time => DisplayMode::Frequency,
            DisplayMode::Frequency => DisplayMode::Time,
        };
        debug!(?mode, "am scope frame");

        Ok((mode, frame))
    }

    /// Every `len / width`-th sample as one pixel per column
    pub fn waveform_frame(&self) -> DisplayFrame {
        let step = (self.signal.len() / self.width).max(1);
        let thinned: Vec<f64> = self
            .signal
            .iter()
            .step_by(step)
            .take(self.width)
            .copied()
            .collect();

        let heights = scale_to_range(&thinned, -self.full_scale, self.full_scale, self.height);
        pixel_trace(&heights, self.width, self.height)
    }

    /// One-pixel bars for the first width/2 bins, two columns apart
    pub fn spectrum_frame(&self) -> Result<DisplayFrame, DspError> {
        let spectrum = recursive_fft(&self.signal)?;
        let half = magnitude(&spectrum[..self.signal.len() / 2]);
        let shown = half.len().min(self.width / 2);
        let heights = scale_to_peak(&half[..shown], self.height);

        Ok(needle_bars(&heights, 2, self.width, self.height))
    }
}
