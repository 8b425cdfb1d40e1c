//! Sliding window of the most recent input samples
//!
//! Backs the FIR delay line. The window always holds exactly M values and
//! starts zero-filled, so the first M-1 filter outputs see a cold start.

use crate::error::DspError;
use ringbuf::{HeapRb, Rb};

/// Fixed-length FIFO of past samples, exposed newest first
pub struct SlidingWindow {
    /// Samples in arrival order (oldest at the head)
    ring: HeapRb<f64>,

    /// Lag-ordered view: `lags[k]` is the sample from k pushes ago
    lags: Vec<f64>,
}

impl SlidingWindow {
    /// Create a zero-filled window
    ///
    /// # Arguments
    /// * `length` - Window length M (number of taps it will feed)
    pub fn new(length: usize) -> Result<Self, DspError> {
        if length == 0 {
            return Err(DspError::ZeroLength);
        }

        let mut ring = HeapRb::<f64>::new(length);
        for _ in 0..length {
            ring.push_overwrite(0.0);
        }

        Ok(Self {
            ring,
            lags: vec![0.0; length],
        })
    }

    /// Insert a sample, evicting the oldest one
    ///
    /// # Returns
    /// Window contents with index 0 = most recent sample
    #[inline]
    pub fn push(&mut self, sample: f64) -> &[f64] {
        self.ring.push_overwrite(sample);

        for (slot, &value) in self.lags.iter_mut().zip(self.ring.iter().rev()) {
            *slot = value;
        }

        &self.lags
    }

    /// Current window contents, newest first
    pub fn as_slice(&self) -> &[f64] {
        &self.lags
    }

    /// Window length M
    pub fn len(&self) -> usize {
        self.lags.len()
    }

    /// Always false: a window holds at least one slot
    pub fn is_empty(&self) -> bool {
        self.lags.is_empty()
    }

    /// Return to the zero-filled cold-start state
    pub fn reset(&mut self) {
        for _ in 0..self.lags.len() {
            self.ring.push_overwrite(0.0);
        }
        self.lags.fill(0.0);
    }
}
