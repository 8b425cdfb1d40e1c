//! Display-mode state machine
//!
//! Alternates between the time-domain trace and the spectrum on a fixed
//! interval measured against an externally supplied monotonic clock.

use std::time::Instant;
use tracing::debug;

/// Monotonic millisecond clock supplied by the host
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// `Instant`-backed clock counting from construction
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// What the scope currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Time,
    Frequency,
}

impl DisplayMode {
    fn toggled(self) -> Self {
        match self {
            DisplayMode::Time => DisplayMode::Frequency,
            DisplayMode::Frequency => DisplayMode::Time,
        }
    }
}

/// Timer-driven TIME <-> FREQUENCY controller
#[derive(Debug, Clone)]
pub struct ModeController {
    mode: DisplayMode,

    /// Timestamp of the last transition (ms)
    last_toggle_ms: u64,

    /// Minimum time between transitions (ms)
    interval_ms: u64,
}

impl ModeController {
    /// Start in TIME mode at `now_ms`
    pub fn new(interval_ms: u64, now_ms: u64) -> Self {
        Self {
            mode: DisplayMode::Time,
            last_toggle_ms: now_ms,
            interval_ms,
        }
    }

    /// Check the timer, toggling when strictly more than the interval has elapsed
    ///
    /// # Returns
    /// Mode to render this cycle
    pub fn tick(&mut self, now_ms: u64) -> DisplayMode {
        let elapsed = now_ms.saturating_sub(self.last_toggle_ms);

        if elapsed > self.interval_ms {
            self.mode = self.mode.toggled();
            self.last_toggle_ms = now_ms;
            debug!(mode = ?self.mode, elapsed_ms = elapsed, "display mode toggled");
        }

        self.mode
    }

    /// Current mode without touching the timer
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Timestamp of the last transition
    pub fn last_toggle_ms(&self) -> u64 {
        self.last_toggle_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_time_mode() {
        let controller = ModeController::new(3000, 500);
        assert_eq!(controller.mode(), DisplayMode::Time);
        assert_eq!(controller.last_toggle_ms(), 500);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut controller = ModeController::new(3000, 0);

        assert_eq!(controller.tick(1000), DisplayMode::Time);
        assert_eq!(controller.tick(3000), DisplayMode::Time);
        assert_eq!(controller.tick(3001), DisplayMode::Frequency);
        assert_eq!(controller.last_toggle_ms(), 3001);
    }

    #[test]
    fn test_alternates() {
        let mut controller = ModeController::new(3000, 0);
        let mut seen = Vec::new();

        for t in (0..=20_000).step_by(100) {
            let before = controller.mode();
            let after = controller.tick(t);
            if before != after {
                seen.push((t, after));
            }
        }

        assert_eq!(
            seen,
            vec![
                (3100, DisplayMode::Frequency),
                (6200, DisplayMode::Time),
                (9300, DisplayMode::Frequency),
                (12400, DisplayMode::Time),
                (15500, DisplayMode::Frequency),
                (18600, DisplayMode::Time),
            ]
        );
    }

    #[test]
    fn test_single_toggle_after_long_gap() {
        // A long stall yields one transition, not several
        let mut controller = ModeController::new(3000, 0);
        assert_eq!(controller.tick(100_000), DisplayMode::Frequency);
        assert_eq!(controller.tick(100_001), DisplayMode::Frequency);
    }

    #[test]
    fn test_clock_going_backwards_does_not_toggle() {
        let mut controller = ModeController::new(3000, 10_000);
        assert_eq!(controller.tick(0), DisplayMode::Time);
    }

    #[test]
    fn test_monotonic_clock() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
