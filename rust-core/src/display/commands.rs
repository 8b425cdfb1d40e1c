//! Command-driven filter diagnostics
//!
//! A dispatch table from menu tokens to spectral views. Unknown tokens are
//! reported and the prompt repeats; only `quit` ends the loop.

use super::frame::{pixel_trace, spaced_bars, DisplayFrame};
use super::normalize::{scale_to_peak, scale_to_range};
use super::render::Renderer;
use crate::error::{CommandError, DspError};
use crate::filters::{FirFilter, FrequencyResponse};
use crate::spectrum::dft_magnitude;
use std::str::FromStr;
use tracing::{info, warn};

/// Diagnostics menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowInputSpectrum,
    ShowFilteredSpectrum,
    ShowFilterMagnitude,
    ShowFilterPhase,
    ShowZoomedSpectrum,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "1" | "input" => Ok(Command::ShowInputSpectrum),
            "2" | "filtered" => Ok(Command::ShowFilteredSpectrum),
            "3" | "magnitude" => Ok(Command::ShowFilterMagnitude),
            "4" | "phase" => Ok(Command::ShowFilterPhase),
            "5" | "zoom" => Ok(Command::ShowZoomedSpectrum),
            "q" | "quit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Menu text shown before each prompt
pub const MENU: &str = "Commands:\n \
    1 - input signal spectrum\n \
    2 - filtered signal spectrum\n \
    3 - FIR magnitude response\n \
    4 - FIR phase response\n \
    5 - zoomed low-band spectrum\n \
    q - quit";

/// Supplies command tokens and receives error reports
pub trait CommandSource {
    /// Next token, or `None` when input is exhausted
    fn next_token(&mut self) -> Option<String>;

    /// Tell the user a token was rejected
    fn report(&mut self, error: &CommandError);
}

/// Result of dispatching one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Render(DisplayFrame),
    Quit,
}

/// Diagnostics view settings
#[derive(Debug, Clone)]
pub struct DiagnosticsConfig {
    pub width: usize,
    pub height: usize,

    /// Frequency grid for the kernel response plots
    pub response_points: usize,

    /// Leading spectrum bins shown by the zoom view
    pub zoom_bins: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 32,
            response_points: 128,
            zoom_bins: 12,
        }
    }
}

/// Input and filtered signals plus the kernel that links them
pub struct DiagnosticsView {
    config: DiagnosticsConfig,
    kernel: Vec<f64>,
    input: Vec<f64>,
    filtered: Vec<f64>,
}

impl DiagnosticsView {
    /// Filter `input` once with `kernel` and keep both for display
    pub fn new(
        input: Vec<f64>,
        kernel: Vec<f64>,
        config: DiagnosticsConfig,
    ) -> Result<Self, DspError> {
        if config.width == 0 || config.height == 0 {
            return Err(DspError::InvalidConfig("display size must be non-zero".into()));
        }
        if config.zoom_bins == 0 || config.response_points == 0 {
            return Err(DspError::ZeroLength);
        }

        let mut filter = FirFilter::new(kernel.clone())?;
        let filtered = filter.filter_sequence(&input);

        Ok(Self {
            config,
            kernel,
            input,
            filtered,
        })
    }

    /// Filtered signal (cold-start transient included)
    pub fn filtered(&self) -> &[f64] {
        &self.filtered
    }

    /// Run one command
    pub fn dispatch(&self, command: Command) -> Dispatch {
        info!(?command, "diagnostics view");

        match command {
            Command::ShowInputSpectrum => Dispatch::Render(self.spectrum_frame(&self.input)),
            Command::ShowFilteredSpectrum => Dispatch::Render(self.spectrum_frame(&self.filtered)),
            Command::ShowFilterMagnitude => Dispatch::Render(self.magnitude_frame()),
            Command::ShowFilterPhase => Dispatch::Render(self.phase_frame()),
            Command::ShowZoomedSpectrum => Dispatch::Render(self.zoom_frame()),
            Command::Quit => Dispatch::Quit,
        }
    }

    /// Two-pixel bars for the first width/2 bins
    fn spectrum_frame(&self, signal: &[f64]) -> DisplayFrame {
        let DiagnosticsConfig { width, height, .. } = self.config;

        let spectrum = dft_magnitude(signal, true);
        let heights = scale_to_peak(&spectrum, height);
        let shown = heights.len().min(width / 2);

        spaced_bars(&heights[..shown], 2, width, height)
    }

    /// Only the leading `zoom_bins` bins, spread across the display
    fn zoom_frame(&self) -> DisplayFrame {
        let DiagnosticsConfig {
            width,
            height,
            zoom_bins,
            ..
        } = self.config;

        let spectrum = dft_magnitude(&self.input, true);
        let shown = spectrum.len().min(zoom_bins);
        let heights = scale_to_peak(&spectrum[..shown], height);

        spaced_bars(&heights, width / zoom_bins, width, height)
    }

    fn magnitude_frame(&self) -> DisplayFrame {
        let response = FrequencyResponse::evaluate(&self.kernel, self.config.response_points);
        let heights = scale_to_peak(&response.magnitude(), self.config.height);

        pixel_trace(&heights, self.config.width, self.config.height).with_label("Mg")
    }

    fn phase_frame(&self) -> DisplayFrame {
        let response = FrequencyResponse::evaluate(&self.kernel, self.config.response_points);
        let heights = scale_to_range(&response.phase_degrees(), -180.0, 180.0, self.config.height);

        pixel_trace(&heights, self.config.width, self.config.height).with_label("Fs")
    }
}

/// Prompt loop: dispatch tokens until `quit` or the source runs dry
///
/// # Returns
/// Number of frames rendered
pub fn run_diagnostics<S, R>(view: &DiagnosticsView, source: &mut S, renderer: &mut R) -> usize
where
    S: CommandSource,
    R: Renderer,
{
    let mut rendered = 0;

    while let Some(token) = source.next_token() {
        let command = match token.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                warn!(%err, "rejected diagnostics command");
                source.report(&err);
                continue;
            }
        };

        match view.dispatch(command) {
            Dispatch::Render(frame) => {
                renderer.render(&frame);
                rendered += 1;
            }
            Dispatch::Quit => break,
        }
    }

    rendered
}
