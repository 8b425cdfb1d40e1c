//! Scope demo: filter diagnostics over stdin, or a few scope cycles
//!
//! Usage:
//!   scope-demo              interactive diagnostics menu
//!   scope-demo scope [N]    run N pipeline cycles on a synthetic ADC
//!   scope-demo synth [H]    plot an H-harmonic square wave and its DAC codes
//!   scope-demo am [N]       show N frames of an AM signal, waveform and spectrum in turn

use std::f64::consts::TAU;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use scope_dsp::display::{
    ascii_plot, run_diagnostics, CommandSource, DiagnosticsConfig, DiagnosticsView, MonotonicClock,
    Renderer, TextRenderer, MENU,
};
use scope_dsp::filters::kernels::LOWPASS_100HZ_ORDER20;
use scope_dsp::synthesis::{am_modulate, square_wave, to_dac_codes, AmScope};
use scope_dsp::{AcquireError, CommandError, DisplayFrame, PipelineConfig, SampleSource, ScopePipeline};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const SAMPLE_RATE: f64 = 5000.0;
const TONES_HZ: [f64; 7] = [10.0, 60.0, 100.0, 550.0, 800.0, 900.0, 1000.0];

/// Sum of test tones; low tones pass the 100 Hz kernel, high ones do not
fn multi_tone(len: usize, start: usize) -> Vec<f64> {
    (start..start + len)
        .map(|n| {
            let t = n as f64 / SAMPLE_RATE;
            TONES_HZ.iter().map(|f| (TAU * f * t).sin()).sum()
        })
        .collect()
}

/// Reads one token per line from stdin, reprinting the menu
struct StdinCommands {
    lines: io::Lines<io::StdinLock<'static>>,
}

impl CommandSource for StdinCommands {
    fn next_token(&mut self) -> Option<String> {
        print!("{MENU}\n> ");
        if let Err(err) = io::stdout().flush() {
            warn!(%err, "failed to flush prompt");
        }
        self.lines.next().and_then(Result::ok)
    }

    fn report(&mut self, error: &CommandError) {
        println!("{error}");
    }
}

/// Prints each frame as soon as it arrives
struct StdoutRenderer(TextRenderer);

impl Renderer for StdoutRenderer {
    fn render(&mut self, frame: &DisplayFrame) {
        self.0.render(frame);
        if let Some(text) = self.0.last() {
            println!("{text}");
        }
    }
}

/// Multi-tone shifted onto a 12-bit ADC range
struct SyntheticAdc {
    position: usize,
}

impl SampleSource for SyntheticAdc {
    fn acquire(&mut self, len: usize) -> Result<Vec<f64>, AcquireError> {
        let frame = multi_tone(len, self.position)
            .into_iter()
            .map(|s| 2048.0 + 280.0 * s)
            .collect();
        self.position += len;
        Ok(frame)
    }
}

fn run_scope(cycles: usize) -> Result<(), Box<dyn std::error::Error>> {
    let config = PipelineConfig {
        kernel: Some(LOWPASS_100HZ_ORDER20.to_vec()),
        toggle_interval_ms: 500,
        ..PipelineConfig::default()
    };
    let mut scope = ScopePipeline::new(
        config,
        SyntheticAdc { position: 0 },
        StdoutRenderer(TextRenderer::new()),
        MonotonicClock::new(),
    )?;

    for _ in 0..cycles {
        let outcome = scope.run_cycle()?;
        info!(?outcome, "cycle finished");
        thread::sleep(Duration::from_millis(200));
    }
    Ok(())
}

fn run_menu() -> Result<(), Box<dyn std::error::Error>> {
    let view = DiagnosticsView::new(
        multi_tone(256, 0),
        LOWPASS_100HZ_ORDER20.to_vec(),
        DiagnosticsConfig::default(),
    )?;

    let mut commands = StdinCommands {
        lines: io::stdin().lock().lines(),
    };
    let mut renderer = StdoutRenderer(TextRenderer::new());

    let rendered = run_diagnostics(&view, &mut commands, &mut renderer);
    info!(rendered, "diagnostics finished");
    Ok(())
}

fn run_synth(harmonics: usize) -> Result<(), Box<dyn std::error::Error>> {
    let wave = square_wave(harmonics, 1000.0, 100)?;
    let codes = to_dac_codes(&wave.samples);

    for line in ascii_plot(&wave.samples, 16, 100) {
        println!("{line}");
    }
    info!(
        harmonics,
        period_us = wave.sample_period_us(),
        first = codes.first().copied(),
        peak = codes.iter().copied().max(),
        "square wave synthesized"
    );
    Ok(())
}

fn run_am(frames: usize) -> Result<(), Box<dyn std::error::Error>> {
    const AM_RATE: f64 = 10_000.0;

    let message: Vec<f64> = (0..256)
        .map(|n| (TAU * 100.0 * n as f64 / AM_RATE).cos())
        .collect();
    let signal = am_modulate(&message, 1000.0, AM_RATE, 1.5);

    let mut scope = AmScope::new(signal, 1.5, 128, 32)?;
    let mut renderer = StdoutRenderer(TextRenderer::new());

    for _ in 0..frames {
        let (mode, frame) = scope.next_frame()?;
        info!(?mode, "am frame");
        renderer.render(&frame);
        thread::sleep(Duration::from_secs(1));
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("scope") => {
            let cycles = args.next().and_then(|n| n.parse().ok()).unwrap_or(20);
            run_scope(cycles)
        }
        Some("synth") => {
            let harmonics = args.next().and_then(|n| n.parse().ok()).unwrap_or(15);
            run_synth(harmonics)
        }
        Some("am") => {
            let frames = args.next().and_then(|n| n.parse().ok()).unwrap_or(6);
            run_am(frames)
        }
        _ => run_menu(),
    }
}
