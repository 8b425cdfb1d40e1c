//! Scope DSP - Real-Time Spectral Analysis Core
//!
//! Sliding-window FIR filtering, direct and fast Fourier transforms, and the
//! scaling and mode logic that drives a small monochrome scope display.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod error;
pub mod config;
pub mod filters;
pub mod spectrum;
pub mod display;
pub mod synthesis;
pub mod pipeline;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{AcquireError, CommandError, DspError};
pub use config::PipelineConfig;
pub use filters::{FirFilter, SlidingWindow};
pub use spectrum::{SpectrumAnalyzer, TransformKind};
pub use display::{DisplayFrame, DisplayMode, ModeController};
pub use pipeline::{CycleOutcome, SampleSource, ScopePipeline};
