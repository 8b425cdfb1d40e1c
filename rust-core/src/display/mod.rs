//! Display side of the pipeline: scaling, frame layouts, mode control

pub mod normalize;
pub mod frame;
pub mod render;
pub mod controller;
pub mod commands;

pub use normalize::{bin_reduce, normalize, quantize, scale_to_full_scale, scale_to_peak, scale_to_range};
pub use frame::{DisplayFrame, FrameMarks, mirrored_bars, needle_bars, pixel_trace, spaced_bars};
pub use render::{Renderer, TextRenderer, ascii_plot, frame_to_text};
pub use controller::{Clock, DisplayMode, ModeController, MonotonicClock};
pub use commands::{Command, CommandSource, DiagnosticsConfig, DiagnosticsView, Dispatch, MENU, run_diagnostics};
