//! Spectral analysis: direct and fast Fourier transforms

pub mod dft;
pub mod fft;
pub mod analysis;

pub use dft::{dft_complex, dft_magnitude, magnitude, phase, phase_degrees, remove_mean};
pub use fft::{bit_reverse, bit_reverse_permute, radix2_fft, recursive_fft, PlannedFft};
pub use analysis::{AnalyzerConfig, SpectrumAnalyzer, TransformKind, frequency_axis};
