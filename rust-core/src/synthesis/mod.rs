//! Test-signal synthesis: Fourier square waves and AM

pub mod fourier;
pub mod modulation;
pub mod am_scope;

pub use fourier::{square_wave, to_dac_codes, Waveform};
pub use modulation::{am_modulate, demodulate, envelope, peak_normalize};
pub use am_scope::AmScope;
