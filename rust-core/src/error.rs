//! Error types for the DSP pipeline
//!
//! Configuration problems are fatal at construction time; command and
//! acquisition problems are confined to a single prompt or cycle.

use thiserror::Error;

/// Configuration errors raised while building pipeline stages
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DspError {
    #[error("Transform length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    #[error("Coefficient kernel is empty")]
    EmptyKernel,

    #[error("Sample buffer length must be non-zero")]
    ZeroLength,

    #[error("Harmonic count must be odd and positive (found: {0})")]
    EvenHarmonicCount(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Unrecognized token in the diagnostics dispatcher
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Enter 1, 2, 3, 4, 5 or q.")]
    Unknown(String),
}

/// Failure reported by the acquisition collaborator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AcquireError {
    #[error("Acquisition interrupted")]
    Interrupted,

    #[error("Expected {expected} samples, acquired {actual}")]
    ShortRead { expected: usize, actual: usize },
}
