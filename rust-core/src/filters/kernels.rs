//! Coefficient tables used by the demos
//!
//! Coefficients are supplied, not designed here.

/// Order-20 linear-phase low-pass, Hamming window, -3 dB at 100 Hz for fs = 5 kHz
pub const LOWPASS_100HZ_ORDER20: [f64; 21] = [
    -0.00000062, -0.00212227, -0.00632535, -0.01161181, -0.01235466,
    0.00000000, 0.03177450, 0.08143591, 0.13749378, 0.18212549,
    0.19916883, 0.18212549, 0.13749378, 0.08143591, 0.03177450,
    0.00000000, -0.01235466, -0.01161181, -0.00632535, -0.00212227,
    -0.00000062,
];

/// Three-tap smoothing kernel [1/4, 1/2, 1/4]
pub const SMOOTHING_3TAP: [f64; 3] = [0.25, 0.5, 0.25];
