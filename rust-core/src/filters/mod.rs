//! FIR filtering over a sliding window of past samples

pub mod window;
pub mod fir;
pub mod kernels;
pub mod response;

pub use window::SlidingWindow;
pub use fir::FirFilter;
pub use response::FrequencyResponse;
