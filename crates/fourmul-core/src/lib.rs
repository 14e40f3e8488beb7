//! # fourmul-core
//!
//! Iterative radix-2 FFT/IFFT kernel with real linear convolution by
//! spectral multiplication. Transforms are decimation-in-frequency,
//! double-buffered per stage, and produce natural-order output.

pub mod complex;
pub mod convolve;
pub mod error;
pub mod transform;
pub mod twiddle;

// Re-exports
pub use complex::{Complex, ComplexBuffer};
pub use convolve::convolve;
pub use error::FftError;
pub use transform::{fft, ifft};
