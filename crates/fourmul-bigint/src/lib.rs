//! # fourmul-bigint
//!
//! Big integer multiplication built on FFT convolution: operand bytes become
//! base-256 polynomial coefficients, the coefficient vectors are convolved
//! spectrally, and carries are propagated to reassemble the product.

pub mod error;
pub mod mul;
pub mod poly;

// Re-exports
pub use error::MulError;
pub use mul::{fft_mul, mul, mul_bytes};
