//! Error type for FFT-backed integer multiplication.

use fourmul_core::FftError;

/// Error type for big integer multiplication.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MulError {
    /// Input bytes encode a negative two's-complement integer.
    #[error("negative operand: leading byte has its high bit set")]
    NegativeInput,

    /// Operands are too long for exact double-precision convolution.
    #[error("operands total {total} bytes, above the {max}-byte precision bound")]
    PrecisionExceeded {
        /// Combined operand length in bytes.
        total: usize,
        /// Largest combined length with exact results.
        max: usize,
    },

    /// Transform failure.
    #[error(transparent)]
    Fft(#[from] FftError),
}
