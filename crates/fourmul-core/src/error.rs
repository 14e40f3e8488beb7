//! Error type for the transform kernel.

/// Error type for FFT/IFFT operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FftError {
    /// Transform length is not a power of two.
    #[error("transform length {0} is not a power of two")]
    InvalidLength(usize),

    /// Paired real/imaginary planes differ in length.
    #[error("real plane has {re} samples but imaginary plane has {im}")]
    PlaneMismatch {
        /// Length of the real plane.
        re: usize,
        /// Length of the imaginary plane.
        im: usize,
    },
}
