//! Public multiplication API.
//!
//! `mul_bytes` is the byte-level product over FFT convolution; `mul` and
//! `fft_mul` bridge it to `num-bigint`, routing small operands to native
//! multiplication.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use fourmul_core::convolve;

use crate::error::MulError;
use crate::poly::{from_coefficients, to_coefficients};

/// Operand byte length above which FFT multiplication is used.
const FFT_BYTE_THRESHOLD: usize = 4096;

/// Largest combined operand length, in bytes, for which the convolution is
/// guaranteed to round to the exact integer product at double precision.
pub const MAX_TOTAL_BYTES: usize = 2_000_000;

/// Multiply two big-endian two's-complement byte strings.
///
/// Both operands must be non-negative (leading byte below 0x80). The output
/// has the convolution length, leading zeros included; reinterpreted as a
/// two's-complement integer it equals the exact product.
pub fn mul_bytes(a: &[u8], b: &[u8]) -> Result<Vec<u8>, MulError> {
    if a.is_empty() || b.is_empty() {
        return Ok(vec![0]);
    }
    if a[0] >= 0x80 || b[0] >= 0x80 {
        return Err(MulError::NegativeInput);
    }
    let total = a.len() + b.len();
    if total > MAX_TOTAL_BYTES {
        return Err(MulError::PrecisionExceeded {
            total,
            max: MAX_TOTAL_BYTES,
        });
    }

    let coeffs_a = to_coefficients(a);
    let coeffs_b = to_coefficients(b);
    let product = convolve(&coeffs_a, &coeffs_b);
    Ok(from_coefficients(&product))
}

/// Multiply two `BigInt`s, using FFT for large operands.
pub fn mul(a: &BigInt, b: &BigInt) -> Result<BigInt, MulError> {
    let max_bytes = byte_len(a).max(byte_len(b));
    if max_bytes >= FFT_BYTE_THRESHOLD {
        tracing::debug!(max_bytes, "routing to FFT multiplication");
        fft_mul(a, b)
    } else {
        Ok(a * b)
    }
}

/// FFT multiplication of two `BigInt`s.
///
/// Signs are handled here: the magnitudes go through the byte-level product
/// and the result sign is the product of the operand signs.
pub fn fft_mul(a: &BigInt, b: &BigInt) -> Result<BigInt, MulError> {
    if a.is_zero() || b.is_zero() {
        return Ok(BigInt::ZERO);
    }

    let sign = if a.sign() == b.sign() {
        Sign::Plus
    } else {
        Sign::Minus
    };

    let bytes_a = magnitude_bytes(a);
    let bytes_b = magnitude_bytes(b);
    let product = mul_bytes(&bytes_a, &bytes_b)?;

    Ok(BigInt::from_biguint(
        sign,
        BigUint::from_bytes_be(&product),
    ))
}

#[allow(clippy::cast_possible_truncation)]
fn byte_len(x: &BigInt) -> usize {
    (x.bits() as usize + 7) / 8
}

/// Big-endian magnitude bytes with a guard zero prepended when the top bit
/// is set, keeping the `mul_bytes` non-negative precondition.
fn magnitude_bytes(x: &BigInt) -> Vec<u8> {
    let bytes = x.magnitude().to_bytes_be();
    if bytes[0] >= 0x80 {
        let mut guarded = Vec::with_capacity(bytes.len() + 1);
        guarded.push(0);
        guarded.extend_from_slice(&bytes);
        guarded
    } else {
        bytes
    }
}
