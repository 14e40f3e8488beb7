//! Digit split and reassembly for the byte-level product.
//!
//! Operand bytes become little-endian base-256 coefficients in the balanced
//! range [-128, 127]: a digit of 128 or more is replaced by `digit - 256`
//! with a unit carried into the next position. Raw reinterpretation of bytes
//! as `i8` only preserves the operand's value when every byte is below 0x80;
//! the balanced form preserves it for any non-negative operand, and the
//! halved magnitudes halve the convolution's rounding error.

/// Bits per coefficient digit.
pub const BITS_IN_BYTE: usize = 8;

/// Split big-endian bytes into little-endian balanced coefficients.
///
/// The result has at most one coefficient more than the input has bytes
/// (a final carry out of the top digit).
#[must_use]
pub fn to_coefficients(bytes: &[u8]) -> Vec<f64> {
    let mut coeffs = Vec::with_capacity(bytes.len() + 1);
    let mut carry = 0i16;
    for &byte in bytes.iter().rev() {
        let digit = i16::from(byte) + carry;
        if digit >= 128 {
            coeffs.push(f64::from(digit - 256));
            carry = 1;
        } else {
            coeffs.push(f64::from(digit));
            carry = 0;
        }
    }
    if carry != 0 {
        coeffs.push(1.0);
    }
    coeffs
}

/// Round coefficients and propagate base-256 carries into big-endian bytes.
///
/// Digits run least to most significant; each contributes its low byte and
/// an arithmetic-shift carry into the next. The carry out of the top digit
/// is dropped, which truncates nothing for operands whose combined byte
/// length fits the convolution length.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn from_coefficients(coeffs: &[f64]) -> Vec<u8> {
    let len = coeffs.len();
    let mut bytes = vec![0u8; len];
    let mut carry = 0i64;
    for (i, &coeff) in coeffs.iter().enumerate() {
        let digit = coeff.round() as i64 + carry;
        bytes[len - 1 - i] = (digit & 0xFF) as u8;
        carry = digit >> BITS_IN_BYTE;
    }
    bytes
}
