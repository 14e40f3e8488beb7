//! Forward and inverse radix-2 transforms.
//!
//! Decimation-in-frequency, iterated over `log2(n)` stages. Each stage reads
//! from one buffer and writes to the other; the roles swap between stages.
//! A single-buffer in-place update would overwrite inputs a later butterfly
//! of the same stage still needs. Output is in natural order.

use crate::complex::ComplexBuffer;
use crate::error::FftError;
use crate::twiddle;

/// Forward transform of a real sequence.
///
/// Returns the unnormalized length-`n` spectrum. The input length must be a
/// power of two.
///
/// # Example
/// ```
/// let spectrum = fourmul_core::fft(&[1.0, 1.0, 1.0, 1.0]).unwrap();
/// assert!((spectrum.re()[0] - 4.0).abs() < 1e-12);
/// assert!(spectrum.re()[1].abs() < 1e-12);
/// ```
pub fn fft(input: &[f64]) -> Result<ComplexBuffer, FftError> {
    ensure_power_of_two(input.len())?;
    Ok(forward(ComplexBuffer::from_real(input)))
}

/// Inverse transform of a complex spectrum given as two parallel planes.
///
/// Returns both planes divided by `n`. Fails if the planes differ in length
/// or the length is not a power of two.
pub fn ifft(re: &[f64], im: &[f64]) -> Result<ComplexBuffer, FftError> {
    let buf = ComplexBuffer::from_planes(re.to_vec(), im.to_vec())?;
    ensure_power_of_two(buf.len())?;
    Ok(inverse(buf))
}

fn ensure_power_of_two(n: usize) -> Result<(), FftError> {
    if n.is_power_of_two() {
        Ok(())
    } else {
        Err(FftError::InvalidLength(n))
    }
}

/// Forward stage driver. Callers guarantee a power-of-two length.
pub(crate) fn forward(mut prev: ComplexBuffer) -> ComplexBuffer {
    let n = prev.len();
    if n < 2 {
        return prev;
    }
    let n2 = n / 2;
    let stages = twiddle::forward_stages(n);
    let mut next = ComplexBuffer::zeroed(n);

    for (table, s) in stages.iter().zip((0..=n2.trailing_zeros()).rev()) {
        for k in 0..n2 {
            let index = k >> s;
            let from0 = (index << s) + k;
            let from1 = from0 + (1usize << s);
            let a = prev.get(from0);
            let p = table.w(index) * prev.get(from1);
            next.set(k, a + p);
            next.set(k + n2, a - p);
        }
        std::mem::swap(&mut prev, &mut next);
    }
    prev
}

/// Inverse stage driver with the final `1/n` scaling.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn inverse(mut prev: ComplexBuffer) -> ComplexBuffer {
    let n = prev.len();
    if n < 2 {
        return prev;
    }
    let n2 = n / 2;
    let stages = twiddle::inverse_stages(n);
    let mut next = ComplexBuffer::zeroed(n);

    let mut i = n2; // group size, halved each stage
    for table in stages.iter() {
        for k in 0..n2 {
            let index = k / i;
            let from0 = index * i + k;
            let from1 = from0 + i;
            let a = prev.get(from0);
            let p = table.w(index) * prev.get(from1);
            next.set(k, a + p);
            next.set(k + n2, a - p);
        }
        std::mem::swap(&mut prev, &mut next);
        i >>= 1;
    }

    prev.scale(1.0 / n as f64);
    prev
}
