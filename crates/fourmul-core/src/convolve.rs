//! Real linear convolution by spectral multiplication.

use crate::complex::ComplexBuffer;
use crate::transform;

/// Linear convolution of two real sequences.
///
/// The output length is `|u| + |v|` rounded up to the next power of two
/// (at least 2). Its first `|u| + |v| - 1` entries are the linear
/// convolution; the remainder is floating-point residue near zero. Callers
/// wanting the exact length truncate.
///
/// Both spectra are treated as general complex sequences even though real
/// input makes them conjugate-symmetric; the engine does not exploit the
/// symmetry.
#[must_use]
pub fn convolve(u: &[f64], v: &[f64]) -> Vec<f64> {
    if u.is_empty() && v.is_empty() {
        return Vec::new();
    }
    let n = (u.len() + v.len()).max(2).next_power_of_two();
    tracing::trace!(n, u_len = u.len(), v_len = v.len(), "spectral convolution");

    let mut a = vec![0.0; n];
    a[..u.len()].copy_from_slice(u);
    let mut b = vec![0.0; n];
    b[..v.len()].copy_from_slice(v);

    // Lengths are powers of two by construction, so the drivers are used
    // directly instead of the fallible entry points.
    let fu = transform::forward(ComplexBuffer::from_real(&a));
    let fv = transform::forward(ComplexBuffer::from_real(&b));

    let mut product = ComplexBuffer::zeroed(n);
    for k in 0..n {
        product.set(k, fu.get(k) * fv.get(k));
    }

    let (re, _im) = transform::inverse(product).into_planes();
    re
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn small_convolution() {
        // [1,2,3] * [1,1] = [1,3,5,5,3], padded to length 8
        let out = convolve(&[1.0, 2.0, 3.0], &[1.0, 1.0]);
        assert_eq!(out.len(), 8);
        let expected = [1.0, 3.0, 5.0, 5.0, 3.0];
        for (k, &e) in expected.iter().enumerate() {
            assert!((out[k] - e).abs() < EPS, "out[{k}] = {}", out[k]);
        }
        for &tail in &out[5..] {
            assert!(tail.abs() < EPS);
        }
    }

    #[test]
    fn impulse_is_identity() {
        let out = convolve(&[1.0], &[5.0, -2.0, 0.5]);
        assert_eq!(out.len(), 4);
        for (k, &e) in [5.0, -2.0, 0.5, 0.0].iter().enumerate() {
            assert!((out[k] - e).abs() < EPS);
        }
    }

    #[test]
    fn commutes() {
        let u = [1.0, -4.0, 2.5];
        let v = [0.5, 3.0];
        let uv = convolve(&u, &v);
        let vu = convolve(&v, &u);
        for (a, b) in uv.iter().zip(vu.iter()) {
            assert!((a - b).abs() < EPS);
        }
    }

    #[test]
    fn single_samples_pad_to_two() {
        let out = convolve(&[3.0], &[4.0]);
        assert_eq!(out.len(), 2);
        assert!((out[0] - 12.0).abs() < EPS);
        assert!(out[1].abs() < EPS);
    }

    #[test]
    fn empty_inputs() {
        assert!(convolve(&[], &[]).is_empty());
        // Convolving with an empty sequence yields all zeros
        let out = convolve(&[1.0, 2.0], &[]);
        assert_eq!(out.len(), 2);
        for &x in &out {
            assert!(x.abs() < EPS);
        }
    }

    #[test]
    fn matches_spectral_product() {
        // fft(convolve(u, v)) == fft(u) .* fft(v) on the padded length
        let u = [1.0, 2.0, 0.0, -1.0];
        let v = [3.0, 0.5];
        let n = (u.len() + v.len()).max(2).next_power_of_two();

        let mut up = vec![0.0; n];
        up[..u.len()].copy_from_slice(&u);
        let mut vp = vec![0.0; n];
        vp[..v.len()].copy_from_slice(&v);

        let fu = crate::fft(&up).unwrap();
        let fv = crate::fft(&vp).unwrap();
        let fc = crate::fft(&convolve(&u, &v)).unwrap();

        for k in 0..n {
            let prod = fu.get(k) * fv.get(k);
            assert!((fc.re()[k] - prod.re).abs() < EPS);
            assert!((fc.im()[k] - prod.im).abs() < EPS);
        }
    }
}
