//! Complex scalar and the parallel-plane sample buffer.

use std::ops::{Add, Mul, Sub};

use crate::error::FftError;

/// A complex number as a pair of `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    /// Real component.
    pub re: f64,
    /// Imaginary component.
    pub im: f64,
}

impl Complex {
    /// The additive identity.
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Create a complex number from its components.
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Round both components to the nearest integer, ties away from zero.
    ///
    /// Same rule as the base-256 carry step, so rounded spectra and carry
    /// propagation agree on near-half values.
    #[must_use]
    pub fn round(self) -> Self {
        Self {
            re: self.re.round(),
            im: self.im.round(),
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    // Direct four-multiply product. The transform's error bounds assume
    // this form, not the three-multiply Karatsuba variant.
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

/// A sequence of complex samples stored as two parallel `f64` planes.
///
/// Invariant: both planes always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexBuffer {
    re: Vec<f64>,
    im: Vec<f64>,
}

impl ComplexBuffer {
    /// Widen a real sequence to a complex buffer with a zero imaginary plane.
    #[must_use]
    pub fn from_real(samples: &[f64]) -> Self {
        Self {
            re: samples.to_vec(),
            im: vec![0.0; samples.len()],
        }
    }

    /// Build a buffer from two planes of equal length.
    pub fn from_planes(re: Vec<f64>, im: Vec<f64>) -> Result<Self, FftError> {
        if re.len() != im.len() {
            return Err(FftError::PlaneMismatch {
                re: re.len(),
                im: im.len(),
            });
        }
        Ok(Self { re, im })
    }

    /// A zero buffer of `n` samples.
    #[must_use]
    pub fn zeroed(n: usize) -> Self {
        Self {
            re: vec![0.0; n],
            im: vec![0.0; n],
        }
    }

    /// Number of complex samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.re.len()
    }

    /// Whether the buffer holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    /// Read the sample at `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Complex {
        Complex::new(self.re[i], self.im[i])
    }

    /// Write the sample at `i`.
    pub fn set(&mut self, i: usize, value: Complex) {
        self.re[i] = value.re;
        self.im[i] = value.im;
    }

    /// The real plane.
    #[must_use]
    pub fn re(&self) -> &[f64] {
        &self.re
    }

    /// The imaginary plane.
    #[must_use]
    pub fn im(&self) -> &[f64] {
        &self.im
    }

    /// Multiply every component of both planes by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for x in &mut self.re {
            *x *= factor;
        }
        for x in &mut self.im {
            *x *= factor;
        }
    }

    /// Consume the buffer, returning `(real_plane, imag_plane)`.
    #[must_use]
    pub fn into_planes(self) -> (Vec<f64>, Vec<f64>) {
        (self.re, self.im)
    }
}
