//! Arithmetic on amplitudes beyond what `num::Complex` offers: checked division, rounding and
//! tolerant comparison.

use crate::errors::{QuantumError, QuantumResult};
use crate::types::Tolerance;
use crate::Complex;
use std::fmt;

/// Round `x` to `decimals` places, mapping `-0.0` to `0.0`.
pub fn round_f64(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round() / scale + 0.0
}

/// Extra operations on `Complex<f64>`.
pub trait ComplexOps: Sized {
    /// Divide by a real scalar, failing on zero.
    fn checked_div_real(&self, f: f64) -> QuantumResult<Self>;
    /// Divide by another complex number, failing on the complex zero.
    fn checked_div(&self, other: &Self) -> QuantumResult<Self>;
    /// Round each component to `decimals` places.
    fn round_to(&self, decimals: i32) -> Self;
    /// Whether both components are within the tolerance of `other`.
    fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool;
    /// Whether the value is the complex zero within the tolerance.
    fn approx_zero(&self, tolerance: Tolerance) -> bool;
    /// Human readable rendering: `a`, `bi` or `a + bi`.
    fn display(&self) -> AmplitudeDisplay;
}

impl ComplexOps for Complex<f64> {
    fn checked_div_real(&self, f: f64) -> QuantumResult<Self> {
        if f == 0.0 {
            Err(QuantumError::DivisionByZero)
        } else {
            Ok(Complex::new(self.re / f, self.im / f))
        }
    }

    fn checked_div(&self, other: &Self) -> QuantumResult<Self> {
        if other.im == 0.0 {
            self.checked_div_real(other.re)
        } else {
            // other.im != 0 so the squared norm is strictly positive.
            let numerator = self * other.conj();
            numerator.checked_div_real(other.norm_sqr())
        }
    }

    fn round_to(&self, decimals: i32) -> Self {
        Complex::new(round_f64(self.re, decimals), round_f64(self.im, decimals))
    }

    fn approx_eq(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.eq_f64(self.re, other.re) && tolerance.eq_f64(self.im, other.im)
    }

    fn approx_zero(&self, tolerance: Tolerance) -> bool {
        tolerance.is_zero(self.re) && tolerance.is_zero(self.im)
    }

    fn display(&self) -> AmplitudeDisplay {
        AmplitudeDisplay(*self)
    }
}

/// Display adapter for an amplitude.
#[derive(Clone, Copy, Debug)]
pub struct AmplitudeDisplay(Complex<f64>);

impl fmt::Display for AmplitudeDisplay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Complex { re, im } = self.0;
        if im == 0.0 {
            write!(f, "{}", re)
        } else if re == 0.0 {
            write!(f, "{}i", im)
        } else if im < 0.0 {
            write!(f, "{} - {}i", re, -im)
        } else {
            write!(f, "{} + {}i", re, im)
        }
    }
}
