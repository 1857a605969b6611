//! Shared numeric types and the comparison tolerance.

use crate::Complex;

/// The amplitude type used throughout the register.
pub type Amplitude = Complex<f64>;

/// Number of decimal places every arithmetic result is rounded to.
pub const ROUND_DECIMALS: i32 = 5;

/// Default epsilon for amplitude comparisons, an order of magnitude above the rounding step.
pub const DEFAULT_EPSILON: f64 = 1e-4;

/// How far apart two values may be while still being considered equal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Exact comparison, no difference allowed.
    pub const EXACT: Tolerance = Tolerance { epsilon: 0.0 };

    /// Make a tolerance of `epsilon`. Negative or NaN values are treated as exact.
    pub fn new(epsilon: f64) -> Self {
        if epsilon > 0.0 {
            Self { epsilon }
        } else {
            Self::EXACT
        }
    }

    /// The maximum allowed absolute difference.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Whether `a` and `b` are within epsilon of each other.
    pub fn eq_f64(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.epsilon
    }

    /// Whether `x` is zero within epsilon.
    pub fn is_zero(&self, x: f64) -> bool {
        x.abs() <= self.epsilon
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}
