//! Single qubit values.

use crate::complex_ops::ComplexOps;
use crate::errors::QuantumResult;
use crate::primitives::Primitive;
use crate::state::QubitRegister;
use crate::types::{Amplitude, Tolerance, ROUND_DECIMALS};
use num::{One, Zero};
use std::fmt;

/// A single qubit `alpha |0> + beta |1>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Qubit {
    alpha: Amplitude,
    beta: Amplitude,
}

impl Qubit {
    /// Make a qubit from its two amplitudes.
    pub fn new(alpha: Amplitude, beta: Amplitude) -> Self {
        Self { alpha, beta }
    }

    /// The basis state `|0>`.
    pub fn zero() -> Self {
        Self::new(Amplitude::one(), Amplitude::zero())
    }

    /// The basis state `|1>`.
    pub fn one() -> Self {
        Self::new(Amplitude::zero(), Amplitude::one())
    }

    /// `|1>` for `true`, `|0>` for `false`.
    pub fn from_bool(value: bool) -> Self {
        if value {
            Self::one()
        } else {
            Self::zero()
        }
    }

    /// Coefficient of `|0>`.
    pub fn alpha(&self) -> Amplitude {
        self.alpha
    }

    /// Coefficient of `|1>`.
    pub fn beta(&self) -> Amplitude {
        self.beta
    }

    /// Chance of measuring `|0>`.
    pub fn probability_zero(&self) -> f64 {
        self.alpha.norm_sqr()
    }

    /// Chance of measuring `|1>`.
    pub fn probability_one(&self) -> f64 {
        self.beta.norm_sqr()
    }

    /// Apply a 2x2 block, rounding the result.
    pub fn transform(&self, primitive: Primitive) -> Self {
        let (alpha, beta) = primitive.act(self.alpha, self.beta);
        Self::new(alpha.round_to(ROUND_DECIMALS), beta.round_to(ROUND_DECIMALS))
    }

    /// Left rotation.
    pub fn left_rotation(&self) -> Self {
        self.transform(Primitive::LeftRotation)
    }

    /// Right rotation.
    pub fn right_rotation(&self) -> Self {
        self.transform(Primitive::RightRotation)
    }

    /// S phase shift.
    pub fn s_shift(&self) -> Self {
        self.transform(Primitive::SShift)
    }

    /// T phase shift.
    pub fn t_shift(&self) -> Self {
        self.transform(Primitive::TShift)
    }

    /// Two qubit register `self ⊗ other`, `self` at position 0.
    pub fn tensor(&self, other: &Qubit) -> QuantumResult<QubitRegister> {
        QubitRegister::from_qubits(&[*self, *other])
    }

    /// Amplitude-wise comparison.
    pub fn approx_eq(&self, other: &Qubit, tolerance: Tolerance) -> bool {
        self.alpha.approx_eq(&other.alpha, tolerance) && self.beta.approx_eq(&other.beta, tolerance)
    }
}

impl Default for Qubit {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} |0> + {} |1>",
            self.alpha.display(),
            self.beta.display()
        )
    }
}
