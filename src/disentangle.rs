//! Per-position separability test and recovery of independent qubits.
//!
//! For the index bit `i` holding a position, the amplitudes split into pairs `(v0, v1)` at
//! indices `(k, k + 2^i)` for every `k` with bit `i` clear. The position factors out when every
//! pair has the same ratio `v0 : v1`. Ratios are compared cross-multiplied,
//! `v0 * r1 == v1 * r0` against a reference pair `(r0, r1)`, which stays defined when an amplitude
//! is zero.
//!
//! The comparison is relative to the size of the pairs, `|v0 r1 - v1 r0| <= eps |v| |r|`, so it
//! gives the same answer however the register is scaled or however many qubits share the weight.
//! A non-exact tolerance also allows `|r|` times a few units of the rounding precision, the noise
//! left on every amplitude by rounded gates.
//!
//! Recovered qubits are normalised so that `alpha` is real and non-negative; they equal the
//! constructing qubit up to a global phase.

use crate::complex_ops::ComplexOps;
use crate::errors::{QuantumError, QuantumResult};
use crate::into_iter;
use crate::qubit::Qubit;
#[allow(unused_imports)]
use crate::rayon_helper::*;
use crate::state::QubitRegister;
use crate::types::{Amplitude, Tolerance, ROUND_DECIMALS};
use crate::utils::{get_bit, position_bit};
use std::cmp::Ordering;
use tracing::debug;

/// Rounding units of absolute amplitude noise tolerated per pair.
const ROUNDING_UNITS: f64 = 10.0;

/// Outcome of disentangling one position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Factor {
    /// The position is independent of the rest of the register.
    Separable(Qubit),
    /// The position is entangled with the rest of the register.
    Entangled,
}

impl Factor {
    /// The recovered qubit, if separable.
    pub fn qubit(&self) -> Option<Qubit> {
        match self {
            Factor::Separable(q) => Some(*q),
            Factor::Entangled => None,
        }
    }

    /// Whether the position factored out.
    pub fn is_separable(&self) -> bool {
        matches!(self, Factor::Separable(_))
    }
}

/// Recovers independent qubits from a register.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Disentangler {
    tolerance: Tolerance,
}

impl Disentangler {
    /// Make a disentangler comparing ratios within `tolerance`.
    pub fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    /// A disentangler requiring ratios to match exactly.
    pub fn exact() -> Self {
        Self::new(Tolerance::EXACT)
    }

    /// The configured tolerance.
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// One factor per position, position 0 first.
    ///
    /// # Example
    /// ```
    /// use qregister::disentangle::{Disentangler, Factor};
    /// use qregister::qubit::Qubit;
    /// use qregister::state::QubitRegister;
    ///
    /// let r = QubitRegister::from_qubits(&[Qubit::one(), Qubit::zero()]).unwrap();
    /// let factors = Disentangler::default().disentangle(&r);
    /// assert_eq!(factors, vec![Factor::Separable(Qubit::one()), Factor::Separable(Qubit::zero())]);
    /// ```
    pub fn disentangle(&self, register: &QubitRegister) -> Vec<Factor> {
        into_iter!(0..register.n())
            .map(|position| self.factor(register, position))
            .collect()
    }

    /// Try to factor a single position out of the register.
    ///
    /// # Example
    /// ```
    /// use qregister::disentangle::Disentangler;
    /// use qregister::state::QubitRegister;
    ///
    /// let r = QubitRegister::basis(2, 0).unwrap();
    /// assert!(Disentangler::default().factor_position(&r, 1).unwrap().is_separable());
    /// assert!(Disentangler::default().factor_position(&r, 2).is_err());
    /// ```
    pub fn factor_position(
        &self,
        register: &QubitRegister,
        position: usize,
    ) -> QuantumResult<Factor> {
        QuantumError::check_index(position, register.n())?;
        Ok(self.factor(register, position))
    }

    /// Whether `(v0, v1)` has the ratio of the reference pair `(r0, r1)`.
    fn same_ratio(
        &self,
        (v0, v1): &(Amplitude, Amplitude),
        (r0, r1): &(Amplitude, Amplitude),
    ) -> bool {
        let cross = (v0 * r1 - v1 * r0).norm();
        let eps = self.tolerance.epsilon();
        if eps == 0.0 {
            return cross == 0.0;
        }
        let v_norm = (v0.norm_sqr() + v1.norm_sqr()).sqrt();
        let r_norm = (r0.norm_sqr() + r1.norm_sqr()).sqrt();
        let noise = ROUNDING_UNITS * 10f64.powi(-ROUND_DECIMALS);
        cross <= eps * v_norm * r_norm + noise * r_norm
    }

    // `position` must be below `register.n()`.
    fn factor(&self, register: &QubitRegister, position: usize) -> Factor {
        let n = register.n();
        let bit = position_bit(n, position);
        let stride = 1 << bit;
        let amps = register.amplitudes();

        let pairs: Vec<(Amplitude, Amplitude)> = (0..amps.len())
            .filter(|indx| !get_bit(*indx, bit))
            .map(|indx| (amps[indx], amps[indx + stride]))
            .collect();

        let a: f64 = pairs.iter().map(|(v0, _)| v0.norm_sqr()).sum();
        let b: f64 = pairs.iter().map(|(_, v1)| v1.norm_sqr()).sum();

        // The heaviest pair is the least sensitive to rounding.
        let weight = |(v0, v1): &(Amplitude, Amplitude)| v0.norm_sqr() + v1.norm_sqr();
        let reference = pairs
            .iter()
            .max_by(|x, y| weight(*x).partial_cmp(&weight(*y)).unwrap_or(Ordering::Equal));
        let reference = match reference {
            Some(r) if weight(r) > 0.0 => *r,
            _ => {
                debug!(position, "no amplitude to factor");
                return Factor::Entangled;
            }
        };

        let separable = pairs.iter().all(|pair| self.same_ratio(pair, &reference));
        if !separable {
            debug!(position, "entangled");
            return Factor::Entangled;
        }

        // Phase of beta relative to alpha.
        let (r0, r1) = reference;
        let relative = r0.conj() * r1;
        let phase = relative.im.atan2(relative.re);
        let alpha = Amplitude::new(a.sqrt(), 0.0).round_to(ROUND_DECIMALS);
        let beta = Amplitude::from_polar(b.sqrt(), phase).round_to(ROUND_DECIMALS);
        let qubit = Qubit::new(alpha, beta);
        debug!(position, %qubit, "separable");
        Factor::Separable(qubit)
    }
}
