//! Construction of full register operators from 2x2 primitives.
//!
//! An operator on `n` qubits is `B_0 ⊗ B_1 ⊗ ... ⊗ B_{n-1}`, built by extending the running
//! product on the right, where `B_p` is the block for qubit position `p`. Position 0 therefore
//! lands on the most significant index bit.

use crate::errors::{QuantumError, QuantumResult};
use crate::matrix::Matrix;
use crate::primitives::Primitive;
use std::fmt;

/// The fixed gate set, each naming the qubit position(s) it acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Left rotation of one qubit.
    LeftRotation(usize),
    /// Right rotation of one qubit, inverse of `LeftRotation`.
    RightRotation(usize),
    /// Phase shift `diag(i, 1)`.
    SShift(usize),
    /// Phase shift `diag(-1, -i)`.
    TShift(usize),
    /// Left shift permutation, built from the left rotation block.
    LeftShift(usize),
    /// Right shift permutation, built from the right rotation block.
    RightShift(usize),
    /// Controlled-XOR: flips `target` where `control` is set.
    Xor {
        /// Position of the control qubit.
        control: usize,
        /// Position of the flipped qubit.
        target: usize,
    },
}

impl Gate {
    /// The 2x2 block applied to the (target) position.
    pub fn primitive(&self) -> Primitive {
        match self {
            Gate::LeftRotation(_) | Gate::LeftShift(_) => Primitive::LeftRotation,
            Gate::RightRotation(_) | Gate::RightShift(_) => Primitive::RightRotation,
            Gate::SShift(_) => Primitive::SShift,
            Gate::TShift(_) => Primitive::TShift,
            Gate::Xor { .. } => Primitive::BitFlip,
        }
    }

    /// The positions touched by the gate.
    pub fn positions(&self) -> Vec<usize> {
        match self {
            Gate::LeftRotation(p)
            | Gate::RightRotation(p)
            | Gate::SShift(p)
            | Gate::TShift(p)
            | Gate::LeftShift(p)
            | Gate::RightShift(p) => vec![*p],
            Gate::Xor { control, target } => vec![*control, *target],
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Gate::LeftRotation(p) => write!(f, "LeftRotation({})", p),
            Gate::RightRotation(p) => write!(f, "RightRotation({})", p),
            Gate::SShift(p) => write!(f, "SShift({})", p),
            Gate::TShift(p) => write!(f, "TShift({})", p),
            Gate::LeftShift(p) => write!(f, "LeftShift({})", p),
            Gate::RightShift(p) => write!(f, "RightShift({})", p),
            Gate::Xor { control, target } => write!(f, "Xor({}, {})", control, target),
        }
    }
}

/// Builds `2^n x 2^n` operators for an `n` qubit register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateBuilder {
    n: usize,
}

impl GateBuilder {
    /// Make a builder for `n` qubits.
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Number of qubits the built operators act on.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Operator for any gate in the fixed set.
    pub fn build(&self, gate: &Gate) -> QuantumResult<Matrix> {
        match gate {
            Gate::Xor { control, target } => {
                self.controlled(*control, *target, gate.primitive())
            }
            _ => {
                let position = gate.positions()[0];
                self.single(position, gate.primitive())
            }
        }
    }

    /// Operator applying `primitive` at `position` and identity everywhere else.
    ///
    /// # Example
    /// ```
    /// use qregister::gates::GateBuilder;
    /// use qregister::primitives::Primitive;
    ///
    /// let m = GateBuilder::new(3).single(1, Primitive::BitFlip).unwrap();
    /// assert_eq!(m.shape(), (8, 8));
    /// assert!(GateBuilder::new(3).single(3, Primitive::BitFlip).is_err());
    /// ```
    pub fn single(&self, position: usize, primitive: Primitive) -> QuantumResult<Matrix> {
        QuantumError::check_index(position, self.n)?;
        Ok(self.chain(|p| {
            if p == position {
                primitive
            } else {
                Primitive::Identity
            }
        }))
    }

    /// Operator applying `primitive` to `target` conditioned on `control`, as the sum
    /// `P0(control) ⊗ I(target) + P1(control) ⊗ primitive(target)` with identity elsewhere.
    pub fn controlled(
        &self,
        control: usize,
        target: usize,
        primitive: Primitive,
    ) -> QuantumResult<Matrix> {
        QuantumError::check_index(control, self.n)?;
        QuantumError::check_index(target, self.n)?;
        if control == target {
            let message = format!(
                "control and target cannot be the same position ({})",
                control
            );
            return Err(QuantumError::invalid(message));
        }
        let off = self.chain(|p| {
            if p == control {
                Primitive::ProjectZero
            } else {
                Primitive::Identity
            }
        });
        let on = self.chain(|p| {
            if p == control {
                Primitive::ProjectOne
            } else if p == target {
                primitive
            } else {
                Primitive::Identity
            }
        });
        off.try_add(&on)
    }

    /// `block(0) ⊗ block(1) ⊗ ... ⊗ block(n-1)`, extended on the right.
    fn chain<F>(&self, block: F) -> Matrix
    where
        F: Fn(usize) -> Primitive,
    {
        (1..self.n).fold(block(0).matrix(), |running, p| {
            running.kron(&block(p).matrix())
        })
    }
}
