#![forbid(unsafe_code)]
#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    unstable_features,
    unused_import_braces,
    missing_docs
)]

//! A small dense state-vector simulator for a register of qubits.
//!
//! A register of `n` qubits holds `2^n` complex amplitudes. Gates from a fixed set (rotation pair,
//! controlled-XOR, S and T phase shifts, shift permutations) are applied by building the full
//! operator with Kronecker products of 2x2 blocks and multiplying it into the amplitude column.
//! Every arithmetic result is rounded to 5 decimal places. The register can then be
//! disentangled: each qubit position is tested for separability and, when independent, recovered
//! as a single qubit.
//!
//! Qubit position 0 is the most significant bit of the amplitude index, matching the order in
//! which qubits are passed to [`QubitRegister::from_qubits`].
//!
//! # Example
//! ```
//! use qregister::prelude::*;
//!
//! # fn main() -> QuantumResult<()> {
//! let r = QubitRegister::from_qubits(&[Qubit::zero(), Qubit::zero()])?;
//! let r = r.left_rotation(0)?.xor(0, 1)?;
//! println!("{}", r);
//!
//! // A Bell pair cannot be factored.
//! assert!(r.disentangle().iter().all(|f| !f.is_separable()));
//! # Ok(())
//! # }
//! ```

pub use num::Complex;

pub mod complex_ops;
pub mod disentangle;
pub mod errors;
pub mod gates;
pub mod matrix;
pub mod measurement_ops;
pub mod primitives;
pub mod qubit;
mod rayon_helper;
pub mod state;
pub mod types;
pub mod utils;

pub use self::state::QubitRegister;

/// Common imports.
pub mod prelude {
    pub use crate::complex_ops::ComplexOps;
    pub use crate::disentangle::{Disentangler, Factor};
    pub use crate::errors::{QuantumError, QuantumResult};
    pub use crate::gates::{Gate, GateBuilder};
    pub use crate::matrix::Matrix;
    pub use crate::primitives::Primitive;
    pub use crate::qubit::Qubit;
    pub use crate::state::QubitRegister;
    pub use crate::types::{Amplitude, Tolerance};
    pub use crate::Complex;
}
