//! Errors raised by operators, registers and complex arithmetic.

use thiserror::Error;

/// An error from building or applying an operator, or from indexing a register.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum QuantumError {
    /// Matrix operands of incompatible shapes, given as `(rows, cols)`.
    #[error("cannot {op} matrices of shape {left:?} and {right:?}")]
    Shape {
        /// The operation which was attempted.
        op: &'static str,
        /// Shape of the left operand.
        left: (usize, usize),
        /// Shape of the right operand.
        right: (usize, usize),
    },
    /// Arguments which can never be valid for the operation.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    /// A qubit position or amplitude index outside `[0, bound)`.
    #[error("index {index} is out of range (must be below {bound})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The exclusive upper bound.
        bound: usize,
    },
    /// Division of a complex number by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// An amplitude vector whose length is not a power of two of at least two.
    #[error("amplitude vector of length {0} is not a power of two")]
    InvalidLength(usize),
}

impl QuantumError {
    /// Construct a new `InvalidArguments` error.
    pub fn invalid<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArguments(msg.into())
    }

    /// Check `index` against an exclusive `bound`.
    pub fn check_index(index: usize, bound: usize) -> QuantumResult<()> {
        if index < bound {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange { index, bound })
        }
    }
}

/// A result which may contain a quantum error.
pub type QuantumResult<T> = Result<T, QuantumError>;
