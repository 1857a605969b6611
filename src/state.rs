//! The dense register state and everything which reads or transforms it.

use crate::complex_ops::ComplexOps;
use crate::disentangle::{Disentangler, Factor};
use crate::errors::{QuantumError, QuantumResult};
use crate::gates::{Gate, GateBuilder};
use crate::matrix::Matrix;
use crate::qubit::Qubit;
#[allow(unused_imports)]
use crate::rayon_helper::*;
use crate::types::{Amplitude, ROUND_DECIMALS};
use crate::utils::*;
use crate::{into_iter, iter};
use num::{One, Zero};
use std::fmt;
use tracing::debug;

/// `n` qubits stored as `2^n` amplitudes in increasing linear index order.
///
/// Registers are values: every gate returns a new register and leaves `self` untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct QubitRegister {
    n: usize,
    amplitudes: Vec<Amplitude>,
}

/// Registers need at least one qubit and must be addressable by a `usize` index.
fn check_width(n: usize) -> QuantumResult<()> {
    if n == 0 {
        Err(QuantumError::invalid("a register needs at least one qubit"))
    } else if n >= usize::BITS as usize {
        let message = format!("{} qubits cannot be indexed by a usize", n);
        Err(QuantumError::invalid(message))
    } else {
        Ok(())
    }
}

impl QubitRegister {
    /// Make a register from its full amplitude vector, whose length must be a power of two.
    ///
    /// # Example
    /// ```
    /// use qregister::state::QubitRegister;
    /// use qregister::Complex;
    ///
    /// let r = QubitRegister::from_amplitudes(vec![Complex::new(1.0, 0.0); 4]).unwrap();
    /// assert_eq!(r.n(), 2);
    /// assert!(QubitRegister::from_amplitudes(vec![Complex::new(1.0, 0.0); 3]).is_err());
    /// ```
    pub fn from_amplitudes(amplitudes: Vec<Amplitude>) -> QuantumResult<Self> {
        let n = qubits_for_len(amplitudes.len())?;
        Ok(Self { n, amplitudes })
    }

    /// Make a register from real amplitudes.
    pub fn from_reals(reals: &[f64]) -> QuantumResult<Self> {
        Self::from_amplitudes(reals.iter().map(|x| Amplitude::new(*x, 0.0)).collect())
    }

    /// Tensor product of `qubits`, the first qubit at position 0.
    ///
    /// Each amplitude is the product of `alpha` or `beta` of every qubit, picked by the bit of
    /// the index holding that qubit's position.
    pub fn from_qubits(qubits: &[Qubit]) -> QuantumResult<Self> {
        let n = qubits.len();
        check_width(n)?;
        let amplitudes = into_iter!(0..1usize << n)
            .map(|indx| {
                qubits
                    .iter()
                    .enumerate()
                    .fold(Amplitude::one(), |acc, (p, q)| {
                        if get_bit(indx, position_bit(n, p)) {
                            acc * q.beta()
                        } else {
                            acc * q.alpha()
                        }
                    })
                    .round_to(ROUND_DECIMALS)
            })
            .collect();
        Ok(Self { n, amplitudes })
    }

    /// The basis state `|index>` on `n` qubits.
    pub fn basis(n: usize, index: usize) -> QuantumResult<Self> {
        check_width(n)?;
        QuantumError::check_index(index, 1 << n)?;
        let mut amplitudes = vec![Amplitude::zero(); 1 << n];
        amplitudes[index] = Amplitude::one();
        Ok(Self { n, amplitudes })
    }

    /// Reinterpret a single column matrix as a register.
    pub fn from_matrix(matrix: Matrix) -> QuantumResult<Self> {
        if matrix.cols() != 1 {
            return Err(QuantumError::Shape {
                op: "convert to a register",
                left: matrix.shape(),
                right: (matrix.rows(), 1),
            });
        }
        Self::from_amplitudes(matrix.into_data())
    }

    /// The single column matrix view of the amplitudes.
    pub fn to_matrix(&self) -> Matrix {
        Matrix::column(self.amplitudes.clone())
    }

    /// Number of qubits.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of amplitudes, `2^n`.
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    /// Registers always hold at least two amplitudes.
    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// All amplitudes in increasing index order.
    pub fn amplitudes(&self) -> &[Amplitude] {
        &self.amplitudes
    }

    /// Amplitude at a linear index.
    pub fn amplitude(&self, index: usize) -> QuantumResult<Amplitude> {
        QuantumError::check_index(index, self.len())?;
        Ok(self.amplitudes[index])
    }

    /// Amplitude addressed by a symbol.
    pub fn amplitude_at(&self, symbol: &[bool]) -> QuantumResult<Amplitude> {
        let index = self.index_of(symbol)?;
        Ok(self.amplitudes[index])
    }

    /// Linear index of a symbol of exactly `n` booleans, boolean `j` being bit `j`.
    pub fn index_of(&self, symbol: &[bool]) -> QuantumResult<usize> {
        if symbol.len() != self.n {
            let message = format!(
                "wrong number of symbols ({}) for register size ({})",
                symbol.len(),
                self.n
            );
            return Err(QuantumError::invalid(message));
        }
        Ok(symbol_to_index(symbol))
    }

    /// Symbol addressing `index`.
    pub fn symbol_of(&self, index: usize) -> QuantumResult<Vec<bool>> {
        QuantumError::check_index(index, self.len())?;
        Ok(index_to_symbol(self.n, index))
    }

    /// Value of qubit `position` within basis state `index`.
    pub fn position_value(&self, index: usize, position: usize) -> QuantumResult<bool> {
        QuantumError::check_index(index, self.len())?;
        QuantumError::check_index(position, self.n)?;
        Ok(get_bit(index, position_bit(self.n, position)))
    }

    /// Total probability, 1 for a physical state.
    pub fn norm_sqr(&self) -> f64 {
        crate::measurement_ops::prob_magnitude(&self.amplitudes)
    }

    /// Probability of each basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        iter!(self.amplitudes).map(|c| c.norm_sqr()).collect()
    }

    /// Apply a gate, producing a new register.
    ///
    /// # Example
    /// ```
    /// use qregister::gates::Gate;
    /// use qregister::state::QubitRegister;
    ///
    /// let r = QubitRegister::basis(2, 0b10).unwrap();
    /// let r = r.apply(&Gate::Xor { control: 0, target: 1 }).unwrap();
    /// assert_eq!(r, QubitRegister::basis(2, 0b11).unwrap());
    /// ```
    pub fn apply(&self, gate: &Gate) -> QuantumResult<Self> {
        let op = GateBuilder::new(self.n).build(gate)?;
        let out = op.try_mul(&self.to_matrix())?;
        debug!(%gate, n = self.n, "applied gate");
        Self::from_matrix(out)
    }

    /// Apply gates in order.
    pub fn apply_all(&self, gates: &[Gate]) -> QuantumResult<Self> {
        gates.iter().try_fold(self.clone(), |state, gate| state.apply(gate))
    }

    /// Left rotation at `position`.
    pub fn left_rotation(&self, position: usize) -> QuantumResult<Self> {
        self.apply(&Gate::LeftRotation(position))
    }

    /// Right rotation at `position`.
    pub fn right_rotation(&self, position: usize) -> QuantumResult<Self> {
        self.apply(&Gate::RightRotation(position))
    }

    /// S phase shift at `position`.
    pub fn s_shift(&self, position: usize) -> QuantumResult<Self> {
        self.apply(&Gate::SShift(position))
    }

    /// T phase shift at `position`.
    pub fn t_shift(&self, position: usize) -> QuantumResult<Self> {
        self.apply(&Gate::TShift(position))
    }

    /// Left shift at `position`.
    pub fn left_shift(&self, position: usize) -> QuantumResult<Self> {
        self.apply(&Gate::LeftShift(position))
    }

    /// Right shift at `position`.
    pub fn right_shift(&self, position: usize) -> QuantumResult<Self> {
        self.apply(&Gate::RightShift(position))
    }

    /// Controlled-XOR of `target` on `control`.
    pub fn xor(&self, control: usize, target: usize) -> QuantumResult<Self> {
        self.apply(&Gate::Xor { control, target })
    }

    /// Try to factor every position out, with the default tolerance.
    pub fn disentangle(&self) -> Vec<Factor> {
        Disentangler::default().disentangle(self)
    }

    /// Try to factor every position out with a configured disentangler.
    pub fn disentangle_with(&self, disentangler: &Disentangler) -> Vec<Factor> {
        disentangler.disentangle(self)
    }
}

impl fmt::Display for QubitRegister {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (indx, amp) in self.amplitudes.iter().enumerate() {
            if indx != 0 {
                write!(f, " + ")?;
            }
            write!(f, "{} {}", amp.display(), ket(self.n, indx))?;
        }
        Ok(())
    }
}

impl From<Qubit> for QubitRegister {
    fn from(q: Qubit) -> Self {
        Self {
            n: 1,
            amplitudes: vec![q.alpha(), q.beta()],
        }
    }
}
