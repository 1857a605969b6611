//! Dense complex matrices with shape-checked arithmetic.
//!
//! Every arithmetic result is rounded to [`ROUND_DECIMALS`] places so that long gate sequences do
//! not accumulate floating noise.

use crate::complex_ops::ComplexOps;
use crate::errors::{QuantumError, QuantumResult};
use crate::into_iter;
#[allow(unused_imports)]
use crate::rayon_helper::*;
use crate::types::{Amplitude, ROUND_DECIMALS};
use num::{One, Zero};
use std::ops::Index;
use tracing::trace;

/// A row-major dense matrix of complex values.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Amplitude>,
}

impl Matrix {
    /// Make a matrix from row-major `data`, which must hold exactly `rows * cols` entries.
    pub fn new(rows: usize, cols: usize, data: Vec<Amplitude>) -> QuantumResult<Self> {
        if data.len() != rows * cols {
            let message = format!(
                "matrix data has {} entries versus expected {}x{}",
                data.len(),
                rows,
                cols
            );
            Err(QuantumError::invalid(message))
        } else {
            Ok(Self { rows, cols, data })
        }
    }

    /// Make a `rows` by `cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![Amplitude::zero(); rows * cols],
        }
    }

    /// Make the `n` by `n` identity.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        (0..n).for_each(|i| m.data[i * n + i] = Amplitude::one());
        m
    }

    /// Make a single column matrix.
    pub fn column(values: Vec<Amplitude>) -> Self {
        Self {
            rows: values.len(),
            cols: 1,
            data: values,
        }
    }

    /// Make a 2x2 matrix from its rows.
    pub(crate) fn square2(rows: [[Amplitude; 2]; 2]) -> Self {
        let [[a, b], [c, d]] = rows;
        Self {
            rows: 2,
            cols: 2,
            data: vec![a, b, c, d],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Entry at `(row, col)` if inside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Option<Amplitude> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Row-major entries.
    pub fn data(&self) -> &[Amplitude] {
        &self.data
    }

    /// Consume the matrix, returning its row-major entries.
    pub fn into_data(self) -> Vec<Amplitude> {
        self.data
    }

    /// Round every entry to [`ROUND_DECIMALS`] places.
    pub fn rounded(mut self) -> Self {
        self.data
            .iter_mut()
            .for_each(|c| *c = c.round_to(ROUND_DECIMALS));
        self
    }

    /// Matrix product `self * other`.
    ///
    /// # Example
    /// ```
    /// use qregister::matrix::Matrix;
    /// use qregister::Complex;
    ///
    /// let m = Matrix::identity(2);
    /// let v = Matrix::column(vec![Complex::new(0.5, 0.0), Complex::new(0.0, 0.5)]);
    /// assert_eq!(m.try_mul(&v).unwrap(), v);
    /// assert!(v.try_mul(&m).is_err());
    /// ```
    pub fn try_mul(&self, other: &Matrix) -> QuantumResult<Matrix> {
        if self.cols != other.rows {
            return Err(QuantumError::Shape {
                op: "multiply",
                left: self.shape(),
                right: other.shape(),
            });
        }
        trace!(
            left = ?self.shape(),
            right = ?other.shape(),
            "matrix product"
        );
        let (inner, cols) = (self.cols, other.cols);
        // Each output element sums over k in increasing order within a single task.
        let data: Vec<Amplitude> = into_iter!(0..self.rows * cols)
            .map(|indx| {
                let (i, j) = (indx / cols, indx % cols);
                (0..inner).fold(Amplitude::zero(), |acc, k| {
                    acc + self.data[i * inner + k] * other.data[k * cols + j]
                })
            })
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols,
            data,
        }
        .rounded())
    }

    /// Element-wise sum, shapes must match.
    pub fn try_add(&self, other: &Matrix) -> QuantumResult<Matrix> {
        if self.shape() != other.shape() {
            return Err(QuantumError::Shape {
                op: "add",
                left: self.shape(),
                right: other.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            data,
        }
        .rounded())
    }

    /// Kronecker product `self ⊗ other`. Entry `(i*r2 + k, j*c2 + l)` is `self(i,j) * other(k,l)`.
    ///
    /// # Example
    /// ```
    /// use qregister::matrix::Matrix;
    ///
    /// let m = Matrix::identity(2).kron(&Matrix::zeros(3, 1));
    /// assert_eq!(m.shape(), (6, 2));
    /// ```
    pub fn kron(&self, other: &Matrix) -> Matrix {
        let (r2, c2) = other.shape();
        let rows = self.rows * r2;
        let cols = self.cols * c2;
        let data: Vec<Amplitude> = into_iter!(0..rows * cols)
            .map(|indx| {
                let (row, col) = (indx / cols, indx % cols);
                let (i, k) = (row / r2, row % r2);
                let (j, l) = (col / c2, col % c2);
                self.data[i * self.cols + j] * other.data[k * c2 + l]
            })
            .collect();
        Matrix { rows, cols, data }.rounded()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Amplitude;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}
