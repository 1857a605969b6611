//! Fixed 2x2 building blocks.

use crate::matrix::Matrix;
use crate::types::Amplitude;
use num::{One, Zero};
use std::f64::consts::FRAC_1_SQRT_2;

/// The 2x2 blocks every register operator is assembled from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Leaves the qubit unchanged.
    Identity,
    /// `[[s, -s], [s, s]]` with `s = 1/sqrt(2)`, inverse of `RightRotation`.
    LeftRotation,
    /// `[[s, s], [-s, s]]` with `s = 1/sqrt(2)`, inverse of `LeftRotation`.
    RightRotation,
    /// `diag(i, 1)`
    SShift,
    /// `diag(-1, -i)`
    TShift,
    /// Swaps the two amplitudes.
    BitFlip,
    /// Projector onto `|0>`.
    ProjectZero,
    /// Projector onto `|1>`.
    ProjectOne,
}

impl Primitive {
    /// The 2x2 matrix of the block, rounded like every other operator entry so that a gate has
    /// the same entries at every register width.
    pub fn matrix(self) -> Matrix {
        let o = Amplitude::zero();
        let l = Amplitude::one();
        let i = Amplitude::i();
        let s = Amplitude::new(FRAC_1_SQRT_2, 0.0);
        let block = match self {
            Primitive::Identity => Matrix::identity(2),
            Primitive::LeftRotation => Matrix::square2([[s, -s], [s, s]]),
            Primitive::RightRotation => Matrix::square2([[s, s], [-s, s]]),
            Primitive::SShift => Matrix::square2([[i, o], [o, l]]),
            Primitive::TShift => Matrix::square2([[-l, o], [o, -i]]),
            Primitive::BitFlip => Matrix::square2([[o, l], [l, o]]),
            Primitive::ProjectZero => Matrix::square2([[l, o], [o, o]]),
            Primitive::ProjectOne => Matrix::square2([[o, o], [o, l]]),
        };
        block.rounded()
    }

    /// Apply the block to a pair of amplitudes, unrounded.
    pub fn act(self, alpha: Amplitude, beta: Amplitude) -> (Amplitude, Amplitude) {
        let m = self.matrix();
        (
            m[(0, 0)] * alpha + m[(0, 1)] * beta,
            m[(1, 0)] * alpha + m[(1, 1)] * beta,
        )
    }
}
