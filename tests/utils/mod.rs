#![allow(dead_code)]

use qregister::prelude::*;

pub fn assert_almost_eq(a: f64, b: f64, prec: i32) {
    let mult = 10.0f64.powi(prec);
    let (a, b) = (a * mult, b * mult);
    let (a, b) = (a.round(), b.round());
    assert_eq!(a / mult, b / mult);
}

/// Amplitude-wise comparison within the default tolerance.
pub fn assert_state_eq(a: &QubitRegister, b: &QubitRegister) {
    assert_eq!(a.n(), b.n(), "{} vs {}", a, b);
    let tol = Tolerance::default();
    a.amplitudes()
        .iter()
        .zip(b.amplitudes())
        .for_each(|(x, y)| assert!(x.approx_eq(y, tol), "{} vs {}", a, b));
}

pub fn assert_matrix_eq(a: &Matrix, b: &Matrix) {
    assert_eq!(a.shape(), b.shape());
    let tol = Tolerance::default();
    a.data()
        .iter()
        .zip(b.data())
        .for_each(|(x, y)| assert!(x.approx_eq(y, tol), "{:?} vs {:?}", a, b));
}

/// A normalised register with distinct complex amplitudes.
pub fn sample_register(n: usize) -> QubitRegister {
    let raw: Vec<Complex<f64>> = (0..1 << n)
        .map(|i| {
            let i = i as f64;
            Complex::new(1.0 + i, 0.5 - 0.25 * i)
        })
        .collect();
    let norm: f64 = raw.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt();
    let amps = raw.into_iter().map(|c| (c / norm).round_to(5)).collect();
    QubitRegister::from_amplitudes(amps).unwrap()
}
