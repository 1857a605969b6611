extern crate qregister;

mod utils;

use qregister::prelude::*;
use qregister::utils::{index_to_symbol, symbol_to_index};
use utils::*;

fn complex_matrix(rows: usize, cols: usize, seed: f64) -> Matrix {
    let data = (0..rows * cols)
        .map(|i| {
            let i = i as f64;
            Complex::new(((i + seed) * 0.37).sin(), ((i * seed) * 0.21).cos() * 0.5)
                .round_to(2)
        })
        .collect();
    Matrix::new(rows, cols, data).unwrap()
}

/// (A ⊗ B)(u ⊗ v) == (Au) ⊗ (Bv)
#[test]
fn kron_mixed_product() -> Result<(), QuantumError> {
    let shapes = [((2, 2), (2, 2)), ((2, 3), (3, 2)), ((1, 4), (3, 1)), ((4, 2), (2, 2))];
    for (k, ((r1, c1), (r2, c2))) in shapes.iter().cloned().enumerate() {
        let seed = k as f64 + 1.0;
        let a = complex_matrix(r1, c1, seed);
        let b = complex_matrix(r2, c2, seed + 0.5);
        let u = complex_matrix(c1, 1, seed + 0.25);
        let v = complex_matrix(c2, 1, seed + 0.75);

        let lhs = a.kron(&b).try_mul(&u.kron(&v))?;
        let rhs = a.try_mul(&u)?.kron(&b.try_mul(&v)?);
        assert_matrix_eq(&lhs, &rhs);
    }
    Ok(())
}

#[test]
fn index_round_trip() -> Result<(), QuantumError> {
    for n in 1..=6 {
        let r = QubitRegister::basis(n, 0)?;
        for i in 0..1usize << n {
            let symbol = r.symbol_of(i)?;
            assert_eq!(symbol, index_to_symbol(n, i));
            assert_eq!(r.index_of(&symbol)?, i);
            assert_eq!(symbol_to_index(&symbol), i);
        }
    }
    Ok(())
}

#[test]
fn composite_matches_kron_of_columns() -> Result<(), QuantumError> {
    let qubits = [
        Qubit::new(Complex::new(0.6, 0.0), Complex::new(0.0, 0.8)),
        Qubit::new(Complex::new(0.28, 0.0), Complex::new(0.96, 0.0)),
        Qubit::new(Complex::new(0.0, -1.0), Complex::new(0.0, 0.0)),
    ];
    let column = |q: &Qubit| Matrix::column(vec![q.alpha(), q.beta()]);
    let kron = qubits[1..]
        .iter()
        .fold(column(&qubits[0]), |acc, q| acc.kron(&column(q)));

    let r = QubitRegister::from_qubits(&qubits)?;
    assert_matrix_eq(&r.to_matrix(), &kron);
    Ok(())
}

#[test]
fn gate_positions_match_construction_order() -> Result<(), QuantumError> {
    // Flipping position p of |000> sets exactly the qubit constructed at p.
    for p in 0..3 {
        let mut qubits = [Qubit::zero(); 3];
        qubits[p] = Qubit::one();
        let expected = QubitRegister::from_qubits(&qubits)?;

        let op = GateBuilder::new(3).single(p, Primitive::BitFlip)?;
        let out = QubitRegister::from_matrix(op.try_mul(&QubitRegister::basis(3, 0)?.to_matrix())?)?;
        assert_eq!(out, expected);
        assert!(expected.to_string().contains(&format!(
            "1 |{}>",
            (0..3).map(|q| if q == p { '1' } else { '0' }).collect::<String>()
        )));
    }
    Ok(())
}

#[test]
fn shape_errors_leave_operands_untouched() {
    let a = complex_matrix(2, 3, 1.0);
    let b = complex_matrix(2, 3, 2.0);
    let (a0, b0) = (a.clone(), b.clone());
    assert_eq!(
        a.try_mul(&b),
        Err(QuantumError::Shape {
            op: "multiply",
            left: (2, 3),
            right: (2, 3),
        })
    );
    assert!(matches!(
        a.try_add(&complex_matrix(3, 2, 0.0)),
        Err(QuantumError::Shape { op: "add", .. })
    ));
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}
