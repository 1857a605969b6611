//! Probabilities and random collapse.

use crate::errors::{QuantumError, QuantumResult};
use crate::iter;
use crate::qubit::Qubit;
#[allow(unused_imports)]
use crate::rayon_helper::*;
use crate::state::QubitRegister;
use crate::types::Amplitude;
use crate::utils::{get_bit, position_bit};
use rand::Rng;

/// Get total magnitude of state.
pub fn prob_magnitude(input: &[Amplitude]) -> f64 {
    iter!(input).map(Amplitude::norm_sqr).sum()
}

/// Probability that qubit `position` of `register` is measured as `value`.
///
/// # Example
/// ```
/// use qregister::measurement_ops::measure_prob;
/// use qregister::state::QubitRegister;
///
/// // |10>: position 0 is always 1, position 1 is always 0.
/// let r = QubitRegister::from_reals(&[0.0, 0.0, 1.0, 0.0]).unwrap();
/// assert_eq!(measure_prob(&r, 0, true).unwrap(), 1.0);
/// assert_eq!(measure_prob(&r, 1, true).unwrap(), 0.0);
/// ```
pub fn measure_prob(register: &QubitRegister, position: usize, value: bool) -> QuantumResult<f64> {
    QuantumError::check_index(position, register.n())?;
    let bit = position_bit(register.n(), position);
    Ok(register
        .amplitudes()
        .iter()
        .enumerate()
        .filter(|(indx, _)| get_bit(*indx, bit) == value)
        .map(|(_, amp)| amp.norm_sqr())
        .sum())
}

/// Randomly collapse a qubit to a basis state, `true` with probability `|beta|^2`.
/// Returns the outcome and the collapsed qubit.
pub fn collapse<R: Rng>(qubit: &Qubit, rng: &mut R) -> (bool, Qubit) {
    let outcome = rng.gen::<f64>() < qubit.probability_one();
    (outcome, Qubit::from_bool(outcome))
}

#[cfg(test)]
mod measurement_tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_prob_magnitude() {
        let r = QubitRegister::from_reals(&[0.6, 0.0, 0.0, 0.8]).unwrap();
        assert!((prob_magnitude(r.amplitudes()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_measure_prob_marginal() {
        let r = QubitRegister::from_reals(&[0.6, 0.0, 0.0, 0.8]).unwrap();
        assert!((measure_prob(&r, 0, false).unwrap() - 0.36).abs() < 1e-12);
        assert!((measure_prob(&r, 1, true).unwrap() - 0.64).abs() < 1e-12);
        assert!(measure_prob(&r, 2, true).is_err());
    }

    #[test]
    fn test_collapse_basis_states() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..16 {
            assert_eq!(collapse(&Qubit::zero(), &mut rng), (false, Qubit::zero()));
            assert_eq!(collapse(&Qubit::one(), &mut rng), (true, Qubit::one()));
        }
    }

    #[test]
    fn test_collapse_superposition() {
        let mut rng = SmallRng::seed_from_u64(42);
        let q = Qubit::zero().left_rotation();
        let ones = (0..1000).filter(|_| collapse(&q, &mut rng).0).count();
        assert!(ones > 350 && ones < 650, "{} ones", ones);
    }
}
