//! Bit helpers and the index convention shared by every part of the register.
//!
//! A symbol `[b_0, b_1, ..., b_{n-1}]` addresses linear index `sum(b_j << j)`, so boolean `j` is
//! bit `j`. Qubit position `p` is bit `n - 1 - p`: position 0 is the most significant bit, which is
//! the ordering produced by extending a Kronecker product on the right.

use crate::errors::{QuantumError, QuantumResult};

/// Set the `bit_index` bit in `num` to `value`.
///
/// # Example
/// ```
/// use qregister::utils::set_bit;
/// let n = set_bit(0, 1, true);
/// assert_eq!(n, 2);
/// ```
pub fn set_bit(num: usize, bit_index: usize, value: bool) -> usize {
    let v = 1 << bit_index;
    if value {
        num | v
    } else {
        num & !v
    }
}

/// Get the `bit_index` bit value from `num`.
///
/// # Example
/// ```
/// use qregister::utils::get_bit;
/// let n = get_bit(2, 1);
/// assert_eq!(n, true);
/// ```
pub fn get_bit(num: usize, bit_index: usize) -> bool {
    ((num >> bit_index) & 1) != 0
}

/// The index bit holding qubit `position` in an `n` qubit register. `position` must be below `n`.
///
/// # Example
/// ```
/// use qregister::utils::position_bit;
/// assert_eq!(position_bit(3, 0), 2);
/// assert_eq!(position_bit(3, 2), 0);
/// ```
pub fn position_bit(n: usize, position: usize) -> usize {
    debug_assert!(position < n, "position {} outside {} qubits", position, n);
    n - 1 - position
}

/// Linear index of a symbol, boolean `j` being bit `j`.
///
/// # Example
/// ```
/// use qregister::utils::symbol_to_index;
/// assert_eq!(symbol_to_index(&[true, false, true]), 0b101);
/// assert_eq!(symbol_to_index(&[false, true, true]), 0b110);
/// ```
pub fn symbol_to_index(symbol: &[bool]) -> usize {
    symbol
        .iter()
        .enumerate()
        .fold(0, |acc, (j, bit)| set_bit(acc, j, *bit))
}

/// The `n` boolean symbol addressing `index`, boolean `j` being bit `j`.
///
/// # Example
/// ```
/// use qregister::utils::index_to_symbol;
/// assert_eq!(index_to_symbol(3, 0b110), vec![false, true, true]);
/// ```
pub fn index_to_symbol(n: usize, index: usize) -> Vec<bool> {
    (0..n).map(|j| get_bit(index, j)).collect()
}

/// Ket rendering of `index` with position 0 leftmost, e.g. `|011>`.
///
/// # Example
/// ```
/// use qregister::utils::ket;
/// assert_eq!(ket(3, 0b011), "|011>");
/// assert_eq!(ket(3, 0b100), "|100>");
/// ```
pub fn ket(n: usize, index: usize) -> String {
    let bits: String = (0..n)
        .map(|p| {
            if get_bit(index, position_bit(n, p)) {
                '1'
            } else {
                '0'
            }
        })
        .collect();
    format!("|{}>", bits)
}

/// Number of qubits addressed by a vector of `len` amplitudes.
///
/// # Example
/// ```
/// use qregister::utils::qubits_for_len;
/// assert_eq!(qubits_for_len(8), Ok(3));
/// assert!(qubits_for_len(6).is_err());
/// assert!(qubits_for_len(1).is_err());
/// ```
pub fn qubits_for_len(len: usize) -> QuantumResult<usize> {
    if len < 2 || !len.is_power_of_two() {
        Err(QuantumError::InvalidLength(len))
    } else {
        Ok(len.trailing_zeros() as usize)
    }
}

#[cfg(test)]
mod utils_tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for n in 1..=5 {
            for i in 0..1 << n {
                let symbol = index_to_symbol(n, i);
                assert_eq!(symbol.len(), n);
                assert_eq!(symbol_to_index(&symbol), i);
            }
        }
    }

    #[test]
    fn test_ket_matches_positions() {
        let n = 4;
        for i in 0..1 << n {
            let k = ket(n, i);
            let chars: Vec<char> = k[1..=n].chars().collect();
            for (p, c) in chars.iter().enumerate() {
                assert_eq!(*c == '1', get_bit(i, position_bit(n, p)));
            }
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_position_bit_outside_register() {
        position_bit(2, 2);
    }
}
