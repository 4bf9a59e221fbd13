//! # Known Operators — Verified Generators of the 432-Element Group
//!
//! Six hand-verified operators from the conservation stratum, each of
//! multiplicative order 8. They serve as the fallback pool when no full
//! operator table is available: eleven of their fifteen pairs generate
//! the full 432-element group, and the search engine identifies those
//! pairs as minimal generating sets.

use tcg_core::{Matrix3, F3};

const Z: F3 = F3::ZERO;
const O: F3 = F3::ONE;
const T: F3 = F3::TWO;

/// The six verified operators, row-major.
const KNOWN_GENERATORS: [Matrix3; 6] = [
    Matrix3::from_entries([[Z, O, Z], [Z, T, T], [O, Z, Z]]),
    Matrix3::from_entries([[Z, O, Z], [Z, T, T], [O, T, O]]),
    Matrix3::from_entries([[Z, O, Z], [T, Z, T], [O, Z, Z]]),
    Matrix3::from_entries([[O, Z, Z], [O, T, O], [Z, O, Z]]),
    Matrix3::from_entries([[O, Z, Z], [T, O, O], [Z, O, Z]]),
    Matrix3::from_entries([[T, O, O], [T, Z, T], [O, Z, Z]]),
];

/// The six verified operators, used as a limited fallback pool when no
/// full operator table is provided.
pub fn known_generators() -> [Matrix3; 6] {
    KNOWN_GENERATORS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::is_row_stochastic;

    #[test]
    fn test_known_generators_are_distinct() {
        let ops = known_generators();
        for (i, a) in ops.iter().enumerate() {
            for b in &ops[i + 1..] {
                assert_ne!(a.key(), b.key());
            }
        }
    }

    #[test]
    fn test_known_generators_lie_in_the_conservation_stratum() {
        for m in known_generators() {
            assert!(m.is_invertible());
            assert!(is_row_stochastic(&m));
        }
    }

    #[test]
    fn test_known_generators_all_have_order_8() {
        for m in known_generators() {
            assert_eq!(m.order(20), Some(8));
        }
    }
}
