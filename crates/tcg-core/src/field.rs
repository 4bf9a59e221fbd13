//! # F₃ — The Field with Three Elements
//!
//! Defines `F3`, a validated newtype over `u8` restricted to {0, 1, 2}
//! with all arithmetic reduced mod 3. This is the ONE scalar type used
//! across the entire stack; no raw integers carry field semantics.
//!
//! ## Invariant
//!
//! The wrapped value is always in {0, 1, 2}. The only constructors are
//! the validated [`F3::new`] / `TryFrom<u8>` and the reducing
//! [`F3::reduce`], so the invariant holds by construction and arithmetic
//! never needs to re-check it.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::CoreError;

/// An element of the finite field F₃ = {0, 1, 2}.
///
/// Arithmetic is total and pure: `Add`, `Sub`, `Mul`, and `Neg` all
/// reduce mod 3 and can never leave the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct F3(u8);

impl F3 {
    /// The additive identity.
    pub const ZERO: F3 = F3(0);
    /// The multiplicative identity.
    pub const ONE: F3 = F3(1);
    /// The remaining element, 2 = −1 in F₃.
    pub const TWO: F3 = F3(2);

    /// Create a field element from a value already in {0, 1, 2}.
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value < 3 {
            Ok(F3(value))
        } else {
            Err(CoreError::OutOfRange(i64::from(value)))
        }
    }

    /// Reduce an arbitrary non-negative integer into F₃.
    pub const fn reduce(value: u16) -> Self {
        F3((value % 3) as u8)
    }

    /// The canonical representative in {0, 1, 2}.
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Add for F3 {
    type Output = F3;

    fn add(self, rhs: F3) -> F3 {
        F3::reduce(u16::from(self.0) + u16::from(rhs.0))
    }
}

impl Mul for F3 {
    type Output = F3;

    fn mul(self, rhs: F3) -> F3 {
        F3::reduce(u16::from(self.0) * u16::from(rhs.0))
    }
}

impl Neg for F3 {
    type Output = F3;

    fn neg(self) -> F3 {
        F3::reduce(u16::from(3 - self.0))
    }
}

impl Sub for F3 {
    type Output = F3;

    fn sub(self, rhs: F3) -> F3 {
        self + (-rhs)
    }
}

impl Sum for F3 {
    fn sum<I: Iterator<Item = F3>>(iter: I) -> F3 {
        iter.fold(F3::ZERO, Add::add)
    }
}

impl TryFrom<u8> for F3 {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        F3::new(value)
    }
}

impl From<F3> for u8 {
    fn from(element: F3) -> u8 {
        element.0
    }
}

impl std::fmt::Display for F3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_elements() -> [F3; 3] {
        [F3::ZERO, F3::ONE, F3::TWO]
    }

    #[test]
    fn test_new_validates_range() {
        assert_eq!(F3::new(0), Ok(F3::ZERO));
        assert_eq!(F3::new(2), Ok(F3::TWO));
        assert_eq!(F3::new(3), Err(CoreError::OutOfRange(3)));
        assert_eq!(F3::new(255), Err(CoreError::OutOfRange(255)));
    }

    #[test]
    fn test_addition_table() {
        assert_eq!(F3::ONE + F3::ONE, F3::TWO);
        assert_eq!(F3::ONE + F3::TWO, F3::ZERO);
        assert_eq!(F3::TWO + F3::TWO, F3::ONE);
    }

    #[test]
    fn test_multiplication_table() {
        assert_eq!(F3::TWO * F3::TWO, F3::ONE);
        assert_eq!(F3::ONE * F3::TWO, F3::TWO);
        assert_eq!(F3::ZERO * F3::TWO, F3::ZERO);
    }

    #[test]
    fn test_negation_is_additive_inverse() {
        for a in all_elements() {
            assert_eq!(a + (-a), F3::ZERO);
        }
        assert_eq!(-F3::ZERO, F3::ZERO);
        assert_eq!(-F3::ONE, F3::TWO);
    }

    #[test]
    fn test_subtraction() {
        assert_eq!(F3::ZERO - F3::ONE, F3::TWO);
        assert_eq!(F3::TWO - F3::TWO, F3::ZERO);
    }

    #[test]
    fn test_sum_reduces_mod_3() {
        let total: F3 = [F3::TWO, F3::TWO, F3::TWO].into_iter().sum();
        assert_eq!(total, F3::ZERO);
    }

    #[test]
    fn test_field_axioms_exhaustive() {
        // F₃ is small enough to check every axiom over every combination.
        for a in all_elements() {
            for b in all_elements() {
                assert_eq!(a + b, b + a);
                assert_eq!(a * b, b * a);
                for c in all_elements() {
                    assert_eq!((a + b) + c, a + (b + c));
                    assert_eq!((a * b) * c, a * (b * c));
                    assert_eq!(a * (b + c), a * b + a * c);
                }
            }
        }
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        let parsed: Result<F3, _> = serde_json::from_str("2");
        assert_eq!(parsed.unwrap(), F3::TWO);
        let rejected: Result<F3, _> = serde_json::from_str("3");
        assert!(rejected.is_err());
    }
}
