//! # Matrix3 — Immutable 3×3 Matrices over F₃
//!
//! The central value type of the stack. A `Matrix3` is an ordered 3×3
//! array of [`F3`] entries; every operation (product, determinant, trace,
//! row/column sums, multiplicative order) is pure and returns a new value.
//!
//! ## Design
//!
//! - The determinant is the explicit 3×3 cofactor expansion computed
//!   entirely in F₃ arithmetic. No floating-point path exists.
//! - The multiplicative order is computed by repeated multiplication up
//!   to a caller-supplied cap. The cap is a safety bound, not a
//!   mathematical limit: for the documented strata every order divides
//!   the group order and the default of 20 is ample.

use serde::{Deserialize, Serialize};
use std::ops::Mul;

use crate::error::CoreError;
use crate::field::F3;
use crate::key::MatrixKey;

/// Default safety bound for multiplicative order computation.
///
/// Orders observed across the documented operator sets top out at 8
/// (the 54-set carries {1, 2, 3, 6}); any order above this bound is
/// reported as `None` by [`Matrix3::order`] rather than looping further.
pub const DEFAULT_ORDER_CAP: u32 = 20;

/// An immutable 3×3 matrix over F₃.
///
/// Entries are always in {0, 1, 2} — guaranteed by construction, since
/// the only ways to build a `Matrix3` are validated entry arrays, keys
/// produced from other matrices, and F₃ arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[[u8; 3]; 3]", into = "[[u8; 3]; 3]")]
pub struct Matrix3([[F3; 3]; 3]);

impl Matrix3 {
    /// The identity matrix.
    pub const IDENTITY: Matrix3 = Matrix3([
        [F3::ONE, F3::ZERO, F3::ZERO],
        [F3::ZERO, F3::ONE, F3::ZERO],
        [F3::ZERO, F3::ZERO, F3::ONE],
    ]);

    /// Build a matrix from raw row-major entries, validating each entry.
    pub fn from_rows(rows: [[u8; 3]; 3]) -> Result<Self, CoreError> {
        let mut entries = [[F3::ZERO; 3]; 3];
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                entries[i][j] = F3::new(value)?;
            }
        }
        Ok(Matrix3(entries))
    }

    /// Build a matrix from entries already known to be field elements.
    pub const fn from_entries(entries: [[F3; 3]; 3]) -> Self {
        Matrix3(entries)
    }

    /// The entry at `(row, col)`.
    pub fn entry(&self, row: usize, col: usize) -> F3 {
        self.0[row][col]
    }

    /// Raw row-major entries as `u8` values.
    pub fn rows(&self) -> [[u8; 3]; 3] {
        self.0.map(|row| row.map(F3::value))
    }

    /// Sum of row `i`, reduced mod 3.
    pub fn row_sum(&self, i: usize) -> F3 {
        self.0[i].iter().copied().sum()
    }

    /// Sum of column `j`, reduced mod 3.
    pub fn col_sum(&self, j: usize) -> F3 {
        self.0.iter().map(|row| row[j]).sum()
    }

    /// The trace, reduced mod 3.
    pub fn trace(&self) -> F3 {
        self.0[0][0] + self.0[1][1] + self.0[2][2]
    }

    /// The determinant by cofactor expansion along the first row,
    /// computed entirely in F₃ arithmetic.
    pub fn determinant(&self) -> F3 {
        let m = &self.0;
        let minor_a = m[1][1] * m[2][2] - m[1][2] * m[2][1];
        let minor_b = m[1][0] * m[2][2] - m[1][2] * m[2][0];
        let minor_c = m[1][0] * m[2][1] - m[1][1] * m[2][0];
        m[0][0] * minor_a - m[0][1] * minor_b + m[0][2] * minor_c
    }

    /// Whether the matrix lies in GL(3,F₃).
    pub fn is_invertible(&self) -> bool {
        self.determinant() != F3::ZERO
    }

    /// Apply the matrix to a column vector over F₃.
    pub fn apply(&self, v: [F3; 3]) -> [F3; 3] {
        let mut result = [F3::ZERO; 3];
        for (i, row) in self.0.iter().enumerate() {
            result[i] = row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
        }
        result
    }

    /// The multiplicative order of the matrix: the least n ≥ 1 with
    /// Mⁿ = I, or `None` if it exceeds `cap`.
    ///
    /// Singular matrices have no finite order; callers are expected to
    /// check [`Matrix3::is_invertible`] first (the closure and search
    /// layers surface that as [`CoreError::Singular`]).
    pub fn order(&self, cap: u32) -> Option<u32> {
        let mut power = *self;
        for n in 1..=cap {
            if power == Matrix3::IDENTITY {
                return Some(n);
            }
            power = power * *self;
        }
        None
    }

    /// The canonical key for this matrix (flattened row-major entries).
    pub fn key(&self) -> MatrixKey {
        MatrixKey::from(self)
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;

    /// Standard 3×3 matrix product, each entry reduced mod 3.
    fn mul(self, rhs: Matrix3) -> Matrix3 {
        let mut product = [[F3::ZERO; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                product[i][j] = self.0[i][0] * rhs.0[0][j]
                    + self.0[i][1] * rhs.0[1][j]
                    + self.0[i][2] * rhs.0[2][j];
            }
        }
        Matrix3(product)
    }
}

impl TryFrom<[[u8; 3]; 3]> for Matrix3 {
    type Error = CoreError;

    fn try_from(rows: [[u8; 3]; 3]) -> Result<Self, Self::Error> {
        Matrix3::from_rows(rows)
    }
}

impl From<Matrix3> for [[u8; 3]; 3] {
    fn from(matrix: Matrix3) -> [[u8; 3]; 3] {
        matrix.rows()
    }
}

impl std::fmt::Display for Matrix3 {
    /// Compact row-major rendering, e.g. `[[0,1,0],[0,2,2],[1,0,0]]`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "[{},{},{}]", row[0], row[1], row[2])?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> Matrix3 {
        Matrix3::from_rows([[0, 1, 0], [0, 2, 2], [1, 0, 0]]).unwrap()
    }

    #[test]
    fn test_from_rows_rejects_out_of_range() {
        let err = Matrix3::from_rows([[0, 1, 3], [0, 0, 0], [0, 0, 0]]);
        assert_eq!(err, Err(CoreError::OutOfRange(3)));
    }

    #[test]
    fn test_identity_is_neutral() {
        let m = sample();
        assert_eq!(m * Matrix3::IDENTITY, m);
        assert_eq!(Matrix3::IDENTITY * m, m);
    }

    #[test]
    fn test_product_reduces_mod_3() {
        let twos = Matrix3::from_rows([[2, 2, 2], [2, 2, 2], [2, 2, 2]]).unwrap();
        let product = twos * twos;
        // Each entry is 2·2 + 2·2 + 2·2 = 12 ≡ 0 (mod 3).
        assert_eq!(
            product,
            Matrix3::from_rows([[0, 0, 0], [0, 0, 0], [0, 0, 0]]).unwrap()
        );
    }

    #[test]
    fn test_determinant_known_values() {
        assert_eq!(Matrix3::IDENTITY.determinant(), F3::ONE);
        // A permutation matrix with an odd permutation has det = −1 = 2.
        let swap = Matrix3::from_rows([[0, 1, 0], [1, 0, 0], [0, 0, 1]]).unwrap();
        assert_eq!(swap.determinant(), F3::TWO);
        let singular = Matrix3::from_rows([[1, 1, 1], [1, 1, 1], [0, 0, 1]]).unwrap();
        assert_eq!(singular.determinant(), F3::ZERO);
        assert!(!singular.is_invertible());
    }

    #[test]
    fn test_trace_and_sums() {
        let m = Matrix3::from_rows([[1, 2, 1], [0, 1, 0], [2, 0, 2]]).unwrap();
        assert_eq!(m.trace(), F3::ONE); // 1 + 1 + 2 = 4 ≡ 1
        assert_eq!(m.row_sum(0), F3::ONE); // 1 + 2 + 1 = 4 ≡ 1
        assert_eq!(m.col_sum(0), F3::ZERO); // 1 + 0 + 2 = 3 ≡ 0
    }

    #[test]
    fn test_apply_vector() {
        let m = sample();
        let v = [F3::ONE, F3::TWO, F3::ZERO];
        // Row 0: [0,1,0]·[1,2,0] = 2; row 1: [0,2,2]·[1,2,0] = 4 ≡ 1;
        // row 2: [1,0,0]·[1,2,0] = 1.
        assert_eq!(m.apply(v), [F3::TWO, F3::ONE, F3::ONE]);
    }

    #[test]
    fn test_order_of_identity_is_one() {
        assert_eq!(Matrix3::IDENTITY.order(DEFAULT_ORDER_CAP), Some(1));
    }

    #[test]
    fn test_order_of_transposition_is_two() {
        let swap = Matrix3::from_rows([[0, 1, 0], [1, 0, 0], [0, 0, 1]]).unwrap();
        assert_eq!(swap.order(DEFAULT_ORDER_CAP), Some(2));
    }

    #[test]
    fn test_order_cap_exceeded_returns_none() {
        let swap = Matrix3::from_rows([[0, 1, 0], [1, 0, 0], [0, 0, 1]]).unwrap();
        assert_eq!(swap.order(1), None);
    }

    #[test]
    fn test_display_compact() {
        assert_eq!(sample().to_string(), "[[0,1,0],[0,2,2],[1,0,0]]");
    }

    #[test]
    fn test_serde_roundtrip_and_validation() {
        let m = sample();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[0,1,0],[0,2,2],[1,0,0]]");
        let back: Matrix3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        let rejected: Result<Matrix3, _> =
            serde_json::from_str("[[0,1,9],[0,0,0],[0,0,0]]");
        assert!(rejected.is_err());
    }

    fn arb_matrix() -> impl Strategy<Value = Matrix3> {
        proptest::array::uniform3(proptest::array::uniform3(0u8..3))
            .prop_map(|rows| Matrix3::from_rows(rows).unwrap())
    }

    proptest! {
        #[test]
        fn prop_determinant_is_multiplicative(a in arb_matrix(), b in arb_matrix()) {
            prop_assert_eq!((a * b).determinant(), a.determinant() * b.determinant());
        }

        #[test]
        fn prop_product_is_associative(
            a in arb_matrix(),
            b in arb_matrix(),
            c in arb_matrix(),
        ) {
            prop_assert_eq!((a * b) * c, a * (b * c));
        }

        #[test]
        fn prop_key_equality_matches_matrix_equality(a in arb_matrix(), b in arb_matrix()) {
            prop_assert_eq!(a == b, a.key() == b.key());
        }
    }
}
