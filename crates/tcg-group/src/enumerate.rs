//! # Matrix Enumeration — GL(3,F₃) from the Raw Entry Grid
//!
//! Produces the full general linear group by walking all 3⁹ = 19 683
//! raw entry combinations and keeping the invertible ones.
//!
//! ## Oracle
//!
//! |GL(3,F₃)| = 11 232 = (3³−1)(3³−3)(3³−3²). The enumeration must
//! reproduce this exactly; it is asserted in tests, never assumed.

use tcg_core::{Matrix3, F3};

/// Number of raw 3×3 entry combinations over {0, 1, 2}.
pub const RAW_MATRIX_COUNT: usize = 19_683;

/// Order of GL(3,F₃).
pub const GL3_ORDER: usize = 11_232;

/// Iterate over every raw 3×3 matrix over F₃, invertible or not,
/// in base-3 entry order (row-major, last entry fastest).
pub fn raw_matrices() -> impl Iterator<Item = Matrix3> {
    (0..RAW_MATRIX_COUNT as u32).map(|code| {
        let mut entries = [[F3::ZERO; 3]; 3];
        let mut remaining = code;
        // Decode base-3 digits, most significant digit first.
        for i in (0..3).rev() {
            for j in (0..3).rev() {
                entries[i][j] = F3::reduce((remaining % 3) as u16);
                remaining /= 3;
            }
        }
        Matrix3::from_entries(entries)
    })
}

/// Enumerate GL(3,F₃): all invertible 3×3 matrices over F₃.
pub fn enumerate_gl3() -> Vec<Matrix3> {
    raw_matrices().filter(Matrix3::is_invertible).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tcg_core::MatrixKey;

    #[test]
    fn test_raw_grid_is_exhaustive_and_distinct() {
        let keys: HashSet<MatrixKey> = raw_matrices().map(|m| m.key()).collect();
        assert_eq!(keys.len(), RAW_MATRIX_COUNT);
    }

    #[test]
    fn test_gl3_order_oracle() {
        assert_eq!(enumerate_gl3().len(), GL3_ORDER);
    }

    #[test]
    fn test_gl3_contains_identity() {
        assert!(enumerate_gl3().contains(&Matrix3::IDENTITY));
    }

    #[test]
    fn test_every_enumerated_matrix_is_invertible() {
        assert!(enumerate_gl3().iter().all(Matrix3::is_invertible));
    }
}
