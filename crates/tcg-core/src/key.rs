//! # MatrixKey — Canonical Matrix Identity
//!
//! Defines `MatrixKey`, the flattened row-major representation of a
//! [`Matrix3`] used as the currency for set membership, deduplication,
//! and stable arena indexing in the closure engine.
//!
//! ## Invariant
//!
//! Two `Matrix3` values are equal iff their keys are equal. Keys built
//! from matrices satisfy the entry range by construction; deserialized
//! keys are validated, so `MatrixKey → Matrix3` is infallible.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::field::F3;
use crate::matrix::Matrix3;

/// The canonical hashable identity of a 3×3 matrix over F₃: its nine
/// entries flattened row-major.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "[u8; 9]", into = "[u8; 9]")]
pub struct MatrixKey([u8; 9]);

impl MatrixKey {
    /// The flattened entries, row-major.
    pub fn as_bytes(&self) -> &[u8; 9] {
        &self.0
    }
}

impl From<&Matrix3> for MatrixKey {
    fn from(matrix: &Matrix3) -> MatrixKey {
        let rows = matrix.rows();
        let mut flat = [0u8; 9];
        for (i, row) in rows.iter().enumerate() {
            flat[i * 3..i * 3 + 3].copy_from_slice(row);
        }
        MatrixKey(flat)
    }
}

impl From<Matrix3> for MatrixKey {
    fn from(matrix: Matrix3) -> MatrixKey {
        MatrixKey::from(&matrix)
    }
}

impl From<MatrixKey> for Matrix3 {
    /// Rebuild the matrix. Infallible: every `MatrixKey` holds validated
    /// entries.
    fn from(key: MatrixKey) -> Matrix3 {
        let mut entries = [[F3::ZERO; 3]; 3];
        for (flat_index, &value) in key.0.iter().enumerate() {
            // Validated at construction/deserialization; reduce is a no-op.
            entries[flat_index / 3][flat_index % 3] = F3::reduce(u16::from(value));
        }
        Matrix3::from_entries(entries)
    }
}

impl TryFrom<[u8; 9]> for MatrixKey {
    type Error = CoreError;

    fn try_from(flat: [u8; 9]) -> Result<Self, Self::Error> {
        for &value in &flat {
            if value > 2 {
                return Err(CoreError::OutOfRange(i64::from(value)));
            }
        }
        Ok(MatrixKey(flat))
    }
}

impl From<MatrixKey> for [u8; 9] {
    fn from(key: MatrixKey) -> [u8; 9] {
        key.0
    }
}

impl std::fmt::Display for MatrixKey {
    /// Nine digits, row-major, e.g. `010022100`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        let m = Matrix3::from_rows([[0, 1, 0], [0, 2, 2], [1, 0, 0]]).unwrap();
        let key = m.key();
        assert_eq!(Matrix3::from(key), m);
    }

    #[test]
    fn test_key_equality_iff_matrix_equality() {
        let a = Matrix3::from_rows([[0, 1, 0], [0, 2, 2], [1, 0, 0]]).unwrap();
        let b = Matrix3::from_rows([[0, 1, 0], [0, 2, 2], [1, 2, 1]]).unwrap();
        assert_ne!(a.key(), b.key());
        assert_eq!(a.key(), a.key());
    }

    #[test]
    fn test_display_is_nine_digits() {
        let m = Matrix3::from_rows([[0, 1, 0], [0, 2, 2], [1, 0, 0]]).unwrap();
        assert_eq!(m.key().to_string(), "010022100");
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        let err = MatrixKey::try_from([0, 1, 2, 0, 1, 2, 0, 1, 7]);
        assert_eq!(err, Err(CoreError::OutOfRange(7)));
    }

    #[test]
    fn test_serde_validates() {
        let key: MatrixKey = serde_json::from_str("[0,1,0,0,2,2,1,0,0]").unwrap();
        assert_eq!(key.to_string(), "010022100");
        let rejected: Result<MatrixKey, _> =
            serde_json::from_str("[0,1,0,0,2,2,1,0,5]");
        assert!(rejected.is_err());
    }
}
