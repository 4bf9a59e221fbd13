//! # tcg-core — Foundational Types for the Ternary Constraint Group Stack
//!
//! This crate is the bedrock of the stack. It defines the value types that
//! every algorithm operates on: the field F₃, immutable 3×3 matrices over
//! it, and the canonical key used for set membership. Every other crate in
//! the workspace depends on `tcg-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `F3` and `MatrixKey` are
//!    validated newtypes. No bare `u8` field elements, no bare tuples for
//!    matrix identity.
//!
//! 2. **Immutable value types.** `Matrix3` is `Copy`; every operation
//!    returns a new matrix. There is no in-place mutation anywhere in the
//!    algebra.
//!
//! 3. **Integer arithmetic only.** The determinant is computed by cofactor
//!    expansion over F₃, never through floating-point linear algebra, so
//!    there are no rounding artifacts to round away.
//!
//! 4. **Equality through `MatrixKey`.** Two matrices are equal iff their
//!    keys are equal. All deduplication and membership flows through the
//!    key type.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tcg-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod field;
pub mod key;
pub mod matrix;

// Re-export primary types for ergonomic imports.
pub use error::CoreError;
pub use field::F3;
pub use key::MatrixKey;
pub use matrix::Matrix3;
