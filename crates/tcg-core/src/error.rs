//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the stack. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Algebraic invariant violations fail loudly with the offending matrix
//!   key attached: a singular matrix inside a supposed group indicates
//!   upstream data corruption, not a recoverable condition.
//! - Parse-level faults (malformed operator records) are NOT represented
//!   here — they are recovered locally at the loading site by skipping and
//!   counting, per the pool-loading contract.

use thiserror::Error;

use crate::key::MatrixKey;

/// Top-level error type for the core algebra.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A value outside {0, 1, 2} reached a validated F₃ boundary.
    #[error("field element out of range (expected 0, 1, or 2): {0}")]
    OutOfRange(i64),

    /// A singular matrix reached a context that assumes invertibility
    /// (closure seeds, order computation). The group algebra is only
    /// sound over GL(3,F₃), so this is surfaced as a hard failure.
    #[error("singular matrix where an invertible element was required: {0}")]
    Singular(MatrixKey),
}
