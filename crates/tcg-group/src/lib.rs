//! # tcg-group — Filtration and Closure Algorithms over GL(3,F₃)
//!
//! The algorithmic heart of the stack. Builds on the value types of
//! `tcg-core` to provide, leaf to root:
//!
//! - [`enumerate`] — systematic enumeration of the 11 232 invertible
//!   3×3 matrices over F₃ from the 3⁹ raw entry grid.
//! - [`filter`] — constraint predicates (row-stochastic, doubly
//!   stochastic, kernel-normalizing) and the named operator strata they
//!   carve out of GL(3,F₃): 432, 108, and 54 elements.
//! - [`closure`](mod@closure) — breadth-first group closure under matrix
//!   multiplication, cap-bounded, with an explicit complete/truncated
//!   distinction and an element-order histogram.
//! - [`search`] — minimal generating set search over k-subsets of an
//!   operator pool, exhaustive where feasible and seed-reproducibly
//!   sampled where not.
//! - [`operators`] — six verified generators of the 432-element group,
//!   the fallback pool when no operator table is supplied.
//!
//! ## Crate Policy
//!
//! - All results are explicit records returned to the caller; no global
//!   mutable search state.
//! - Stratum sizes (11 232 / 432 / 108 / 54) are oracle invariants, not
//!   parameters.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod closure;
pub mod enumerate;
pub mod filter;
pub mod operators;
pub mod search;

// Re-export primary types for ergonomic imports.
pub use closure::{closure, ClosureOutcome, ClosureResult, OrderHistogram};
pub use enumerate::{enumerate_gl3, raw_matrices, GL3_ORDER, RAW_MATRIX_COUNT};
pub use filter::{
    is_doubly_stochastic, is_row_stochastic, normalizes_kernel, OperatorSet, Stratum,
    UnknownStratum, DOUBLY_STOCHASTIC_ORDER, KERNEL_STRATUM_ORDER, ROW_STOCHASTIC_ORDER,
};
pub use operators::known_generators;
pub use search::{
    find_minimal_generating_sets, verify_minimality, GeneratingSetRecord, KSummary,
    SearchConfig, SearchReport,
};
