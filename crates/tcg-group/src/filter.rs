//! # Constraint Filtration — Stratifying GL(3,F₃)
//!
//! A library of boolean predicates over a matrix and the named operator
//! strata they define. Filtration is plain predicate conjunction: each
//! stratum is GL(3,F₃) narrowed by one or two independent, composable
//! predicates — there is no bespoke per-stage code.
//!
//! ## Strata (oracle sizes)
//!
//! | stratum | constraints | size |
//! |---|---|---|
//! | `gl3f3` | invertible | 11 232 |
//! | `row_stochastic` | + every row sums to 1 ("conservation") | 432 |
//! | `kernel_normalizing` | + preserves ker([1,1,1]) ("non-annihilation") | 108 |
//! | `doubly_stochastic` | + every column also sums to 1 | 54 |
//!
//! The doubly-stochastic stratum is a strict refinement of the
//! row-stochastic one; the kernel-normalizing stratum is an independent
//! refinement of it. Sizes are fixed invariants asserted in tests.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tcg_core::{Matrix3, MatrixKey, F3};
use thiserror::Error;

use crate::enumerate::{enumerate_gl3, GL3_ORDER};

/// Order of the row-stochastic ("conservation") stratum.
pub const ROW_STOCHASTIC_ORDER: usize = 432;

/// Order of the conservation + kernel-normalizing ("non-annihilation")
/// stratum.
pub const KERNEL_STRATUM_ORDER: usize = 108;

/// Order of the doubly-stochastic stratum.
pub const DOUBLY_STOCHASTIC_ORDER: usize = 54;

/// Basis of H = ker([1,1,1]), the 2-dimensional kernel of the all-ones
/// covector. Every v with sum(v) ≡ 0 is a linear combination of these.
const KERNEL_BASIS: [[F3; 3]; 2] = [
    [F3::ONE, F3::TWO, F3::ZERO],
    [F3::ZERO, F3::ONE, F3::TWO],
];

/// Every row sums to 1 mod 3 (the "conservation" constraint).
pub fn is_row_stochastic(m: &Matrix3) -> bool {
    (0..3).all(|i| m.row_sum(i) == F3::ONE)
}

/// Every row AND every column sums to 1 mod 3.
pub fn is_doubly_stochastic(m: &Matrix3) -> bool {
    is_row_stochastic(m) && (0..3).all(|j| m.col_sum(j) == F3::ONE)
}

/// Whether M preserves H = ker([1,1,1]): M·v stays in H for every v in H.
///
/// Checking the two basis vectors suffices — the predicate is linear in
/// v, so every combination follows (the zero vector trivially so).
pub fn normalizes_kernel(m: &Matrix3) -> bool {
    KERNEL_BASIS.iter().all(|&v| {
        let image = m.apply(v);
        image[0] + image[1] + image[2] == F3::ZERO
    })
}

/// The named strata carved out of GL(3,F₃) by constraint filtration.
///
/// This is the single source of truth for stratum names, constraint
/// stacks, and oracle sizes. Every `match` on `Stratum` is exhaustive —
/// adding a stratum forces every consumer to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stratum {
    /// All of GL(3,F₃).
    Gl3F3,
    /// Conservation only: 432 matrices.
    RowStochastic,
    /// Conservation + non-annihilation: 108 matrices.
    KernelNormalizing,
    /// Conservation on rows and columns: 54 matrices.
    DoublyStochastic,
}

impl Stratum {
    /// All strata, coarsest first.
    pub fn all() -> &'static [Stratum] {
        &[
            Self::Gl3F3,
            Self::RowStochastic,
            Self::KernelNormalizing,
            Self::DoublyStochastic,
        ]
    }

    /// The snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gl3F3 => "gl3f3",
            Self::RowStochastic => "row_stochastic",
            Self::KernelNormalizing => "kernel_normalizing",
            Self::DoublyStochastic => "doubly_stochastic",
        }
    }

    /// The oracle size of this stratum. Fixed mathematical facts, not
    /// tunable parameters.
    pub fn expected_size(&self) -> usize {
        match self {
            Self::Gl3F3 => GL3_ORDER,
            Self::RowStochastic => ROW_STOCHASTIC_ORDER,
            Self::KernelNormalizing => KERNEL_STRATUM_ORDER,
            Self::DoublyStochastic => DOUBLY_STOCHASTIC_ORDER,
        }
    }

    /// Whether a matrix belongs to this stratum. Invertibility is part
    /// of every stratum; the rest is predicate conjunction.
    pub fn admits(&self, m: &Matrix3) -> bool {
        if !m.is_invertible() {
            return false;
        }
        match self {
            Self::Gl3F3 => true,
            Self::RowStochastic => is_row_stochastic(m),
            Self::KernelNormalizing => is_row_stochastic(m) && normalizes_kernel(m),
            Self::DoublyStochastic => is_doubly_stochastic(m),
        }
    }

    /// Materialize the stratum by filtering the full enumeration.
    pub fn materialize(&self) -> OperatorSet {
        OperatorSet::from_matrices(
            self.as_str(),
            enumerate_gl3().into_iter().filter(|m| self.admits(m)),
        )
    }
}

impl std::fmt::Display for Stratum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse failure for stratum identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown stratum: {0:?}")]
pub struct UnknownStratum(pub String);

impl FromStr for Stratum {
    type Err = UnknownStratum;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gl3f3" => Ok(Self::Gl3F3),
            "row_stochastic" => Ok(Self::RowStochastic),
            "kernel_normalizing" => Ok(Self::KernelNormalizing),
            "doubly_stochastic" => Ok(Self::DoublyStochastic),
            other => Err(UnknownStratum(other.to_string())),
        }
    }
}

/// A named, duplicate-free, insertion-ordered collection of matrices.
///
/// Membership is keyed by [`MatrixKey`], so two sets agree on membership
/// exactly when they agree on matrix equality.
#[derive(Debug, Clone)]
pub struct OperatorSet {
    name: String,
    matrices: Vec<Matrix3>,
    index: HashMap<MatrixKey, usize>,
}

impl OperatorSet {
    /// Create an empty named set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matrices: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a named set from matrices, dropping duplicates.
    pub fn from_matrices(
        name: impl Into<String>,
        matrices: impl IntoIterator<Item = Matrix3>,
    ) -> Self {
        let mut set = Self::new(name);
        for m in matrices {
            set.insert(m);
        }
        set
    }

    /// Insert a matrix. Returns false if it was already present.
    pub fn insert(&mut self, m: Matrix3) -> bool {
        let key = m.key();
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.matrices.len());
        self.matrices.push(m);
        true
    }

    /// The set name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of distinct matrices.
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Membership by canonical key.
    pub fn contains(&self, key: &MatrixKey) -> bool {
        self.index.contains_key(key)
    }

    /// The matrices in insertion order.
    pub fn matrices(&self) -> &[Matrix3] {
        &self.matrices
    }

    /// Narrow the set by a predicate into a new named set.
    pub fn filter(
        &self,
        name: impl Into<String>,
        predicate: impl Fn(&Matrix3) -> bool,
    ) -> OperatorSet {
        OperatorSet::from_matrices(
            name,
            self.matrices.iter().copied().filter(|m| predicate(m)),
        )
    }

    /// Whether every element of `self` belongs to `other`.
    pub fn is_subset_of(&self, other: &OperatorSet) -> bool {
        self.matrices.iter().all(|m| other.contains(&m.key()))
    }

    /// Whether the set is closed under matrix multiplication.
    pub fn is_closed(&self) -> bool {
        self.matrices.iter().all(|&a| {
            self.matrices
                .iter()
                .all(|&b| self.contains(&(a * b).key()))
        })
    }
}
