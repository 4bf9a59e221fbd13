//! # Group Closure — Breadth-First Expansion under Multiplication
//!
//! Computes the closure of a seed set of matrices under matrix
//! multiplication, bounded by a size cap. Used both to verify that the
//! named strata are closed groups and as the inner engine of the
//! generating-set search.
//!
//! ## Algorithm
//!
//! Arena style: each discovered matrix gets a stable integer id on first
//! sight; membership and the work queue operate on ids keyed by
//! [`MatrixKey`], so canonicalization happens once per matrix. A dequeued
//! matrix `g` is multiplied against the snapshot of elements present at
//! dequeue time, in both orders (`g·e` and `e·g` — the product is not
//! commutative), and unseen products are enqueued.
//!
//! ## Truncation semantics
//!
//! Reaching `cap` elements with a further NEW product pending yields
//! [`ClosureOutcome::Truncated`]: the seeds generate *at least* `cap`
//! elements. Draining the queue without discovering anything new — even
//! at exactly `cap` elements — yields [`ClosureOutcome::Complete`]: the
//! closure is exact. The distinction is load-bearing and is never
//! collapsed in reports.

use std::collections::{BTreeMap, HashMap, VecDeque};

use serde::{Deserialize, Serialize};
use tcg_core::{CoreError, Matrix3, MatrixKey};

/// Whether a closure run finished or hit the size cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosureOutcome {
    /// The work queue drained: the closure is exact.
    Complete,
    /// The size cap was reached with new products still appearing: the
    /// seeds generate at least `cap` elements.
    Truncated,
}

/// Distribution of multiplicative element orders over a closure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderHistogram {
    /// order → number of elements with that order.
    pub orders: BTreeMap<u32, usize>,
    /// Elements whose order exceeded the safety cap.
    pub capped: usize,
}

/// The result of a closure computation: the closed (or truncated) set
/// plus run metadata. Immutable after construction.
#[derive(Debug, Clone)]
pub struct ClosureResult {
    elements: Vec<Matrix3>,
    index: HashMap<MatrixKey, usize>,
    outcome: ClosureOutcome,
    multiplications: u64,
}

impl ClosureResult {
    /// Number of elements discovered.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the closure holds no elements. Never true in practice —
    /// the identity is always seeded.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether the run finished without hitting the cap.
    pub fn is_complete(&self) -> bool {
        self.outcome == ClosureOutcome::Complete
    }

    /// The complete/truncated verdict.
    pub fn outcome(&self) -> ClosureOutcome {
        self.outcome
    }

    /// Number of matrix multiplications performed.
    pub fn multiplications(&self) -> u64 {
        self.multiplications
    }

    /// Membership by canonical key.
    pub fn contains(&self, key: &MatrixKey) -> bool {
        self.index.contains_key(key)
    }

    /// The discovered elements in discovery order. Only membership and
    /// size are semantically meaningful; discovery order is not stable
    /// across implementations.
    pub fn elements(&self) -> &[Matrix3] {
        &self.elements
    }

    /// Distribution of element orders, with `cap` as the safety bound.
    pub fn order_histogram(&self, cap: u32) -> OrderHistogram {
        let mut orders = BTreeMap::new();
        let mut capped = 0;
        for element in &self.elements {
            match element.order(cap) {
                Some(order) => *orders.entry(order).or_insert(0) += 1,
                None => capped += 1,
            }
        }
        OrderHistogram { orders, capped }
    }
}

/// Compute the closure of `seeds` under matrix multiplication, bounded
/// by `cap` elements.
///
/// The identity is always included. Every seed must be invertible —
/// a singular seed indicates upstream data corruption and is surfaced
/// as [`CoreError::Singular`] rather than silently dropped.
pub fn closure(seeds: &[Matrix3], cap: usize) -> Result<ClosureResult, CoreError> {
    for seed in seeds {
        if !seed.is_invertible() {
            return Err(CoreError::Singular(seed.key()));
        }
    }

    let mut elements: Vec<Matrix3> = Vec::new();
    let mut index: HashMap<MatrixKey, usize> = HashMap::new();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut multiplications = 0u64;

    // Returns false when the matrix is new but the cap leaves no room.
    fn admit(
        m: Matrix3,
        cap: usize,
        elements: &mut Vec<Matrix3>,
        index: &mut HashMap<MatrixKey, usize>,
        queue: &mut VecDeque<usize>,
    ) -> bool {
        let key = m.key();
        if index.contains_key(&key) {
            return true;
        }
        if elements.len() >= cap {
            return false;
        }
        index.insert(key, elements.len());
        queue.push_back(elements.len());
        elements.push(m);
        true
    }

    let mut seed_overflow =
        !admit(Matrix3::IDENTITY, cap, &mut elements, &mut index, &mut queue);
    for &seed in seeds {
        if !admit(seed, cap, &mut elements, &mut index, &mut queue) {
            seed_overflow = true;
        }
    }
    if seed_overflow {
        return Ok(ClosureResult {
            elements,
            index,
            outcome: ClosureOutcome::Truncated,
            multiplications,
        });
    }

    while let Some(current_id) = queue.pop_front() {
        let current = elements[current_id];
        // Products against the elements present at dequeue time; later
        // discoveries get their turn when their own id is dequeued.
        let snapshot = elements.len();
        for partner_id in 0..snapshot {
            let partner = elements[partner_id];
            for product in [current * partner, partner * current] {
                multiplications += 1;
                if !admit(product, cap, &mut elements, &mut index, &mut queue) {
                    tracing::debug!(
                        size = elements.len(),
                        multiplications,
                        "closure truncated at cap"
                    );
                    return Ok(ClosureResult {
                        elements,
                        index,
                        outcome: ClosureOutcome::Truncated,
                        multiplications,
                    });
                }
            }
        }
    }

    tracing::debug!(
        size = elements.len(),
        multiplications,
        "closure complete"
    );
    Ok(ClosureResult {
        elements,
        index,
        outcome: ClosureOutcome::Complete,
        multiplications,
    })
}
