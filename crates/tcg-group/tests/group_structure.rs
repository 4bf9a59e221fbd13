//! # Group Structure Tests for the 54-Set
//!
//! The doubly-stochastic stratum is a closed group: it contains the
//! identity, is closed under multiplication, splits perfectly on
//! determinant (27/27 over {1,2}) and trace (27/27 over {0,1}), and its
//! element orders are exactly {1, 2, 3, 6}.

use std::collections::BTreeSet;

use tcg_core::{Matrix3, F3};
use tcg_group::{closure, Stratum, DOUBLY_STOCHASTIC_ORDER};

fn fifty_four() -> tcg_group::OperatorSet {
    Stratum::DoublyStochastic.materialize()
}

#[test]
fn the_54_set_contains_the_identity() {
    assert!(fifty_four().contains(&Matrix3::IDENTITY.key()));
}

#[test]
fn the_54_set_is_closed_under_multiplication() {
    assert!(fifty_four().is_closed());
}

#[test]
fn element_orders_are_exactly_1_2_3_6() {
    let observed: BTreeSet<u32> = fifty_four()
        .matrices()
        .iter()
        .map(|m| m.order(20).expect("54-set orders stay under the cap"))
        .collect();
    let expected: BTreeSet<u32> = [1, 2, 3, 6].into_iter().collect();
    assert_eq!(observed, expected);
}

#[test]
fn determinant_splits_27_27() {
    let set = fifty_four();
    let det_one = set
        .matrices()
        .iter()
        .filter(|m| m.determinant() == F3::ONE)
        .count();
    let det_two = set
        .matrices()
        .iter()
        .filter(|m| m.determinant() == F3::TWO)
        .count();
    assert_eq!(det_one, 27);
    assert_eq!(det_two, 27);
}

#[test]
fn trace_splits_27_27() {
    let set = fifty_four();
    let trace_zero = set
        .matrices()
        .iter()
        .filter(|m| m.trace() == F3::ZERO)
        .count();
    let trace_one = set
        .matrices()
        .iter()
        .filter(|m| m.trace() == F3::ONE)
        .count();
    assert_eq!(trace_zero, 27);
    assert_eq!(trace_one, 27);
}

#[test]
fn closure_is_idempotent_on_the_closed_54_set() {
    let set = fifty_four();
    let result = closure(set.matrices(), DOUBLY_STOCHASTIC_ORDER).unwrap();
    assert!(result.is_complete());
    assert_eq!(result.len(), set.len());
    for m in set.matrices() {
        assert!(result.contains(&m.key()));
    }
}

#[test]
fn order_histogram_covers_every_element() {
    let result = closure(fifty_four().matrices(), DOUBLY_STOCHASTIC_ORDER).unwrap();
    let histogram = result.order_histogram(20);
    assert_eq!(histogram.capped, 0);
    let counted: usize = histogram.orders.values().sum();
    assert_eq!(counted, DOUBLY_STOCHASTIC_ORDER);
    assert_eq!(histogram.orders.get(&1), Some(&1)); // the identity alone
}
