//! # Filtration Cascade Oracle Tests
//!
//! The stratum sizes are fixed mathematical facts: 19 683 raw matrices,
//! 11 232 invertible, 432 row-stochastic, 108 kernel-normalizing, 54
//! doubly stochastic. Every test here must reproduce them exactly.

use tcg_group::{
    enumerate_gl3, is_doubly_stochastic, is_row_stochastic, normalizes_kernel, raw_matrices,
    Stratum, DOUBLY_STOCHASTIC_ORDER, GL3_ORDER, KERNEL_STRATUM_ORDER, RAW_MATRIX_COUNT,
    ROW_STOCHASTIC_ORDER,
};

#[test]
fn raw_grid_has_3_to_the_9_matrices() {
    assert_eq!(raw_matrices().count(), RAW_MATRIX_COUNT);
}

#[test]
fn invertibility_keeps_exactly_11232() {
    assert_eq!(enumerate_gl3().len(), GL3_ORDER);
}

#[test]
fn conservation_keeps_exactly_432() {
    let count = enumerate_gl3()
        .iter()
        .filter(|m| is_row_stochastic(m))
        .count();
    assert_eq!(count, ROW_STOCHASTIC_ORDER);
}

#[test]
fn conservation_plus_kernel_normalization_keeps_exactly_108() {
    let count = enumerate_gl3()
        .iter()
        .filter(|m| is_row_stochastic(m) && normalizes_kernel(m))
        .count();
    assert_eq!(count, KERNEL_STRATUM_ORDER);
}

#[test]
fn double_stochasticity_keeps_exactly_54() {
    let count = enumerate_gl3()
        .iter()
        .filter(|m| is_doubly_stochastic(m))
        .count();
    assert_eq!(count, DOUBLY_STOCHASTIC_ORDER);
}

#[test]
fn materialized_strata_match_oracle_sizes() {
    for stratum in Stratum::all() {
        let set = stratum.materialize();
        assert_eq!(
            set.len(),
            stratum.expected_size(),
            "stratum {stratum} missed its oracle size"
        );
    }
}

#[test]
fn doubly_stochastic_refines_row_stochastic() {
    let rows = Stratum::RowStochastic.materialize();
    let both = Stratum::DoublyStochastic.materialize();
    assert!(both.is_subset_of(&rows));
}

#[test]
fn kernel_stratum_refines_row_stochastic_but_not_doubly_stochastic() {
    let rows = Stratum::RowStochastic.materialize();
    let kernel = Stratum::KernelNormalizing.materialize();
    let both = Stratum::DoublyStochastic.materialize();
    assert!(kernel.is_subset_of(&rows));
    // The refinement only runs one way: 54 ⊆ 108 but 108 ⊄ 54.
    assert!(both.is_subset_of(&kernel));
    assert!(!kernel.is_subset_of(&both));
}
