//! # Generator Search — Minimal Generating Sets from an Operator Pool
//!
//! Iterates over k-subsets (k = 1, 2, 3, …) of a candidate operator
//! pool, runs the closure engine on each, and records which subsets
//! generate the full target group. The search stops raising k as soon as
//! a generating subset is found — the minimal-k question is monotonic —
//! and then verifies minimality of the found subsets by one-at-a-time
//! removal.
//!
//! ## Exhaustive vs sampled
//!
//! When the k-combination space fits under `exhaustive_limit`, every
//! subset is tested in lexicographic order and the per-k summary is
//! exact. Otherwise a fixed-size sample is drawn uniformly WITHOUT
//! replacement over combination ranks (combinatorial number system
//! unranking) from a seeded `StdRng`, and every reported proportion is a
//! statistical estimate — the summary says so via its `sampled` flag,
//! never conflating the two.
//!
//! ## Accumulation
//!
//! All progress state lives in the report being built and is returned to
//! the caller; the search mutates nothing outside its own stack frame.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tcg_core::{CoreError, Matrix3};

use crate::closure::{closure, OrderHistogram};
use crate::filter::KERNEL_STRATUM_ORDER;

/// Tuning knobs for a generating-set search. The defaults reproduce the
/// documented investigation over the 108-operator pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Size of the target group; a subset generates iff its closure is
    /// complete at exactly this size.
    pub target_size: usize,
    /// Largest subset size to try.
    pub max_k: usize,
    /// Subset spaces at most this large are enumerated exhaustively.
    pub exhaustive_limit: u64,
    /// Sample size used when the subset space is too large to enumerate.
    pub sample_size: usize,
    /// RNG seed for sampling; fixed for reproducibility.
    pub seed: u64,
    /// Safety bound for element-order computation.
    pub order_cap: u32,
    /// Generating subsets to put through the minimality check.
    pub minimality_checks: usize,
    /// Verified minimal examples to keep in the report.
    pub example_limit: usize,
    /// Optional wall-clock budget; on expiry partial results are
    /// returned, tagged incomplete.
    pub time_budget: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            target_size: 432,
            max_k: 3,
            exhaustive_limit: 10_000,
            sample_size: 10_000,
            seed: 42,
            order_cap: 20,
            minimality_checks: 20,
            example_limit: 10,
            time_budget: None,
        }
    }
}

/// One tested subset that generated the target group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratingSetRecord {
    /// Indices into the operator pool, ascending.
    pub indices: Vec<usize>,
    /// Closure size reached (equals the target for generating subsets).
    pub closure_size: usize,
    /// Minimality verdict; `None` when the check was not run.
    pub minimal: Option<bool>,
}

/// Summary of one k-pass over the subset space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KSummary {
    /// The subset size.
    pub k: usize,
    /// C(pool, k) — size of the full subset space.
    pub total_possible: u64,
    /// Subsets actually evaluated.
    pub tested: usize,
    /// Subsets whose closure was complete at exactly the target size.
    pub generating: usize,
    /// generating / tested. An estimate when `sampled` is true, exact
    /// otherwise.
    pub proportion: f64,
    /// Whether this pass sampled the space instead of enumerating it.
    pub sampled: bool,
    /// False when the time budget expired mid-pass.
    pub complete: bool,
    /// Largest subgroup reached by any tested subset.
    pub max_subgroup_size: usize,
    /// closure size → number of tested subsets reaching it.
    pub size_distribution: BTreeMap<usize, usize>,
    /// Mean closure size across tested subsets.
    pub average_subgroup_size: f64,
    /// Order distribution of the pool operators; populated on the k=1
    /// pass only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_distribution: Option<OrderHistogram>,
}

/// The full search report: per-k summaries, the minimal k found, and
/// verified minimal examples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    /// UTC time the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Number of operators in the pool.
    pub pool_size: usize,
    /// True when the pool is smaller than the full 108-operator stratum;
    /// findings then cover the available pool only.
    pub limited: bool,
    /// The target group size.
    pub target_size: usize,
    /// The sampling seed in effect.
    pub seed: u64,
    /// Smallest k at which a generating subset was found, if any.
    pub minimal_k: Option<usize>,
    /// One summary per k-pass, ascending k.
    pub summaries: Vec<KSummary>,
    /// Generating subsets that passed the one-removal minimality check.
    pub minimal_examples: Vec<GeneratingSetRecord>,
    /// How many generating subsets passed the minimality check.
    pub verified_minimal: usize,
    /// False when the time budget expired before the search finished.
    pub complete: bool,
    /// Wall-clock time spent searching.
    pub elapsed_seconds: f64,
}

/// C(n, k), saturating at `u64::MAX`.
fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        result = match result
            .checked_mul(n - i)
            .map(|numerator| numerator / (i + 1))
        {
            Some(value) => value,
            None => return u64::MAX,
        };
    }
    result
}

/// Advance `indices` to the next k-combination of {0, …, n−1} in
/// lexicographic order. Returns false after the last combination.
fn next_combination(indices: &mut [usize], n: usize) -> bool {
    let k = indices.len();
    let mut i = k;
    while i > 0 {
        i -= 1;
        if indices[i] < n - k + i {
            indices[i] += 1;
            for j in i + 1..k {
                indices[j] = indices[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// Unrank a lexicographic combination rank into its k-subset of
/// {0, …, n−1} (combinatorial number system).
fn unrank_combination(mut rank: u64, n: usize, k: usize) -> Vec<usize> {
    let mut combination = Vec::with_capacity(k);
    let mut next = 0;
    for remaining in (1..=k).rev() {
        let mut candidate = next;
        loop {
            let below = binomial((n - candidate - 1) as u64, (remaining - 1) as u64);
            if rank < below {
                break;
            }
            rank -= below;
            candidate += 1;
        }
        combination.push(candidate);
        next = candidate + 1;
    }
    combination
}

/// Verify minimality of a generating subset: removing any one element
/// must fail to regenerate the target group. Size-1 subsets are minimal
/// by definition.
pub fn verify_minimality(
    pool: &[Matrix3],
    indices: &[usize],
    target_size: usize,
) -> Result<bool, CoreError> {
    if indices.len() == 1 {
        return Ok(true);
    }
    let full: Vec<Matrix3> = indices.iter().map(|&i| pool[i]).collect();
    let full_closure = closure(&full, target_size)?;
    if !(full_closure.is_complete() && full_closure.len() == target_size) {
        return Ok(false);
    }
    for omit in 0..indices.len() {
        let reduced: Vec<Matrix3> = indices
            .iter()
            .enumerate()
            .filter(|&(position, _)| position != omit)
            .map(|(_, &i)| pool[i])
            .collect();
        let reduced_closure = closure(&reduced, target_size)?;
        if reduced_closure.is_complete() && reduced_closure.len() == target_size {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Search for minimal generating sets of the target group within `pool`.
///
/// Every pool operator must be invertible; a singular operator is a
/// data-integrity fault and fails the whole search. An undersized pool
/// (< 108 operators) degrades gracefully: the search runs on what is
/// available and the report is flagged `limited`.
pub fn find_minimal_generating_sets(
    pool: &[Matrix3],
    config: &SearchConfig,
) -> Result<SearchReport, CoreError> {
    for operator in pool {
        if !operator.is_invertible() {
            return Err(CoreError::Singular(operator.key()));
        }
    }

    let started = Instant::now();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut report = SearchReport {
        generated_at: Utc::now(),
        pool_size: pool.len(),
        limited: pool.len() < KERNEL_STRATUM_ORDER,
        target_size: config.target_size,
        seed: config.seed,
        minimal_k: None,
        summaries: Vec::new(),
        minimal_examples: Vec::new(),
        verified_minimal: 0,
        complete: true,
        elapsed_seconds: 0.0,
    };

    if report.limited {
        tracing::warn!(
            pool_size = pool.len(),
            expected = KERNEL_STRATUM_ORDER,
            "operator pool is undersized; search results are limited"
        );
    }

    let out_of_time =
        |started: Instant| -> bool {
            config
                .time_budget
                .is_some_and(|budget| started.elapsed() >= budget)
        };

    'passes: for k in 1..=config.max_k.min(pool.len()) {
        let total_possible = binomial(pool.len() as u64, k as u64);
        let sampled = total_possible > config.exhaustive_limit;

        let mut summary = KSummary {
            k,
            total_possible,
            tested: 0,
            generating: 0,
            proportion: 0.0,
            sampled,
            complete: true,
            max_subgroup_size: 0,
            size_distribution: BTreeMap::new(),
            average_subgroup_size: 0.0,
            order_distribution: None,
        };
        let mut generating_subsets: Vec<Vec<usize>> = Vec::new();
        let mut size_total: u64 = 0;

        tracing::info!(
            k,
            total_possible,
            sampled,
            "starting generating-set pass"
        );

        let subsets: Box<dyn Iterator<Item = Vec<usize>>> = if sampled {
            // u64→usize is safe here: sampled spaces beyond usize would
            // need a pool far larger than 3^9 matrices even exist.
            let space = usize::try_from(total_possible).unwrap_or(usize::MAX);
            let draw = config.sample_size.min(space);
            let ranks = rand::seq::index::sample(&mut rng, space, draw);
            let n = pool.len();
            Box::new(
                ranks
                    .into_iter()
                    .map(move |rank| unrank_combination(rank as u64, n, k)),
            )
        } else {
            let n = pool.len();
            let first: Vec<usize> = (0..k).collect();
            Box::new(std::iter::successors(Some(first), move |previous| {
                let mut next = previous.clone();
                next_combination(&mut next, n).then_some(next)
            }))
        };

        for subset in subsets {
            if out_of_time(started) {
                summary.complete = false;
                report.complete = false;
                tracing::warn!(k, tested = summary.tested, "time budget expired mid-pass");
                break;
            }
            let seeds: Vec<Matrix3> = subset.iter().map(|&i| pool[i]).collect();
            let result = closure(&seeds, config.target_size)?;
            let size = result.len();

            summary.tested += 1;
            size_total += size as u64;
            summary.max_subgroup_size = summary.max_subgroup_size.max(size);
            *summary.size_distribution.entry(size).or_insert(0) += 1;
            if result.is_complete() && size == config.target_size {
                summary.generating += 1;
                generating_subsets.push(subset);
            }

            if summary.tested % 500 == 0 {
                tracing::debug!(
                    k,
                    tested = summary.tested,
                    generating = summary.generating,
                    "pass progress"
                );
            }
        }

        if k == 1 {
            let mut orders = BTreeMap::new();
            let mut capped = 0;
            for operator in pool {
                match operator.order(config.order_cap) {
                    Some(order) => *orders.entry(order).or_insert(0) += 1,
                    None => capped += 1,
                }
            }
            summary.order_distribution = Some(OrderHistogram { orders, capped });
        }

        if summary.tested > 0 {
            summary.proportion = summary.generating as f64 / summary.tested as f64;
            summary.average_subgroup_size = size_total as f64 / summary.tested as f64;
        }
        let found = summary.generating > 0;
        report.summaries.push(summary);

        if found {
            report.minimal_k = Some(k);
            for indices in generating_subsets
                .iter()
                .take(config.minimality_checks)
            {
                let minimal = verify_minimality(pool, indices, config.target_size)?;
                if minimal {
                    report.verified_minimal += 1;
                    if report.minimal_examples.len() < config.example_limit {
                        report.minimal_examples.push(GeneratingSetRecord {
                            indices: indices.clone(),
                            closure_size: config.target_size,
                            minimal: Some(true),
                        });
                    }
                }
            }
            tracing::info!(
                minimal_k = k,
                verified_minimal = report.verified_minimal,
                "minimal generating size found"
            );
            break 'passes;
        }
        if !report.complete {
            break 'passes;
        }
    }

    report.elapsed_seconds = started.elapsed().as_secs_f64();
    Ok(report)
}
