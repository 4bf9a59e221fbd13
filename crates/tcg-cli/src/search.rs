//! # `tcg search` — Minimal Generating Set Search
//!
//! Loads an operator pool (falling back to the six verified operators
//! when no file is given) and drives the k-subset search. The report is
//! emitted as produced by `tcg-group` — per-k summaries, minimal k, and
//! verified minimal examples.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use tcg_group::{find_minimal_generating_sets, known_generators, SearchConfig};

use crate::pool::load_pool;
use crate::report::emit;

/// Arguments for the `search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Operator pool file. Falls back to the six verified operators
    /// (results flagged limited) when omitted.
    #[arg(long)]
    pub pool: Option<PathBuf>,

    /// Target group size a subset must generate exactly.
    #[arg(long, default_value_t = 432)]
    pub target_size: usize,

    /// Largest subset size to try.
    #[arg(long, default_value_t = 3)]
    pub max_k: usize,

    /// Subset spaces at most this large are enumerated exhaustively.
    #[arg(long, default_value_t = 10_000)]
    pub exhaustive_limit: u64,

    /// Sample size when the subset space is too large to enumerate.
    #[arg(long, default_value_t = 10_000)]
    pub sample_size: usize,

    /// RNG seed for sampling.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Wall-clock budget in seconds; partial results are reported on
    /// expiry.
    #[arg(long)]
    pub time_budget_secs: Option<u64>,

    /// Write the report here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Run the search subcommand.
pub fn run(args: SearchArgs) -> anyhow::Result<()> {
    let pool = match &args.pool {
        Some(path) => load_pool(path)?.operators,
        None => {
            tracing::warn!("no pool file given; using the six verified operators");
            known_generators().to_vec()
        }
    };

    let config = SearchConfig {
        target_size: args.target_size,
        max_k: args.max_k,
        exhaustive_limit: args.exhaustive_limit,
        sample_size: args.sample_size,
        seed: args.seed,
        time_budget: args.time_budget_secs.map(Duration::from_secs),
        ..SearchConfig::default()
    };

    let report = find_minimal_generating_sets(&pool, &config)?;
    tracing::info!(
        minimal_k = ?report.minimal_k,
        elapsed_seconds = report.elapsed_seconds,
        "search finished"
    );
    emit(&report, args.output.as_deref())
}
