//! # `tcg filter` — Constraint Filtration
//!
//! Materializes one named stratum (or the whole cascade) and reports its
//! size against the oracle.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use tcg_group::Stratum;

use crate::report::{emit, FiltrationReport};

/// Arguments for the `filter` subcommand.
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Stratum to materialize (gl3f3, row_stochastic, kernel_normalizing,
    /// doubly_stochastic). All four when omitted.
    #[arg(long)]
    pub stratum: Option<Stratum>,

    /// Include the matrix entries in the report, not just the size.
    #[arg(long)]
    pub matrices: bool,

    /// Write the report here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

fn report_for(stratum: Stratum, include_matrices: bool) -> FiltrationReport {
    let set = stratum.materialize();
    tracing::info!(stratum = %stratum, size = set.len(), "stratum materialized");
    FiltrationReport {
        generated_at: Utc::now(),
        stratum: stratum.to_string(),
        size: set.len(),
        expected_size: stratum.expected_size(),
        size_verified: set.len() == stratum.expected_size(),
        matrices: include_matrices.then(|| set.matrices().to_vec()),
    }
}

/// Run the filtration subcommand.
pub fn run(args: FilterArgs) -> anyhow::Result<()> {
    match args.stratum {
        Some(stratum) => emit(&report_for(stratum, args.matrices), args.output.as_deref()),
        None => {
            let cascade: Vec<FiltrationReport> = Stratum::all()
                .iter()
                .map(|&stratum| report_for(stratum, args.matrices))
                .collect();
            emit(&cascade, args.output.as_deref())
        }
    }
}
