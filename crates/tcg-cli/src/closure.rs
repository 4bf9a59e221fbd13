//! # `tcg closure` — Closure Verification
//!
//! Seeds the closure engine either with a whole named stratum (closure
//! verification: a closed group comes back unchanged and complete) or
//! with selected operators from a pool file, and reports size, the
//! complete/truncated verdict, and the element-order histogram.

use std::path::PathBuf;

use anyhow::bail;
use chrono::Utc;
use clap::Args;
use tcg_core::Matrix3;
use tcg_group::{closure, Stratum};

use crate::pool::load_pool;
use crate::report::{emit, ClosureReport};

/// Arguments for the `closure` subcommand.
#[derive(Args, Debug)]
pub struct ClosureArgs {
    /// Seed with every matrix of this stratum.
    #[arg(long, conflicts_with_all = ["pool", "indices"])]
    pub stratum: Option<Stratum>,

    /// Operator pool file to draw seeds from.
    #[arg(long, requires = "indices")]
    pub pool: Option<PathBuf>,

    /// Comma-separated indices into the pool.
    #[arg(long, value_delimiter = ',')]
    pub indices: Vec<usize>,

    /// Size cap for the expansion. Defaults to the seeding stratum's
    /// oracle size, or 432 for pool seeds.
    #[arg(long)]
    pub cap: Option<usize>,

    /// Safety bound for element-order computation.
    #[arg(long, default_value_t = 20)]
    pub order_cap: u32,

    /// Write the report here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Run the closure subcommand.
pub fn run(args: ClosureArgs) -> anyhow::Result<()> {
    let (seeds, default_cap): (Vec<Matrix3>, usize) = match (&args.stratum, &args.pool) {
        (Some(stratum), None) => {
            let set = stratum.materialize();
            let cap = set.len();
            (set.matrices().to_vec(), cap)
        }
        (None, Some(path)) => {
            let load = load_pool(path)?;
            let mut seeds = Vec::with_capacity(args.indices.len());
            for &index in &args.indices {
                match load.operators.get(index) {
                    Some(&operator) => seeds.push(operator),
                    None => bail!(
                        "index {index} out of range for pool of {}",
                        load.operators.len()
                    ),
                }
            }
            (seeds, 432)
        }
        _ => bail!("exactly one of --stratum or --pool must be given"),
    };

    let cap = args.cap.unwrap_or(default_cap);
    let result = closure(&seeds, cap)?;
    let report = ClosureReport {
        generated_at: Utc::now(),
        seed_count: seeds.len(),
        cap,
        size: result.len(),
        outcome: result.outcome(),
        multiplications: result.multiplications(),
        order_histogram: result.order_histogram(args.order_cap),
    };
    emit(&report, args.output.as_deref())
}
