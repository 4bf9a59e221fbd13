//! # Report Emission
//!
//! One tagged struct per result kind — filtration and closure reports
//! live here, the search report comes fully formed from `tcg-group`.
//! All reports serialize to pretty JSON, to stdout or a file.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tcg_core::Matrix3;
use tcg_group::{ClosureOutcome, OrderHistogram};

/// Result of materializing one named stratum.
#[derive(Debug, Clone, Serialize)]
pub struct FiltrationReport {
    /// UTC time the report was produced.
    pub generated_at: DateTime<Utc>,
    /// The stratum identifier.
    pub stratum: String,
    /// Number of matrices in the stratum.
    pub size: usize,
    /// The oracle size the stratum must have.
    pub expected_size: usize,
    /// Whether size matched the oracle.
    pub size_verified: bool,
    /// The matrices themselves, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrices: Option<Vec<Matrix3>>,
}

/// Result of a closure verification run.
#[derive(Debug, Clone, Serialize)]
pub struct ClosureReport {
    /// UTC time the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Number of seed matrices.
    pub seed_count: usize,
    /// The size cap in effect.
    pub cap: usize,
    /// Closure size reached.
    pub size: usize,
    /// Complete (exact) vs truncated (at least `cap`).
    pub outcome: ClosureOutcome,
    /// Matrix multiplications performed.
    pub multiplications: u64,
    /// Element-order distribution of the closure.
    pub order_histogram: OrderHistogram,
}

/// Serialize a report as pretty JSON to `output`, or stdout when no
/// path is given.
pub fn emit(report: &impl Serialize, output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    match output {
        Some(path) => {
            fs::write(path, json)?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
