//! # Operator Pool Loading
//!
//! Reads an operator pool from the tabular record format: a header line,
//! then one record per line of `index,e00,e01,e02,e10,e11,e12,e20,e21,e22`
//! (row-major 3×3 entries over {0,1,2}).
//!
//! ## Error recovery
//!
//! Malformed records — too few fields, non-numeric entries, entries
//! outside the field — are skipped and counted, never aborting the whole
//! load. The skip count travels with the loaded pool so reports can
//! surface it.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tcg_core::Matrix3;

/// A loaded operator pool plus load diagnostics.
#[derive(Debug, Clone)]
pub struct PoolLoad {
    /// Operators in record order.
    pub operators: Vec<Matrix3>,
    /// Records skipped because they did not parse into 9 field elements.
    pub skipped: usize,
}

/// Parse one record line into a matrix. `None` means malformed.
fn parse_record(line: &str) -> Option<Matrix3> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 10 {
        return None;
    }
    let mut entries = [[0u8; 3]; 3];
    for (position, field) in fields[1..10].iter().enumerate() {
        entries[position / 3][position % 3] = field.trim().parse::<u8>().ok()?;
    }
    Matrix3::from_rows(entries).ok()
}

/// Load an operator pool from `path`, skipping the header line and
/// counting malformed records.
pub fn load_pool(path: &Path) -> anyhow::Result<PoolLoad> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading operator pool {}", path.display()))?;

    let mut operators = Vec::new();
    let mut skipped = 0;
    for line in contents.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(line) {
            Some(matrix) => operators.push(matrix),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::warn!(
            skipped,
            loaded = operators.len(),
            "skipped malformed operator records"
        );
    }
    tracing::info!(loaded = operators.len(), path = %path.display(), "operator pool loaded");
    Ok(PoolLoad { operators, skipped })
}
