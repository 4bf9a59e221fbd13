//! # tcg-cli — Command-Line Surface for the Stack
//!
//! Thin orchestration over `tcg-group`: operator-pool loading, report
//! assembly, and one handler module per subcommand.

pub mod closure;
pub mod filtration;
pub mod pool;
pub mod report;
pub mod search;
