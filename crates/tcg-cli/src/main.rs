//! # tcg CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Ternary constraint group toolchain.
///
/// Enumerates GL(3,F₃), filters it into the 432/108/54 constraint
/// strata, verifies group closure, and searches operator pools for
/// minimal generating sets of the 432-element target group.
#[derive(Parser, Debug)]
#[command(name = "tcg", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Materialize constraint strata and verify oracle sizes.
    Filter(tcg_cli::filtration::FilterArgs),
    /// Compute a group closure and its element-order histogram.
    Closure(tcg_cli::closure::ClosureArgs),
    /// Search an operator pool for minimal generating sets.
    Search(tcg_cli::search::SearchArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Filter(args) => tcg_cli::filtration::run(args),
        Commands::Closure(args) => tcg_cli::closure::run(args),
        Commands::Search(args) => tcg_cli::search::run(args),
    }
}
