//! Command-line interface for Pitlane race-weekend trip recommendations.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod logging;
mod recommend;

pub use error::CliError;
use recommend::{RecommendArgs, run_recommend};

/// Run the Pitlane CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when arguments fail to parse, configuration cannot
/// be layered, the catalog cannot be loaded, or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    logging::init(cli.log_level.as_deref());
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "pitlane",
    about = "Rank Formula 1 race-weekend trips against your budget and tastes",
    version
)]
struct Cli {
    /// Log filter used when `RUST_LOG` is unset, such as `info` or `pitlane_scorer=debug`.
    #[arg(long, global = true, value_name = "filter")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score the catalog and print the best-matching trips.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
