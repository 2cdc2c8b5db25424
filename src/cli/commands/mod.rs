//! Command implementations for the station consolidator CLI
//!
//! Each command is implemented in its own module; this module dispatches
//! based on the parsed arguments.

pub mod consolidate;
pub mod report;
pub mod shared;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the station consolidator
///
/// Dispatches to the appropriate subcommand handler:
/// - `consolidate`: the full catalog consolidation workflow
/// - `report`: summary of an already-consolidated catalog
pub async fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Consolidate(consolidate_args) => {
            consolidate::run_consolidate(consolidate_args).await
        }
        Commands::Report(report_args) => report::run_report(report_args).await,
    }
}
