//! Report command implementation
//!
//! Summarizes an already-consolidated catalog: station counts, history range
//! totals, and how many stations span both source catalogs.

use crate::Result;
use crate::app::adapters::catalog_io;
use crate::cli::args::ReportArgs;
use crate::cli::commands::shared;
use colored::Colorize;

/// Run the report command
pub async fn run_report(args: ReportArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;
    args.validate()?;

    let stations = catalog_io::read_consolidated(&args.catalog_path).await?;

    let total_ranges: usize = stations.iter().map(|s| s.ranges.len()).sum();
    let merged = stations.iter().filter(|s| s.ranges.len() > 1).count();
    let multi_catalog = stations
        .iter()
        .filter(|s| s.isd_id.is_some() && s.ghcnd_id.is_some())
        .count();
    let active = stations.iter().filter(|s| s.is_active()).count();

    println!(
        "{} {}",
        "Consolidated catalog:".bold(),
        args.catalog_path.display()
    );
    println!("  Stations:               {}", stations.len());
    println!("  History ranges:         {}", total_ranges);
    println!("  Merged from >1 record:  {}", merged);
    println!("  Present in ISD + GHCND: {}", multi_catalog);
    println!("  Still reporting:        {}", active);

    Ok(())
}
