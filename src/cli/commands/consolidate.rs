//! Consolidate command implementation
//!
//! Orchestrates the full workflow: read the ISD catalog (and optionally the
//! GHCND catalog), fold each through the consolidation driver, apply the
//! lifespan filter per source, merge GHCND stations into the ISD list, and
//! write the consolidated catalog.

use crate::app::adapters::catalog_io;
use crate::app::models::Catalog;
use crate::app::services::consolidation::{ConsolidationStats, Consolidator};
use crate::app::services::debug_export;
use crate::cli::args::ConsolidateArgs;
use crate::constants::PROGRESS_MIN_RECORDS;
use crate::{Result, cli::commands::shared};
use chrono::Utc;
use indicatif::ProgressBar;
use std::time::Instant;
use tracing::info;

/// Run the consolidate command
pub async fn run_consolidate(args: ConsolidateArgs) -> Result<()> {
    shared::setup_logging(args.get_log_level())?;
    args.validate()?;
    let config = args.to_config()?;

    let start = Instant::now();
    let mut stats = ConsolidationStats::new();
    let consolidator = Consolidator::new(config);
    let today = Utc::now().date_naive();

    info!(
        "consolidating {} (GHCND: {})",
        args.isd_path.display(),
        args.ghcnd_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "none".to_string())
    );

    // Fold the ISD catalog
    let isd_records = catalog_io::read_catalog(&args.isd_path).await?;
    let pb = progress_for(&args, isd_records.len());
    let isd_stations = consolidator.consolidate(isd_records, Catalog::Isd, &mut stats, pb.as_ref());
    finish(pb);
    let mut consolidated = consolidator.filter_short_lived(isd_stations, today, &mut stats);

    if args.debug_dump {
        let path = debug_export::dump_snapshot("isd-consolidated", &consolidated)?;
        info!("ISD snapshot at {}", path.display());
    }

    // Fold the GHCND catalog and merge it into the ISD list
    if let Some(ghcnd_path) = &args.ghcnd_path {
        let ghcnd_records = catalog_io::read_catalog(ghcnd_path).await?;
        let pb = progress_for(&args, ghcnd_records.len());
        let ghcnd_stations =
            consolidator.consolidate(ghcnd_records, Catalog::Ghcnd, &mut stats, pb.as_ref());
        finish(pb);
        let ghcnd_stations = consolidator.filter_short_lived(ghcnd_stations, today, &mut stats);

        if args.debug_dump {
            let path = debug_export::dump_snapshot("ghcnd-consolidated", &ghcnd_stations)?;
            info!("GHCND snapshot at {}", path.display());
        }

        consolidator.absorb(&mut consolidated, ghcnd_stations, &mut stats);
    }

    catalog_io::write_catalog(&args.output_path, &consolidated).await?;

    stats.processing_time = start.elapsed();
    if !args.quiet {
        shared::print_summary(&stats, consolidated.len());
    }

    Ok(())
}

fn progress_for(args: &ConsolidateArgs, record_count: usize) -> Option<ProgressBar> {
    (args.show_progress() && record_count >= PROGRESS_MIN_RECORDS)
        .then(|| shared::create_progress_bar(record_count))
}

fn finish(pb: Option<ProgressBar>) {
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}
