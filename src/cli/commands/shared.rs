//! Shared components for CLI commands
//!
//! Logging setup, progress bar construction, and the human-readable run
//! summary used across command implementations.

use crate::Result;
use crate::app::services::consolidation::ConsolidationStats;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Set up structured logging on stderr at the requested level
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("station_consolidator={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    Ok(())
}

/// Create a progress bar for folding `len` records
pub fn create_progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

/// Print the consolidation run summary
pub fn print_summary(stats: &ConsolidationStats, output_count: usize) {
    println!();
    println!("{}", "Consolidation complete".green().bold());
    println!("  Records read:          {}", stats.records_seen);
    println!(
        "  Skipped (no latitude): {}",
        stats.records_skipped_no_latitude
    );
    println!(
        "  Merged during folds:   {} ({:.1}%)",
        stats.records_merged,
        stats.merge_fraction() * 100.0
    );
    if stats.cross_catalog_merged > 0 || stats.cross_catalog_appended > 0 {
        println!(
            "  Cross-catalog merges:  {} merged, {} appended",
            stats.cross_catalog_merged, stats.cross_catalog_appended
        );
    }
    println!("  Short-lived removed:   {}", stats.short_lived_removed);
    println!(
        "  Output stations:       {}",
        output_count.to_string().bold()
    );
    println!("  Elapsed:               {:.2?}", stats.processing_time);
}
