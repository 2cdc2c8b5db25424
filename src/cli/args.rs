//! Command-line argument definitions for the station consolidator
//!
//! Defines the CLI interface using the clap derive API.

use crate::config::ConsolidationConfig;
use crate::constants::DEFAULT_OUTPUT_FILENAME;
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the station consolidator
///
/// Consolidates ISD and GHCND weather station catalogs into a single
/// deduplicated station list carrying the union of identifiers and the full
/// metadata history of each physical station.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "station-consolidator",
    version,
    about = "Consolidate ISD and GHCND weather station catalogs into one deduplicated list",
    long_about = "Reads station catalogs from the Integrated Surface Database (ISD) and the \
                  Global Historical Climatology Network - Daily (GHCND), merges records that \
                  describe the same physical station, and writes a single consolidated catalog \
                  preserving each station's identifier sets and metadata history."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the station consolidator
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Consolidate source catalogs into one station list (main command)
    Consolidate(ConsolidateArgs),
    /// Summarize an already-consolidated catalog
    Report(ReportArgs),
}

/// Arguments for the consolidate command
#[derive(Debug, Clone, Parser)]
pub struct ConsolidateArgs {
    /// Path to the ISD catalog file (JSON array of station records)
    #[arg(value_name = "ISD_FILE")]
    pub isd_path: PathBuf,

    /// Optional path to the GHCND catalog file
    ///
    /// When supplied, GHCND stations are consolidated separately and then
    /// merged against the ISD list. A supplied path that does not exist is a
    /// fatal configuration error, never silently skipped.
    #[arg(value_name = "GHCND_FILE")]
    pub ghcnd_path: Option<PathBuf>,

    /// Output path for the consolidated catalog
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_OUTPUT_FILENAME,
        help = "Output path for the consolidated JSON catalog"
    )]
    pub output_path: PathBuf,

    /// Maximum great-circle distance for the geometric fallback match
    #[arg(
        long = "max-distance-km",
        value_name = "KM",
        help = "Override the geometric match distance threshold in kilometers"
    )]
    pub max_distance_km: Option<f64>,

    /// Maximum elevation difference for the geometric fallback match
    #[arg(
        long = "max-elevation-delta-m",
        value_name = "METERS",
        help = "Override the elevation difference threshold in meters"
    )]
    pub max_elevation_delta_m: Option<f64>,

    /// Minimum active lifespan for a station to be retained
    #[arg(
        long = "min-lifespan-days",
        value_name = "DAYS",
        help = "Override the minimum station lifespan in days"
    )]
    pub min_lifespan_days: Option<i64>,

    /// Dump intermediate station lists to the OS temp directory
    #[arg(long = "debug-dump", help = "Write intermediate lists as JSON for inspection")]
    pub debug_dump: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the report command
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Path to a consolidated catalog file
    #[arg(value_name = "FILE")]
    pub catalog_path: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ConsolidateArgs {
    /// Validate the consolidate command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.isd_path.exists() {
            return Err(Error::file_not_found(self.isd_path.display().to_string()));
        }

        if let Some(ghcnd_path) = &self.ghcnd_path {
            if !ghcnd_path.exists() {
                return Err(Error::file_not_found(ghcnd_path.display().to_string()));
            }
        }

        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(Error::configuration(format!(
                    "Output directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        self.to_config()?;

        Ok(())
    }

    /// Build the consolidation configuration, applying CLI overrides
    pub fn to_config(&self) -> Result<ConsolidationConfig> {
        let mut config = ConsolidationConfig::default();

        if let Some(km) = self.max_distance_km {
            config.max_match_distance_km = km;
        }
        if let Some(meters) = self.max_elevation_delta_m {
            config.max_elevation_delta_meters = meters;
        }
        if let Some(days) = self.min_lifespan_days {
            config.min_lifespan_days = days;
        }

        config.validate()?;
        Ok(config)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl ReportArgs {
    /// Validate the report command arguments
    pub fn validate(&self) -> Result<()> {
        if !self.catalog_path.exists() {
            return Err(Error::file_not_found(
                self.catalog_path.display().to_string(),
            ));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
