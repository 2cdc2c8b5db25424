//! Consolidation driver
//!
//! Folds an ordered sequence of raw records through normalize, match, and
//! merge to build the deduplicated station list, then filters out stations
//! whose total active lifespan is too short to be useful.

use chrono::NaiveDate;
use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::app::models::{Catalog, RawStationRecord, Station};
use crate::config::ConsolidationConfig;
use crate::constants::PROGRESS_UPDATE_INTERVAL;

use super::matcher::find_match;
use super::merger::merge;
use super::normalizer::normalize;
use super::stats::ConsolidationStats;

/// Stateless facade over the consolidation pipeline.
///
/// Holds only the matching and filtering thresholds; the accumulator built
/// during a fold is local to each call and never persists across calls.
#[derive(Debug, Clone)]
pub struct Consolidator {
    config: ConsolidationConfig,
}

impl Consolidator {
    pub fn new(config: ConsolidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConsolidationConfig {
        &self.config
    }

    /// Fold raw records from one source catalog into a deduplicated list.
    ///
    /// Strict left-to-right sequential fold: each record is normalized,
    /// skipped if it lacks a resolvable latitude, matched first-match-wins
    /// against the accumulator built so far, and either merged into the
    /// matching entry or appended as a new station. The result is
    /// deterministic for a fixed input order; reordering inputs can change
    /// it when multiple heuristic matches are plausible.
    pub fn consolidate(
        &self,
        records: Vec<RawStationRecord>,
        catalog: Catalog,
        stats: &mut ConsolidationStats,
        progress_bar: Option<&ProgressBar>,
    ) -> Vec<Station> {
        let total = records.len();
        let mut accumulator: Vec<Station> = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            stats.records_seen += 1;

            if let Some(pb) = progress_bar {
                pb.inc(1);
                if index % PROGRESS_UPDATE_INTERVAL == 0 {
                    pb.set_message(format!("{} record {} of {}", catalog, index + 1, total));
                }
            }

            let Some(candidate) = normalize(record, catalog) else {
                stats.records_skipped_no_latitude += 1;
                continue;
            };

            match find_match(&accumulator, &candidate, &self.config) {
                Some(index) => {
                    debug!(
                        "merging '{}' into existing station '{}'",
                        candidate.name, accumulator[index].name
                    );
                    merge(&mut accumulator[index], candidate);
                    stats.records_merged += 1;
                }
                None => {
                    accumulator.push(candidate);
                    stats.stations_created += 1;
                }
            }
        }

        info!(
            "{} consolidation complete: {} records folded into {} stations",
            catalog,
            total,
            accumulator.len()
        );

        accumulator
    }

    /// Remove stations whose active lifespan falls below the configured
    /// minimum, with `"present"` resolving to `today`.
    ///
    /// Stations with an unparseable date bound have an indeterminate span
    /// and are retained.
    pub fn filter_short_lived(
        &self,
        stations: Vec<Station>,
        today: NaiveDate,
        stats: &mut ConsolidationStats,
    ) -> Vec<Station> {
        let before = stations.len();

        let kept: Vec<Station> = stations
            .into_iter()
            .filter(|station| match station.lifespan_days(today) {
                Some(days) => days >= self.config.min_lifespan_days,
                None => true,
            })
            .collect();

        let removed = before - kept.len();
        stats.short_lived_removed += removed;
        info!(
            "lifespan filter removed {} of {} stations (minimum {} days)",
            removed, before, self.config.min_lifespan_days
        );

        kept
    }

    /// Final cross-catalog pass: match and merge each incoming station
    /// against the already-consolidated base list, appending as new when
    /// unmatched.
    pub fn absorb(
        &self,
        base: &mut Vec<Station>,
        incoming: Vec<Station>,
        stats: &mut ConsolidationStats,
    ) {
        for station in incoming {
            match find_match(base, &station, &self.config) {
                Some(index) => {
                    merge(&mut base[index], station);
                    stats.cross_catalog_merged += 1;
                }
                None => {
                    base.push(station);
                    stats.cross_catalog_appended += 1;
                }
            }
        }

        info!(
            "cross-catalog pass complete: {} merged, {} appended, {} stations total",
            stats.cross_catalog_merged,
            stats.cross_catalog_appended,
            base.len()
        );
    }
}
