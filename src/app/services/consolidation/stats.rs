//! Consolidation statistics
//!
//! Counters accumulated across the per-source folds, the lifespan filter,
//! and the final cross-catalog pass, reported in the CLI summary.

/// Statistics for one consolidation run
#[derive(Debug, Clone, Default)]
pub struct ConsolidationStats {
    /// Raw records read from the source catalogs
    pub records_seen: usize,

    /// Records dropped before matching for lack of a resolvable latitude
    pub records_skipped_no_latitude: usize,

    /// Records merged into an existing accumulator entry during a fold
    pub records_merged: usize,

    /// Records that became new accumulator entries during a fold
    pub stations_created: usize,

    /// Consolidated stations removed by the lifespan filter
    pub short_lived_removed: usize,

    /// GHCND stations merged into the ISD list during the cross-catalog pass
    pub cross_catalog_merged: usize,

    /// GHCND stations appended as new during the cross-catalog pass
    pub cross_catalog_appended: usize,

    /// Total wall-clock processing time
    pub processing_time: std::time::Duration,
}

impl ConsolidationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of seen records that merged into an existing station
    pub fn merge_fraction(&self) -> f64 {
        if self.records_seen == 0 {
            return 0.0;
        }
        self.records_merged as f64 / self.records_seen as f64
    }
}
