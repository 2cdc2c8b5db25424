//! Application constants for the station consolidator
//!
//! This module contains matching thresholds, date sentinels, and default
//! values used throughout the consolidation pipeline.

// =============================================================================
// Matching Thresholds
// =============================================================================

/// Maximum great-circle distance between two records for the geometric
/// fallback match, in kilometers.
///
/// Tuned to the expected positional noise between the ISD and GHCND catalogs
/// (GPS/survey differences, not station relocation).
pub const MAX_MATCH_DISTANCE_KM: f64 = 3.5;

/// Maximum absolute elevation difference for the geometric fallback match,
/// in meters.
pub const MAX_ELEVATION_DELTA_METERS: f64 = 50.0;

/// Minimum active lifespan for a consolidated station to be retained, in days.
pub const MIN_LIFESPAN_DAYS: i64 = 365;

// =============================================================================
// Geometry
// =============================================================================

/// Earth's equatorial radius in meters, used for haversine distances.
///
/// The consolidator models the Earth as a sphere; oblateness is ignored.
pub const EARTH_RADIUS_METERS: f64 = 6_378_137.0;

/// Conversion factor from meters to kilometers
pub const METERS_PER_KILOMETER: f64 = 1000.0;

// =============================================================================
// Date Handling
// =============================================================================

/// Sentinel value in source `maxdate` fields marking a still-active station
pub const PRESENT_SENTINEL: &str = "present";

/// Date format used by both source catalogs
pub const CATALOG_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Source Catalog Constants
// =============================================================================

/// Identifier prefix on GHCND source `id` fields, stripped at normalization
pub const GHCND_ID_PREFIX: &str = "GHCND:";

/// Separator used when accumulating source identifiers on a merged station
pub const ID_LIST_SEPARATOR: &str = ",";

// =============================================================================
// Output and Diagnostics
// =============================================================================

/// Default output filename for the consolidated catalog
pub const DEFAULT_OUTPUT_FILENAME: &str = "stations.json";

/// Filename prefix for debug snapshot dumps in the OS temp directory
pub const DEBUG_DUMP_PREFIX: &str = "station-consolidator";

/// Progress bar update interval (number of processed records)
pub const PROGRESS_UPDATE_INTERVAL: usize = 1000;

/// Record count below which no progress bar is shown
pub const PROGRESS_MIN_RECORDS: usize = 500;

// =============================================================================
// Helper Functions
// =============================================================================

/// Build the debug dump filename for a named intermediate list
pub fn debug_dump_filename(label: &str) -> String {
    format!("{}-{}.json", DEBUG_DUMP_PREFIX, label)
}
