//! Station matching logic
//!
//! Decides whether a candidate station refers to the same physical station
//! as an already-consolidated entry, checking three signals in strict
//! priority order: ICAO identifier equality, exact name equality, then
//! geographic plus elevation proximity.

use crate::app::models::Station;
use crate::app::services::elevation::normalize_elevation;
use crate::app::services::geo;
use crate::config::ConsolidationConfig;
use crate::constants::METERS_PER_KILOMETER;
use tracing::trace;

/// Find the first already-consolidated station matching the candidate.
///
/// Scans `existing` in insertion order and returns the index of the first
/// entry satisfying [`is_match`], or `None` when the candidate is a new,
/// distinct station. First-match-wins: once an entry matches, later entries
/// are never considered.
pub fn find_match(
    existing: &[Station],
    candidate: &Station,
    config: &ConsolidationConfig,
) -> Option<usize> {
    existing
        .iter()
        .position(|station| is_match(station, candidate, config))
}

/// Check whether two station records describe the same physical station.
///
/// Priority order, each signal consulted only when the prior one did not
/// already decide:
/// 1. both records carry a non-empty ICAO and they are equal;
/// 2. exact name equality;
/// 3. great-circle distance within the configured limit AND normalized
///    elevation difference within the configured limit.
pub fn is_match(station: &Station, candidate: &Station, config: &ConsolidationConfig) -> bool {
    // Authoritative identifiers first: most reliable and cheapest to check
    if station.has_icao() && candidate.has_icao() && station.icao == candidate.icao {
        trace!("matched '{}' by ICAO", candidate.name);
        return true;
    }

    if station.name == candidate.name {
        trace!("matched '{}' by name", candidate.name);
        return true;
    }

    within_proximity(station, candidate, config)
}

/// Geometric fallback for stations recorded under different names and
/// identifiers but physically identical.
///
/// A malformed elevation normalizes to NaN, the difference comparison then
/// evaluates false, and the pair is treated as non-matching; bad data never
/// causes a silent merge.
fn within_proximity(station: &Station, candidate: &Station, config: &ConsolidationConfig) -> bool {
    let distance_km = geo::distance(station, candidate) / METERS_PER_KILOMETER;

    let elevation_delta = (normalize_elevation(station.elevation.as_ref())
        - normalize_elevation(candidate.elevation.as_ref()))
    .abs();

    distance_km <= config.max_match_distance_km
        && elevation_delta <= config.max_elevation_delta_meters
}
