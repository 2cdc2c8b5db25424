//! Configuration for the consolidation pipeline
//!
//! Provides the tunable thresholds used by the matcher and the lifespan
//! filter, with defaults reflecting the expected positional noise between
//! the ISD and GHCND catalogs.

use crate::constants::{MAX_ELEVATION_DELTA_METERS, MAX_MATCH_DISTANCE_KM, MIN_LIFESPAN_DAYS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Thresholds governing matching and filtering decisions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidationConfig {
    /// Maximum great-circle distance for the geometric fallback match, in km
    pub max_match_distance_km: f64,

    /// Maximum absolute elevation difference for the geometric fallback
    /// match, in meters
    pub max_elevation_delta_meters: f64,

    /// Minimum active lifespan for a consolidated station to be retained,
    /// in days
    pub min_lifespan_days: i64,
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            max_match_distance_km: MAX_MATCH_DISTANCE_KM,
            max_elevation_delta_meters: MAX_ELEVATION_DELTA_METERS,
            min_lifespan_days: MIN_LIFESPAN_DAYS,
        }
    }
}

impl ConsolidationConfig {
    /// Validate threshold values for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.max_match_distance_km.is_finite() || self.max_match_distance_km <= 0.0 {
            return Err(Error::configuration(format!(
                "Match distance must be a positive number of kilometers, got {}",
                self.max_match_distance_km
            )));
        }

        if !self.max_elevation_delta_meters.is_finite() || self.max_elevation_delta_meters < 0.0 {
            return Err(Error::configuration(format!(
                "Elevation delta must be a non-negative number of meters, got {}",
                self.max_elevation_delta_meters
            )));
        }

        if self.min_lifespan_days < 0 {
            return Err(Error::configuration(format!(
                "Minimum lifespan must be a non-negative number of days, got {}",
                self.min_lifespan_days
            )));
        }

        Ok(())
    }
}
