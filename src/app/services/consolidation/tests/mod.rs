//! Tests for the consolidation service
//!
//! Unit tests for the normalizer, matcher, merger, and driver, with shared
//! fixture helpers for building raw records and normalized stations.

pub mod driver_tests;

use crate::app::models::{Catalog, ElevationValue, RawStationRecord, Station};
use crate::app::services::consolidation::normalizer::normalize;

/// Create a raw ISD-shaped record with the given position
pub fn raw_record(id: &str, name: &str, latitude: Option<f64>, longitude: Option<f64>) -> RawStationRecord {
    RawStationRecord {
        id: id.to_string(),
        icao: None,
        usaf: None,
        wban: None,
        name: Some(name.to_string()),
        latitude,
        longitude,
        elevation: Some(ElevationValue::Meters(100.0)),
        country: Some("US".to_string()),
        state: Some("CO".to_string()),
        mindate: Some("2000-01-01".to_string()),
        maxdate: Some("2020-01-01".to_string()),
    }
}

/// Create a raw ISD-shaped record with an ICAO identifier
pub fn raw_record_with_icao(id: &str, name: &str, icao: &str) -> RawStationRecord {
    let mut record = raw_record(id, name, Some(40.0), Some(-105.0));
    record.icao = Some(icao.to_string());
    record
}

/// Create a raw GHCND-shaped record (prefixed id, no ISD identifiers)
pub fn raw_ghcnd_record(id: &str, name: &str, latitude: f64, longitude: f64) -> RawStationRecord {
    RawStationRecord {
        id: id.to_string(),
        icao: None,
        usaf: None,
        wban: None,
        name: Some(name.to_string()),
        latitude: Some(latitude),
        longitude: Some(longitude),
        elevation: Some(ElevationValue::Meters(100.0)),
        country: None,
        state: None,
        mindate: Some("2000-01-01".to_string()),
        maxdate: Some("2020-01-01".to_string()),
    }
}

/// Normalize a raw ISD record into a station, panicking on falsy latitude
pub fn test_station(id: &str, name: &str, latitude: f64, longitude: f64) -> Station {
    normalize(raw_record(id, name, Some(latitude), Some(longitude)), Catalog::Isd)
        .expect("fixture record should have a latitude")
}
