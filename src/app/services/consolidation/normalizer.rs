//! Source-specific record normalization
//!
//! Maps a raw ISD-shaped or GHCND-shaped record into the common station
//! representation with a single initial history range. The history range is
//! a verbatim snapshot of the source record and is never touched by later
//! merge-time overwrites.

use crate::app::models::{
    ActiveDate, Catalog, HistoryRange, IdentifierKind, RangeIdentifier, RawStationRecord, Station,
};
use crate::constants::GHCND_ID_PREFIX;

/// Normalize a raw source record into a station.
///
/// Returns `None` when the record has no resolvable latitude; such records
/// never enter the accumulator and contribute no history range.
pub fn normalize(record: RawStationRecord, catalog: Catalog) -> Option<Station> {
    if !record.has_latitude() {
        return None;
    }

    match catalog {
        Catalog::Isd => Some(normalize_isd(record)),
        Catalog::Ghcnd => Some(normalize_ghcnd(record)),
    }
}

/// ISD variant: carries the ICAO identifier and the `USAF`/`WBAN`/`ICAO`/
/// `isdID` identifier slots, each present even when the source value is
/// absent.
fn normalize_isd(record: RawStationRecord) -> Station {
    let name = record.name.unwrap_or_default();
    let mindate = ActiveDate::parse(record.mindate.as_deref().unwrap_or(""));
    let maxdate = ActiveDate::parse(record.maxdate.as_deref().unwrap_or(""));

    let range = HistoryRange {
        mindate,
        maxdate,
        latitude: record.latitude,
        longitude: record.longitude,
        name: name.clone(),
        elevation: record.elevation.clone(),
        ids: vec![
            RangeIdentifier::new(IdentifierKind::Usaf, record.usaf),
            RangeIdentifier::new(IdentifierKind::Wban, record.wban),
            RangeIdentifier::new(IdentifierKind::Icao, record.icao.clone()),
            RangeIdentifier::new(IdentifierKind::IsdId, Some(record.id.clone())),
        ],
    };

    Station {
        name,
        latitude: record.latitude.unwrap_or(0.0),
        longitude: record.longitude.unwrap_or(0.0),
        elevation: record.elevation,
        icao: record.icao,
        isd_id: Some(record.id),
        ghcnd_id: None,
        country: record.country,
        state: record.state,
        mindate,
        maxdate,
        ranges: vec![range],
    }
}

/// GHCND variant: strips the `"GHCND:"` prefix from the source id and builds
/// a single-entry identifier set.
fn normalize_ghcnd(record: RawStationRecord) -> Station {
    let name = record.name.unwrap_or_default();
    let mindate = ActiveDate::parse(record.mindate.as_deref().unwrap_or(""));
    let maxdate = ActiveDate::parse(record.maxdate.as_deref().unwrap_or(""));

    let ghcnd_id = record
        .id
        .strip_prefix(GHCND_ID_PREFIX)
        .unwrap_or(&record.id)
        .to_string();

    let range = HistoryRange {
        mindate,
        maxdate,
        latitude: record.latitude,
        longitude: record.longitude,
        name: name.clone(),
        elevation: record.elevation.clone(),
        ids: vec![RangeIdentifier::new(
            IdentifierKind::Ghcnd,
            Some(ghcnd_id.clone()),
        )],
    };

    Station {
        name,
        latitude: record.latitude.unwrap_or(0.0),
        longitude: record.longitude.unwrap_or(0.0),
        elevation: record.elevation,
        icao: None,
        isd_id: None,
        ghcnd_id: Some(ghcnd_id),
        country: None,
        state: None,
        mindate,
        maxdate,
        ranges: vec![range],
    }
}
