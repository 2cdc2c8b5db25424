//! Data models for station consolidation
//!
//! This module contains the core data structures for representing raw source
//! catalog records (ISD and GHCND shaped), the common normalized station
//! model, and the immutable history ranges that preserve each source record's
//! contribution to a physical station's timeline.

use crate::constants::{CATALOG_DATE_FORMAT, PRESENT_SENTINEL};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Source Catalogs
// =============================================================================

/// Source catalog a raw record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    /// Integrated Surface Database (ICAO/USAF/WBAN identifier scheme)
    Isd,
    /// Global Historical Climatology Network - Daily
    Ghcnd,
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Catalog::Isd => write!(f, "ISD"),
            Catalog::Ghcnd => write!(f, "GHCND"),
        }
    }
}

// =============================================================================
// Activation Dates
// =============================================================================

/// One bound of a station's activation period.
///
/// Source catalogs report dates as ISO strings, with the literal sentinel
/// `"present"` marking a still-active station. The derived ordering is the
/// contract the merge logic relies on: `Unknown < Day(_) < Present`, so
/// `"present"` compares later than every concrete date and an unparseable
/// source date compares earlier than every concrete date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActiveDate {
    /// Source date that failed to parse
    Unknown,
    /// A concrete calendar date
    Day(NaiveDate),
    /// The `"present"` sentinel
    Present,
}

impl ActiveDate {
    /// Parse a source date string.
    ///
    /// Recognizes the `"present"` sentinel (case-insensitive) and ISO
    /// `YYYY-MM-DD` dates; anything else becomes [`ActiveDate::Unknown`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(PRESENT_SENTINEL) {
            return ActiveDate::Present;
        }
        match NaiveDate::parse_from_str(trimmed, CATALOG_DATE_FORMAT) {
            Ok(date) => ActiveDate::Day(date),
            Err(_) => ActiveDate::Unknown,
        }
    }

    /// Resolve to a concrete date, with `"present"` standing in for `today`.
    ///
    /// Returns `None` for [`ActiveDate::Unknown`] so callers can treat the
    /// span as indeterminate rather than inventing a bound.
    pub fn resolve(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            ActiveDate::Unknown => None,
            ActiveDate::Day(date) => Some(date),
            ActiveDate::Present => Some(today),
        }
    }

    /// Check whether this bound is the `"present"` sentinel
    pub fn is_present(self) -> bool {
        matches!(self, ActiveDate::Present)
    }
}

impl From<String> for ActiveDate {
    fn from(raw: String) -> Self {
        ActiveDate::parse(&raw)
    }
}

impl From<ActiveDate> for String {
    fn from(date: ActiveDate) -> Self {
        match date {
            ActiveDate::Unknown => String::new(),
            ActiveDate::Day(day) => day.format(CATALOG_DATE_FORMAT).to_string(),
            ActiveDate::Present => PRESENT_SENTINEL.to_string(),
        }
    }
}

impl std::fmt::Display for ActiveDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from(*self))
    }
}

// =============================================================================
// Elevation
// =============================================================================

/// Heterogeneous source elevation representation.
///
/// ISD reports elevations as signed strings with an optional unit suffix
/// (`"+0132.0"`, `"15 m"`); GHCND reports plain numbers. The source value is
/// carried verbatim on the station and only interpreted when two records are
/// compared (see the elevation service).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElevationValue {
    /// Already-numeric elevation in meters
    Meters(f64),
    /// Raw string representation from the source record
    Text(String),
}

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier scheme an entry in a history range's id set belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentifierKind {
    #[serde(rename = "USAF")]
    Usaf,
    #[serde(rename = "WBAN")]
    Wban,
    #[serde(rename = "ICAO")]
    Icao,
    #[serde(rename = "isdID")]
    IsdId,
    #[serde(rename = "GHCND")]
    Ghcnd,
}

/// One identifier entry in a history range's id set.
///
/// The identifier-type slot is always present for a given source shape, with
/// a possibly-absent value (ISD records carry USAF/WBAN/ICAO slots even when
/// the source left them unpopulated).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeIdentifier {
    #[serde(rename = "type")]
    pub kind: IdentifierKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
}

impl RangeIdentifier {
    pub fn new(kind: IdentifierKind, id: Option<String>) -> Self {
        Self { kind, id }
    }
}

// =============================================================================
// Raw Source Records
// =============================================================================

/// Source-shaped station record, either ISD or GHCND flavor.
///
/// Owned by the catalog reader and consumed once by the normalizer. Fields
/// that either catalog may omit are optional; unknown JSON keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStationRecord {
    /// Source identifier (`isdID` for ISD records, `"GHCND:..."` for GHCND)
    pub id: String,

    /// ICAO airport identifier (ISD only)
    #[serde(rename = "ICAO", default)]
    pub icao: Option<String>,

    /// US Air Force station number (ISD only)
    #[serde(rename = "USAF", default)]
    pub usaf: Option<String>,

    /// Weather Bureau Army Navy number (ISD only)
    #[serde(rename = "WBAN", default)]
    pub wban: Option<String>,

    /// Human-readable station name
    #[serde(default)]
    pub name: Option<String>,

    /// Latitude in decimal degrees
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Longitude in decimal degrees
    #[serde(default)]
    pub longitude: Option<f64>,

    /// Elevation, numeric meters or a signed string with unit
    #[serde(default)]
    pub elevation: Option<ElevationValue>,

    /// Country code (ISD only)
    #[serde(default)]
    pub country: Option<String>,

    /// State code (ISD only)
    #[serde(default)]
    pub state: Option<String>,

    /// First reporting date, ISO format
    #[serde(default)]
    pub mindate: Option<String>,

    /// Last reporting date, ISO format or the `"present"` sentinel
    #[serde(default)]
    pub maxdate: Option<String>,
}

impl RawStationRecord {
    /// Check whether the record carries a resolvable latitude.
    ///
    /// An absent latitude and the literal `0.0` both count as missing; such
    /// records never enter the consolidation accumulator.
    pub fn has_latitude(&self) -> bool {
        self.latitude.is_some_and(|lat| lat != 0.0)
    }
}

// =============================================================================
// History Ranges
// =============================================================================

/// One immutable timeline entry: a verbatim snapshot of a single source
/// record's reporting period, position, name, and identifiers.
///
/// Created exactly once at normalization time and never mutated afterward;
/// merges move ranges between stations but never duplicate or edit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRange {
    pub mindate: ActiveDate,
    pub maxdate: ActiveDate,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub longitude: Option<f64>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub elevation: Option<ElevationValue>,
    pub ids: Vec<RangeIdentifier>,
}

// =============================================================================
// Normalized Stations
// =============================================================================

/// Common internal station representation.
///
/// Each instance uniquely represents one physical station in the consolidated
/// list. Descriptive fields (`name`, position, `elevation`) always reflect
/// the merged-in record with the most recent `maxdate`; identifier lists and
/// `ranges` accumulate across merges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub elevation: Option<ElevationValue>,

    /// ICAO identifier, adopted from the first merged-in record carrying one
    #[serde(rename = "ICAO", skip_serializing_if = "Option::is_none", default)]
    pub icao: Option<String>,

    /// Comma-joined list of merged-in ISD source ids
    #[serde(rename = "isdID", skip_serializing_if = "Option::is_none", default)]
    pub isd_id: Option<String>,

    /// Comma-joined list of merged-in GHCND source ids
    #[serde(rename = "ghcndID", skip_serializing_if = "Option::is_none", default)]
    pub ghcnd_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub state: Option<String>,

    /// Earliest first-reporting date across all merged-in records
    pub mindate: ActiveDate,
    /// Latest last-reporting date across all merged-in records
    pub maxdate: ActiveDate,

    /// Append-only log of every source record folded into this station,
    /// oldest first in creation order (merges append, they do not re-sort)
    pub ranges: Vec<HistoryRange>,
}

impl Station {
    /// Check whether the station carries a non-empty ICAO identifier
    pub fn has_icao(&self) -> bool {
        self.icao.as_deref().is_some_and(|icao| !icao.is_empty())
    }

    /// Active lifespan in days, with `"present"` resolving to `today`.
    ///
    /// Returns `None` when either bound is unparseable.
    pub fn lifespan_days(&self, today: NaiveDate) -> Option<i64> {
        let start = self.mindate.resolve(today)?;
        let end = self.maxdate.resolve(today)?;
        Some((end - start).num_days())
    }

    /// Check whether the station was still reporting as of catalog publication
    pub fn is_active(&self) -> bool {
        self.maxdate.is_present()
    }
}
