//! End-to-end integration tests for catalog consolidation
//!
//! Exercises the full pipeline the consolidate command drives: read raw
//! catalog JSON from disk, fold each source, filter short-lived stations,
//! merge GHCND into the ISD list, and write the consolidated output.

use chrono::NaiveDate;
use station_consolidator::app::adapters::catalog_io;
use station_consolidator::app::models::{ActiveDate, Catalog, Station};
use station_consolidator::app::services::consolidation::ConsolidationStats;
use station_consolidator::{ConsolidationConfig, Consolidator};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

const ISD_FIXTURE: &str = r#"[
    {
        "id": "720534-00161",
        "USAF": "720534",
        "WBAN": "00161",
        "ICAO": "KEIK",
        "name": "ERIE MUNICIPAL AIRPORT",
        "latitude": 40.017,
        "longitude": -105.05,
        "elevation": "+1563.6",
        "country": "US",
        "state": "CO",
        "mindate": "2006-01-01",
        "maxdate": "present"
    },
    {
        "id": "724699-00189",
        "ICAO": "KEIK",
        "name": "ERIE MUNI",
        "latitude": 40.01,
        "longitude": -105.048,
        "elevation": "+1564.0",
        "country": "US",
        "state": "CO",
        "mindate": "1998-03-01",
        "maxdate": "2005-12-31"
    },
    {
        "id": "999999-00007",
        "name": "NO POSITION STATION",
        "longitude": -100.0,
        "mindate": "2000-01-01",
        "maxdate": "present"
    },
    {
        "id": "725650-03017",
        "ICAO": "KDEN",
        "name": "DENVER INTERNATIONAL AIRPORT",
        "latitude": 39.847,
        "longitude": -104.656,
        "elevation": "+1650.2",
        "country": "US",
        "state": "CO",
        "mindate": "1994-02-28",
        "maxdate": "present"
    },
    {
        "id": "888888-00042",
        "name": "SHORT LIVED SITE",
        "latitude": 45.0,
        "longitude": -93.0,
        "elevation": 250,
        "mindate": "2020-01-01",
        "maxdate": "2020-06-01"
    }
]"#;

const GHCND_FIXTURE: &str = r#"[
    {
        "id": "GHCND:USW00003017",
        "name": "DENVER INTERNATIONAL AIRPORT",
        "latitude": 39.8466,
        "longitude": -104.6562,
        "elevation": 1647.1,
        "mindate": "1994-03-01",
        "maxdate": "present"
    },
    {
        "id": "GHCND:USW00094728",
        "name": "NEW YORK CNTRL PK TWR",
        "latitude": 40.7789,
        "longitude": -73.9692,
        "elevation": 39.6,
        "mindate": "1869-01-01",
        "maxdate": "present"
    }
]"#;

fn run_pipeline(
    isd_records: Vec<station_consolidator::RawStationRecord>,
    ghcnd_records: Vec<station_consolidator::RawStationRecord>,
    today: NaiveDate,
) -> (Vec<Station>, ConsolidationStats) {
    let consolidator = Consolidator::new(ConsolidationConfig::default());
    let mut stats = ConsolidationStats::new();

    let isd = consolidator.consolidate(isd_records, Catalog::Isd, &mut stats, None);
    let mut consolidated = consolidator.filter_short_lived(isd, today, &mut stats);

    let ghcnd = consolidator.consolidate(ghcnd_records, Catalog::Ghcnd, &mut stats, None);
    let ghcnd = consolidator.filter_short_lived(ghcnd, today, &mut stats);
    consolidator.absorb(&mut consolidated, ghcnd, &mut stats);

    (consolidated, stats)
}

#[tokio::test]
async fn test_full_consolidation_pipeline() {
    let dir = TempDir::new().unwrap();
    let isd_path = write_fixture(&dir, "isd.json", ISD_FIXTURE);
    let ghcnd_path = write_fixture(&dir, "ghcnd.json", GHCND_FIXTURE);
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    let isd_records = catalog_io::read_catalog(&isd_path).await.unwrap();
    let ghcnd_records = catalog_io::read_catalog(&ghcnd_path).await.unwrap();
    assert_eq!(isd_records.len(), 5);
    assert_eq!(ghcnd_records.len(), 2);

    let (consolidated, stats) = run_pipeline(isd_records, ghcnd_records, today);

    // Five ISD records: two Erie entries merge by ICAO, the no-position
    // record is dropped, the short-lived site is filtered out. Denver then
    // absorbs its GHCND twin and Central Park arrives as new.
    assert_eq!(consolidated.len(), 3);
    assert_eq!(stats.records_skipped_no_latitude, 1);
    assert_eq!(stats.records_merged, 1);
    assert_eq!(stats.short_lived_removed, 1);
    assert_eq!(stats.cross_catalog_merged, 1);
    assert_eq!(stats.cross_catalog_appended, 1);

    let erie = consolidated
        .iter()
        .find(|s| s.icao.as_deref() == Some("KEIK"))
        .unwrap();
    assert_eq!(erie.ranges.len(), 2);
    assert_eq!(erie.isd_id.as_deref(), Some("720534-00161,724699-00189"));
    // The record still reporting wins the descriptive fields
    assert_eq!(erie.name, "ERIE MUNICIPAL AIRPORT");
    assert_eq!(erie.mindate, ActiveDate::parse("1998-03-01"));
    assert_eq!(erie.maxdate, ActiveDate::Present);

    let denver = consolidated
        .iter()
        .find(|s| s.icao.as_deref() == Some("KDEN"))
        .unwrap();
    assert_eq!(denver.ranges.len(), 2);
    assert_eq!(denver.isd_id.as_deref(), Some("725650-03017"));
    assert_eq!(denver.ghcnd_id.as_deref(), Some("USW00003017"));
    assert_eq!(denver.mindate, ActiveDate::parse("1994-02-28"));

    let central_park = consolidated
        .iter()
        .find(|s| s.ghcnd_id.as_deref() == Some("USW00094728"))
        .unwrap();
    assert!(central_park.isd_id.is_none());
    assert_eq!(central_park.ranges.len(), 1);
}

#[tokio::test]
async fn test_output_round_trips_through_disk() {
    let dir = TempDir::new().unwrap();
    let isd_path = write_fixture(&dir, "isd.json", ISD_FIXTURE);
    let ghcnd_path = write_fixture(&dir, "ghcnd.json", GHCND_FIXTURE);
    let output_path = dir.path().join("stations.json");
    let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

    let isd_records = catalog_io::read_catalog(&isd_path).await.unwrap();
    let ghcnd_records = catalog_io::read_catalog(&ghcnd_path).await.unwrap();
    let (consolidated, _) = run_pipeline(isd_records, ghcnd_records, today);

    catalog_io::write_catalog(&output_path, &consolidated)
        .await
        .unwrap();
    let reloaded = catalog_io::read_consolidated(&output_path).await.unwrap();

    assert_eq!(reloaded, consolidated);
}

#[tokio::test]
async fn test_malformed_catalog_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "bad.json", r#"{"not": "an array"}"#);

    let result = catalog_io::read_catalog(&path).await;
    assert!(matches!(
        result,
        Err(station_consolidator::Error::CatalogParsing { .. })
    ));
}

#[tokio::test]
async fn test_missing_catalog_is_an_io_error() {
    let result = catalog_io::read_catalog(std::path::Path::new("/nonexistent/isd.json")).await;
    assert!(matches!(result, Err(station_consolidator::Error::Io { .. })));
}
