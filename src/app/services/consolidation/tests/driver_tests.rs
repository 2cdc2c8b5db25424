//! Tests for the consolidation driver

use super::*;
use crate::app::models::ActiveDate;
use crate::app::services::consolidation::{ConsolidationStats, Consolidator};
use crate::config::ConsolidationConfig;
use chrono::NaiveDate;

fn consolidator() -> Consolidator {
    Consolidator::new(ConsolidationConfig::default())
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

#[test]
fn test_distinct_records_stay_distinct() {
    // No duplicate physical stations: one output station per input record,
    // each with exactly one history range
    let records = vec![
        raw_record("1", "ALPHA", Some(40.0), Some(-105.0)),
        raw_record("2", "BRAVO", Some(50.0), Some(10.0)),
        raw_record("3", "CHARLIE", Some(-30.0), Some(150.0)),
    ];

    let mut stats = ConsolidationStats::new();
    let stations = consolidator().consolidate(records, Catalog::Isd, &mut stats, None);

    assert_eq!(stations.len(), 3);
    assert!(stations.iter().all(|s| s.ranges.len() == 1));
    assert_eq!(stats.stations_created, 3);
    assert_eq!(stats.records_merged, 0);
}

#[test]
fn test_shared_icao_chain_collapses() {
    // A, B, C pairwise share an ICAO: one station, three ranges, identifier
    // lists accumulated from all three
    let records = vec![
        raw_record_with_icao("111111-00001", "NAME A", "KEIK"),
        raw_record_with_icao("222222-00002", "NAME B", "KEIK"),
        raw_record_with_icao("333333-00003", "NAME C", "KEIK"),
    ];

    let mut stats = ConsolidationStats::new();
    let stations = consolidator().consolidate(records, Catalog::Isd, &mut stats, None);

    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].ranges.len(), 3);
    assert_eq!(
        stations[0].isd_id.as_deref(),
        Some("111111-00001,222222-00002,333333-00003")
    );
    assert_eq!(stats.records_merged, 2);
}

#[test]
fn test_missing_latitude_records_never_enter_accumulator() {
    let records = vec![
        raw_record("1", "NO POSITION", None, Some(-105.0)),
        // Same name as the dropped record; must become a new station rather
        // than match the dropped one
        raw_record("2", "NO POSITION", Some(40.0), Some(-105.0)),
    ];

    let mut stats = ConsolidationStats::new();
    let stations = consolidator().consolidate(records, Catalog::Isd, &mut stats, None);

    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].ranges.len(), 1);
    assert_eq!(stations[0].isd_id.as_deref(), Some("2"));
    assert_eq!(stats.records_skipped_no_latitude, 1);
}

#[test]
fn test_fold_merges_same_name_records_and_widens_interval() {
    let mut early = raw_record("1", "Old Name", Some(40.0), Some(-105.0));
    early.maxdate = Some("2020-01-01".to_string());
    let mut late = raw_record("2", "Old Name", Some(40.0), Some(-105.0));
    late.maxdate = Some("present".to_string());

    let mut stats = ConsolidationStats::new();
    let stations =
        consolidator().consolidate(vec![early, late], Catalog::Isd, &mut stats, None);

    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].maxdate, ActiveDate::Present);
    assert_eq!(stations[0].mindate, ActiveDate::parse("2000-01-01"));
}

#[test]
fn test_lifespan_filter_boundary() {
    let mut short_lived = test_station("1", "SHORT", 40.0, -105.0);
    short_lived.mindate = ActiveDate::parse("2020-01-01");
    short_lived.maxdate = ActiveDate::parse("2020-06-01");

    let mut long_lived = test_station("2", "LONG", 50.0, 10.0);
    long_lived.mindate = ActiveDate::parse("2019-01-01");
    long_lived.maxdate = ActiveDate::parse("2020-01-02");

    let mut stats = ConsolidationStats::new();
    let kept = consolidator().filter_short_lived(
        vec![short_lived, long_lived],
        today(),
        &mut stats,
    );

    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].name, "LONG");
    assert_eq!(stats.short_lived_removed, 1);
}

#[test]
fn test_lifespan_filter_resolves_present_to_today() {
    let mut active = test_station("1", "ACTIVE", 40.0, -105.0);
    active.mindate = ActiveDate::parse("2023-06-01");
    active.maxdate = ActiveDate::Present;

    let mut stats = ConsolidationStats::new();

    // 2023-06-01 to 2024-03-01 is under a year: removed
    let kept = consolidator().filter_short_lived(vec![active.clone()], today(), &mut stats);
    assert!(kept.is_empty());

    // A year later the same station survives
    let later = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    let kept = consolidator().filter_short_lived(vec![active], later, &mut stats);
    assert_eq!(kept.len(), 1);
}

#[test]
fn test_lifespan_filter_retains_indeterminate_spans() {
    let mut unknown = test_station("1", "UNDATED", 40.0, -105.0);
    unknown.mindate = ActiveDate::Unknown;

    let mut stats = ConsolidationStats::new();
    let kept = consolidator().filter_short_lived(vec![unknown], today(), &mut stats);

    assert_eq!(kept.len(), 1);
    assert_eq!(stats.short_lived_removed, 0);
}

#[test]
fn test_absorb_merges_matching_ghcnd_stations() {
    let driver = consolidator();
    let mut stats = ConsolidationStats::new();

    let isd_records = vec![raw_record("111111-00001", "BOULDER", Some(40.0), Some(-105.0))];
    let mut base = driver.consolidate(isd_records, Catalog::Isd, &mut stats, None);

    let ghcnd_records = vec![
        // Matches by name
        raw_ghcnd_record("GHCND:USC00050848", "BOULDER", 40.0, -105.0),
        // No match anywhere: appended as new
        raw_ghcnd_record("GHCND:USW00094728", "NEW YORK CNTRL PK", 40.78, -73.97),
    ];
    let ghcnd = driver.consolidate(ghcnd_records, Catalog::Ghcnd, &mut stats, None);

    driver.absorb(&mut base, ghcnd, &mut stats);

    assert_eq!(base.len(), 2);
    assert_eq!(base[0].isd_id.as_deref(), Some("111111-00001"));
    assert_eq!(base[0].ghcnd_id.as_deref(), Some("USC00050848"));
    assert_eq!(base[0].ranges.len(), 2);
    assert_eq!(base[1].ghcnd_id.as_deref(), Some("USW00094728"));
    assert_eq!(stats.cross_catalog_merged, 1);
    assert_eq!(stats.cross_catalog_appended, 1);
}

#[test]
fn test_accumulator_does_not_persist_across_calls() {
    let driver = consolidator();
    let mut stats = ConsolidationStats::new();

    let first = driver.consolidate(
        vec![raw_record("1", "ALPHA", Some(40.0), Some(-105.0))],
        Catalog::Isd,
        &mut stats,
        None,
    );
    let second = driver.consolidate(
        vec![raw_record("2", "ALPHA", Some(40.0), Some(-105.0))],
        Catalog::Isd,
        &mut stats,
        None,
    );

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].ranges.len(), 1);
}
