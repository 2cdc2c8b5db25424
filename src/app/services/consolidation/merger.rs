//! Station merging logic
//!
//! Combines a matched pair of station records: unions identifier lists and
//! history ranges, widens the activation interval, and lets the record with
//! the most recent `maxdate` dictate the descriptive fields, on the
//! assumption that the most recently active record's self-description is the
//! most accurate for the station's current identity.

use crate::app::models::Station;
use crate::constants::ID_LIST_SEPARATOR;

/// Merge `incoming` into `base`, consuming `incoming`.
///
/// Steps, in order:
/// 1. append all of incoming's history ranges (no dedup, no re-sort);
/// 2. adopt incoming's ICAO when base has none;
/// 3. comma-append incoming's ISD id list;
/// 4. comma-append incoming's GHCND id list;
/// 5. lower `mindate` when incoming's is earlier;
/// 6. when incoming's `maxdate` is later, raise it and overwrite position,
///    elevation, and name with incoming's values (last-activation-wins).
pub fn merge(base: &mut Station, incoming: Station) {
    let Station {
        name,
        latitude,
        longitude,
        elevation,
        icao,
        isd_id,
        ghcnd_id,
        country: _,
        state: _,
        mindate,
        maxdate,
        mut ranges,
    } = incoming;

    base.ranges.append(&mut ranges);

    if !base.has_icao() {
        if let Some(icao) = icao.filter(|icao| !icao.is_empty()) {
            base.icao = Some(icao);
        }
    }

    if let Some(id) = isd_id {
        append_id(&mut base.isd_id, &id);
    }

    if let Some(id) = ghcnd_id {
        append_id(&mut base.ghcnd_id, &id);
    }

    if mindate < base.mindate {
        base.mindate = mindate;
    }

    if maxdate > base.maxdate {
        base.maxdate = maxdate;
        base.latitude = latitude;
        base.longitude = longitude;
        base.elevation = elevation;
        base.name = name;
    }
}

/// Append a source id to a comma-joined identifier list, creating the list
/// when it does not exist yet.
fn append_id(current: &mut Option<String>, incoming: &str) {
    match current {
        Some(existing) => {
            existing.push_str(ID_LIST_SEPARATOR);
            existing.push_str(incoming);
        }
        None => *current = Some(incoming.to_string()),
    }
}
