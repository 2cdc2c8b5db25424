//! Catalog file I/O
//!
//! Reads source catalog files (JSON arrays of raw station records) and
//! writes the consolidated station list. The consolidation core itself only
//! consumes and produces data structures; this adapter owns the file
//! boundary.

use crate::app::models::{RawStationRecord, Station};
use crate::{Error, Result};
use std::path::Path;
use tracing::info;

/// Read a source catalog: a JSON array of raw station records.
pub async fn read_catalog(path: &Path) -> Result<Vec<RawStationRecord>> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read catalog {}", path.display()), e))?;

    let records: Vec<RawStationRecord> = serde_json::from_slice(&bytes).map_err(|e| {
        Error::catalog_parsing(
            path.display().to_string(),
            "expected a JSON array of station records",
            Some(e),
        )
    })?;

    info!("read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Write the consolidated station list as a JSON array.
pub async fn write_catalog(path: &Path, stations: &[Station]) -> Result<()> {
    let json = serde_json::to_vec_pretty(stations)?;

    tokio::fs::write(path, json)
        .await
        .map_err(|e| Error::io(format!("Failed to write output {}", path.display()), e))?;

    info!("wrote {} stations to {}", stations.len(), path.display());
    Ok(())
}

/// Read an already-consolidated catalog, for reporting.
pub async fn read_consolidated(path: &Path) -> Result<Vec<Station>> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read catalog {}", path.display()), e))?;

    let stations: Vec<Station> = serde_json::from_slice(&bytes).map_err(|e| {
        Error::catalog_parsing(
            path.display().to_string(),
            "expected a JSON array of consolidated stations",
            Some(e),
        )
    })?;

    Ok(stations)
}
