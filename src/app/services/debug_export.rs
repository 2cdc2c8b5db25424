//! Debug snapshot export
//!
//! Optional side-channel dump of intermediate station lists for inspection.
//! Purely diagnostic: has no effect on consolidation correctness and is only
//! invoked behind a CLI flag.

use crate::Result;
use crate::constants::debug_dump_filename;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::debug;

/// Serialize a named intermediate list as pretty JSON into the OS temp
/// directory, returning the written path.
pub fn dump_snapshot<T: Serialize>(label: &str, payload: &T) -> Result<PathBuf> {
    let path = std::env::temp_dir().join(debug_dump_filename(label));

    let file = File::create(&path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), payload)?;

    debug!("wrote debug snapshot '{}' to {}", label, path.display());
    Ok(path)
}
