//! JSON file loading utilities

use std::path::Path;

use log::{info, warn};

use crate::algorithm::growth::reference::ReferenceTable;
use crate::error::Result;
use crate::error::util::{safe_read_to_string, safe_write};
use crate::models::snapshot::Snapshot;

/// Read the WHO reference dataset
pub fn load_reference_table(path: &Path) -> Result<ReferenceTable> {
    let content = safe_read_to_string(path, "loading reference table")?;
    let table: ReferenceTable = serde_json::from_str(&content)?;

    info!(
        "Loaded {} reference rows from {}",
        table.row_count(),
        path.display()
    );
    Ok(table)
}

/// Read subjects and records, or start fresh if the file does not exist yet
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    if !path.exists() {
        warn!(
            "Data file not found: {}, starting with placeholder subjects",
            path.display()
        );
        return Ok(Snapshot::default());
    }

    let content = safe_read_to_string(path, "loading growth records")?;
    let snapshot: Snapshot = serde_json::from_str(&content)?;

    info!(
        "Loaded {} records from {}",
        snapshot.records.len(),
        path.display()
    );
    Ok(snapshot)
}

/// Write subjects and records as pretty-printed JSON
pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let content = serde_json::to_string_pretty(snapshot)?;
    safe_write(path, &content, "saving growth records")
}
