//! JSON backup import/export.
//!
//! A backup is a single JSON document holding every stored position.
//! Decimals are written as strings so a round-trip is exact.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::position::Position;
use crate::domain::shared::{PositionId, Timestamp};

/// Version of the record layout written by [`export_backup`].
pub const SCHEMA_VERSION: u32 = 1;

/// Backup errors.
#[derive(Debug, Error)]
pub enum BackupError {
    /// Failed to read or write the backup file.
    #[error("Backup file '{path}': {source}")]
    Io {
        /// Path to the backup file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("Failed to parse backup JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document has no `positions` array.
    #[error("Invalid backup format: {0}")]
    InvalidFormat(String),
}

/// Backup document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionBackup {
    /// When the backup was taken.
    pub exported_at: Timestamp,
    /// Record layout version.
    pub schema_version: u32,
    /// Number of entries in `positions`.
    pub positions_count: usize,
    /// Stored records.
    pub positions: Vec<Position>,
}

/// Result of importing a backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// Records that parsed and passed validation.
    pub imported: Vec<Position>,
    /// Records that were rejected.
    pub skipped: usize,
    /// Entries in the document.
    pub total: usize,
}

/// Counts describing a set of stored positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackupInfo {
    /// Record layout version.
    pub schema_version: u32,
    /// All positions.
    pub total_positions: usize,
    /// Open positions.
    pub open_positions: usize,
    /// Closed positions.
    pub closed_positions: usize,
}

impl BackupInfo {
    /// Describe `positions`.
    #[must_use]
    pub fn of(positions: &[Position]) -> Self {
        let open_positions = positions.iter().filter(|p| p.is_open()).count();
        Self {
            schema_version: SCHEMA_VERSION,
            total_positions: positions.len(),
            open_positions,
            closed_positions: positions.len() - open_positions,
        }
    }
}

/// Build a backup document of `positions`.
#[must_use]
pub fn export_backup(positions: &[Position], exported_at: Timestamp) -> PositionBackup {
    PositionBackup {
        exported_at,
        schema_version: SCHEMA_VERSION,
        positions_count: positions.len(),
        positions: positions.to_vec(),
    }
}

/// Parse a backup document, keeping every record that validates.
///
/// Records without an `id` get a fresh one; numeric ids are kept as text.
/// Invalid records are skipped with a warning.
///
/// # Errors
///
/// Returns error if the text is not JSON or has no `positions` array.
pub fn import_backup(json: &str) -> Result<ImportReport, BackupError> {
    let document: Value = serde_json::from_str(json)?;
    let Some(entries) = document.get("positions").and_then(Value::as_array) else {
        return Err(BackupError::InvalidFormat(
            "expected a `positions` array".to_string(),
        ));
    };

    let total = entries.len();
    let mut imported = Vec::with_capacity(total);
    let mut skipped = 0;

    for (index, entry) in entries.iter().enumerate() {
        match parse_record(entry.clone()) {
            Ok(position) => imported.push(position),
            Err(reason) => {
                warn!(index, %reason, "Skipping backup record");
                skipped += 1;
            }
        }
    }

    info!(imported = imported.len(), skipped, total, "Backup imported");
    Ok(ImportReport {
        imported,
        skipped,
        total,
    })
}

fn parse_record(mut entry: Value) -> Result<Position, String> {
    let Some(fields) = entry.as_object_mut() else {
        return Err("record is not an object".to_string());
    };
    let raw = match fields.get("id") {
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    };
    let id = PositionId::imported_or_generate(raw.as_deref());
    fields.insert("id".to_string(), Value::String(id.to_string()));

    let position: Position = serde_json::from_value(entry).map_err(|e| e.to_string())?;
    position.check_invariants().map_err(|e| e.to_string())?;
    Ok(position)
}

/// Read and import a backup file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not a backup document.
pub fn read_backup_file(path: &Path) -> Result<ImportReport, BackupError> {
    let json = std::fs::read_to_string(path).map_err(|source| BackupError::Io {
        path: path.display().to_string(),
        source,
    })?;
    import_backup(&json)
}

/// Write `backup` as pretty-printed JSON, creating parent directories.
///
/// # Errors
///
/// Returns error if the file cannot be written.
pub fn write_backup_file(path: &Path, backup: &PositionBackup) -> Result<(), BackupError> {
    let io_err = |source| BackupError::Io {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(backup)?;
    std::fs::write(path, json).map_err(io_err)
}
