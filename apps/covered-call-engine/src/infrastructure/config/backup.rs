//! Backup file configuration.

use serde::{Deserialize, Serialize};

/// Backup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupConfig {
    /// Default backup document read and written by the CLI.
    #[serde(default = "default_backup_path")]
    pub path: String,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            path: default_backup_path(),
        }
    }
}

fn default_backup_path() -> String {
    "data/positions-backup.json".to_string()
}
