use super::backend::{Snapshot, SnapshotBackend};
use crate::error::{OrgTableError, Result};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const SNAPSHOT_FILE: &str = "snapshot.json";

/// Snapshot stored as `snapshot.json` inside the data directory.
#[derive(Debug, Clone)]
pub struct FsSnapshot {
    path: PathBuf,
}

impl FsSnapshot {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SNAPSHOT_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotBackend for FsSnapshot {
    fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(OrgTableError::Io)?;
        let snapshot = serde_json::from_str(&content)?;
        Ok(Some(snapshot))
    }

    fn save_snapshot(&self, records: &[Record]) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| OrgTableError::Config("Snapshot path has no parent".to_string()))?;
        fs::create_dir_all(dir).map_err(OrgTableError::Io)?;

        let snapshot = Snapshot::new(records.to_vec());
        let content = serde_json::to_string_pretty(&snapshot)?;

        let tmp_file = dir.join(format!(".snapshot-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(OrgTableError::Io)?;
        fs::rename(&tmp_file, &self.path).map_err(OrgTableError::Io)?;
        Ok(())
    }
}
