use crate::error::Result;
use crate::model::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The last successfully fetched collection, as persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub saved_at: DateTime<Utc>,
    pub records: Vec<Record>,
}

impl Snapshot {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            saved_at: Utc::now(),
            records,
        }
    }
}

/// Abstract interface for snapshot I/O.
/// The backend only moves bytes; `RecordStore` decides when to read and write.
pub trait SnapshotBackend {
    /// Returns Ok(None) if no snapshot has been written yet.
    fn load_snapshot(&self) -> Result<Option<Snapshot>>;

    /// Persist a collection.
    /// MUST be atomic (write to tmp then rename) so a crash never leaves half a snapshot.
    fn save_snapshot(&self, records: &[Record]) -> Result<()>;
}
