//! # Record Store
//!
//! Holds the current record collection and the only path by which it changes: a full
//! fetch from a [`RecordSource`].
//!
//! ## Load Semantics
//!
//! - **Success**: The collection is replaced wholesale (never merged), the version
//!   counter is bumped and, when enabled, the new collection is written to the snapshot.
//! - **Failure**: Transport errors, non-2xx statuses and undecodable payloads are all
//!   treated alike. The failure is logged and the previous collection is retained. `load`
//!   never raises.
//! - **Ordering**: Loads run to completion one after another, so the last load issued is
//!   the last one applied.
//!
//! ## Snapshot
//!
//! The snapshot is a convenience for running offline. Writing it is best-effort: a failed
//! write is logged and does not affect the outcome of the load that triggered it.
//! [`RecordStore::restore_snapshot`] seeds the collection from it, typically just before
//! the first `load`.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsSnapshot`]: `snapshot.json` in the data directory, written atomically.
//! - [`mem_backend::MemSnapshot`]: For testing, with write error simulation.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! └── snapshot.json    # {"saved_at": ..., "records": [...]}
//! ```

use crate::error::OrgTableError;
use crate::model::Record;
use crate::source::RecordSource;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::{Snapshot, SnapshotBackend};

/// Where the current collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataOrigin {
    /// Nothing loaded yet.
    #[default]
    Empty,
    Fetched { at: DateTime<Utc> },
    Snapshot { saved_at: DateTime<Utc> },
}

/// Result of a [`RecordStore::load`].
#[derive(Debug)]
pub enum LoadOutcome {
    /// The collection was replaced by `count` fresh records.
    Replaced { count: usize },
    /// The fetch failed; the previous `count` records are still current.
    Retained { count: usize, error: OrgTableError },
}

impl LoadOutcome {
    pub fn is_replaced(&self) -> bool {
        matches!(self, LoadOutcome::Replaced { .. })
    }
}

pub struct RecordStore<S: RecordSource, B: SnapshotBackend> {
    pub(crate) source: S,
    pub(crate) snapshot: B,
    records: Vec<Record>,
    version: u64,
    origin: DataOrigin,
    persist_snapshot: bool,
}

impl<S: RecordSource, B: SnapshotBackend> RecordStore<S, B> {
    pub fn new(source: S, snapshot: B) -> Self {
        Self {
            source,
            snapshot,
            records: Vec::new(),
            version: 0,
            origin: DataOrigin::Empty,
            persist_snapshot: true,
        }
    }

    /// Turn snapshot writes after successful loads on or off.
    pub fn with_snapshot_writes(mut self, enabled: bool) -> Self {
        self.persist_snapshot = enabled;
        self
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Bumped every time the collection is replaced. Views keyed on it know when to
    /// recompute.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn origin(&self) -> DataOrigin {
        self.origin
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the whole collection and replace the current one with it.
    pub fn load(&mut self) -> LoadOutcome {
        debug!(source = %self.source.describe(), "loading records");

        match self.source.fetch() {
            Ok(records) => {
                let count = records.len();
                if self.persist_snapshot {
                    if let Err(e) = self.snapshot.save_snapshot(&records) {
                        warn!(error = %e, "could not write snapshot");
                    }
                }
                self.replace(records, DataOrigin::Fetched { at: Utc::now() });
                info!(count, version = self.version, "records loaded");
                LoadOutcome::Replaced { count }
            }
            Err(error) => {
                warn!(
                    source = %self.source.describe(),
                    error = %error,
                    retained = self.records.len(),
                    "failed to load records"
                );
                LoadOutcome::Retained {
                    count: self.records.len(),
                    error,
                }
            }
        }
    }

    /// Seed the collection from the last snapshot. Returns true if one was applied.
    ///
    /// A missing or unreadable snapshot leaves the store untouched.
    pub fn restore_snapshot(&mut self) -> bool {
        match self.snapshot.load_snapshot() {
            Ok(Some(snapshot)) => {
                let count = snapshot.records.len();
                let saved_at = snapshot.saved_at;
                self.replace(snapshot.records, DataOrigin::Snapshot { saved_at });
                debug!(count, %saved_at, "restored snapshot");
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "could not read snapshot");
                false
            }
        }
    }

    fn replace(&mut self, records: Vec<Record>, origin: DataOrigin) {
        self.records = records;
        self.version += 1;
        self.origin = origin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::MemSource;
    use crate::store::mem_backend::MemSnapshot;
    use crate::test_utils::{mem_store, sample_records};

    #[test]
    fn test_new_store_is_empty() {
        let store = mem_store(sample_records());
        assert!(store.records().is_empty());
        assert_eq!(store.version(), 0);
        assert_eq!(store.origin(), DataOrigin::Empty);
    }

    #[test]
    fn test_load_replaces_collection() {
        let mut store = mem_store(sample_records());
        let outcome = store.load();
        assert!(matches!(outcome, LoadOutcome::Replaced { count: 45 }));
        assert_eq!(store.records().len(), 45);
        assert_eq!(store.version(), 1);
        assert!(matches!(store.origin(), DataOrigin::Fetched { .. }));
    }

    #[test]
    fn test_load_replaces_rather_than_merges() {
        let mut store = mem_store(sample_records());
        store.load();

        store.source.set_records(vec![Record::new("only")]);
        store.load();
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].name, "only");
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_failed_load_keeps_previous_collection() {
        let mut store = mem_store(sample_records());
        store.load();

        store.source.set_simulate_failure(Some(500));
        let outcome = store.load();
        match outcome {
            LoadOutcome::Retained { count, error } => {
                assert_eq!(count, 45);
                assert!(matches!(error, OrgTableError::Status(500)));
            }
            other => panic!("expected Retained, got {:?}", other),
        }
        assert_eq!(store.records().len(), 45);
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_failed_first_load_leaves_store_empty() {
        let mut store = mem_store(sample_records());
        store.source.set_simulate_failure(Some(503));
        assert!(!store.load().is_replaced());
        assert!(store.records().is_empty());
        assert_eq!(store.origin(), DataOrigin::Empty);
    }

    #[test]
    fn test_recovers_after_failure() {
        let mut store = mem_store(sample_records());
        store.source.set_simulate_failure(Some(500));
        store.load();
        store.source.set_simulate_failure(None);
        assert!(store.load().is_replaced());
        assert_eq!(store.records().len(), 45);
        assert_eq!(store.source.fetch_count(), 2);
    }

    #[test]
    fn test_last_load_wins() {
        let mut store = mem_store(vec![Record::new("first")]);
        store.load();
        store.source.set_records(vec![Record::new("second"), Record::new("third")]);
        store.load();
        let names: Vec<&str> = store.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["second", "third"]);
    }

    #[test]
    fn test_load_writes_snapshot() {
        let mut store = mem_store(sample_records());
        store.load();
        let snapshot = store.snapshot.current().unwrap();
        assert_eq!(snapshot.records.len(), 45);
        assert_eq!(store.snapshot.save_count(), 1);
    }

    #[test]
    fn test_snapshot_writes_can_be_disabled() {
        let mut store = mem_store(sample_records()).with_snapshot_writes(false);
        store.load();
        assert!(store.snapshot.current().is_none());
        assert_eq!(store.records().len(), 45);
    }

    #[test]
    fn test_snapshot_write_failure_is_not_fatal() {
        let mut store = mem_store(sample_records());
        store.snapshot.set_simulate_write_error(true);
        assert!(store.load().is_replaced());
        assert_eq!(store.records().len(), 45);
        assert!(store.snapshot.current().is_none());
    }

    #[test]
    fn test_failed_load_does_not_touch_snapshot() {
        let mut store = mem_store(sample_records());
        store.load();
        store.source.set_simulate_failure(Some(502));
        store.load();
        assert_eq!(store.snapshot.save_count(), 1);
    }

    #[test]
    fn test_restore_snapshot_seeds_collection() {
        let snapshot = Snapshot::new(vec![Record::new("cached")]);
        let saved_at = snapshot.saved_at;
        let mut store = RecordStore::new(MemSource::default(), MemSnapshot::with_snapshot(snapshot));

        assert!(store.restore_snapshot());
        assert_eq!(store.records()[0].name, "cached");
        assert_eq!(store.version(), 1);
        assert_eq!(store.origin(), DataOrigin::Snapshot { saved_at });
    }

    #[test]
    fn test_restore_without_snapshot_is_noop() {
        let mut store = mem_store(sample_records());
        assert!(!store.restore_snapshot());
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn test_snapshot_survives_failed_refresh() {
        let snapshot = Snapshot::new(vec![Record::new("cached")]);
        let mut store = RecordStore::new(MemSource::default(), MemSnapshot::with_snapshot(snapshot));
        store.source.set_simulate_failure(Some(500));

        store.restore_snapshot();
        store.load();
        assert_eq!(store.records()[0].name, "cached");
        assert!(matches!(store.origin(), DataOrigin::Snapshot { .. }));
    }
}
