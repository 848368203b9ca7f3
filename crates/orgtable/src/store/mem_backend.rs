use super::backend::{Snapshot, SnapshotBackend};
use crate::error::{OrgTableError, Result};
use crate::model::Record;
use std::cell::{Cell, RefCell};

/// In-memory snapshot backend for testing.
///
/// Uses `RefCell` for interior mutability since the store is single-threaded.
#[derive(Default)]
pub struct MemSnapshot {
    snapshot: RefCell<Option<Snapshot>>,
    simulate_write_error: Cell<bool>,
    saves: Cell<usize>,
}

impl MemSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts out holding the given snapshot.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: RefCell::new(Some(snapshot)),
            ..Default::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    pub fn current(&self) -> Option<Snapshot> {
        self.snapshot.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl SnapshotBackend for MemSnapshot {
    fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        Ok(self.snapshot.borrow().clone())
    }

    fn save_snapshot(&self, records: &[Record]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(OrgTableError::Io(std::io::Error::other("Simulated write error")));
        }
        self.saves.set(self.saves.get() + 1);
        *self.snapshot.borrow_mut() = Some(Snapshot::new(records.to_vec()));
        Ok(())
    }
}
