use super::RecordSource;
use crate::error::{OrgTableError, Result};
use crate::model::Record;
use std::cell::{Cell, RefCell};

/// In-memory source for testing.
///
/// Uses `RefCell`/`Cell` so tests can swap the payload or simulate an outage through a
/// shared reference while the store owns the source.
#[derive(Default)]
pub struct MemSource {
    records: RefCell<Vec<Record>>,
    simulate_failure: Cell<Option<u16>>,
    fetches: Cell<usize>,
}

impl MemSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: RefCell::new(records),
            ..Default::default()
        }
    }

    pub fn set_records(&self, records: Vec<Record>) {
        *self.records.borrow_mut() = records;
    }

    /// Make every fetch fail with the given HTTP status until cleared with `None`.
    pub fn set_simulate_failure(&self, status: Option<u16>) {
        self.simulate_failure.set(status);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }
}

impl RecordSource for MemSource {
    fn fetch(&self) -> Result<Vec<Record>> {
        self.fetches.set(self.fetches.get() + 1);
        if let Some(status) = self.simulate_failure.get() {
            return Err(OrgTableError::Status(status));
        }
        Ok(self.records.borrow().clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
