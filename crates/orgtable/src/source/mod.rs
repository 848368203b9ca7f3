//! # Fetch Collaborators
//!
//! The record service is an external collaborator: the core only needs "give me the whole
//! collection, or tell me you could not". [`RecordSource`] is that contract.
//!
//! ## Implementations
//!
//! - [`http::HttpSource`]: Production. `GET` on the configured endpoint, which answers with
//!   a JSON array of record objects.
//! - [`file::FileSource`]: Reads the same JSON array from disk. Used for offline work and
//!   fixtures.
//! - [`memory::MemSource`]: For testing, with failure simulation.
//!
//! A source either yields a complete collection or an error; there are no partial
//! payloads. The [`crate::store::RecordStore`] treats every error the same way.

use crate::error::Result;
use crate::model::Record;

pub mod file;
pub mod http;
pub mod memory;

pub trait RecordSource {
    /// Fetch the full collection.
    fn fetch(&self) -> Result<Vec<Record>>;

    /// Human-readable location, for log lines.
    fn describe(&self) -> String;
}

/// Decodes a JSON array of record objects.
pub fn decode_records(payload: &str) -> Result<Vec<Record>> {
    Ok(serde_json::from_str(payload)?)
}
