use super::{decode_records, RecordSource};
use crate::error::Result;
use crate::model::Record;
use std::fs;
use std::path::PathBuf;

/// Reads the collection from a JSON file shaped like the service response.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for FileSource {
    fn fetch(&self) -> Result<Vec<Record>> {
        tracing::debug!(path = %self.path.display(), "reading records");
        let content = fs::read_to_string(&self.path)?;
        decode_records(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
