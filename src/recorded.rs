//! Replay backend for previously captured traces
//!
//! Reads a JSON file in the same `{ fileList, reasons, warnings }` shape the
//! Node backend produces. Entries and base are ignored: the recording already
//! fixes both.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::trace::{FileTracer, TraceError, TraceResult};

#[derive(Debug, Clone)]
pub struct RecordedTracer {
    path: PathBuf,
}

impl RecordedTracer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileTracer for RecordedTracer {
    async fn trace(&self, _entries: &[PathBuf], _base: &Path) -> Result<TraceResult, TraceError> {
        debug!(path = %self.path.display(), "replaying recorded trace");
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| TraceError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        TraceResult::from_json(&content)
    }
}
