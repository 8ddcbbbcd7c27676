//! Trace model and the seam to the external file tracer
//!
//! The tracer walks `require`/`import` references from a set of entry files
//! and reports every file it would bundle. This crate never reimplements that
//! walk; it only consumes the result through [`FileTracer`].

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::node_tracer::NodeFileTracer;
use crate::recorded::RecordedTracer;

/// Failures reported by a tracer backend
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Failed to spawn tracer `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Tracer exited with {status}: {stderr}")]
    TracerExited { status: String, stderr: String },

    #[error("Malformed trace output: {0}")]
    Malformed(String),

    #[error("Failed to read recorded trace {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Why a file ended up in the trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    /// Inclusion type tag (e.g. "resolve", "initial"); multiple tags are joined with `,`
    #[serde(rename = "type", deserialize_with = "deserialize_kind")]
    pub kind: String,

    /// Files that referenced this one
    #[serde(default, deserialize_with = "deserialize_parents")]
    pub parents: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum KindRepr {
    One(String),
    Many(Vec<String>),
}

fn deserialize_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match KindRepr::deserialize(deserializer)? {
        KindRepr::One(kind) => kind,
        KindRepr::Many(kinds) => kinds.join(","),
    })
}

fn deserialize_parents<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Result of one tracer run
///
/// `file_list` is unique and keeps the tracer's iteration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceResult {
    pub file_list: Vec<String>,
    #[serde(default)]
    pub reasons: HashMap<String, Reason>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl TraceResult {
    pub fn new(
        file_list: Vec<String>,
        reasons: HashMap<String, Reason>,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            file_list: dedup_preserving_order(file_list),
            reasons,
            warnings,
        }
    }

    /// Parse the `{ fileList, reasons, warnings }` wire format
    pub fn from_json(input: &str) -> Result<Self, TraceError> {
        let raw: TraceResult =
            serde_json::from_str(input).map_err(|e| TraceError::Malformed(e.to_string()))?;
        Ok(Self::new(raw.file_list, raw.reasons, raw.warnings))
    }

    pub fn reason(&self, file: &str) -> Option<&Reason> {
        self.reasons.get(file)
    }
}

fn dedup_preserving_order(files: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(files.len());
    files
        .into_iter()
        .filter(|f| seen.insert(f.clone()))
        .collect()
}

/// External tracer capability
pub trait FileTracer {
    /// Trace `entries` relative to `base`
    fn trace(
        &self,
        entries: &[PathBuf],
        base: &Path,
    ) -> impl Future<Output = Result<TraceResult, TraceError>>;
}

/// Tracer selected at startup
#[derive(Debug, Clone)]
pub enum TracerBackend {
    Node(NodeFileTracer),
    Recorded(RecordedTracer),
}

impl FileTracer for TracerBackend {
    async fn trace(&self, entries: &[PathBuf], base: &Path) -> Result<TraceResult, TraceError> {
        match self {
            TracerBackend::Node(tracer) => tracer.trace(entries, base).await,
            TracerBackend::Recorded(tracer) => tracer.trace(entries, base).await,
        }
    }
}

/// Run the tracer once and wait for the full walk
///
/// No retry and no partial result: a failed trace would under-report
/// dependencies, so the error goes straight back to the caller.
pub async fn invoke<T: FileTracer>(
    tracer: &T,
    entries: &[PathBuf],
    base: &Path,
) -> Result<TraceResult, TraceError> {
    debug!(entries = entries.len(), base = %base.display(), "invoking file tracer");
    let result = tracer.trace(entries, base).await?;
    info!(
        files = result.file_list.len(),
        warnings = result.warnings.len(),
        "trace complete"
    );
    Ok(result)
}
