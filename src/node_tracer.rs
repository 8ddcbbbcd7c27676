//! Node.js backend: runs `@vercel/nft` in a child process
//!
//! The child prints the trace as one JSON document on stdout. Its stderr is
//! kept verbatim so a failing trace shows exactly what the tracer reported.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::trace::{FileTracer, TraceError, TraceResult};

/// Inline module handed to `node --input-type=module -e`
///
/// Arguments after `--` are the base directory followed by the entries.
const TRACE_SCRIPT: &str = r#"
import { nodeFileTrace } from '@vercel/nft';
const [base, ...entries] = process.argv.slice(1);
const traced = await nodeFileTrace(entries, { base });
const reasons = {};
for (const [file, reason] of traced.reasons) {
  reasons[file] = {
    type: Array.isArray(reason.type) ? reason.type.join(',') : String(reason.type),
    parents: reason.parents ? [...reason.parents] : [],
  };
}
const warnings = [];
traced.warnings.forEach((w) => warnings.push(w.message));
process.stdout.write(JSON.stringify({ fileList: [...traced.fileList], reasons, warnings }));
"#;

/// Tracer that shells out to Node.js
#[derive(Debug, Clone)]
pub struct NodeFileTracer {
    program: String,
}

impl NodeFileTracer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, entries: &[PathBuf], base: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--input-type=module")
            .arg("-e")
            .arg(TRACE_SCRIPT)
            .arg("--")
            .arg(base)
            .args(entries)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl Default for NodeFileTracer {
    fn default() -> Self {
        Self::new("node")
    }
}

impl FileTracer for NodeFileTracer {
    async fn trace(&self, entries: &[PathBuf], base: &Path) -> Result<TraceResult, TraceError> {
        debug!(program = %self.program, "spawning node file tracer");
        let output = self
            .command(entries, base)
            .output()
            .await
            .map_err(|source| TraceError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(TraceError::TracerExited {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        TraceResult::from_json(&stdout)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_command_passes_base_before_entries() {
        let tracer = NodeFileTracer::default();
        let cmd = tracer.command(&[PathBuf::from("/repo/index.js")], Path::new("/"));
        let args: Vec<_> = cmd
            .as_std()
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        let sep = args.iter().position(|a| a == "--").unwrap();
        assert_eq!(args[sep + 1], "/");
        assert_eq!(args[sep + 2], "/repo/index.js");
        assert_eq!(args[0], "--input-type=module");
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let tracer = NodeFileTracer::new("/nonexistent/nftlens-node");
        let err = tracer
            .trace(&[PathBuf::from("/index.js")], Path::new("/"))
            .await
            .unwrap_err();
        assert!(matches!(err, TraceError::Spawn { .. }));
    }

    #[tokio::test]
    async fn test_nonzero_exit_keeps_stderr() {
        // sh rejects `--input-type=module` as an option and says so on stderr
        let tracer = NodeFileTracer::new("sh");
        let err = tracer
            .trace(&[PathBuf::from("/index.js")], Path::new("/"))
            .await
            .unwrap_err();
        match err {
            TraceError::TracerExited { stderr, .. } => assert!(!stderr.is_empty()),
            other => panic!("unexpected error: {other}"),
        }
    }
}
