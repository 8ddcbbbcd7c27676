//! Analysis pipeline: root walk, trace, grouping, filtering, reduction
//!
//! The tracer call is the only await point. Everything after it is a pure
//! function of the trace result, so a failed trace produces no report at all.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::ancestor::{common_ancestor, handler_path, handler_path_suspect};
use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::grouping::{filter_outside_project, group_by_top_segment, project_dir};
use crate::paths::find_root;
use crate::report::{OutsideFile, Report};
use crate::trace::{self, FileTracer, TraceResult};

pub struct Analyzer<T> {
    tracer: T,
    config: AnalyzerConfig,
}

impl<T: FileTracer> Analyzer<T> {
    pub fn new(tracer: T, config: AnalyzerConfig) -> Self {
        Self { tracer, config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Trace `entry` from the filesystem root and derive the report
    pub async fn analyze(&self, entry: &Path) -> Result<Report> {
        let base = find_root(entry)?;
        debug!(entry = %entry.display(), base = %base.display(), "computed trace base");

        let traced = trace::invoke(&self.tracer, &[entry.to_path_buf()], &base).await?;
        Ok(build_report(entry, &base, &traced, self.config.project_markers.as_slice()))
    }
}

/// Derive every report fact from a completed trace
pub fn build_report<S: AsRef<str>>(
    entry: &Path,
    base: &Path,
    traced: &TraceResult,
    project_markers: &[S],
) -> Report {
    let files = traced.file_list.as_slice();
    let entry_str = entry.to_string_lossy();

    let groups = group_by_top_segment(files);
    debug!(groups = groups.len(), "grouped traced files");

    let project = project_dir(&entry_str, project_markers);
    let outside: Vec<OutsideFile> = filter_outside_project(files, &project)
        .into_iter()
        .map(|path| OutsideFile {
            path: path.to_string(),
            reason: traced.reason(path).cloned(),
        })
        .collect();
    debug!(project_dir = %project, outside = outside.len(), "filtered outside-project files");

    let ancestor = common_ancestor(base, files);
    let handler: PathBuf = handler_path(base, &ancestor, entry);
    let suspect = handler_path_suspect(base);
    if suspect {
        warn!(
            base = %base.display(),
            "handler path joins the base directory twice; result may be misleading"
        );
    }

    Report {
        entry: entry.to_path_buf(),
        base: base.to_path_buf(),
        total_files: files.len(),
        groups: groups.counts(),
        project_dir: project,
        outside,
        warnings: traced.warnings.clone(),
        common_ancestor: ancestor,
        handler_path: handler,
        handler_path_suspect: suspect,
    }
}
