//! JSON output format for analysis reports
//!
//! `--format json` emits every derived fact uncapped, for scripts that diff
//! traces between builds.

use serde::Serialize;
use std::io::Write;

use crate::grouping::GroupCount;
use crate::report::{OutsideFile, Report};

pub const FORMAT_TAG: &str = "nftlens-json-v1";

/// Serialized form of a [`Report`]
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    pub version: &'static str,
    pub format: &'static str,
    pub entry: String,
    pub base: String,
    pub total_files: usize,
    pub groups: &'a [GroupCount],
    pub project_dir: &'a str,
    pub outside_project: &'a [OutsideFile],
    pub warnings: &'a [String],
    pub common_ancestor: &'a str,
    pub handler_path: String,
    pub handler_path_suspect: bool,
}

impl<'a> JsonReport<'a> {
    pub fn new(report: &'a Report) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            format: FORMAT_TAG,
            entry: report.entry.display().to_string(),
            base: report.base.display().to_string(),
            total_files: report.total_files,
            groups: &report.groups,
            project_dir: &report.project_dir,
            outside_project: &report.outside,
            warnings: &report.warnings,
            common_ancestor: &report.common_ancestor,
            handler_path: report.handler_path.display().to_string(),
            handler_path_suspect: report.handler_path_suspect,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn write<W: Write>(&self, out: &mut W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out).map_err(serde_json::Error::io)
    }
}
