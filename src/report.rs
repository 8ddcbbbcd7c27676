//! Derived facts of one analysis and their human-readable rendering

use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::ReportLimits;
use crate::grouping::GroupCount;
use crate::trace::Reason;

/// A traced file outside the inferred project directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutsideFile {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
}

/// Everything the analysis derived from a trace
///
/// Lists are complete; the text printer applies [`ReportLimits`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub entry: PathBuf,
    pub base: PathBuf,
    pub total_files: usize,
    pub groups: Vec<GroupCount>,
    pub project_dir: String,
    pub outside: Vec<OutsideFile>,
    pub warnings: Vec<String>,
    pub common_ancestor: String,
    pub handler_path: PathBuf,
    pub handler_path_suspect: bool,
}

impl Report {
    /// Print every section in order; empty list sections are skipped
    pub fn write_text<W: Write>(&self, out: &mut W, limits: ReportLimits) -> io::Result<()> {
        writeln!(out, "\nAnalyzing NFT trace for: {}\n", self.entry.display())?;
        writeln!(out, "Base: {}", self.base.display())?;

        writeln!(out, "\nTotal traced files: {}", self.total_files)?;

        writeln!(out, "\nTop-level directories:")?;
        for group in &self.groups {
            writeln!(out, "  {}: {} files", group.segment, group.files)?;
        }

        writeln!(out, "\nProject dir: {}", self.project_dir)?;
        writeln!(out, "Files outside project: {}", self.outside.len())?;

        if !self.outside.is_empty() {
            writeln!(out, "\nOutside project files:")?;
            for file in self.outside.iter().take(limits.outside_sample) {
                writeln!(out, "  {}", file.path)?;
                if let Some(reason) = &file.reason {
                    writeln!(
                        out,
                        "    reason: type={}, parents={}",
                        reason.kind,
                        reason.parents.join(", ")
                    )?;
                }
            }
        }

        if !self.warnings.is_empty() {
            writeln!(out, "\nWarnings ({}):", self.warnings.len())?;
            for warning in self.warnings.iter().take(limits.warning_sample) {
                writeln!(out, "  {warning}")?;
            }
        }

        writeln!(out, "\nCommon ancestor: {}", self.common_ancestor)?;
        writeln!(
            out,
            "Handler path would be: {}",
            self.handler_path.display()
        )?;
        if self.handler_path_suspect {
            writeln!(
                out,
                "  note: base {} is joined twice into the handler path",
                self.base.display()
            )?;
        }
        Ok(())
    }

    pub fn to_text(&self, limits: ReportLimits) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_text(&mut buf, limits);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
