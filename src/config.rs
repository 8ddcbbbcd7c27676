//! Analyzer configuration
//!
//! Built once at startup from defaults, an optional TOML file and CLI
//! overrides, then passed explicitly into the pipeline.
//!
//! # Example
//! ```toml
//! project_markers = ["/apps/", "/.svelte-kit/"]
//! outside_sample = 30
//! warning_sample = 10
//! node_binary = "node"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::grouping::DEFAULT_PROJECT_MARKERS;

/// How many items each capped report section prints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLimits {
    pub outside_sample: usize,
    pub warning_sample: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            outside_sample: 30,
            warning_sample: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Boundary markers used to infer the project directory, tried in order
    pub project_markers: Vec<String>,

    /// Outside-project files listed in the text report
    pub outside_sample: usize,

    /// Warnings listed in the text report
    pub warning_sample: usize,

    /// Node.js executable for the `@vercel/nft` backend
    pub node_binary: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        let limits = ReportLimits::default();
        Self {
            project_markers: DEFAULT_PROJECT_MARKERS.iter().map(|m| m.to_string()).collect(),
            outside_sample: limits.outside_sample,
            warning_sample: limits.warning_sample,
            node_binary: "node".to_string(),
        }
    }
}

impl AnalyzerConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn limits(&self) -> ReportLimits {
        ReportLimits {
            outside_sample: self.outside_sample,
            warning_sample: self.warning_sample,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.project_markers, vec!["/apps/", "/.svelte-kit/"]);
        assert_eq!(config.limits(), ReportLimits::default());
        assert_eq!(config.node_binary, "node");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AnalyzerConfig::from_toml("warning_sample = 3").unwrap();
        assert_eq!(config.warning_sample, 3);
        assert_eq!(config.outside_sample, 30);
        assert_eq!(config.project_markers.len(), 2);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(AnalyzerConfig::from_toml("outside = 3").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "project_markers = [\"/packages/\"]").unwrap();
        writeln!(file, "node_binary = \"/opt/node/bin/node\"").unwrap();

        let config = AnalyzerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.project_markers, vec!["/packages/"]);
        assert_eq!(config.node_binary, "/opt/node/bin/node");
    }

    #[test]
    fn test_from_missing_file_names_path() {
        let err = AnalyzerConfig::from_file(Path::new("/nonexistent/nftlens.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/nftlens.toml"));
    }
}
