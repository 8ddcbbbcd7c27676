//! CLI argument parsing for nftlens

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the analysis report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "nftlens")]
#[command(version)]
#[command(
    about = "Inspect what a deployment file trace pulls in for a JavaScript entry",
    long_about = None
)]
pub struct Cli {
    /// Bundle entry file to analyze (e.g. .svelte-kit/vercel-tmp/index.js)
    #[arg(value_name = "ENTRY")]
    pub entry: String,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Replay a recorded trace JSON file instead of running @vercel/nft
    #[arg(long = "trace-json", value_name = "FILE")]
    pub trace_json: Option<PathBuf>,

    /// Node.js executable used to run @vercel/nft
    #[arg(long = "node", value_name = "BIN")]
    pub node: Option<String>,

    /// Load analyzer settings from a TOML file
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
