use anyhow::{Context, Result};
use clap::Parser;
use nftlens::analyzer::Analyzer;
use nftlens::cli::{Cli, OutputFormat};
use nftlens::config::AnalyzerConfig;
use nftlens::error::{AnalyzeError, EXIT_TRACE_FAILURE};
use nftlens::json_output::JsonReport;
use nftlens::node_tracer::NodeFileTracer;
use nftlens::paths::resolve_entry;
use nftlens::recorded::RecordedTracer;
use nftlens::trace::TracerBackend;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Defaults, then the optional config file, then CLI overrides
fn load_config(args: &Cli) -> Result<AnalyzerConfig, AnalyzeError> {
    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::from_file(path)
            .map_err(|e| AnalyzeError::Config(format!("{e:#}")))?,
        None => AnalyzerConfig::default(),
    };
    if let Some(node) = &args.node {
        config.node_binary = node.clone();
    }
    Ok(config)
}

fn select_tracer(args: &Cli, config: &AnalyzerConfig) -> TracerBackend {
    match &args.trace_json {
        Some(path) => TracerBackend::Recorded(RecordedTracer::new(path)),
        None => TracerBackend::Node(NodeFileTracer::new(config.node_binary.clone())),
    }
}

fn run(args: Cli) -> Result<()> {
    let config = load_config(&args)?;
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let entry = resolve_entry(&args.entry, &cwd)?;
    if !entry.exists() {
        tracing::warn!(entry = %entry.display(), "entry file does not exist; the tracer will likely fail");
    }

    let limits = config.limits();
    let analyzer = Analyzer::new(select_tracer(&args, &config), config);

    // One suspension point: the tracer call
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;
    let report = runtime.block_on(analyzer.analyze(&entry))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Text => report
            .write_text(&mut out, limits)
            .context("Failed to write report")?,
        OutputFormat::Json => JsonReport::new(&report)
            .write(&mut out)
            .context("Failed to write JSON report")?,
    }
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.debug);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<AnalyzeError>()
                .map_or(EXIT_TRACE_FAILURE, AnalyzeError::exit_code);
            eprintln!("Error: {err:#}");
            ExitCode::from(code)
        }
    }
}
