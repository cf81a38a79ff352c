//! kintai - work-hours summaries from chat start/end markers.

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use kintai_cli::{config::Config, logging, run, source::ExportFileSource};
use std::path::PathBuf;

use logging::{LogConfig, LogFormat};

/// Work-hours tracker driven by start/end chat markers.
#[derive(Parser, Debug)]
#[command(name = "kintai")]
#[command(about = "Summarize worked hours per day from chat start/end markers")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the JSONL export file from config
    #[arg(short, long, value_name = "FILE")]
    source: Option<PathBuf>,

    /// Override the output data directory from config
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging (INFO level for all targets)
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Quiet mode (WARN and ERROR only)
    #[arg(short, long)]
    quiet: bool,

    /// Set log level for specific targets (e.g., "summary=debug").
    /// Can be specified multiple times. Targets are prefixed with "kintai::"
    /// automatically.
    #[arg(long = "log", value_name = "TARGET=LEVEL")]
    log_overrides: Vec<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", default_value = "text")]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_cli(
        cli.verbose,
        cli.debug,
        cli.quiet,
        cli.log_overrides,
        cli.log_format,
    );
    logging::init(&log_config);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Apply CLI overrides
    if let Some(source) = cli.source {
        config.source_path = source;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    tracing::info!(
        target: "kintai::startup",
        "source: {}, data dir: {}",
        config.source_path.display(),
        config.data_dir.display()
    );

    let offset = config.marker_config()?.utc_offset();
    let now = Utc::now().with_timezone(&offset);

    let source = ExportFileSource::new(&config.source_path);
    run::run(&config, &source, now)?;

    Ok(())
}
