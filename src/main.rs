mod classify;
mod config;
mod discover;
mod error;
mod report;
mod scan;

use clap::Parser;
use config::FramestatConfig;
use error::ScanError;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Extract per-app video frame processing percentiles from performance logs.
///
/// Prints one CSV row per percentile line:
/// width,height,app,p10,p50,p75,p90,p95,p99,file
#[derive(Parser, Debug)]
#[command(name = "framestat", version, about)]
pub struct Cli {
    /// Log directory or glob pattern (default: from config, else `*.txt`)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the resolved pattern and matched files, don't scan
    #[arg(long)]
    dry_run: bool,

    /// Extra logging (per-file row counts)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .init();
}

fn execute(cli: &Cli) -> Result<(), ScanError> {
    let config = match &cli.config {
        Some(path) => FramestatConfig::load(path, true)?,
        None => FramestatConfig::load(Path::new(config::DEFAULT_CONFIG_FILE), false)?,
    };

    let input = config.input_pattern(cli.input.as_deref());
    let pattern = discover::resolve_pattern(&input);
    let files = discover::discover(&pattern)?;
    tracing::debug!(%pattern, files = files.len(), "resolved input files");

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());

    if cli.dry_run {
        writeln!(out, "pattern: {pattern}").map_err(ScanError::Write)?;
        for path in &files {
            writeln!(out, "{}", path.display()).map_err(ScanError::Write)?;
        }
        out.flush().map_err(ScanError::Write)?;
        return Ok(());
    }

    let summary = report::run(&files, &mut out)?;
    tracing::info!(
        files = summary.files_scanned,
        rows = summary.rows_emitted,
        "scan complete"
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);
    tracing::debug!(?cli, "parsed CLI arguments");

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "framestat failed");
            ExitCode::FAILURE
        }
    }
}
