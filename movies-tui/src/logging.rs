//! File logging. The terminal belongs to the TUI, so nothing is written to stdout.

use anyhow::{Context, Result};
use std::fs::{create_dir_all, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

const LOG_FILE: &str = "movies-tui.log";
const DEFAULT_FILTER: &str = "info,movies_tui=debug,tmdb=debug";

/// Initialize tracing into `<logs_dir>/movies-tui.log`, truncating the previous run.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_logging(logs_dir: &Path) -> Result<PathBuf> {
    create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let log_file_path = logs_dir.join(LOG_FILE);
    let log_file = File::create(&log_file_path)
        .with_context(|| format!("Failed to open log file {}", log_file_path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .with_filter(filter);

    tracing_subscriber::registry().with(file_layer).try_init()?;

    tracing::info!(path = %log_file_path.display(), "logging initialized");
    Ok(log_file_path)
}
