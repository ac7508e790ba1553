//! File-backed logging for the presenter.
//!
//! The terminal belongs to the TUI while a deck is shown, so records are
//! appended to a log file instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target, WriteStyle};

use crate::app_dirs;

/// Environment variable holding the `env_logger` filter.
pub const FILTER_ENV: &str = "SLIDR_LOG";
const DEFAULT_FILTER: &str = "info";
const LOG_FILE_NAME: &str = "slidr.log";

/// Where log records go when no file is configured.
pub fn default_log_file() -> Result<PathBuf> {
    Ok(app_dirs::get_cache_dir()?.join(LOG_FILE_NAME))
}

/// Install the global logger writing to `path`, or to the default log file.
///
/// Returns the file that receives the records.
pub fn initialize(path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_log_file()?,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Builder::from_env(Env::new().filter_or(FILTER_ENV, DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .try_init()
        .context("a logger is already installed")?;

    Ok(path)
}
