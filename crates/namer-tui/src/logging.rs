//! File logging. The TUI owns stdout, so tracing output goes to a log file.

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};
use tracing::Level;

const LOG_FILE: &str = "namer.log";

pub fn log_path() -> PathBuf {
    ProjectDirs::from("", "", "namer")
        .map(|dirs| dirs.data_local_dir().join(LOG_FILE))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE))
}

/// Installs the global subscriber. `NAMER_DEBUG` turns on debug output.
pub fn init() -> Result<PathBuf> {
    let path = log_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let level = if std::env::var_os("NAMER_DEBUG").is_some() {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    Ok(path)
}
