//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The terminal is owned by the UI, so logs are only written when a log file
//! is configured. The filter defaults to `info` and honours `RUST_LOG`.
//!
//! # Log Levels
//!
//! - `info`: vocabulary loading, session start and end
//! - `debug`: session transitions, stale timer tickets, key routing

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "qflash=info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.display().to_string(),
            source,
        })
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber writing to `log_file`.
///
/// Does nothing when `log_file` is `None`.
pub fn init_logging(log_file: Option<&Path>) -> Result<(), LoggingError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    tracing::info!("qflash {} logging to {}", env!("CARGO_PKG_VERSION"), path.display());
    Ok(())
}
