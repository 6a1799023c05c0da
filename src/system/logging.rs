//! Logging system initialization
//!
//! Builds the global tracing subscriber from the `[logging]` section of the
//! static configuration.

use std::path::Path;

use tracing_appender::{non_blocking::WorkerGuard, rolling};

use crate::config::StaticConfig;
use crate::errors::{ClickrankError, Result};

/// Initialize logging system based on configuration
///
/// Writes to stdout unless `logging.file` is set; with rotation enabled the
/// file is rolled daily and at most `max_backups` files are kept.
///
/// The returned `WorkerGuard` must be kept alive for the duration of the
/// program so buffered log lines are flushed on exit.
///
/// Calling this twice fails because the global subscriber is already set.
pub fn init_logging(config: &StaticConfig) -> Result<WorkerGuard> {
    let log_file = config
        .logging
        .file
        .as_deref()
        .filter(|f| !f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = match log_file {
        Some(log_file) if config.logging.enable_rotation => {
            let path = Path::new(log_file);
            let dir = path.parent().unwrap_or(Path::new("."));
            let prefix = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or("clickrank.log")
                .trim_end_matches(".log")
                .to_string();
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(prefix)
                .filename_suffix("log")
                .max_log_files(config.logging.max_backups as usize)
                .build(dir)
                .map_err(|e| {
                    ClickrankError::file_operation(format!(
                        "Failed to create rolling log appender: {}",
                        e
                    ))
                })?;
            Box::new(appender)
        }
        Some(log_file) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;
            Box::new(file)
        }
        None => Box::new(std::io::stdout()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.logging.level)
        .map_err(|e| ClickrankError::config(format!("Invalid log level: {}", e)))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none());

    let installed = if config.logging.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| ClickrankError::config(format!("Logging already initialized: {}", e)))?;

    Ok(guard)
}
