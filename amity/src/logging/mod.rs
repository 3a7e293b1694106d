//! Structured logging infrastructure for Amity.
//!
//! This module provides a configurable logging system based on the tracing crate,
//! supporting different output formats, log levels and an optional log file.

#[cfg(test)]
mod tests;

use crate::config::{LogFormat, LogLevel, LoggingConfig};
use std::path::Path;
use std::sync::OnceLock;
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};

/// Keeps the file writer flushing for the life of the process
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Error type for logging operations
#[derive(Debug)]
pub enum LogError {
    /// IO error occurred
    IoError(std::io::Error),

    /// Error parsing log level
    InvalidLogLevel(String),

    /// Error in subscriber setup
    SubscriberError(Box<dyn std::error::Error + Send + Sync>),
}

impl From<std::io::Error> for LogError {
    fn from(err: std::io::Error) -> Self {
        LogError::IoError(err)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for LogError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        LogError::SubscriberError(err)
    }
}

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, LogError>;

/// Initialize the logging system with the given configuration.
///
/// Calling this again after a subscriber is installed is a no-op.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = log_level_to_level(&config.level);

    let result = match config.format {
        LogFormat::Json => init_json_logging(level, config),
        LogFormat::Compact => init_compact_logging(level, config),
        LogFormat::Pretty => init_pretty_logging(level, config),
        LogFormat::Default => init_default_logging(level, config),
    };

    // If the error is "already set", ignore it
    if let Err(LogError::SubscriberError(ref e)) = result
        && (e.to_string().contains("SetGlobalDefaultError")
            || e.to_string().contains("global default trace dispatcher has already been set"))
    {
        return Ok(());
    }

    result
}

/// Initialize logging with JSON formatting
fn init_json_logging(level: Level, config: &LoggingConfig) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_target(true)
        .with_line_number(true)
        .with_thread_ids(true);

    match file_writer(config)? {
        Some(writer) => subscriber.with_writer(writer).try_init()?,
        None if config.stdout => subscriber.try_init()?,
        None => {}
    }

    Ok(())
}

/// Initialize logging with compact formatting
fn init_compact_logging(level: Level, config: &LoggingConfig) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_target(true)
        .with_line_number(true);

    match file_writer(config)? {
        Some(writer) => subscriber.with_writer(writer).try_init()?,
        None if config.stdout => subscriber.try_init()?,
        None => {}
    }

    Ok(())
}

/// Initialize logging with pretty formatting
fn init_pretty_logging(level: Level, config: &LoggingConfig) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(level)
        .with_target(true)
        .with_line_number(true)
        .with_thread_ids(true);

    match file_writer(config)? {
        Some(writer) => subscriber.with_writer(writer).try_init()?,
        None if config.stdout => subscriber.try_init()?,
        None => {}
    }

    Ok(())
}

/// Initialize logging with the standard full formatter
fn init_default_logging(level: Level, config: &LoggingConfig) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true);

    match file_writer(config)? {
        Some(writer) => subscriber.with_writer(writer).try_init()?,
        None if config.stdout => subscriber.try_init()?,
        None => {}
    }

    Ok(())
}

/// Non-blocking writer for the configured log file, if any.
///
/// A configured file takes precedence over stdout.
fn file_writer(config: &LoggingConfig) -> Result<Option<NonBlocking>> {
    let Some(path) = &config.file else {
        return Ok(None);
    };

    let (writer, guard) = create_non_blocking_file(path)?;
    if FILE_GUARD.set(guard).is_err() {
        tracing::warn!("Log file writer already initialized; keeping the first one");
    }
    Ok(Some(writer))
}

/// Create a non-blocking file writer.
fn create_non_blocking_file(path: impl AsRef<Path>) -> Result<(NonBlocking, WorkerGuard)> {
    let path = path.as_ref();

    // Ensure the directory exists
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file_appender = tracing_appender::rolling::never(
        path.parent().unwrap_or_else(|| Path::new(".")),
        path.file_name().unwrap_or_default(),
    );

    Ok(tracing_appender::non_blocking(file_appender))
}

/// Parse a log level string into a LogLevel enum.
pub fn parse_log_level(level: &str) -> Result<LogLevel> {
    level.parse::<LogLevel>().map_err(LogError::InvalidLogLevel)
}

/// Convert a LogLevel to the corresponding tracing::Level.
pub fn log_level_to_level(level: &LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// Convert a tracing::Level to a LogLevel enum.
pub fn level_to_log_level(level: Level) -> LogLevel {
    match level {
        Level::TRACE => LogLevel::Trace,
        Level::DEBUG => LogLevel::Debug,
        Level::INFO => LogLevel::Info,
        Level::WARN => LogLevel::Warn,
        Level::ERROR => LogLevel::Error,
    }
}

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::IoError(e) => write!(f, "IO error: {}", e),
            LogError::SubscriberError(e) => write!(f, "Subscriber error: {}", e),
            LogError::InvalidLogLevel(s) => write!(f, "Invalid log level: {}", s),
        }
    }
}

impl std::error::Error for LogError {}
