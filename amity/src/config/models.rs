//! Configuration model definitions.
//!
//! This module contains the configuration structures for all Amity components.

use crate::relationships::bounds::{STANDARD_MAXIMUM, STANDARD_MINIMUM};
use crate::relationships::{Bounds, DuplicatePolicy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure for Amity.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AmityConfig {
    /// Limits every friendliness value must stay within
    pub bounds: BoundsConfig,

    /// Store behaviour and persistence location
    pub store: StoreConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AmityConfig {
    /// Validated [`Bounds`] for this configuration
    pub fn bounds(&self) -> crate::Result<Bounds> {
        Bounds::new(self.bounds.minimum, self.bounds.maximum)
    }
}

/// Raw bounds limits, validated when the configuration is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BoundsConfig {
    /// Lowest allowed value
    pub minimum: f64,

    /// Highest allowed value
    pub maximum: f64,
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            minimum: STANDARD_MINIMUM,
            maximum: STANDARD_MAXIMUM,
        }
    }
}

/// Configuration for the relationship store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base directory for persisted stores
    pub data_dir: PathBuf,

    /// File name of the store snapshot (relative to data_dir)
    pub file_name: String,

    /// How inserts under an existing id are handled
    pub duplicate_policy: DuplicatePolicy,
}

impl StoreConfig {
    /// Full path of the store snapshot file
    pub fn path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        let data_dir = directories::ProjectDirs::from("org", "amity", "amity")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./data"));

        Self {
            data_dir,
            file_name: "friends.json".to_string(),
            duplicate_policy: DuplicatePolicy::Reject,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,

    /// Log format
    pub format: LogFormat,

    /// File to log to (if any)
    pub file: Option<PathBuf>,

    /// Whether to log to stdout
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Default,
            file: None,
            stdout: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level
    Trace,

    /// Debug level
    Debug,

    /// Info level
    Info,

    /// Warn level
    Warn,

    /// Error level
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default format
    Default,

    /// JSON format
    Json,

    /// Compact format
    Compact,

    /// Pretty format
    Pretty,
}
