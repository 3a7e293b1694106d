//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use crate::relationships::DuplicatePolicy;
use std::path::{Path, PathBuf};

/// Builder for creating AmityConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: AmityConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: AmityConfig::default(),
        }
    }

    /// Set the friendliness bounds. Checked by [`ConfigBuilder::build`].
    pub fn with_bounds(mut self, minimum: f64, maximum: f64) -> Self {
        self.config.bounds = BoundsConfig { minimum, maximum };
        self
    }

    /// Set the base data directory.
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.store.data_dir = path.as_ref().to_path_buf();
        self
    }

    /// Set the store snapshot file name.
    pub fn with_store_file(mut self, file_name: impl Into<String>) -> Self {
        self.config.store.file_name = file_name.into();
        self
    }

    /// Set how duplicate ids are handled.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.config.store.duplicate_policy = policy;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Configure logging to a file.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use default logging configuration (console output at Info level)
    pub fn with_default_logging(mut self) -> Self {
        self.config.logging.level = LogLevel::Info;
        self.config.logging.format = LogFormat::Json;
        self.config.logging.file = None; // Console only by default

        self
    }

    /// Create a configuration for development.
    ///
    /// This creates a configuration suitable for development with:
    /// - A local `./data` directory
    /// - Debug-level pretty logging
    pub fn development() -> Self {
        Self::new()
            .with_data_dir(PathBuf::from("./data"))
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Pretty)
    }

    /// Create a configuration for testing.
    ///
    /// This creates a configuration suitable for automated testing with:
    /// - Test-specific data directory
    /// - Overwriting duplicates so fixtures can be re-applied
    pub fn testing() -> Self {
        Self::development()
            .with_data_dir(PathBuf::from("./test_data"))
            .with_duplicate_policy(DuplicatePolicy::Overwrite)
    }

    /// Create a production-ready configuration.
    ///
    /// This creates a configuration suitable for production use with:
    /// - The platform data directory
    /// - Duplicate ids rejected
    /// - JSON logging at Info level
    pub fn production() -> Self {
        Self::new()
            .with_duplicate_policy(DuplicatePolicy::Reject)
            .with_default_logging()
    }

    /// Build the configuration, validating it in the process.
    pub fn build(self) -> Result<AmityConfig> {
        validation::validate_config(&self.config)?;

        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
