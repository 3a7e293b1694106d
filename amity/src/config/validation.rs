//! Configuration validation utilities.
//!
//! This module provides validation functions for configuration values.

use super::ConfigError;
use super::models::*;
use crate::relationships::Bounds;

/// Validate the entire configuration.
pub fn validate_config(config: &AmityConfig) -> Result<(), ConfigError> {
    validate_bounds_config(&config.bounds)?;
    validate_store_config(&config.store)?;

    Ok(())
}

/// Bounds must satisfy the same rules as [`Bounds::new`].
fn validate_bounds_config(config: &BoundsConfig) -> Result<(), ConfigError> {
    Bounds::new(config.minimum, config.maximum)
        .map(|_| ())
        .map_err(|e| ConfigError::ValidationError(e.to_string()))
}

fn validate_store_config(config: &StoreConfig) -> Result<(), ConfigError> {
    if config.data_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Data directory cannot be empty".to_string(),
        ));
    }

    if config.file_name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Store file name cannot be empty".to_string(),
        ));
    }

    Ok(())
}
