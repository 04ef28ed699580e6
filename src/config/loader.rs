//! Config file loading and shape validation.
//!
//! The loader is the narrow boundary between user-authored config files and
//! the rest of the crate: it reads the file the locator matched, parses it,
//! and validates the required shape so downstream code only ever sees a
//! well-formed [`DevConfig`].

use crate::config::schema::DevConfig;
use crate::error::{DevEnvError, Result};
use std::fs;
use std::path::Path;

/// Load and validate the dev config file at `path`.
///
/// # Errors
///
/// Returns `ConfigParse` if the file is not valid YAML or does not
/// deserialize into the config shape.
/// Returns `InvalidConfig` if the document is empty or fails the
/// required-field checks.
pub fn load_dev_config(path: &Path) -> Result<DevConfig> {
    let content = fs::read_to_string(path)?;

    let raw: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| DevEnvError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    // An empty file parses as null; report it as a shape problem, not a
    // parse failure, so the message points at the missing document.
    if raw.is_null() {
        return Err(DevEnvError::InvalidConfig {
            path: path.to_path_buf(),
            message: "file contains no configuration document".to_string(),
        });
    }

    let config: DevConfig =
        serde_yaml::from_value(raw).map_err(|e| DevEnvError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_dev_config(&config, path)?;

    Ok(config)
}

/// Check the required shape of a parsed config document.
///
/// # Errors
///
/// Returns `InvalidConfig` naming `path` when `project_prefix` is empty or
/// `services` defines no entries.
pub fn validate_dev_config(config: &DevConfig, path: &Path) -> Result<()> {
    if config.project_prefix.trim().is_empty() {
        return Err(DevEnvError::InvalidConfig {
            path: path.to_path_buf(),
            message: "`project_prefix` must be a non-empty string".to_string(),
        });
    }

    if config.services.is_empty() {
        return Err(DevEnvError::InvalidConfig {
            path: path.to_path_buf(),
            message: "`services` must define at least one service".to_string(),
        });
    }

    Ok(())
}
