//! Config discovery, loading, and validation.
//!
//! This module covers everything between a starting directory and a
//! validated config document:
//! - Upward filename search in [`locator`]
//! - Schema definitions in [`schema`]
//! - File loading and shape validation in [`loader`]
//!
//! # Recognized Filenames
//!
//! The locator tests these names in each directory, in priority order:
//! 1. `dev.config.yml`
//! 2. `dev.config.yaml`
//! 3. `dev-tools.config.yml`
//! 4. `dev-tools.config.yaml`
//!
//! The nearest directory containing any of them wins; the list order only
//! breaks ties within a single directory.

pub mod loader;
pub mod locator;
pub mod schema;

// Locator re-exports
pub use locator::{find_config_file, CONFIG_FILE_NAMES};

// Loader re-exports
pub use loader::{load_dev_config, validate_dev_config};

// Schema re-exports
pub use schema::DevConfig;
