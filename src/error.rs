//! Error types for dev environment resolution.
//!
//! This module defines [`DevEnvError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DevEnvError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DevEnvError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users
//! - Every error is terminal to the calling operation: no retries, no
//!   fallback search paths, no partial results

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dev environment resolution.
#[derive(Debug, Error)]
pub enum DevEnvError {
    /// No recognized config file exists anywhere on the ancestor chain.
    #[error(
        "No dev config found searching upward from {start}. \
         Create a dev.config.yml at your project root with `project_prefix` \
         and `services` entries."
    )]
    ConfigNotFound { start: PathBuf },

    /// Config file exists but could not be parsed into a config document.
    #[error("Failed to parse dev config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Config document parsed but fails shape validation.
    #[error("Invalid dev config at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// Synchronous accessor called before any successful load.
    #[error(
        "Dev environment not loaded. Call `EnvStore::load` once before \
         reading the environment synchronously."
    )]
    NotLoaded,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for dev environment operations.
pub type Result<T> = std::result::Result<T, DevEnvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_names_start_and_guides_creation() {
        let err = DevEnvError::ConfigNotFound {
            start: PathBuf::from("/projects/app/src"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/projects/app/src"));
        assert!(msg.contains("dev.config.yml"));
        assert!(msg.contains("project_prefix"));
        assert!(msg.contains("services"));
    }

    #[test]
    fn config_parse_displays_path_and_message() {
        let err = DevEnvError::ConfigParse {
            path: PathBuf::from("/app/dev.config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/app/dev.config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn invalid_config_displays_path_and_message() {
        let err = DevEnvError::InvalidConfig {
            path: PathBuf::from("/app/dev.config.yml"),
            message: "`services` must define at least one service".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/app/dev.config.yml"));
        assert!(msg.contains("services"));
    }

    #[test]
    fn not_loaded_mentions_load_operation() {
        let err = DevEnvError::NotLoaded;
        assert!(err.to_string().contains("load"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "dir missing");
        let err: DevEnvError = io_err.into();
        assert!(matches!(err, DevEnvError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(DevEnvError::NotLoaded)
        }
        assert!(returns_error().is_err());
    }
}
