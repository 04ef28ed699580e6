//! Denvy - dev environment configuration discovery and caching.
//!
//! Denvy resolves a project's development-environment configuration: it walks
//! upward from a starting directory looking for a recognized config file,
//! validates its shape, derives an environment value through a caller-supplied
//! factory, and caches the result for cheap synchronous reads.
//!
//! # Modules
//!
//! - [`config`] - Config file discovery, loading, and validation
//! - [`env`] - The owned environment cache ([`EnvStore`])
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use denvy::{EnvStore, LoadOptions};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join("dev.config.yml"),
//!     "project_prefix: myapp\nservices:\n  web:\n    port: 3000\n",
//! )
//! .unwrap();
//!
//! // The factory owns the shape of the derived environment.
//! let store = EnvStore::new(|config| config.services.len());
//!
//! let env = store
//!     .load(&LoadOptions::new().with_cwd(temp.path()))
//!     .unwrap();
//! assert_eq!(*env, 1);
//!
//! // Later reads are pure cache hits.
//! assert_eq!(*store.get().unwrap(), 1);
//! ```

pub mod config;
pub mod env;
pub mod error;

pub use config::{find_config_file, load_dev_config, DevConfig, CONFIG_FILE_NAMES};
pub use env::{EnvStore, LoadOptions};
pub use error::{DevEnvError, Result};
