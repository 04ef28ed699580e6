//! Config document schema.
//!
//! [`DevConfig`] is the typed form of a user-authored dev config file. The
//! shape requirements are deliberately thin: a project prefix and at least
//! one service definition. Service and app entries stay opaque YAML values;
//! the environment factory owns their interpretation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root structure of a dev config document.
///
/// All fields are serde-defaulted so that missing required fields surface
/// through validation (with a path-bearing error) rather than as
/// deserialization failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DevConfig {
    /// Project-wide identifier prefixed onto derived resource names.
    /// Must be non-empty.
    pub project_prefix: String,

    /// Service definitions keyed by service identifier (ports, images, etc.).
    /// Must contain at least one entry.
    pub services: HashMap<String, serde_yaml::Value>,

    /// Application definitions keyed by app identifier.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub apps: HashMap<String, serde_yaml::Value>,

    /// Remaining app-level fields, carried through to the environment
    /// factory untouched.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}
