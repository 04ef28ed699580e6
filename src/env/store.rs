//! Owned cache slot for the derived dev environment.

use crate::config::loader::load_dev_config;
use crate::config::locator::find_config_file;
use crate::config::schema::DevConfig;
use crate::error::{DevEnvError, Result};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

/// Options for [`EnvStore::load`].
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Directory the upward config search starts from.
    /// Defaults to the process's current working directory.
    pub cwd: Option<PathBuf>,

    /// Re-run discovery and loading even when a cached environment exists.
    pub reload: bool,
}

impl LoadOptions {
    /// Default options: search from the process cwd, reuse the cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the config search from `dir` instead of the process cwd.
    pub fn with_cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Force a fresh discovery and load.
    pub fn with_reload(mut self) -> Self {
        self.reload = true;
        self
    }
}

/// Cache for a single derived dev environment.
///
/// The store owns one slot holding at most one environment value. The first
/// [`load`](Self::load) discovers and validates the project's config file and
/// runs the supplied factory; later loads return the cached value until a
/// caller passes `reload` or calls [`clear`](Self::clear). The slot never
/// changes implicitly — filesystem edits after a load are not observed.
///
/// The environment type `E` is opaque here: the factory given to
/// [`new`](Self::new) owns its shape (resolved ports, URLs, app settings).
///
/// Construct one store per process (or per test) and share it by reference;
/// there is no hidden global.
pub struct EnvStore<E> {
    factory: Box<dyn Fn(DevConfig) -> E + Send + Sync>,
    slot: Mutex<Option<Arc<E>>>,
}

impl<E> EnvStore<E> {
    /// Create an empty store around an environment factory.
    ///
    /// The factory receives the validated config and produces the derived
    /// environment. It runs once per (re)load, never on cache hits.
    pub fn new(factory: impl Fn(DevConfig) -> E + Send + Sync + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            slot: Mutex::new(None),
        }
    }

    /// Load the dev environment, reusing the cached instance when present.
    ///
    /// The slot lock is held across the whole load, so concurrent first
    /// loads converge on one directory walk and one factory run; late
    /// arrivals observe the freshly filled cache.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when no recognized config file exists on the
    /// ancestor chain, `ConfigParse`/`InvalidConfig` from the loader, and
    /// `Io` if the process cwd cannot be resolved. A failed load leaves a
    /// pre-existing cached environment untouched.
    pub fn load(&self, options: &LoadOptions) -> Result<Arc<E>> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(env) = slot.as_ref() {
            if !options.reload {
                return Ok(Arc::clone(env));
            }
        }

        let start = match &options.cwd {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let path =
            find_config_file(&start).ok_or(DevEnvError::ConfigNotFound { start })?;

        tracing::debug!("Loading dev environment from {}", path.display());
        let config = load_dev_config(&path)?;
        let env = Arc::new((self.factory)(config));

        *slot = Some(Arc::clone(&env));
        Ok(env)
    }

    /// Return the cached environment without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns `NotLoaded` when no successful load has populated the slot
    /// (or it has been cleared since).
    pub fn get(&self) -> Result<Arc<E>> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
            .ok_or(DevEnvError::NotLoaded)
    }

    /// Unconditionally empty the cache slot.
    ///
    /// The next `load` runs discovery again; `get` fails until then.
    pub fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl<E> std::fmt::Debug for EnvStore<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let loaded = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some();
        f.debug_struct("EnvStore").field("loaded", &loaded).finish()
    }
}
