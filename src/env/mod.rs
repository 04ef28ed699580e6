//! Dev environment caching.
//!
//! [`EnvStore`] holds the single derived environment for a project and
//! exposes the three operations other tooling needs:
//! - `load` — resolve, validate, and cache (or return the cached value)
//! - `get` — synchronous cache read, no filesystem work
//! - `clear` — explicit invalidation
//!
//! The store is an owned value, not a process global: construct one where
//! the program wires its state and pass it to consumers.

pub mod store;

pub use store::{EnvStore, LoadOptions};
