//! Upward config file discovery.
//!
//! The locator walks from a starting directory toward the filesystem root,
//! testing a fixed list of candidate filenames in each directory. It only
//! performs existence checks; reading and parsing the matched file is the
//! loader's job.

use std::path::{Path, PathBuf};

/// Recognized config filenames, in priority order.
///
/// Order only matters as a tiebreak within a single directory: the nearest
/// directory containing any candidate always wins over an ancestor.
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    "dev.config.yml",
    "dev.config.yaml",
    "dev-tools.config.yml",
    "dev-tools.config.yaml",
];

/// Find the nearest dev config file by walking up from `start`.
///
/// Tests each name in [`CONFIG_FILE_NAMES`] against the current directory,
/// then moves to the parent, stopping at the filesystem root.
///
/// # Returns
///
/// The full path of the first match, or `None` if the walk reaches the root
/// without finding one. Absence is a normal result, not an error; a directory
/// the process cannot inspect is treated the same as one without a config
/// file (`Path::is_file` semantics).
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                tracing::debug!("Found dev config at {}", candidate.display());
                return Some(candidate);
            }
        }

        // pop() returns false once current has no parent (filesystem root).
        if !current.pop() {
            return None;
        }
    }
}
