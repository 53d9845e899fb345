//! Utility functions for gallifrey

pub mod encoding;

use crate::signing::defaults::KEY_DIR_ENV;
use std::env;
use std::path::PathBuf;

/// Check if an environment variable is present and non-empty
pub fn is_env_set(key: &str) -> bool {
    env::var_os(key).is_some_and(|v| !v.is_empty())
}

/// Resolve the directory holding the key files
///
/// Order: explicit value (e.g. `--key-dir`), then `GALLIFREY_KEY_DIR`,
/// then the current working directory.
pub fn resolve_key_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }

    if let Some(dir) = env::var_os(KEY_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }

    PathBuf::from(".")
}
