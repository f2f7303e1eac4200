//! Discovery and management of the `.umsogn/` directory.
//!
//! The `.umsogn/` directory is the root of a consultation workspace's
//! metadata. This module provides functions to find it by walking up the
//! directory tree, and to create it when initializing a new workspace.

use crate::config::ConfigError;
use std::path::{Path, PathBuf};

/// The name of the umsögn metadata directory.
const UMSOGN_DIR_NAME: &str = ".umsogn";

/// The name of the environment variable that can override the umsögn
/// directory.
const UMSOGN_DIR_ENV: &str = "UMSOGN_DIR";

/// Walk up the directory tree from `start` looking for a `.umsogn/`
/// directory.
///
/// Returns the path to the `.umsogn/` directory if found, or `None` if the
/// filesystem root is reached without finding one. The `UMSOGN_DIR`
/// environment variable is checked first (highest priority).
pub fn find_umsogn_dir(start: &Path) -> Option<PathBuf> {
    // 1. Check UMSOGN_DIR environment variable (highest priority).
    if let Ok(env_dir) = std::env::var(UMSOGN_DIR_ENV) {
        let env_path = PathBuf::from(&env_dir);
        if env_path.is_dir() {
            return Some(env_path);
        }
    }

    // 2. Walk up from `start` looking for .umsogn/.
    let start = match start.canonicalize() {
        Ok(p) => p,
        Err(_) => return None,
    };

    let mut current = start.as_path();
    loop {
        let candidate = current.join(UMSOGN_DIR_NAME);
        if candidate.is_dir() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent;
            }
            _ => break, // Reached filesystem root.
        }
    }

    None
}

/// Walk up the directory tree looking for `.umsogn/`, returning an error if
/// not found.
///
/// # Errors
///
/// Returns [`ConfigError::UmsognDirNotFound`] if no `.umsogn/` directory is
/// found.
pub fn find_umsogn_dir_or_error(start: &Path) -> Result<PathBuf, ConfigError> {
    find_umsogn_dir(start).ok_or(ConfigError::UmsognDirNotFound)
}

/// Ensure a `.umsogn/` directory exists at the given path.
///
/// If `path` itself is not called `.umsogn`, the function creates a
/// `.umsogn/` subdirectory under it. The directory (and any necessary
/// parents) is created if it does not exist.
///
/// Returns the path to the `.umsogn/` directory.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if directory creation fails.
pub fn ensure_umsogn_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    let umsogn_dir = if path.ends_with(UMSOGN_DIR_NAME) {
        path.to_path_buf()
    } else {
        path.join(UMSOGN_DIR_NAME)
    };

    std::fs::create_dir_all(&umsogn_dir)?;
    Ok(umsogn_dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_umsogn_dir_in_temp() {
        let dir = tempfile::tempdir().unwrap();
        let umsogn = dir.path().join(".umsogn");
        std::fs::create_dir(&umsogn).unwrap();

        let found = find_umsogn_dir(dir.path());
        assert!(found.is_some());
        // Canonicalize both for comparison (handles symlinks, /tmp vs /private/tmp).
        let found = found.unwrap().canonicalize().unwrap();
        let expected = umsogn.canonicalize().unwrap();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_find_umsogn_dir_in_child() {
        let dir = tempfile::tempdir().unwrap();
        let umsogn = dir.path().join(".umsogn");
        std::fs::create_dir(&umsogn).unwrap();

        let child = dir.path().join("src").join("deep");
        std::fs::create_dir_all(&child).unwrap();

        let found = find_umsogn_dir(&child);
        assert!(found.is_some());
        let found = found.unwrap().canonicalize().unwrap();
        let expected = umsogn.canonicalize().unwrap();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_find_umsogn_dir_or_error() {
        let dir = tempfile::tempdir().unwrap();
        let umsogn = dir.path().join(".umsogn");
        std::fs::create_dir(&umsogn).unwrap();

        let result = find_umsogn_dir_or_error(dir.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_ensure_umsogn_dir_creates() {
        let dir = tempfile::tempdir().unwrap();
        let result = ensure_umsogn_dir(dir.path()).unwrap();
        assert!(result.is_dir());
        assert!(result.ends_with(".umsogn"));
    }

    #[test]
    fn test_ensure_umsogn_dir_already_named() {
        let dir = tempfile::tempdir().unwrap();
        let umsogn = dir.path().join(".umsogn");
        let result = ensure_umsogn_dir(&umsogn).unwrap();
        assert!(result.is_dir());
        assert_eq!(result, umsogn);
    }

    #[test]
    fn test_ensure_umsogn_dir_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let result1 = ensure_umsogn_dir(dir.path()).unwrap();
        let result2 = ensure_umsogn_dir(dir.path()).unwrap();
        assert_eq!(result1, result2);
    }
}
