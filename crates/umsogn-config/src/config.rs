//! Configuration types and loading for the umsögn system.
//!
//! The main entry point is [`UmsognConfig`], which represents the contents of
//! `.umsogn/config.yaml`. Configuration is loaded with [`load_config`] and
//! saved with [`save_config`].

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file contained invalid YAML.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// The `.umsogn/` directory was not found.
    #[error("no .umsogn directory found (run 'um init' first)")]
    UmsognDirNotFound,
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// The full umsögn configuration, corresponding to `.umsogn/config.yaml`.
///
/// All fields use `serde` defaults so that a partially-specified YAML file
/// will be deserialized correctly with sensible default values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UmsognConfig {
    /// Data directory override (where the snapshot files live). Relative
    /// paths resolve against the `.umsogn/` directory.
    #[serde(default)]
    pub data: Option<String>,

    /// Output JSON instead of human-readable text.
    #[serde(default)]
    pub json: bool,

    /// Whether opening an empty data directory seeds the sample data set.
    #[serde(default = "default_auto_seed", rename = "auto-seed")]
    pub auto_seed: bool,
}

impl Default for UmsognConfig {
    fn default() -> Self {
        Self {
            data: None,
            json: false,
            auto_seed: default_auto_seed(),
        }
    }
}

fn default_auto_seed() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load configuration from `config.yaml` inside the given `.umsogn/`
/// directory.
///
/// If the file does not exist, a default [`UmsognConfig`] is returned.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
/// or [`ConfigError::ParseError`] if it contains invalid YAML.
pub fn load_config(umsogn_dir: &Path) -> Result<UmsognConfig> {
    let config_path = umsogn_dir.join("config.yaml");

    if !config_path.exists() {
        return Ok(UmsognConfig::default());
    }

    let content = std::fs::read_to_string(&config_path)?;

    // An empty file is valid and yields default config.
    if content.trim().is_empty() {
        return Ok(UmsognConfig::default());
    }

    let config: UmsognConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to `config.yaml` inside the given `.umsogn/` directory.
///
/// The directory is created if it does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] on I/O failure or
/// [`ConfigError::ParseError`] if serialization fails.
pub fn save_config(umsogn_dir: &Path, config: &UmsognConfig) -> Result<()> {
    std::fs::create_dir_all(umsogn_dir)?;

    let config_path = umsogn_dir.join("config.yaml");
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(config_path, yaml)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let cfg = UmsognConfig::default();
        assert!(cfg.data.is_none());
        assert!(!cfg.json);
        assert!(cfg.auto_seed);
    }

    #[test]
    fn test_load_missing_config_returns_default() {
        let dir = PathBuf::from("/nonexistent/path/.umsogn");
        let cfg = load_config(&dir).unwrap();
        assert!(cfg.data.is_none());
        assert!(cfg.auto_seed);
    }

    #[test]
    fn test_roundtrip_config() {
        let dir = tempfile::tempdir().unwrap();
        let umsogn_dir = dir.path().join(".umsogn");

        let cfg = UmsognConfig {
            data: Some("data".to_string()),
            json: true,
            auto_seed: false,
        };

        save_config(&umsogn_dir, &cfg).unwrap();
        let loaded = load_config(&umsogn_dir).unwrap();

        assert_eq!(loaded.data.as_deref(), Some("data"));
        assert!(loaded.json);
        assert!(!loaded.auto_seed);
    }

    #[test]
    fn test_deserialize_partial_yaml() {
        let yaml = "json: true\n";
        let cfg: UmsognConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(cfg.json);
        // Everything else should be default.
        assert!(cfg.data.is_none());
        assert!(cfg.auto_seed);
    }
}
