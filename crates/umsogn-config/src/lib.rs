//! Configuration management for the umsögn system.
//!
//! This crate handles loading and saving `.umsogn/config.yaml` files,
//! discovering `.umsogn/` directories in the filesystem, and providing
//! typed access to configuration values.

pub mod config;
pub mod umsogn_dir;

pub use config::{ConfigError, UmsognConfig, load_config, save_config};
pub use umsogn_dir::{ensure_umsogn_dir, find_umsogn_dir, find_umsogn_dir_or_error};
