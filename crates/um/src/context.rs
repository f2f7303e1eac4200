//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds the state a command handler needs: the
//! resolved data directory, global output flags, and the seeding policy from
//! configuration.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use umsogn_config::{UmsognConfig, find_umsogn_dir, load_config};
use umsogn_storage::{FeedbackStore, LoadOutcome};

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Explicit data directory (from `--data` or `UM_DATA`).
    pub data_path: Option<PathBuf>,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

/// A resolved data directory plus the seeding policy that applies to it.
#[derive(Debug)]
pub struct ResolvedData {
    /// Where the snapshot files live.
    pub data_dir: PathBuf,

    /// Whether opening an empty directory seeds the sample data set.
    pub auto_seed: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// When `--json` is not passed and the command runs inside a discovered
    /// `.umsogn/` workspace, the config `json` key sets the default.
    pub fn from_global_args(global: &GlobalArgs) -> Self {
        let mut json = global.json;
        if !json && global.data.is_none() {
            if let Some(config) = discovered_config() {
                json = config.json;
            }
        }
        Self {
            data_path: global.data.as_ref().map(PathBuf::from),
            json,
            verbose: global.verbose,
            quiet: global.quiet,
        }
    }

    /// Resolves the data directory.
    ///
    /// Priority: `--data` / `UM_DATA` (always seeds) > `.umsogn/` discovery
    /// walking up from the current directory, honoring the `data` and
    /// `auto-seed` keys in its `config.yaml`.
    pub fn resolve_data(&self) -> Result<ResolvedData> {
        if let Some(ref path) = self.data_path {
            return Ok(ResolvedData {
                data_dir: path.clone(),
                auto_seed: true,
            });
        }

        let cwd = env::current_dir().context("failed to get current directory")?;
        let umsogn_dir = find_umsogn_dir(&cwd)
            .context("no .umsogn directory found. Run 'um init' to create one.")?;
        tracing::debug!("using workspace at {}", umsogn_dir.display());
        let config = load_config(&umsogn_dir)?;

        let data_dir = match config.data {
            Some(ref data) => umsogn_dir.join(data),
            None => umsogn_dir.join("data"),
        };
        Ok(ResolvedData {
            data_dir,
            auto_seed: config.auto_seed,
        })
    }

    /// Opens the feedback store for this invocation.
    ///
    /// Seeds the sample data set on first use unless configuration disables
    /// it.
    pub fn open_store(&self) -> Result<(FeedbackStore, LoadOutcome)> {
        let resolved = self.resolve_data()?;
        let result = if resolved.auto_seed {
            FeedbackStore::open(&resolved.data_dir)
        } else {
            FeedbackStore::load(&resolved.data_dir)
        };
        result.with_context(|| {
            format!(
                "failed to open data directory: {}",
                resolved.data_dir.display()
            )
        })
    }
}

/// Config from the nearest discovered `.umsogn/` directory, if any.
///
/// Discovery and parse failures are ignored here; the resolve path reports
/// them with context.
fn discovered_config() -> Option<UmsognConfig> {
    let cwd = env::current_dir().ok()?;
    let umsogn_dir = find_umsogn_dir(&cwd)?;
    load_config(&umsogn_dir).ok()
}
