//! `um init` -- initialize a consultation workspace in the current directory.

use std::env;
use std::fs;

use anyhow::{Context, Result, bail};

use umsogn_config::{UmsognConfig, ensure_umsogn_dir, save_config};
use umsogn_storage::{FeedbackStore, snapshot};

use crate::cli::InitArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `um init` command.
pub fn run(ctx: &RuntimeContext, args: &InitArgs) -> Result<()> {
    let cwd = env::current_dir().context("failed to get current directory")?;
    let umsogn_dir = cwd.join(".umsogn");
    let data_dir = umsogn_dir.join("data");

    // Safety guard: check for existing data unless --force
    if snapshot::any_slot_exists(&data_dir) {
        if !args.force {
            bail!(
                "Found existing data in {}\n\n\
                This workspace is already initialized.\n\n\
                To use the existing data:\n  \
                Just run um commands normally (e.g., um comments)\n\n\
                Or use --force to re-initialize (data loss warning).",
                data_dir.display()
            );
        }
        fs::remove_dir_all(&data_dir)
            .with_context(|| format!("failed to clear data directory: {}", data_dir.display()))?;
    }

    let umsogn_dir = ensure_umsogn_dir(&umsogn_dir)?;

    // Write a default config.yaml if none exists yet.
    if !umsogn_dir.join("config.yaml").exists() {
        save_config(&umsogn_dir, &UmsognConfig::default())?;
    }

    let (store, _) = if args.empty {
        // Materialize an empty snapshot so later opens do not seed.
        let (store, outcome) = FeedbackStore::load(&data_dir)?;
        store.persist()?;
        (store, outcome)
    } else {
        FeedbackStore::open(&data_dir)?
    };

    if ctx.json {
        output_json(&serde_json::json!({
            "dataDir": data_dir.display().to_string(),
            "seeded": !args.empty,
            "projects": store.projects().len(),
            "comments": store.comments().len(),
            "stakeholders": store.stakeholders().len(),
        }));
    } else if !ctx.quiet {
        println!();
        println!("um initialized successfully!");
        println!();
        println!("  Data directory: {}", data_dir.display());
        if args.empty {
            println!("  Started with empty collections.");
        } else {
            println!(
                "  Seeded {} projects, {} comments, {} stakeholders.",
                store.projects().len(),
                store.comments().len(),
                store.stakeholders().len()
            );
        }
        println!();
        println!("Run `um comments` to see the consultation feedback.");
        println!();
    }

    Ok(())
}
