//! `um topics` -- group a project's comments by environmental category.

use anyhow::{Result, bail};

use crate::cli::TopicsArgs;
use crate::context::RuntimeContext;
use crate::output::{format_comment_compact, output_json};

/// Execute the `um topics` command.
pub fn run(ctx: &RuntimeContext, args: &TopicsArgs) -> Result<()> {
    let (store, _) = ctx.open_store()?;

    if store.project(&args.project).is_none() {
        bail!("project not found: {}", args.project);
    }

    let groups = store.comments_by_topic(&args.project);

    if ctx.json {
        output_json(&groups);
        return Ok(());
    }

    if groups.is_empty() {
        if !ctx.quiet {
            println!("No comments or mitigation strategies for {}.", args.project);
        }
        return Ok(());
    }

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!(
            "{} ({} comments, {} strategies)",
            group.category,
            group.comments.len(),
            group.mitigation_strategies.len()
        );
        for comment in &group.comments {
            println!("  {}", format_comment_compact(comment));
        }
        for strategy in &group.mitigation_strategies {
            println!("  [{}] {}: {}", strategy.status, strategy.id, strategy.title);
        }
    }
    Ok(())
}
