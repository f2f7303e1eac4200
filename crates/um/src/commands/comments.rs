//! `um comments` -- list comments with optional filters.

use anyhow::Result;

use umsogn_core::enums::{CommentStatus, CommentType, EnvironmentalCategory};

use crate::cli::CommentsArgs;
use crate::context::RuntimeContext;
use crate::output::{format_comment_detail, format_comment_row, output_json, output_table};

/// Execute the `um comments` command.
pub fn run(ctx: &RuntimeContext, args: &CommentsArgs) -> Result<()> {
    let (store, _) = ctx.open_store()?;

    let status_filter = args.status.as_deref().map(CommentStatus::from);
    let category_filter = args.category.as_deref().map(EnvironmentalCategory::from);
    let type_filter = args.comment_type.as_deref().map(CommentType::from);

    let comments: Vec<_> = store
        .comments()
        .iter()
        .filter(|c| {
            args.project
                .as_deref()
                .is_none_or(|pid| c.project_id == pid)
        })
        .filter(|c| status_filter.as_ref().is_none_or(|s| &c.status == s))
        .filter(|c| {
            category_filter
                .as_ref()
                .is_none_or(|cat| &c.environmental_category == cat)
        })
        .filter(|c| type_filter.as_ref().is_none_or(|t| &c.comment_type == t))
        .collect();

    if ctx.json {
        output_json(&comments);
        return Ok(());
    }

    if comments.is_empty() {
        if !ctx.quiet {
            println!("No comments found.");
        }
        return Ok(());
    }

    if args.long {
        for (i, comment) in comments.iter().enumerate() {
            if i > 0 {
                println!();
                println!("{}", "-".repeat(60));
                println!();
            }
            println!("{}", format_comment_detail(comment));
        }
        return Ok(());
    }

    let headers = &["ID", "PRIORITY", "STATUS", "CATEGORY", "STAKEHOLDER", "CONTENT"];
    let rows: Vec<Vec<String>> = comments.iter().map(|c| format_comment_row(c)).collect();
    output_table(headers, &rows);
    Ok(())
}
