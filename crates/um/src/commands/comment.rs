//! `um comment add` / `um comment update` -- comment mutations.

use anyhow::{Result, bail};
use chrono::Utc;

use umsogn_core::comment::{CommentDraft, CommentPatch};
use umsogn_core::enums::{
    CommentSource, CommentStatus, CommentType, EnvironmentalCategory, Priority, StakeholderType,
};

use crate::cli::{CommentAddArgs, CommentUpdateArgs};
use crate::context::RuntimeContext;
use crate::output::{format_comment_compact, output_json};

/// Execute the `um comment add` command.
pub fn run_add(ctx: &RuntimeContext, args: &CommentAddArgs) -> Result<()> {
    let (mut store, _) = ctx.open_store()?;

    if store.project(&args.project).is_none() {
        bail!("project not found: {}", args.project);
    }

    let draft = CommentDraft {
        project_id: args.project.clone(),
        content: args.content.clone(),
        comment_type: CommentType::from(args.comment_type.as_str()),
        environmental_category: EnvironmentalCategory::from(args.category.as_str()),
        stakeholder_id: args.stakeholder.clone(),
        stakeholder_name: args.stakeholder_name.clone(),
        stakeholder_type: StakeholderType::from(args.stakeholder_type.as_str()),
        priority: Priority::from(args.priority.as_str()),
        source: CommentSource::from(args.source.as_str()),
        tags: if args.tags.is_empty() {
            None
        } else {
            Some(args.tags.clone())
        },
        ..Default::default()
    };

    let comment = store.add_comment(draft)?;

    if ctx.json {
        output_json(&comment);
    } else if !ctx.quiet {
        println!("Added {}", format_comment_compact(&comment));
    }
    Ok(())
}

/// Execute the `um comment update` command.
pub fn run_update(ctx: &RuntimeContext, args: &CommentUpdateArgs) -> Result<()> {
    let (mut store, _) = ctx.open_store()?;

    let mut patch = CommentPatch {
        status: args.status.as_deref().map(CommentStatus::from),
        priority: args.priority.as_deref().map(Priority::from),
        ..Default::default()
    };

    if let Some(ref assignee) = args.assign {
        patch.assigned_to = Some(Some(assignee.clone()));
    } else if args.unassign {
        patch.assigned_to = Some(None);
    }

    if let Some(ref response) = args.response {
        patch.response = Some(Some(response.clone()));
        patch.response_date = Some(Some(Utc::now()));
    }

    if !args.tags.is_empty() {
        patch.tags = Some(Some(args.tags.clone()));
    }

    if args.flag_meeting {
        patch.flagged_for_public_meeting = Some(Some(true));
    } else if args.unflag_meeting {
        patch.flagged_for_public_meeting = Some(Some(false));
    }

    if patch.is_empty() {
        bail!("nothing to update: pass at least one field flag");
    }

    let Some(comment) = store.update_comment(&args.id, &patch)? else {
        bail!("comment not found: {}", args.id);
    };

    if ctx.json {
        output_json(&comment);
    } else if !ctx.quiet {
        println!("Updated {}", format_comment_compact(&comment));
    }
    Ok(())
}
