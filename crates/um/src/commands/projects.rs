//! `um projects` / `um project` -- list and show projects.

use anyhow::{Result, bail};

use umsogn_core::enums::ProjectStatus;

use crate::cli::{ProjectArgs, ProjectsArgs};
use crate::context::RuntimeContext;
use crate::output::{format_project_row, output_json, output_table};

/// Execute the `um projects` command.
pub fn run_list(ctx: &RuntimeContext, args: &ProjectsArgs) -> Result<()> {
    let (store, _) = ctx.open_store()?;

    let status_filter = args.status.as_deref().map(ProjectStatus::from);
    let projects: Vec<_> = store
        .projects()
        .iter()
        .filter(|p| status_filter.as_ref().is_none_or(|s| &p.status == s))
        .collect();

    if ctx.json {
        output_json(&projects);
        return Ok(());
    }

    if projects.is_empty() {
        if !ctx.quiet {
            println!("No projects found.");
        }
        return Ok(());
    }

    let headers = &["ID", "STATUS", "CATEGORY", "DEVELOPER", "NAME"];
    let rows: Vec<Vec<String>> = projects.iter().map(|p| format_project_row(p)).collect();
    output_table(headers, &rows);
    Ok(())
}

/// Execute the `um project` command.
pub fn run_show(ctx: &RuntimeContext, args: &ProjectArgs) -> Result<()> {
    let (store, _) = ctx.open_store()?;

    let Some(project) = store.project(&args.id) else {
        bail!("project not found: {}", args.id);
    };

    if ctx.json {
        output_json(project);
        return Ok(());
    }

    println!("{} [{}] {}", project.id, project.status, project.name);
    println!("Category: {}", project.category);
    println!("Developer: {}", project.developer);
    if let Some(ref consultant) = project.consultant {
        println!("Consultant: {}", consultant);
    }
    println!(
        "Comment period: {} to {}",
        project.comment_period_start.format("%Y-%m-%d"),
        project.comment_period_end.format("%Y-%m-%d")
    );
    println!();
    println!("{}", project.description);

    let comments = store.comments_for(&project.id);
    let resolved = comments.iter().filter(|c| c.has_final_response()).count();
    println!();
    println!("Comments: {} ({} with final response)", comments.len(), resolved);

    Ok(())
}
