//! `um metrics` -- consultation statistics.

use anyhow::{Result, bail};

use crate::cli::MetricsArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_table};

/// Execute the `um metrics` command.
pub fn run(ctx: &RuntimeContext, args: &MetricsArgs) -> Result<()> {
    let (store, _) = ctx.open_store()?;

    if let Some(ref pid) = args.project {
        if store.project(pid).is_none() {
            bail!("project not found: {}", pid);
        }
    }

    let metrics = store.metrics(args.project.as_deref());

    if ctx.json {
        output_json(&metrics);
        return Ok(());
    }

    println!("Consultation Metrics");
    println!("====================");
    println!();
    println!("Total comments: {}", metrics.total_comments);
    println!(
        "Average response time: {:.1} hours",
        metrics.average_response_time
    );
    println!(
        "Response completeness: {:.1}%",
        metrics.response_completeness
    );
    println!(
        "Pending mandatory submissions: {}",
        metrics.pending_mandatory_submissions
    );

    if !metrics.comments_by_status.is_empty() {
        println!();
        println!("By Status:");
        let rows: Vec<Vec<String>> = metrics
            .comments_by_status
            .iter()
            .map(|(status, count)| vec![status.clone(), count.to_string()])
            .collect();
        output_table(&["STATUS", "COUNT"], &rows);
    }

    if !metrics.comments_by_category.is_empty() {
        println!();
        println!("By Category:");
        let rows: Vec<Vec<String>> = metrics
            .comments_by_category
            .iter()
            .map(|(category, count)| vec![category.clone(), count.to_string()])
            .collect();
        output_table(&["CATEGORY", "COUNT"], &rows);
    }

    if !metrics.comments_by_type.is_empty() {
        println!();
        println!("By Type:");
        let rows: Vec<Vec<String>> = metrics
            .comments_by_type
            .iter()
            .map(|(comment_type, count)| vec![comment_type.clone(), count.to_string()])
            .collect();
        output_table(&["TYPE", "COUNT"], &rows);
    }

    Ok(())
}
