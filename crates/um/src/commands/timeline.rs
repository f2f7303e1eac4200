//! `um timeline` -- list timeline events.

use anyhow::Result;

use crate::cli::TimelineArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_table};

/// Execute the `um timeline` command.
pub fn run(ctx: &RuntimeContext, args: &TimelineArgs) -> Result<()> {
    let (store, _) = ctx.open_store()?;

    let events = store.timeline_events(args.project.as_deref(), args.public);

    if ctx.json {
        output_json(&events);
        return Ok(());
    }

    if events.is_empty() {
        if !ctx.quiet {
            println!("No timeline events found.");
        }
        return Ok(());
    }

    let headers = &["DATE", "TYPE", "STATUS", "PROJECT", "TITLE"];
    let rows: Vec<Vec<String>> = events
        .iter()
        .map(|e| {
            vec![
                e.date.format("%Y-%m-%d").to_string(),
                e.event_type.to_string(),
                e.status.to_string(),
                e.project_id.clone(),
                e.title.clone(),
            ]
        })
        .collect();
    output_table(headers, &rows);
    Ok(())
}
