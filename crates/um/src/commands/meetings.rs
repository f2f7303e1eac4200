//! `um meetings` -- list public meetings.

use anyhow::Result;

use crate::cli::MeetingsArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_table};

/// Execute the `um meetings` command.
pub fn run(ctx: &RuntimeContext, args: &MeetingsArgs) -> Result<()> {
    let (store, _) = ctx.open_store()?;

    let meetings = store.public_meetings(args.project.as_deref());

    if ctx.json {
        output_json(&meetings);
        return Ok(());
    }

    if meetings.is_empty() {
        if !ctx.quiet {
            println!("No public meetings scheduled.");
        }
        return Ok(());
    }

    let headers = &["DATE", "FORMAT", "PROJECT", "LOCATION", "TITLE"];
    let rows: Vec<Vec<String>> = meetings
        .iter()
        .map(|m| {
            vec![
                m.date.format("%Y-%m-%d").to_string(),
                m.format.to_string(),
                m.project_id.clone(),
                m.location.clone(),
                m.title.clone(),
            ]
        })
        .collect();
    output_table(headers, &rows);
    Ok(())
}
