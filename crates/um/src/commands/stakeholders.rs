//! `um stakeholders` -- list registered stakeholders.

use anyhow::Result;

use crate::cli::StakeholdersArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_table};

/// Execute the `um stakeholders` command.
pub fn run(ctx: &RuntimeContext, args: &StakeholdersArgs) -> Result<()> {
    let (store, _) = ctx.open_store()?;

    let stakeholders: Vec<_> = store
        .stakeholders()
        .iter()
        .filter(|s| !args.pending || s.is_pending_mandatory())
        .collect();

    if ctx.json {
        output_json(&stakeholders);
        return Ok(());
    }

    if stakeholders.is_empty() {
        if !ctx.quiet {
            println!("No stakeholders found.");
        }
        return Ok(());
    }

    let headers = &["ID", "TYPE", "MANDATORY", "SUBMITTED", "DEADLINE", "NAME"];
    let rows: Vec<Vec<String>> = stakeholders
        .iter()
        .map(|s| {
            vec![
                s.id.clone(),
                s.stakeholder_type.to_string(),
                if s.is_mandatory { "yes" } else { "no" }.to_string(),
                match s.has_submitted {
                    Some(true) => "yes",
                    Some(false) => "no",
                    None => "-",
                }
                .to_string(),
                s.submission_deadline
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string()),
                s.name.clone(),
            ]
        })
        .collect();
    output_table(headers, &rows);
    Ok(())
}
