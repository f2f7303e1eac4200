//! Output formatting helpers for the `um` CLI.
//!
//! Provides JSON output, table formatting, and human-readable comment display
//! in both compact (one-liner) and detailed (multi-line) formats.

use serde::Serialize;
use std::io::{self, Write};

use umsogn_core::comment::Comment;
use umsogn_core::project::Project;

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print a simple table with headers and rows.
///
/// Each row is a `Vec<String>` with columns matching the headers.
/// Column widths are computed from the data for alignment.
pub fn output_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    // Compute column widths
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    // Print header
    for (i, header) in headers.iter().enumerate() {
        if i > 0 {
            let _ = write!(handle, "  ");
        }
        let _ = write!(handle, "{:<width$}", header, width = widths[i]);
    }
    let _ = writeln!(handle);

    // Print separator
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            let _ = write!(handle, "  ");
        }
        let _ = write!(handle, "{}", "-".repeat(*width));
    }
    let _ = writeln!(handle);

    // Print rows
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                let _ = write!(handle, "  ");
            }
            if i < widths.len() {
                let _ = write!(handle, "{:<width$}", cell, width = widths[i]);
            } else {
                let _ = write!(handle, "{}", cell);
            }
        }
        let _ = writeln!(handle);
    }
}

/// Truncate a string to at most `max` characters, appending an ellipsis when
/// content was cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}

/// Format a comment as a compact one-line string.
///
/// Format: `[{priority}] [{category}] {id}: {content} ({status})`
pub fn format_comment_compact(comment: &Comment) -> String {
    let assignee_part = match comment.assigned_to {
        Some(ref name) => format!(" @{}", name),
        None => String::new(),
    };

    format!(
        "[{}] [{}] {}: {} ({}{})",
        comment.priority,
        comment.environmental_category,
        comment.id,
        truncate(&comment.content, 60),
        comment.status,
        assignee_part,
    )
}

/// Format a comment in detailed multi-line view.
///
/// Shows all populated fields with section headers.
pub fn format_comment_detail(comment: &Comment) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} [{}] [{}] {}",
        comment.id, comment.priority, comment.comment_type, comment.project_id
    ));

    lines.push(format!("Status: {}", comment.status));
    lines.push(format!("Category: {}", comment.environmental_category));
    lines.push(format!(
        "Stakeholder: {} ({}, {})",
        comment.stakeholder_name, comment.stakeholder_id, comment.stakeholder_type
    ));
    if let Some(ref assigned) = comment.assigned_to {
        lines.push(format!("Assigned to: {}", assigned));
    }
    lines.push(format!("Source: {}", comment.source));

    lines.push(format!(
        "Created: {}",
        comment.created_at.format("%Y-%m-%d %H:%M")
    ));
    lines.push(format!(
        "Updated: {}",
        comment.updated_at.format("%Y-%m-%d %H:%M")
    ));

    lines.push(String::new());
    lines.push("CONTENT".to_string());
    lines.push(comment.content.clone());

    if let Some(ref response) = comment.response {
        lines.push(String::new());
        lines.push("RESPONSE".to_string());
        lines.push(response.clone());
        if let Some(ref date) = comment.response_date {
            lines.push(format!("Responded: {}", date.format("%Y-%m-%d")));
        }
        if let Some(ref author) = comment.response_author {
            lines.push(format!("By: {} ({})", author.name, author.role));
        }
    }

    if let Some(ref tags) = comment.tags {
        if !tags.is_empty() {
            lines.push(String::new());
            lines.push(format!("Tags: {}", tags.join(", ")));
        }
    }

    if let Some(ref ids) = comment.mitigation_strategy_ids {
        if !ids.is_empty() {
            lines.push(format!("Mitigation strategies: {}", ids.join(", ")));
        }
    }

    if comment.flagged_for_public_meeting == Some(true) {
        lines.push("Flagged for public meeting".to_string());
    }

    lines.join("\n")
}

/// Format a comment as a compact row for list output.
///
/// Returns a vector of column values suitable for [`output_table`].
pub fn format_comment_row(comment: &Comment) -> Vec<String> {
    vec![
        comment.id.clone(),
        comment.priority.to_string(),
        comment.status.to_string(),
        comment.environmental_category.to_string(),
        comment.stakeholder_name.clone(),
        truncate(&comment.content, 40),
    ]
}

/// Format a project as a compact row for list output.
pub fn format_project_row(project: &Project) -> Vec<String> {
    vec![
        project.id.clone(),
        project.status.to_string(),
        project.category.to_string(),
        project.developer.clone(),
        project.name.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use umsogn_core::enums::{CommentStatus, EnvironmentalCategory, Priority};

    fn sample_comment() -> Comment {
        Comment {
            id: "comment-42".into(),
            project_id: "proj-1".into(),
            content: "The assessment should cover winter conditions as well.".into(),
            environmental_category: EnvironmentalCategory::Birds,
            stakeholder_name: "Local Resident".into(),
            status: CommentStatus::PendingReview,
            priority: Priority::High,
            ..Default::default()
        }
    }

    #[test]
    fn compact_format_basic() {
        let comment = sample_comment();
        let formatted = format_comment_compact(&comment);
        assert!(formatted.contains("comment-42"));
        assert!(formatted.contains("[high]"));
        assert!(formatted.contains("[birds]"));
        assert!(formatted.contains("pending-review"));
    }

    #[test]
    fn detail_format_includes_sections() {
        let mut comment = sample_comment();
        comment.response = Some("Winter surveys have been added.".into());
        comment.assigned_to = Some("Anna".into());
        let formatted = format_comment_detail(&comment);
        assert!(formatted.contains("CONTENT"));
        assert!(formatted.contains("RESPONSE"));
        assert!(formatted.contains("Assigned to: Anna"));
    }

    #[test]
    fn row_format_columns() {
        let row = format_comment_row(&sample_comment());
        assert_eq!(row[0], "comment-42");
        assert_eq!(row[1], "high");
        assert_eq!(row[4], "Local Resident");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        let cut = truncate("Búrfellslundur wind farm expansion area", 12);
        assert!(cut.ends_with("..."));
        assert!(cut.chars().count() <= 12);
    }

    #[test]
    fn table_output_smoke() {
        // Just ensure it doesn't panic
        let headers = &["ID", "STATUS", "CONTENT"];
        let rows = vec![
            vec!["comment-1".into(), "final".into(), "Bird migration".into()],
            vec!["comment-2".into(), "assigned".into(), "Noise levels".into()],
        ];
        output_table(headers, &rows);
    }
}
