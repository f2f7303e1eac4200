//! Derived per-project metrics over the comment collections.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::comment::Comment;
use crate::enums::{CommentStatus, CommentType, EnvironmentalCategory};
use crate::stakeholder::Stakeholder;

/// Aggregate metrics for one project's comments.
///
/// The breakdown maps are keyed by wire string and hold only observed keys;
/// use the accessor methods for zero-default lookups.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub total_comments: usize,

    pub comments_by_status: BTreeMap<String, usize>,

    pub comments_by_category: BTreeMap<String, usize>,

    pub comments_by_type: BTreeMap<String, usize>,

    /// Mean of `response_date - created_at` in hours, over comments that have
    /// a response date. 0 when none do.
    pub average_response_time: f64,

    /// Percentage of comments with a recorded response and `final` status.
    /// 0 when the project has no comments.
    pub response_completeness: f64,

    /// Mandatory stakeholders with a deadline set and no submission yet.
    ///
    /// Counted over the whole registry, not per project: the model carries no
    /// stakeholder-to-project association to scope by.
    pub pending_mandatory_submissions: usize,
}

impl Metrics {
    /// Count of comments with the given status, defaulting to 0.
    pub fn status_count(&self, status: &CommentStatus) -> usize {
        self.comments_by_status
            .get(status.as_str())
            .copied()
            .unwrap_or(0)
    }

    /// Count of comments in the given environmental category, defaulting to 0.
    pub fn category_count(&self, category: &EnvironmentalCategory) -> usize {
        self.comments_by_category
            .get(category.as_str())
            .copied()
            .unwrap_or(0)
    }

    /// Count of comments of the given type, defaulting to 0.
    pub fn type_count(&self, comment_type: &CommentType) -> usize {
        self.comments_by_type
            .get(comment_type.as_str())
            .copied()
            .unwrap_or(0)
    }
}

/// Computes [`Metrics`] over one project's comments and the stakeholder
/// registry.
///
/// `comments` must already be scoped to the project; `stakeholders` is the
/// full registry (see `pending_mandatory_submissions`).
pub fn compute_metrics(comments: &[Comment], stakeholders: &[Stakeholder]) -> Metrics {
    let mut by_status: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_type: BTreeMap<String, usize> = BTreeMap::new();

    for comment in comments {
        *by_status.entry(comment.status.as_str().to_owned()).or_default() += 1;
        *by_category
            .entry(comment.environmental_category.as_str().to_owned())
            .or_default() += 1;
        *by_type
            .entry(comment.comment_type.as_str().to_owned())
            .or_default() += 1;
    }

    let response_hours: Vec<f64> = comments
        .iter()
        .filter_map(|c| c.response_date.map(|d| d - c.created_at))
        .map(|delta| delta.num_milliseconds() as f64 / 3_600_000.0)
        .collect();

    let average_response_time = if response_hours.is_empty() {
        0.0
    } else {
        response_hours.iter().sum::<f64>() / response_hours.len() as f64
    };

    let response_completeness = if comments.is_empty() {
        0.0
    } else {
        let complete = comments.iter().filter(|c| c.has_final_response()).count();
        complete as f64 / comments.len() as f64 * 100.0
    };

    let pending_mandatory_submissions = stakeholders
        .iter()
        .filter(|s| s.is_pending_mandatory())
        .count();

    Metrics {
        total_comments: comments.len(),
        comments_by_status: by_status,
        comments_by_category: by_category,
        comments_by_type: by_type,
        average_response_time,
        response_completeness,
        pending_mandatory_submissions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Priority;
    use chrono::{DateTime, TimeDelta, Utc};

    fn date(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn comment(status: CommentStatus, with_response: bool) -> Comment {
        Comment {
            project_id: "proj-1".into(),
            status,
            priority: Priority::Medium,
            response: with_response.then(|| "answered".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn empty_project_yields_zeroes() {
        let m = compute_metrics(&[], &[]);
        assert_eq!(m.total_comments, 0);
        assert_eq!(m.response_completeness, 0.0);
        assert_eq!(m.average_response_time, 0.0);
        assert_eq!(m.status_count(&CommentStatus::Final), 0);
    }

    #[test]
    fn completeness_counts_final_with_response() {
        // 4 comments, 2 of which have a response AND final status => 50%.
        let comments = vec![
            comment(CommentStatus::Final, true),
            comment(CommentStatus::Final, true),
            comment(CommentStatus::Final, false), // final but no response
            comment(CommentStatus::DraftResponse, true), // response but not final
        ];
        let m = compute_metrics(&comments, &[]);
        assert_eq!(m.total_comments, 4);
        assert_eq!(m.response_completeness, 50.0);
    }

    #[test]
    fn average_response_time_in_hours() {
        let created = date("2024-11-01T00:00:00Z");
        let mut a = comment(CommentStatus::Final, true);
        a.created_at = created;
        a.response_date = Some(created + TimeDelta::hours(10));
        let mut b = comment(CommentStatus::Final, true);
        b.created_at = created;
        b.response_date = Some(created + TimeDelta::hours(20));
        // No response date: excluded from the mean.
        let c = comment(CommentStatus::PendingReview, false);

        let m = compute_metrics(&[a, b, c], &[]);
        assert!((m.average_response_time - 15.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_maps_use_wire_strings() {
        let mut a = comment(CommentStatus::Assigned, false);
        a.environmental_category = EnvironmentalCategory::VisualImpact;
        a.comment_type = CommentType::OutOfScope;
        let m = compute_metrics(&[a], &[]);
        assert_eq!(m.comments_by_status.get("assigned"), Some(&1));
        assert_eq!(m.comments_by_category.get("visual-impact"), Some(&1));
        assert_eq!(m.comments_by_type.get("out-of-scope"), Some(&1));
        assert_eq!(m.status_count(&CommentStatus::Final), 0);
    }

    #[test]
    fn pending_mandatory_counts_whole_registry() {
        let pending = Stakeholder {
            is_mandatory: true,
            submission_deadline: Some(date("2024-12-13T00:00:00Z")),
            ..Default::default()
        };
        let submitted = Stakeholder {
            is_mandatory: true,
            submission_deadline: Some(date("2024-12-13T00:00:00Z")),
            has_submitted: Some(true),
            ..Default::default()
        };
        let no_deadline = Stakeholder {
            is_mandatory: true,
            ..Default::default()
        };
        let m = compute_metrics(&[], &[pending, submitted, no_deadline]);
        assert_eq!(m.pending_mandatory_submissions, 1);
    }

    #[test]
    fn metrics_serialize_camel_case() {
        let m = compute_metrics(&[comment(CommentStatus::Final, true)], &[]);
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"totalComments\":1"));
        assert!(json.contains("\"responseCompleteness\":100.0"));
        assert!(json.contains("\"commentsByStatus\""));
    }
}
