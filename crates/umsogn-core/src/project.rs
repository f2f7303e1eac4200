//! Project -- a development subject to an EIA process.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{ProjectCategory, ProjectStatus};

/// A project undergoing Environmental Impact Assessment.
///
/// Field names serialize in camelCase, the contract of the `eia-projects`
/// snapshot slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,

    pub name: String,

    pub description: String,

    /// EIA category: A (full assessment) or B (screening decision).
    pub category: ProjectCategory,

    pub status: ProjectStatus,

    pub developer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultant: Option<String>,

    pub comment_period_start: DateTime<Utc>,

    pub comment_period_end: DateTime<Utc>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Denormalized counters maintained by external tooling; passed through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_comment_count: Option<usize>,
}

impl Default for Project {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            category: ProjectCategory::default(),
            status: ProjectStatus::default(),
            developer: String::new(),
            consultant: None,
            comment_period_start: now,
            comment_period_end: now,
            created_at: now,
            updated_at: now,
            comment_count: None,
            resolved_comment_count: None,
        }
    }
}

impl Project {
    /// Returns `true` if the given instant falls within the comment period.
    pub fn comment_period_open_at(&self, at: DateTime<Utc>) -> bool {
        at >= self.comment_period_start && at <= self.comment_period_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ProjectStatus;

    fn date(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn serde_roundtrip_camel_case() {
        let p = Project {
            id: "proj-1".into(),
            name: "Wind Farm".into(),
            description: "120 MW".into(),
            status: ProjectStatus::PublicComment,
            developer: "Landsvirkjun".into(),
            consultant: Some("COWI".into()),
            comment_period_start: date("2024-11-01T00:00:00Z"),
            comment_period_end: date("2024-12-13T00:00:00Z"),
            ..Default::default()
        };

        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"projectId\"") == false);
        assert!(json.contains("\"commentPeriodStart\""));
        assert!(json.contains("\"createdAt\""));

        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "proj-1");
        assert_eq!(back.status, ProjectStatus::PublicComment);
        assert_eq!(back.consultant.as_deref(), Some("COWI"));
    }

    #[test]
    fn comment_period_bounds_are_inclusive() {
        let p = Project {
            comment_period_start: date("2024-11-01T00:00:00Z"),
            comment_period_end: date("2024-12-13T00:00:00Z"),
            ..Default::default()
        };
        assert!(p.comment_period_open_at(date("2024-11-01T00:00:00Z")));
        assert!(p.comment_period_open_at(date("2024-12-13T00:00:00Z")));
        assert!(!p.comment_period_open_at(date("2024-12-14T00:00:00Z")));
    }

    #[test]
    fn absent_consultant_is_omitted() {
        let p = Project::default();
        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("consultant"));
        assert!(!json.contains("commentCount"));
    }
}
