//! MitigationStrategy -- a measure addressing an environmental concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{EnvironmentalCategory, MitigationStatus};

/// A proposed or adopted mitigation measure for a project, linkable to the
/// comments it addresses (many-to-many via id lists on both sides).
///
/// Read-only in this store: no mutator is exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MitigationStrategy {
    pub id: String,

    pub project_id: String,

    pub title: String,

    pub description: String,

    pub environmental_category: EnvironmentalCategory,

    pub status: MitigationStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effectiveness: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_comment_ids: Option<Vec<String>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Default for MitigationStrategy {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            project_id: String::new(),
            title: String::new(),
            description: String::new(),
            environmental_category: EnvironmentalCategory::default(),
            status: MitigationStatus::default(),
            effectiveness: None,
            related_comment_ids: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let m = MitigationStrategy {
            id: "mit-1".into(),
            project_id: "proj-1".into(),
            title: "Bird Migration Monitoring Program".into(),
            description: "Radar and field observations".into(),
            environmental_category: EnvironmentalCategory::Birds,
            status: MitigationStatus::Approved,
            effectiveness: Some("60-70% collision reduction".into()),
            related_comment_ids: Some(vec!["comment-1".into(), "comment-5".into()]),
            ..Default::default()
        };

        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"environmentalCategory\":\"birds\""));
        assert!(json.contains("\"relatedCommentIds\""));

        let back: MitigationStrategy = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status, MitigationStatus::Approved);
        assert_eq!(back.related_comment_ids.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn default_status_is_proposed() {
        let m = MitigationStrategy::default();
        assert_eq!(m.status, MitigationStatus::Proposed);
    }
}
