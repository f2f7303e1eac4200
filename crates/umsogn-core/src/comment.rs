//! Comment -- the central domain model: a public submission on a project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{
    CommentSource, CommentStatus, CommentType, EnvironmentalCategory, Priority, StakeholderType,
};

/// Author of an official response to a comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseAuthor {
    pub name: String,

    pub role: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A public comment submitted during an EIA comment period.
///
/// The stakeholder fields are a denormalized copy taken at submission time,
/// not a live join against the stakeholder registry. `project_id` is an id
/// reference only; referential integrity is not enforced anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    // ===== Identity =====
    pub id: String,

    pub project_id: String,

    // ===== Content & classification =====
    pub content: String,

    pub comment_type: CommentType,

    pub environmental_category: EnvironmentalCategory,

    // ===== Stakeholder (denormalized) =====
    pub stakeholder_id: String,

    pub stakeholder_name: String,

    pub stakeholder_type: StakeholderType,

    // ===== Workflow =====
    pub status: CommentStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,

    pub priority: Priority,

    // ===== Timestamps =====
    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    // ===== Response =====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_author: Option<ResponseAuthor>,

    // ===== Duplicate tracking =====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_duplicate: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duplicate_of: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_comment_ids: Option<Vec<String>>,

    // ===== Categorisation =====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    pub source: CommentSource,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mitigation_strategy_ids: Option<Vec<String>>,

    // ===== Public meeting =====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flagged_for_public_meeting: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_meeting_date: Option<DateTime<Utc>>,
}

impl Default for Comment {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: String::new(),
            project_id: String::new(),
            content: String::new(),
            comment_type: CommentType::default(),
            environmental_category: EnvironmentalCategory::default(),
            stakeholder_id: String::new(),
            stakeholder_name: String::new(),
            stakeholder_type: StakeholderType::default(),
            status: CommentStatus::default(),
            assigned_to: None,
            priority: Priority::default(),
            created_at: now,
            updated_at: now,
            response: None,
            response_date: None,
            response_author: None,
            is_duplicate: None,
            duplicate_of: None,
            related_comment_ids: None,
            tags: None,
            source: CommentSource::default(),
            mitigation_strategy_ids: None,
            flagged_for_public_meeting: None,
            public_meeting_date: None,
        }
    }
}

impl Comment {
    /// Returns `true` if an official response has been recorded and the
    /// comment has reached `final` status. Used by the completeness metric.
    pub fn has_final_response(&self) -> bool {
        self.response.is_some() && self.status == CommentStatus::Final
    }
}

/// Input for creating a comment: every [`Comment`] field except the three the
/// store assigns (`id`, `created_at`, `updated_at`).
#[derive(Debug, Clone, Default)]
pub struct CommentDraft {
    pub project_id: String,
    pub content: String,
    pub comment_type: CommentType,
    pub environmental_category: EnvironmentalCategory,
    pub stakeholder_id: String,
    pub stakeholder_name: String,
    pub stakeholder_type: StakeholderType,
    pub status: CommentStatus,
    pub assigned_to: Option<String>,
    pub priority: Priority,
    pub response: Option<String>,
    pub response_date: Option<DateTime<Utc>>,
    pub response_author: Option<ResponseAuthor>,
    pub is_duplicate: Option<bool>,
    pub duplicate_of: Option<String>,
    pub related_comment_ids: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub source: CommentSource,
    pub mitigation_strategy_ids: Option<Vec<String>>,
    pub flagged_for_public_meeting: Option<bool>,
    pub public_meeting_date: Option<DateTime<Utc>>,
}

impl CommentDraft {
    /// Materializes the draft into a full [`Comment`] with the given identity.
    ///
    /// `created_at` and `updated_at` are both set to `now`.
    pub fn into_comment(self, id: String, now: DateTime<Utc>) -> Comment {
        Comment {
            id,
            project_id: self.project_id,
            content: self.content,
            comment_type: self.comment_type,
            environmental_category: self.environmental_category,
            stakeholder_id: self.stakeholder_id,
            stakeholder_name: self.stakeholder_name,
            stakeholder_type: self.stakeholder_type,
            status: self.status,
            assigned_to: self.assigned_to,
            priority: self.priority,
            created_at: now,
            updated_at: now,
            response: self.response,
            response_date: self.response_date,
            response_author: self.response_author,
            is_duplicate: self.is_duplicate,
            duplicate_of: self.duplicate_of,
            related_comment_ids: self.related_comment_ids,
            tags: self.tags,
            source: self.source,
            mitigation_strategy_ids: self.mitigation_strategy_ids,
            flagged_for_public_meeting: self.flagged_for_public_meeting,
            public_meeting_date: self.public_meeting_date,
        }
    }
}

/// Typed partial-update struct for comments.
///
/// Only `Some` fields are applied; `None` fields are left unchanged. Fields
/// that are themselves optional on [`Comment`] use a double `Option`, so that
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct CommentPatch {
    pub content: Option<String>,
    pub comment_type: Option<CommentType>,
    pub environmental_category: Option<EnvironmentalCategory>,
    pub status: Option<CommentStatus>,
    pub assigned_to: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub response: Option<Option<String>>,
    pub response_date: Option<Option<DateTime<Utc>>>,
    pub response_author: Option<Option<ResponseAuthor>>,
    pub is_duplicate: Option<Option<bool>>,
    pub duplicate_of: Option<Option<String>>,
    pub related_comment_ids: Option<Option<Vec<String>>>,
    pub tags: Option<Option<Vec<String>>>,
    pub source: Option<CommentSource>,
    pub mitigation_strategy_ids: Option<Option<Vec<String>>>,
    pub flagged_for_public_meeting: Option<Option<bool>>,
    pub public_meeting_date: Option<Option<DateTime<Utc>>>,
}

impl CommentPatch {
    /// Applies the patch to `comment` in place. Does not touch timestamps;
    /// the store refreshes `updated_at` unconditionally after applying.
    pub fn apply(&self, comment: &mut Comment) {
        if let Some(v) = &self.content {
            comment.content = v.clone();
        }
        if let Some(v) = &self.comment_type {
            comment.comment_type = v.clone();
        }
        if let Some(v) = &self.environmental_category {
            comment.environmental_category = v.clone();
        }
        if let Some(v) = &self.status {
            comment.status = v.clone();
        }
        if let Some(v) = &self.assigned_to {
            comment.assigned_to = v.clone();
        }
        if let Some(v) = &self.priority {
            comment.priority = v.clone();
        }
        if let Some(v) = &self.response {
            comment.response = v.clone();
        }
        if let Some(v) = &self.response_date {
            comment.response_date = *v;
        }
        if let Some(v) = &self.response_author {
            comment.response_author = v.clone();
        }
        if let Some(v) = &self.is_duplicate {
            comment.is_duplicate = *v;
        }
        if let Some(v) = &self.duplicate_of {
            comment.duplicate_of = v.clone();
        }
        if let Some(v) = &self.related_comment_ids {
            comment.related_comment_ids = v.clone();
        }
        if let Some(v) = &self.tags {
            comment.tags = v.clone();
        }
        if let Some(v) = &self.source {
            comment.source = v.clone();
        }
        if let Some(v) = &self.mitigation_strategy_ids {
            comment.mitigation_strategy_ids = v.clone();
        }
        if let Some(v) = &self.flagged_for_public_meeting {
            comment.flagged_for_public_meeting = *v;
        }
        if let Some(v) = &self.public_meeting_date {
            comment.public_meeting_date = *v;
        }
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.comment_type.is_none()
            && self.environmental_category.is_none()
            && self.status.is_none()
            && self.assigned_to.is_none()
            && self.priority.is_none()
            && self.response.is_none()
            && self.response_date.is_none()
            && self.response_author.is_none()
            && self.is_duplicate.is_none()
            && self.duplicate_of.is_none()
            && self.related_comment_ids.is_none()
            && self.tags.is_none()
            && self.source.is_none()
            && self.mitigation_strategy_ids.is_none()
            && self.flagged_for_public_meeting.is_none()
            && self.public_meeting_date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn comment_serde_roundtrip() {
        let c = Comment {
            id: "comment-1".into(),
            project_id: "proj-1".into(),
            content: "Concerned about bird migration routes".into(),
            environmental_category: EnvironmentalCategory::Birds,
            stakeholder_id: "stake-3".into(),
            stakeholder_name: "Icelandic Ornithological Society".into(),
            stakeholder_type: StakeholderType::SpecialInterestGroup,
            status: CommentStatus::Final,
            priority: Priority::High,
            source: CommentSource::Skipulagsgatt,
            tags: Some(vec!["migration".into()]),
            ..Default::default()
        };

        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"projectId\":\"proj-1\""));
        assert!(json.contains("\"environmentalCategory\":\"birds\""));
        assert!(json.contains("\"stakeholderType\":\"special-interest-group\""));

        let back: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn unset_optionals_are_omitted_from_json() {
        let c = Comment::default();
        let json = serde_json::to_string(&c).unwrap();
        assert!(!json.contains("response"));
        assert!(!json.contains("assignedTo"));
        assert!(!json.contains("duplicateOf"));
        assert!(!json.contains("publicMeetingDate"));
    }

    #[test]
    fn draft_materializes_with_equal_timestamps() {
        let draft = CommentDraft {
            project_id: "proj-2".into(),
            content: "Shipping lane interference".into(),
            priority: Priority::High,
            ..Default::default()
        };
        let now = Utc::now();
        let c = draft.into_comment("comment-1734000000000".into(), now);
        assert_eq!(c.id, "comment-1734000000000");
        assert_eq!(c.created_at, c.updated_at);
        assert_eq!(c.project_id, "proj-2");
    }

    #[test]
    fn patch_applies_only_set_fields() {
        let mut c = Comment {
            content: "original".into(),
            status: CommentStatus::PendingReview,
            priority: Priority::Low,
            assigned_to: Some("anna".into()),
            ..Default::default()
        };

        let patch = CommentPatch {
            status: Some(CommentStatus::Final),
            response: Some(Some("Addressed in updated EIA".into())),
            ..Default::default()
        };
        patch.apply(&mut c);

        assert_eq!(c.status, CommentStatus::Final);
        assert_eq!(c.response.as_deref(), Some("Addressed in updated EIA"));
        // Untouched fields stay as they were.
        assert_eq!(c.content, "original");
        assert_eq!(c.priority, Priority::Low);
        assert_eq!(c.assigned_to.as_deref(), Some("anna"));
    }

    #[test]
    fn patch_double_option_clears_value() {
        let mut c = Comment {
            assigned_to: Some("anna".into()),
            ..Default::default()
        };
        let patch = CommentPatch {
            assigned_to: Some(None),
            ..Default::default()
        };
        patch.apply(&mut c);
        assert_eq!(c.assigned_to, None);
    }

    #[test]
    fn empty_patch_reports_empty() {
        assert!(CommentPatch::default().is_empty());
        let patch = CommentPatch {
            priority: Some(Priority::Critical),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn has_final_response_requires_both() {
        let mut c = Comment {
            response: Some("done".into()),
            status: CommentStatus::DraftResponse,
            ..Default::default()
        };
        assert!(!c.has_final_response());
        c.status = CommentStatus::Final;
        assert!(c.has_final_response());
        c.response = None;
        assert!(!c.has_final_response());
    }
}
