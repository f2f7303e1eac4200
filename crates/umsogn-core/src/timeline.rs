//! TimelineEvent -- a dated entry in a project's EIA process timeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{TimelineEventStatus, TimelineEventType};

/// A milestone, deadline, meeting, submission, or decision in a project's
/// process timeline. `status` is stored as-is and never derived from `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,

    pub project_id: String,

    pub title: String,

    pub description: String,

    #[serde(rename = "type")]
    pub event_type: TimelineEventType,

    pub date: DateTime<Utc>,

    pub status: TimelineEventStatus,

    /// Whether the event appears on the public-facing timeline.
    pub is_public: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_comment_ids: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<String>>,
}

impl Default for TimelineEvent {
    fn default() -> Self {
        Self {
            id: String::new(),
            project_id: String::new(),
            title: String::new(),
            description: String::new(),
            event_type: TimelineEventType::default(),
            date: Utc::now(),
            status: TimelineEventStatus::default(),
            is_public: false,
            related_comment_ids: None,
            location: None,
            attendees: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_serializes_as_type() {
        let e = TimelineEvent {
            id: "timeline-1".into(),
            project_id: "proj-1".into(),
            title: "Public Comment Period Opens".into(),
            event_type: TimelineEventType::Deadline,
            is_public: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"type\":\"deadline\""));
        assert!(json.contains("\"isPublic\":true"));

        let back: TimelineEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back.event_type, TimelineEventType::Deadline);
        assert!(back.is_public);
    }

    #[test]
    fn status_is_stored_not_derived() {
        // An event dated in the past keeps whatever status it was given.
        let e = TimelineEvent {
            date: DateTime::parse_from_rfc3339("2020-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            status: TimelineEventStatus::Upcoming,
            ..Default::default()
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: TimelineEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status, TimelineEventStatus::Upcoming);
    }
}
