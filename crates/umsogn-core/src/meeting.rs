//! PublicMeeting -- a scheduled consultation meeting for a project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::MeetingFormat;

/// A public meeting where project concerns and mitigation strategies are
/// presented and discussed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicMeeting {
    pub id: String,

    pub project_id: String,

    pub title: String,

    pub description: String,

    pub date: DateTime<Utc>,

    pub location: String,

    pub format: MeetingFormat,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_url: Option<String>,

    /// Ordered agenda items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_comment_ids: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Default for PublicMeeting {
    fn default() -> Self {
        Self {
            id: String::new(),
            project_id: String::new(),
            title: String::new(),
            description: String::new(),
            date: Utc::now(),
            location: String::new(),
            format: MeetingFormat::default(),
            meeting_url: None,
            agenda: None,
            related_comment_ids: None,
            attendees: None,
            notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip_preserves_agenda_order() {
        let m = PublicMeeting {
            id: "meeting-1".into(),
            project_id: "proj-1".into(),
            title: "Public Information Meeting".into(),
            format: MeetingFormat::Hybrid,
            agenda: Some(vec![
                "Project overview".into(),
                "Mitigation strategies".into(),
                "Q&A session".into(),
            ]),
            ..Default::default()
        };
        let json = serde_json::to_string(&m).unwrap();
        assert!(json.contains("\"format\":\"hybrid\""));

        let back: PublicMeeting = serde_json::from_str(&json).unwrap();
        let agenda = back.agenda.unwrap();
        assert_eq!(agenda[0], "Project overview");
        assert_eq!(agenda[2], "Q&A session");
    }
}
