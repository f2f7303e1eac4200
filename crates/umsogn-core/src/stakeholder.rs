//! Stakeholder -- a party entitled or required to comment on a project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::StakeholderType;

/// A registered stakeholder in the EIA consultation registry.
///
/// Stakeholders are global: the registry is shared across projects, and no
/// stakeholder-to-project association exists in the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stakeholder {
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub stakeholder_type: StakeholderType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Legally required to submit a comment before the deadline.
    pub is_mandatory: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_deadline: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_submitted: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_comment_count: Option<usize>,
}

impl Default for Stakeholder {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            stakeholder_type: StakeholderType::default(),
            email: None,
            organization: None,
            is_mandatory: false,
            submission_deadline: None,
            has_submitted: None,
            submission_date: None,
            historical_comment_count: None,
        }
    }
}

impl Stakeholder {
    /// Returns `true` if this stakeholder is mandatory, has a deadline set,
    /// and has not yet submitted. Used by the pending-submissions metric.
    pub fn is_pending_mandatory(&self) -> bool {
        self.is_mandatory
            && self.submission_deadline.is_some()
            && !self.has_submitted.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_serializes_as_type() {
        let s = Stakeholder {
            id: "stake-1".into(),
            name: "Skipulagsstofnun".into(),
            stakeholder_type: StakeholderType::MandatoryAgency,
            is_mandatory: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"type\":\"mandatory-agency\""));
        assert!(json.contains("\"isMandatory\":true"));

        let back: Stakeholder = serde_json::from_str(&json).unwrap();
        assert_eq!(back.stakeholder_type, StakeholderType::MandatoryAgency);
    }

    #[test]
    fn pending_mandatory_requires_deadline() {
        let mut s = Stakeholder {
            is_mandatory: true,
            ..Default::default()
        };
        assert!(!s.is_pending_mandatory(), "no deadline set");

        s.submission_deadline = Some(Utc::now());
        assert!(s.is_pending_mandatory());

        s.has_submitted = Some(true);
        assert!(!s.is_pending_mandatory());
    }

    #[test]
    fn non_mandatory_never_pending() {
        let s = Stakeholder {
            is_mandatory: false,
            submission_deadline: Some(Utc::now()),
            ..Default::default()
        };
        assert!(!s.is_pending_mandatory());
    }
}
