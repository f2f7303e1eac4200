//! Enum types for the umsögn system.
//!
//! Each enum has:
//! - Custom Serialize (as its kebab-case wire string)
//! - Custom Deserialize (known variants + catch-all Custom(String))
//! - `as_str()`, `is_default()`, `Display` impl
//!
//! The wire strings are the values stored in snapshot files.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ---------------------------------------------------------------------------
// Macro: defines an enum with known string variants + a Custom(String) fallback.
// ---------------------------------------------------------------------------
macro_rules! define_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident,
        variants: [
            $( ($variant:ident, $str:expr) ),+ $(,)?
        ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
            /// Catch-all for strings written by other tools or future versions.
            Custom(String),
        }

        impl $name {
            /// Returns the wire-string representation.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $str, )+
                    Self::Custom(s) => s.as_str(),
                }
            }

            /// Returns `true` if this is the default variant.
            pub fn is_default(&self) -> bool {
                *self == Self::$default
            }

            /// Returns `true` if this is a built-in (non-custom) variant.
            pub fn is_builtin(&self) -> bool {
                !matches!(self, Self::Custom(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok(Self::from(s))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $( $str => Self::$variant, )+
                    other => Self::Custom(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                // Check known variants first to avoid allocation in common case.
                match s.as_str() {
                    $( $str => Self::$variant, )+
                    _ => Self::Custom(s),
                }
            }
        }
    };
}

// ===========================================================================
// ProjectStatus
// ===========================================================================

define_enum! {
    /// Phase of a project in the EIA process.
    ProjectStatus, default = Scoping,
    variants: [
        (Scoping, "scoping"),
        (Assessment, "assessment"),
        (PublicComment, "public-comment"),
        (Review, "review"),
        (Approved, "approved"),
        (Rejected, "rejected"),
    ]
}

// ===========================================================================
// ProjectCategory
// ===========================================================================

define_enum! {
    /// EIA assessment category (A = full assessment, B = screening decision).
    ProjectCategory, default = A,
    variants: [
        (A, "A"),
        (B, "B"),
    ]
}

// ===========================================================================
// StakeholderType
// ===========================================================================

define_enum! {
    /// Who a stakeholder represents.
    StakeholderType, default = Public,
    variants: [
        (Public, "public"),
        (MandatoryAgency, "mandatory-agency"),
        (SpecialInterestGroup, "special-interest-group"),
        (Municipality, "municipality"),
        (Developer, "developer"),
    ]
}

// ===========================================================================
// CommentType
// ===========================================================================

define_enum! {
    /// Classification of a comment's substance.
    CommentType, default = Substantive,
    variants: [
        (Technical, "technical"),
        (Procedural, "procedural"),
        (Substantive, "substantive"),
        (OutOfScope, "out-of-scope"),
    ]
}

// ===========================================================================
// EnvironmentalCategory
// ===========================================================================

define_enum! {
    /// Environmental topic a comment or mitigation strategy addresses.
    EnvironmentalCategory, default = Other,
    variants: [
        (Birds, "birds"),
        (Water, "water"),
        (VisualImpact, "visual-impact"),
        (Archaeological, "archaeological"),
        (Vegetation, "vegetation"),
        (Noise, "noise"),
        (Traffic, "traffic"),
        (Other, "other"),
    ]
}

// ===========================================================================
// CommentStatus
// ===========================================================================

define_enum! {
    /// Processing state of a comment.
    CommentStatus, default = PendingReview,
    variants: [
        (PendingReview, "pending-review"),
        (Assigned, "assigned"),
        (DraftResponse, "draft-response"),
        (Final, "final"),
        (Resolved, "resolved"),
    ]
}

// ===========================================================================
// Priority
// ===========================================================================

define_enum! {
    /// Urgency of a comment.
    Priority, default = Medium,
    variants: [
        (Low, "low"),
        (Medium, "medium"),
        (High, "high"),
        (Critical, "critical"),
    ]
}

impl Priority {
    /// Severity rank used for ordering (higher = more urgent).
    ///
    /// Custom values rank below `Low`: they carry no defined severity.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::Custom(_) => 0,
        }
    }
}

// ===========================================================================
// CommentSource
// ===========================================================================

define_enum! {
    /// Channel a comment arrived through.
    CommentSource, default = Manual,
    variants: [
        (Skipulagsgatt, "skipulagsgátt"),
        (Email, "email"),
        (Manual, "manual"),
        (Postal, "postal"),
    ]
}

// ===========================================================================
// MitigationStatus
// ===========================================================================

define_enum! {
    /// Lifecycle state of a mitigation strategy.
    MitigationStatus, default = Proposed,
    variants: [
        (Proposed, "proposed"),
        (Approved, "approved"),
        (Implemented, "implemented"),
        (Monitoring, "monitoring"),
    ]
}

// ===========================================================================
// TimelineEventType
// ===========================================================================

define_enum! {
    /// Kind of timeline entry.
    TimelineEventType, default = Other,
    variants: [
        (Milestone, "milestone"),
        (Deadline, "deadline"),
        (Meeting, "meeting"),
        (Submission, "submission"),
        (Decision, "decision"),
        (Other, "other"),
    ]
}

// ===========================================================================
// TimelineEventStatus
// ===========================================================================

define_enum! {
    /// Stored state of a timeline event. Never auto-derived from the date.
    TimelineEventStatus, default = Upcoming,
    variants: [
        (Upcoming, "upcoming"),
        (InProgress, "in-progress"),
        (Completed, "completed"),
        (Overdue, "overdue"),
    ]
}

// ===========================================================================
// MeetingFormat
// ===========================================================================

define_enum! {
    /// How a public meeting is held.
    MeetingFormat, default = InPerson,
    variants: [
        (InPerson, "in-person"),
        (Virtual, "virtual"),
        (Hybrid, "hybrid"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_status_default_is_pending_review() {
        assert_eq!(CommentStatus::default(), CommentStatus::PendingReview);
        assert!(CommentStatus::PendingReview.is_default());
        assert!(!CommentStatus::Final.is_default());
    }

    #[test]
    fn comment_status_roundtrip_serde() {
        let s = CommentStatus::DraftResponse;
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#""draft-response""#);
        let back: CommentStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn unknown_string_becomes_custom() {
        let json = r#""escalated""#;
        let s: CommentStatus = serde_json::from_str(json).unwrap();
        assert_eq!(s, CommentStatus::Custom("escalated".into()));
        assert_eq!(serde_json::to_string(&s).unwrap(), json);
    }

    #[test]
    fn source_preserves_non_ascii_wire_string() {
        let s = CommentSource::Skipulagsgatt;
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"skipulagsgátt\"");
        let back: CommentSource = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CommentSource::Skipulagsgatt);
        assert!(back.is_builtin());
    }

    #[test]
    fn priority_rank_orders_by_severity() {
        assert!(Priority::Critical.rank() > Priority::High.rank());
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
        assert!(Priority::Low.rank() > Priority::Custom("urgent-ish".into()).rank());
    }

    #[test]
    fn environmental_category_as_str() {
        assert_eq!(EnvironmentalCategory::VisualImpact.as_str(), "visual-impact");
        assert_eq!(EnvironmentalCategory::Birds.as_str(), "birds");
    }

    #[test]
    fn project_category_wire_strings_are_uppercase() {
        assert_eq!(ProjectCategory::A.as_str(), "A");
        let back: ProjectCategory = serde_json::from_str("\"B\"").unwrap();
        assert_eq!(back, ProjectCategory::B);
    }

    #[test]
    fn timeline_event_status_from_str() {
        assert_eq!(
            TimelineEventStatus::from("in-progress"),
            TimelineEventStatus::InProgress
        );
        assert_eq!(
            TimelineEventStatus::from("paused"),
            TimelineEventStatus::Custom("paused".into())
        );
    }
}
