//! Seed fixtures: the sample consultation data the store starts from when no
//! snapshot exists yet.

use chrono::{DateTime, NaiveDate, Utc};

use crate::comment::{Comment, ResponseAuthor};
use crate::enums::{
    CommentSource, CommentStatus, CommentType, EnvironmentalCategory, MeetingFormat,
    MitigationStatus, Priority, ProjectStatus, StakeholderType, TimelineEventStatus,
    TimelineEventType,
};
use crate::meeting::PublicMeeting;
use crate::mitigation::MitigationStrategy;
use crate::project::Project;
use crate::stakeholder::Stakeholder;
use crate::timeline::TimelineEvent;

/// The six seeded collections.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub projects: Vec<Project>,
    pub comments: Vec<Comment>,
    pub stakeholders: Vec<Stakeholder>,
    pub mitigation_strategies: Vec<MitigationStrategy>,
    pub timeline_events: Vec<TimelineEvent>,
    pub public_meetings: Vec<PublicMeeting>,
}

/// Midnight UTC for a fixture date.
fn day(s: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .expect("fixture date is valid")
        .and_hms_opt(0, 0, 0)
        .expect("midnight is valid")
        .and_utc()
}

fn cowi_consultant() -> ResponseAuthor {
    ResponseAuthor {
        name: "Dr. Anna Jónsdóttir".into(),
        role: "Senior Environmental Consultant".into(),
        organization: Some("COWI".into()),
        email: Some("anna.jonsdottir@cowi.com".into()),
    }
}

fn landsvirkjun_pm() -> ResponseAuthor {
    ResponseAuthor {
        name: "Jón Pétursson".into(),
        role: "Project Manager".into(),
        organization: Some("Landsvirkjun".into()),
        email: Some("jon.petursson@landsvirkjun.is".into()),
    }
}

/// Builds the full sample data set: 2 projects, 6 stakeholders, 7 mitigation
/// strategies, 11 comments, 12 timeline events, and 1 public meeting.
pub fn sample_data() -> SeedData {
    SeedData {
        projects: sample_projects(),
        comments: sample_comments(),
        stakeholders: sample_stakeholders(),
        mitigation_strategies: sample_strategies(),
        timeline_events: sample_timeline(),
        public_meetings: sample_meetings(),
    }
}

fn sample_projects() -> Vec<Project> {
    vec![
        Project {
            id: "proj-1".into(),
            name: "Búrfellslundur/Vaðölduver Wind Farm".into(),
            description: "28-30 turbines, 120 MW wind energy project in Iceland".into(),
            status: ProjectStatus::PublicComment,
            developer: "Landsvirkjun".into(),
            consultant: Some("COWI".into()),
            comment_period_start: day("2024-11-01"),
            comment_period_end: day("2024-12-13"),
            created_at: day("2024-10-15"),
            updated_at: Utc::now(),
            ..Default::default()
        },
        Project {
            id: "proj-2".into(),
            name: "Hafið Wind Farm Project".into(),
            description: "15-18 turbines, 75 MW offshore wind energy project in North Iceland"
                .into(),
            status: ProjectStatus::Scoping,
            developer: "Orkubú Vestfjarða".into(),
            consultant: Some("EPLA".into()),
            comment_period_start: day("2024-12-15"),
            comment_period_end: day("2025-01-31"),
            created_at: day("2024-11-20"),
            updated_at: Utc::now(),
            ..Default::default()
        },
    ]
}

fn sample_stakeholders() -> Vec<Stakeholder> {
    vec![
        Stakeholder {
            id: "stake-1".into(),
            name: "Skipulagsstofnun".into(),
            stakeholder_type: StakeholderType::MandatoryAgency,
            email: Some("contact@skipulagsstofnun.is".into()),
            organization: Some("National Planning Agency".into()),
            is_mandatory: true,
            submission_deadline: Some(day("2024-12-13")),
            has_submitted: Some(false),
            ..Default::default()
        },
        Stakeholder {
            id: "stake-2".into(),
            name: "Umhverfisstofnun".into(),
            stakeholder_type: StakeholderType::MandatoryAgency,
            email: Some("contact@umhverfisstofnun.is".into()),
            organization: Some("Environment Agency".into()),
            is_mandatory: true,
            submission_deadline: Some(day("2024-12-13")),
            has_submitted: Some(true),
            submission_date: Some(day("2024-11-20")),
            ..Default::default()
        },
        Stakeholder {
            id: "stake-3".into(),
            name: "Icelandic Ornithological Society".into(),
            stakeholder_type: StakeholderType::SpecialInterestGroup,
            organization: Some("Fuglafræðifélag Íslands".into()),
            is_mandatory: false,
            ..Default::default()
        },
        Stakeholder {
            id: "stake-4".into(),
            name: "Local Resident".into(),
            stakeholder_type: StakeholderType::Public,
            email: Some("resident@example.com".into()),
            is_mandatory: false,
            ..Default::default()
        },
        Stakeholder {
            id: "stake-5".into(),
            name: "Mýrdalshreppur Municipality".into(),
            stakeholder_type: StakeholderType::Municipality,
            email: Some("contact@myrdalshreppur.is".into()),
            organization: Some("Mýrdalshreppur".into()),
            is_mandatory: false,
            ..Default::default()
        },
        Stakeholder {
            id: "stake-6".into(),
            name: "Icelandic Water Authority".into(),
            stakeholder_type: StakeholderType::MandatoryAgency,
            email: Some("contact@vatten.is".into()),
            organization: Some("Vatnsstofnun".into()),
            is_mandatory: true,
            submission_deadline: Some(day("2025-01-15")),
            has_submitted: Some(false),
            ..Default::default()
        },
    ]
}

fn sample_strategies() -> Vec<MitigationStrategy> {
    vec![
        MitigationStrategy {
            id: "mit-1".into(),
            project_id: "proj-1".into(),
            title: "Bird Migration Monitoring Program".into(),
            description: "Comprehensive monitoring program using radar and field observations \
                          during peak migration seasons (March-April, September-October). \
                          Turbine curtailment protocols when bird density exceeds threshold \
                          levels."
                .into(),
            environmental_category: EnvironmentalCategory::Birds,
            status: MitigationStatus::Approved,
            effectiveness: Some(
                "Expected to reduce bird collisions by 60-70% during peak migration periods"
                    .into(),
            ),
            related_comment_ids: Some(vec!["comment-1".into(), "comment-5".into()]),
            created_at: day("2024-11-10"),
            updated_at: day("2024-11-15"),
        },
        MitigationStrategy {
            id: "mit-2".into(),
            project_id: "proj-1".into(),
            title: "Noise Level Controls During Construction".into(),
            description: "Strict decibel limits: 45 dB(A) at nearest residential area during \
                          daytime (07:00-22:00), 40 dB(A) during nighttime. Use of noise \
                          barriers and scheduling high-noise activities during daytime hours \
                          only."
                .into(),
            environmental_category: EnvironmentalCategory::Noise,
            status: MitigationStatus::Approved,
            effectiveness: Some(
                "Meets all regulatory requirements and minimizes disturbance to residents".into(),
            ),
            related_comment_ids: Some(vec!["comment-3".into()]),
            created_at: day("2024-11-20"),
            updated_at: day("2024-11-22"),
        },
        MitigationStrategy {
            id: "mit-3".into(),
            project_id: "proj-1".into(),
            title: "Enhanced Visual Impact Assessment".into(),
            description: "Additional viewpoints from Route 1 at 2km, 5km, and 10km intervals. \
                          3D visualization models showing seasonal variations and different \
                          weather conditions."
                .into(),
            environmental_category: EnvironmentalCategory::VisualImpact,
            status: MitigationStatus::Proposed,
            effectiveness: Some(
                "Provides comprehensive visual representation for public review".into(),
            ),
            related_comment_ids: Some(vec!["comment-2".into()]),
            created_at: day("2024-11-12"),
            updated_at: day("2024-11-12"),
        },
        MitigationStrategy {
            id: "mit-4".into(),
            project_id: "proj-1".into(),
            title: "Habitat Restoration Plan".into(),
            description: "Restoration of 50 hectares of degraded land adjacent to project \
                          area. Native vegetation planting and wetland restoration to \
                          compensate for construction impacts."
                .into(),
            environmental_category: EnvironmentalCategory::Vegetation,
            status: MitigationStatus::Proposed,
            effectiveness: Some("Net positive impact on local biodiversity".into()),
            related_comment_ids: Some(Vec::new()),
            created_at: day("2024-11-18"),
            updated_at: day("2024-11-18"),
        },
        MitigationStrategy {
            id: "mit-5".into(),
            project_id: "proj-2".into(),
            title: "Marine Mammal Monitoring Program".into(),
            description: "Comprehensive monitoring program using underwater acoustic systems \
                          and visual observations to detect and protect marine mammals during \
                          construction and operation. Shutdown protocols when whales or seals \
                          are detected within 500m of construction vessels."
                .into(),
            environmental_category: EnvironmentalCategory::Other,
            status: MitigationStatus::Proposed,
            effectiveness: Some(
                "Expected to minimize disturbance to marine mammals and comply with all \
                 regulatory requirements"
                    .into(),
            ),
            related_comment_ids: Some(vec!["comment-10".into()]),
            created_at: day("2024-12-20"),
            updated_at: day("2024-12-20"),
        },
        MitigationStrategy {
            id: "mit-6".into(),
            project_id: "proj-2".into(),
            title: "Seabird Protection Measures".into(),
            description: "Pre-construction seabird surveys to identify critical nesting and \
                          feeding areas. Turbine placement to avoid key seabird colonies. \
                          Radar monitoring system to detect bird movements and potential \
                          shutdown during high-risk periods."
                .into(),
            environmental_category: EnvironmentalCategory::Birds,
            status: MitigationStatus::Proposed,
            effectiveness: Some(
                "Significant reduction in potential seabird collisions and habitat disruption"
                    .into(),
            ),
            related_comment_ids: Some(vec!["comment-11".into()]),
            created_at: day("2024-12-22"),
            updated_at: day("2024-12-22"),
        },
        MitigationStrategy {
            id: "mit-7".into(),
            project_id: "proj-2".into(),
            title: "Navigation and Fishing Safety Protocols".into(),
            description: "Clear marking and lighting of turbine locations. Coordination with \
                          maritime authorities for safe navigation corridors. Communication \
                          protocols with local fishing fleets. Real-time navigation warnings \
                          system."
                .into(),
            environmental_category: EnvironmentalCategory::Other,
            status: MitigationStatus::Proposed,
            effectiveness: Some(
                "Ensures safe navigation for shipping and fishing activities while \
                 maintaining access"
                    .into(),
            ),
            related_comment_ids: Some(vec!["comment-9".into()]),
            created_at: day("2024-12-18"),
            updated_at: day("2024-12-18"),
        },
    ]
}

fn sample_comments() -> Vec<Comment> {
    vec![
        // -- Project 1: ecology / birds --------------------------------------
        Comment {
            id: "comment-1".into(),
            project_id: "proj-1".into(),
            content: "I am concerned about the impact on migratory bird routes, particularly \
                      the pink-footed goose population. The EIA should include more detailed \
                      migration data from the last 5 years."
                .into(),
            comment_type: CommentType::Substantive,
            environmental_category: EnvironmentalCategory::Birds,
            stakeholder_id: "stake-3".into(),
            stakeholder_name: "Icelandic Ornithological Society".into(),
            stakeholder_type: StakeholderType::SpecialInterestGroup,
            status: CommentStatus::Final,
            priority: Priority::High,
            created_at: day("2024-11-05"),
            updated_at: day("2024-11-15"),
            source: CommentSource::Skipulagsgatt,
            tags: Some(vec!["migration".into(), "pink-footed-goose".into()]),
            mitigation_strategy_ids: Some(vec!["mit-1".into()]),
            response: Some(
                "We have developed a comprehensive bird migration monitoring program with \
                 turbine curtailment protocols. Additional migration data from 2019-2024 has \
                 been added to the EIA."
                    .into(),
            ),
            response_date: Some(day("2024-11-15")),
            response_author: Some(cowi_consultant()),
            flagged_for_public_meeting: Some(true),
            ..Default::default()
        },
        Comment {
            id: "comment-5".into(),
            project_id: "proj-1".into(),
            content: "The proposed turbine locations are within 500m of known golden eagle \
                      nesting sites. What measures will be taken to protect these protected \
                      species?"
                .into(),
            comment_type: CommentType::Substantive,
            environmental_category: EnvironmentalCategory::Birds,
            stakeholder_id: "stake-2".into(),
            stakeholder_name: "Umhverfisstofnun".into(),
            stakeholder_type: StakeholderType::MandatoryAgency,
            status: CommentStatus::Final,
            priority: Priority::Critical,
            created_at: day("2024-11-07"),
            updated_at: day("2024-11-16"),
            source: CommentSource::Skipulagsgatt,
            tags: Some(vec!["golden-eagle".into(), "protected-species".into()]),
            mitigation_strategy_ids: Some(vec!["mit-1".into()]),
            response: Some(
                "The monitoring program includes specific protocols for golden eagles. A 1km \
                 buffer zone will be maintained around known nesting sites, and turbines will \
                 be shut down if eagles are detected within 500m during breeding season."
                    .into(),
            ),
            response_date: Some(day("2024-11-16")),
            response_author: Some(cowi_consultant()),
            flagged_for_public_meeting: Some(true),
            public_meeting_date: Some(day("2024-12-20")),
            ..Default::default()
        },
        // -- Project 1: visual impact ----------------------------------------
        Comment {
            id: "comment-2".into(),
            project_id: "proj-1".into(),
            content: "The visual impact assessment does not adequately represent the views \
                      from Route 1. Please include additional viewpoints from the highway."
                .into(),
            comment_type: CommentType::Technical,
            environmental_category: EnvironmentalCategory::VisualImpact,
            stakeholder_id: "stake-4".into(),
            stakeholder_name: "Local Resident".into(),
            stakeholder_type: StakeholderType::Public,
            status: CommentStatus::Final,
            priority: Priority::Medium,
            created_at: day("2024-11-08"),
            updated_at: day("2024-11-12"),
            source: CommentSource::Email,
            tags: Some(vec!["route-1".into(), "visual-assessment".into()]),
            mitigation_strategy_ids: Some(vec!["mit-3".into()]),
            response: Some(
                "We will provide additional viewpoints from Route 1 at multiple intervals, \
                 along with enhanced 3D visualizations showing seasonal variations."
                    .into(),
            ),
            response_date: Some(day("2024-11-12")),
            response_author: Some(landsvirkjun_pm()),
            ..Default::default()
        },
        // -- Project 1: noise ------------------------------------------------
        Comment {
            id: "comment-3".into(),
            project_id: "proj-1".into(),
            content: "Please clarify the noise mitigation measures during construction phase. \
                      The current documentation is unclear about decibel limits at \
                      residential areas."
                .into(),
            comment_type: CommentType::Substantive,
            environmental_category: EnvironmentalCategory::Noise,
            stakeholder_id: "stake-2".into(),
            stakeholder_name: "Umhverfisstofnun".into(),
            stakeholder_type: StakeholderType::MandatoryAgency,
            status: CommentStatus::Final,
            priority: Priority::High,
            created_at: day("2024-11-15"),
            updated_at: day("2024-11-22"),
            assigned_to: Some("John Smith".into()),
            source: CommentSource::Skipulagsgatt,
            response: Some(
                "Detailed noise mitigation measures have been added: 45 dB(A) daytime limit \
                 and 40 dB(A) nighttime limit at nearest residence. Noise barriers and \
                 scheduling protocols are in place."
                    .into(),
            ),
            response_date: Some(day("2024-11-22")),
            response_author: Some(landsvirkjun_pm()),
            tags: Some(vec!["construction".into(), "noise-limits".into()]),
            mitigation_strategy_ids: Some(vec!["mit-2".into()]),
            ..Default::default()
        },
        Comment {
            id: "comment-6".into(),
            project_id: "proj-1".into(),
            content: "What will be the operational noise levels from the turbines? Will I \
                      hear them at my home 3km away?"
                .into(),
            comment_type: CommentType::Substantive,
            environmental_category: EnvironmentalCategory::Noise,
            stakeholder_id: "stake-4".into(),
            stakeholder_name: "Local Resident".into(),
            stakeholder_type: StakeholderType::Public,
            status: CommentStatus::DraftResponse,
            priority: Priority::Medium,
            created_at: day("2024-11-20"),
            updated_at: day("2024-11-25"),
            source: CommentSource::Email,
            tags: Some(vec!["operational-noise".into(), "residential".into()]),
            response: Some(
                "Operational noise levels at 3km distance will be below 35 dB(A), which is \
                 generally not noticeable over background ambient noise levels. A detailed \
                 noise impact study is included in the updated EIA."
                    .into(),
            ),
            flagged_for_public_meeting: Some(true),
            ..Default::default()
        },
        // -- Project 1: water ------------------------------------------------
        Comment {
            id: "comment-7".into(),
            project_id: "proj-1".into(),
            content: "Concern about potential impact on groundwater levels from foundation \
                      construction. The area has sensitive wetland ecosystems."
                .into(),
            comment_type: CommentType::Substantive,
            environmental_category: EnvironmentalCategory::Water,
            stakeholder_id: "stake-2".into(),
            stakeholder_name: "Umhverfisstofnun".into(),
            stakeholder_type: StakeholderType::MandatoryAgency,
            status: CommentStatus::Assigned,
            priority: Priority::High,
            created_at: day("2024-11-18"),
            updated_at: day("2024-11-18"),
            source: CommentSource::Skipulagsgatt,
            tags: Some(vec!["groundwater".into(), "wetlands".into()]),
            ..Default::default()
        },
        // -- Project 1: vegetation -------------------------------------------
        Comment {
            id: "comment-8".into(),
            project_id: "proj-1".into(),
            content: "The project will clear significant vegetation. What compensation \
                      measures are planned?"
                .into(),
            comment_type: CommentType::Substantive,
            environmental_category: EnvironmentalCategory::Vegetation,
            stakeholder_id: "stake-5".into(),
            stakeholder_name: "Mýrdalshreppur Municipality".into(),
            stakeholder_type: StakeholderType::Municipality,
            status: CommentStatus::Final,
            priority: Priority::Medium,
            created_at: day("2024-11-10"),
            updated_at: day("2024-11-18"),
            source: CommentSource::Skipulagsgatt,
            tags: Some(vec!["compensation".into(), "biodiversity".into()]),
            mitigation_strategy_ids: Some(vec!["mit-4".into()]),
            response: Some(
                "A comprehensive habitat restoration plan is included, with restoration of \
                 50 hectares including native vegetation planting and wetland restoration."
                    .into(),
            ),
            response_date: Some(day("2024-11-18")),
            response_author: Some(cowi_consultant()),
            ..Default::default()
        },
        // -- Project 1: other ------------------------------------------------
        Comment {
            id: "comment-4".into(),
            project_id: "proj-1".into(),
            content: "Will this project affect my property value?".into(),
            comment_type: CommentType::OutOfScope,
            environmental_category: EnvironmentalCategory::Other,
            stakeholder_id: "stake-4".into(),
            stakeholder_name: "Local Resident".into(),
            stakeholder_type: StakeholderType::Public,
            status: CommentStatus::Final,
            priority: Priority::Low,
            created_at: day("2024-11-10"),
            updated_at: day("2024-11-12"),
            source: CommentSource::Manual,
            response: Some(
                "Property value impacts are outside the scope of the EIA process. Please \
                 consult with local real estate professionals."
                    .into(),
            ),
            response_date: Some(day("2024-11-12")),
            response_author: Some(landsvirkjun_pm()),
            ..Default::default()
        },
        // -- Project 2 -------------------------------------------------------
        Comment {
            id: "comment-9".into(),
            project_id: "proj-2".into(),
            content: "Offshore wind turbines may interfere with shipping lanes and fishing \
                      activities in the area. What measures are being taken to ensure safe \
                      navigation?"
                .into(),
            comment_type: CommentType::Substantive,
            environmental_category: EnvironmentalCategory::Other,
            stakeholder_id: "stake-5".into(),
            stakeholder_name: "Mýrdalshreppur Municipality".into(),
            stakeholder_type: StakeholderType::Municipality,
            status: CommentStatus::PendingReview,
            priority: Priority::High,
            created_at: day("2024-12-18"),
            updated_at: day("2024-12-18"),
            source: CommentSource::Skipulagsgatt,
            tags: Some(vec![
                "shipping".into(),
                "navigation".into(),
                "fishing".into(),
            ]),
            ..Default::default()
        },
        Comment {
            id: "comment-10".into(),
            project_id: "proj-2".into(),
            content: "Marine mammal impact assessment is crucial for this offshore project. \
                      Please include detailed studies on potential effects on seals and \
                      whales in the area."
                .into(),
            comment_type: CommentType::Technical,
            environmental_category: EnvironmentalCategory::Other,
            stakeholder_id: "stake-2".into(),
            stakeholder_name: "Umhverfisstofnun".into(),
            stakeholder_type: StakeholderType::MandatoryAgency,
            status: CommentStatus::Assigned,
            priority: Priority::High,
            created_at: day("2024-12-20"),
            updated_at: day("2024-12-20"),
            source: CommentSource::Skipulagsgatt,
            tags: Some(vec![
                "marine-mammals".into(),
                "seals".into(),
                "whales".into(),
            ]),
            ..Default::default()
        },
        Comment {
            id: "comment-11".into(),
            project_id: "proj-2".into(),
            content: "Will the construction and operation of offshore turbines affect local \
                      seabird colonies? The area is known for important nesting sites."
                .into(),
            comment_type: CommentType::Substantive,
            environmental_category: EnvironmentalCategory::Birds,
            stakeholder_id: "stake-3".into(),
            stakeholder_name: "Icelandic Ornithological Society".into(),
            stakeholder_type: StakeholderType::SpecialInterestGroup,
            status: CommentStatus::PendingReview,
            priority: Priority::High,
            created_at: day("2024-12-22"),
            updated_at: day("2024-12-22"),
            source: CommentSource::Email,
            tags: Some(vec!["seabirds".into(), "nesting-sites".into()]),
            ..Default::default()
        },
    ]
}

fn sample_timeline() -> Vec<TimelineEvent> {
    vec![
        // -- Project 1 -------------------------------------------------------
        TimelineEvent {
            id: "timeline-1".into(),
            project_id: "proj-1".into(),
            title: "EIA Scoping Phase Complete".into(),
            description: "Initial scoping phase completed, baseline environmental studies \
                          initiated"
                .into(),
            event_type: TimelineEventType::Milestone,
            date: day("2024-10-15"),
            status: TimelineEventStatus::Completed,
            is_public: true,
            ..Default::default()
        },
        TimelineEvent {
            id: "timeline-2".into(),
            project_id: "proj-1".into(),
            title: "Public Comment Period Opens".into(),
            description: "6-week public comment period begins. All stakeholders can submit \
                          feedback through Skipulagsgátt or directly"
                .into(),
            event_type: TimelineEventType::Deadline,
            date: day("2024-11-01"),
            status: TimelineEventStatus::Completed,
            is_public: true,
            ..Default::default()
        },
        TimelineEvent {
            id: "timeline-3".into(),
            project_id: "proj-1".into(),
            title: "Public Comment Period Closes".into(),
            description: "Last day to submit comments. All submissions must be received by \
                          end of day"
                .into(),
            event_type: TimelineEventType::Deadline,
            date: day("2024-12-13"),
            status: TimelineEventStatus::Upcoming,
            is_public: true,
            ..Default::default()
        },
        TimelineEvent {
            id: "timeline-4".into(),
            project_id: "proj-1".into(),
            title: "Public Information Meeting".into(),
            description: "Public meeting to discuss project details, address community \
                          concerns, and present mitigation strategies"
                .into(),
            event_type: TimelineEventType::Meeting,
            date: day("2024-12-20"),
            status: TimelineEventStatus::Upcoming,
            is_public: true,
            location: Some("Mýrdalshreppur Community Center".into()),
            related_comment_ids: Some(vec!["comment-1".into(), "comment-5".into()]),
            ..Default::default()
        },
        TimelineEvent {
            id: "timeline-5".into(),
            project_id: "proj-1".into(),
            title: "Response to Comments Due".into(),
            description: "All substantive comments must have responses prepared and included \
                          in updated EIA document"
                .into(),
            event_type: TimelineEventType::Deadline,
            date: day("2025-01-15"),
            status: TimelineEventStatus::Upcoming,
            is_public: true,
            ..Default::default()
        },
        TimelineEvent {
            id: "timeline-6".into(),
            project_id: "proj-1".into(),
            title: "Final EIA Submission".into(),
            description: "Complete EIA document with all responses submitted to \
                          Skipulagsstofnun for review"
                .into(),
            event_type: TimelineEventType::Submission,
            date: day("2025-02-01"),
            status: TimelineEventStatus::Upcoming,
            is_public: true,
            ..Default::default()
        },
        TimelineEvent {
            id: "timeline-7".into(),
            project_id: "proj-1".into(),
            title: "Permit Decision Expected".into(),
            description: "Skipulagsstofnun review period complete. Decision on permit \
                          approval expected"
                .into(),
            event_type: TimelineEventType::Decision,
            date: day("2025-04-15"),
            status: TimelineEventStatus::Upcoming,
            is_public: true,
            ..Default::default()
        },
        // -- Project 2 -------------------------------------------------------
        TimelineEvent {
            id: "timeline-8".into(),
            project_id: "proj-2".into(),
            title: "Project Scoping Phase".into(),
            description: "Initial scoping and baseline environmental studies for offshore \
                          wind farm project"
                .into(),
            event_type: TimelineEventType::Milestone,
            date: day("2024-11-20"),
            status: TimelineEventStatus::InProgress,
            is_public: true,
            ..Default::default()
        },
        TimelineEvent {
            id: "timeline-9".into(),
            project_id: "proj-2".into(),
            title: "Public Comment Period Opens".into(),
            description: "6-week public comment period begins for Hafið Wind Farm. Community \
                          feedback welcomed on all aspects of the project."
                .into(),
            event_type: TimelineEventType::Deadline,
            date: day("2024-12-15"),
            status: TimelineEventStatus::Upcoming,
            is_public: true,
            ..Default::default()
        },
        TimelineEvent {
            id: "timeline-10".into(),
            project_id: "proj-2".into(),
            title: "Public Comment Period Closes".into(),
            description: "Last day to submit comments on the project. All submissions must \
                          be received by end of day."
                .into(),
            event_type: TimelineEventType::Deadline,
            date: day("2025-01-31"),
            status: TimelineEventStatus::Upcoming,
            is_public: true,
            ..Default::default()
        },
        TimelineEvent {
            id: "timeline-11".into(),
            project_id: "proj-2".into(),
            title: "Public Scoping Meeting".into(),
            description: "Public meeting to discuss project scope, environmental concerns, \
                          and gather initial community feedback"
                .into(),
            event_type: TimelineEventType::Meeting,
            date: day("2025-01-10"),
            status: TimelineEventStatus::Upcoming,
            is_public: true,
            location: Some("Ísafjörður Community Center".into()),
            ..Default::default()
        },
        TimelineEvent {
            id: "timeline-12".into(),
            project_id: "proj-2".into(),
            title: "Environmental Assessment Begins".into(),
            description: "Detailed environmental impact assessment phase begins after \
                          scoping comments are reviewed"
                .into(),
            event_type: TimelineEventType::Milestone,
            date: day("2025-02-15"),
            status: TimelineEventStatus::Upcoming,
            is_public: true,
            ..Default::default()
        },
    ]
}

fn sample_meetings() -> Vec<PublicMeeting> {
    vec![PublicMeeting {
        id: "meeting-1".into(),
        project_id: "proj-1".into(),
        title: "Public Information Meeting - Búrfellslundur Wind Farm".into(),
        description: "Join us for a public information meeting about the proposed wind farm \
                      project. We will discuss the environmental assessment, address \
                      community concerns, and present mitigation strategies."
            .into(),
        date: day("2024-12-20"),
        location: "Mýrdalshreppur Community Center, Hvolsvöllur".into(),
        format: MeetingFormat::InPerson,
        agenda: Some(vec![
            "Project overview and timeline".into(),
            "Environmental impact assessment summary".into(),
            "Community concerns and responses".into(),
            "Mitigation strategies".into(),
            "Q&A session".into(),
        ]),
        related_comment_ids: Some(vec!["comment-1".into(), "comment-5".into()]),
        ..Default::default()
    }]
}
