//! Clap CLI definitions for the `um` command.
//!
//! This module defines the complete CLI structure using clap 4 derive macros.

use clap::{Args, Parser, Subcommand};

/// um -- EIA public consultation feedback tracker.
///
/// Tracks public comments on Environmental Impact Assessment projects,
/// together with stakeholders, mitigation strategies, timeline events, and
/// public meetings.
#[derive(Parser, Debug)]
#[command(
    name = "um",
    about = "EIA public consultation feedback tracker",
    long_about = "Tracks public comments on Environmental Impact Assessment projects, together with stakeholders, mitigation strategies, timeline events, and public meetings.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Data directory (default: auto-discover .umsogn/).
    #[arg(long, global = true, env = "UM_DATA")]
    pub data: Option<String>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a consultation workspace in the current directory.
    Init(InitArgs),

    /// List projects under assessment.
    Projects(ProjectsArgs),

    /// Show one project in detail.
    Project(ProjectArgs),

    /// List comments.
    Comments(CommentsArgs),

    /// Add or update a comment.
    #[command(subcommand)]
    Comment(CommentCommands),

    /// Group a project's comments by environmental topic.
    Topics(TopicsArgs),

    /// Show consultation metrics.
    Metrics(MetricsArgs),

    /// List timeline events.
    Timeline(TimelineArgs),

    /// List public meetings.
    Meetings(MeetingsArgs),

    /// List registered stakeholders.
    Stakeholders(StakeholdersArgs),
}

// ---------------------------------------------------------------------------
// Init
// ---------------------------------------------------------------------------

/// Arguments for `um init`.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Start with empty collections instead of the sample data set.
    #[arg(long)]
    pub empty: bool,

    /// Re-initialize even if a workspace already exists.
    #[arg(long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// Arguments for `um projects`.
#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Filter by status (scoping, assessment, public-comment, review,
    /// approved, rejected).
    #[arg(short = 's', long)]
    pub status: Option<String>,
}

/// Arguments for `um project`.
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Project ID (e.g., proj-1).
    pub id: String,
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// Arguments for `um comments`.
#[derive(Args, Debug)]
pub struct CommentsArgs {
    /// Restrict to one project.
    #[arg(short = 'P', long)]
    pub project: Option<String>,

    /// Filter by status (pending-review, assigned, draft-response, final,
    /// resolved).
    #[arg(short = 's', long)]
    pub status: Option<String>,

    /// Filter by environmental category.
    #[arg(short = 'c', long)]
    pub category: Option<String>,

    /// Filter by comment type (technical, procedural, substantive,
    /// out-of-scope).
    #[arg(short = 't', long = "type")]
    pub comment_type: Option<String>,

    /// Show detailed multi-line output for each comment.
    #[arg(long)]
    pub long: bool,
}

/// Subcommands of `um comment`.
#[derive(Subcommand, Debug)]
pub enum CommentCommands {
    /// Add a new comment to a project.
    Add(CommentAddArgs),

    /// Update fields on an existing comment.
    Update(CommentUpdateArgs),
}

/// Arguments for `um comment add`.
#[derive(Args, Debug)]
pub struct CommentAddArgs {
    /// The comment text.
    pub content: String,

    /// Project the comment belongs to.
    #[arg(short = 'P', long)]
    pub project: String,

    /// Stakeholder ID of the submitter.
    #[arg(long)]
    pub stakeholder: String,

    /// Stakeholder display name.
    #[arg(long)]
    pub stakeholder_name: String,

    /// Stakeholder type (public, mandatory-agency, special-interest-group,
    /// municipality, developer).
    #[arg(long, default_value = "public")]
    pub stakeholder_type: String,

    /// Comment type (technical, procedural, substantive, out-of-scope).
    #[arg(short = 't', long = "type", default_value = "substantive")]
    pub comment_type: String,

    /// Environmental category (birds, water, visual-impact, archaeological,
    /// vegetation, noise, traffic, other).
    #[arg(short = 'c', long, default_value = "other")]
    pub category: String,

    /// Priority (low, medium, high, critical).
    #[arg(short = 'p', long, default_value = "medium")]
    pub priority: String,

    /// Submission channel (skipulagsgátt, email, manual, postal).
    #[arg(long, default_value = "manual")]
    pub source: String,

    /// Tags to attach (repeatable).
    #[arg(long = "tag", num_args = 1..)]
    pub tags: Vec<String>,
}

/// Arguments for `um comment update`.
#[derive(Args, Debug)]
pub struct CommentUpdateArgs {
    /// Comment ID (e.g., comment-3).
    pub id: String,

    /// New status (pending-review, assigned, draft-response, final,
    /// resolved).
    #[arg(short = 's', long)]
    pub status: Option<String>,

    /// New priority (low, medium, high, critical).
    #[arg(short = 'p', long)]
    pub priority: Option<String>,

    /// Assign the comment to a handler.
    #[arg(long)]
    pub assign: Option<String>,

    /// Clear the current assignment.
    #[arg(long, conflicts_with = "assign")]
    pub unassign: bool,

    /// Record a response; also sets the response date to now.
    #[arg(short = 'r', long)]
    pub response: Option<String>,

    /// Replace the tags (repeatable).
    #[arg(long = "tag", num_args = 1..)]
    pub tags: Vec<String>,

    /// Flag the comment for discussion at a public meeting.
    #[arg(long)]
    pub flag_meeting: bool,

    /// Remove the public-meeting flag.
    #[arg(long, conflicts_with = "flag_meeting")]
    pub unflag_meeting: bool,
}

// ---------------------------------------------------------------------------
// Topics, metrics
// ---------------------------------------------------------------------------

/// Arguments for `um topics`.
#[derive(Args, Debug)]
pub struct TopicsArgs {
    /// Project whose comments to group.
    #[arg(short = 'P', long)]
    pub project: String,
}

/// Arguments for `um metrics`.
#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Restrict comment-derived metrics to one project.
    #[arg(short = 'P', long)]
    pub project: Option<String>,
}

// ---------------------------------------------------------------------------
// Timeline, meetings, stakeholders
// ---------------------------------------------------------------------------

/// Arguments for `um timeline`.
#[derive(Args, Debug)]
pub struct TimelineArgs {
    /// Restrict to one project.
    #[arg(short = 'P', long)]
    pub project: Option<String>,

    /// Only show events visible to the public.
    #[arg(long)]
    pub public: bool,
}

/// Arguments for `um meetings`.
#[derive(Args, Debug)]
pub struct MeetingsArgs {
    /// Restrict to one project.
    #[arg(short = 'P', long)]
    pub project: Option<String>,
}

/// Arguments for `um stakeholders`.
#[derive(Args, Debug)]
pub struct StakeholdersArgs {
    /// Only show mandatory agencies with an outstanding submission.
    #[arg(long)]
    pub pending: bool,
}
