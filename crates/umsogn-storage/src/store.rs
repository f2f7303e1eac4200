//! The in-memory feedback store and its load/seed/persist cycle.

use std::path::{Path, PathBuf};

use chrono::Utc;

use umsogn_core::comment::{Comment, CommentDraft, CommentPatch};
use umsogn_core::idgen;
use umsogn_core::meeting::PublicMeeting;
use umsogn_core::metrics::{Metrics, compute_metrics};
use umsogn_core::mitigation::MitigationStrategy;
use umsogn_core::project::Project;
use umsogn_core::seed;
use umsogn_core::stakeholder::Stakeholder;
use umsogn_core::timeline::TimelineEvent;
use umsogn_core::topics::{CommentGroup, group_by_topic};

use crate::error::Result;
use crate::snapshot;

/// How a store was populated when opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// At least one snapshot slot existed on disk and was read.
    LoadedFromStorage,
    /// No snapshot existed; sample data was seeded and written out.
    SeededDefaults,
    /// No snapshot existed and seeding was not requested.
    Empty,
}

/// Holds all six collections in memory; every mutation rewrites the full
/// snapshot on disk.
///
/// Concurrent stores over the same data directory are last-writer-wins;
/// there is no cross-process locking.
#[derive(Debug)]
pub struct FeedbackStore {
    data_dir: PathBuf,
    projects: Vec<Project>,
    comments: Vec<Comment>,
    stakeholders: Vec<Stakeholder>,
    mitigation_strategies: Vec<MitigationStrategy>,
    timeline_events: Vec<TimelineEvent>,
    public_meetings: Vec<PublicMeeting>,
}

impl FeedbackStore {
    /// Opens the store, seeding sample data when no snapshot exists.
    ///
    /// If no slot file is present under `data_dir`, the sample fixture set is
    /// loaded and persisted, and the outcome is
    /// [`LoadOutcome::SeededDefaults`]. Otherwise the existing snapshot is
    /// read ([`LoadOutcome::LoadedFromStorage`]).
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<(Self, LoadOutcome)> {
        let (mut store, outcome) = Self::load(data_dir)?;
        if outcome != LoadOutcome::Empty {
            return Ok((store, outcome));
        }

        let seeded = seed::sample_data();
        store.projects = seeded.projects;
        store.comments = seeded.comments;
        store.stakeholders = seeded.stakeholders;
        store.mitigation_strategies = seeded.mitigation_strategies;
        store.timeline_events = seeded.timeline_events;
        store.public_meetings = seeded.public_meetings;
        store.persist()?;
        tracing::info!(data_dir = %store.data_dir.display(), "seeded sample data");
        Ok((store, LoadOutcome::SeededDefaults))
    }

    /// Loads the store from an existing snapshot without seeding.
    ///
    /// When no slot file exists the store starts empty and the outcome is
    /// [`LoadOutcome::Empty`]. Slots that exist but fail to read or parse are
    /// logged and fall back to empty collections.
    pub fn load(data_dir: impl Into<PathBuf>) -> Result<(Self, LoadOutcome)> {
        let data_dir = data_dir.into();
        if !snapshot::any_slot_exists(&data_dir) {
            return Ok((Self::empty(data_dir), LoadOutcome::Empty));
        }

        let store = Self {
            projects: snapshot::read_slot(&data_dir, snapshot::PROJECTS_FILE)
                .unwrap_or_default(),
            comments: snapshot::read_slot(&data_dir, snapshot::COMMENTS_FILE)
                .unwrap_or_default(),
            stakeholders: snapshot::read_slot(&data_dir, snapshot::STAKEHOLDERS_FILE)
                .unwrap_or_default(),
            mitigation_strategies: snapshot::read_slot(
                &data_dir,
                snapshot::MITIGATION_STRATEGIES_FILE,
            )
            .unwrap_or_default(),
            timeline_events: snapshot::read_slot(&data_dir, snapshot::TIMELINE_EVENTS_FILE)
                .unwrap_or_default(),
            public_meetings: snapshot::read_slot(&data_dir, snapshot::PUBLIC_MEETINGS_FILE)
                .unwrap_or_default(),
            data_dir,
        };
        Ok((store, LoadOutcome::LoadedFromStorage))
    }

    fn empty(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            projects: Vec::new(),
            comments: Vec::new(),
            stakeholders: Vec::new(),
            mitigation_strategies: Vec::new(),
            timeline_events: Vec::new(),
            public_meetings: Vec::new(),
        }
    }

    /// The directory the snapshot files live in.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Writes all six collections to their snapshot slots.
    pub fn persist(&self) -> Result<()> {
        snapshot::write_slot(&self.data_dir, snapshot::PROJECTS_FILE, &self.projects)?;
        snapshot::write_slot(&self.data_dir, snapshot::COMMENTS_FILE, &self.comments)?;
        snapshot::write_slot(
            &self.data_dir,
            snapshot::STAKEHOLDERS_FILE,
            &self.stakeholders,
        )?;
        snapshot::write_slot(
            &self.data_dir,
            snapshot::MITIGATION_STRATEGIES_FILE,
            &self.mitigation_strategies,
        )?;
        snapshot::write_slot(
            &self.data_dir,
            snapshot::TIMELINE_EVENTS_FILE,
            &self.timeline_events,
        )?;
        snapshot::write_slot(
            &self.data_dir,
            snapshot::PUBLIC_MEETINGS_FILE,
            &self.public_meetings,
        )?;
        Ok(())
    }

    // -- Read accessors ------------------------------------------------------

    /// All projects, in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Looks up one project by id.
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// All comments, in insertion order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Looks up one comment by id.
    pub fn comment(&self, id: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == id)
    }

    /// Comments for one project, in insertion order.
    pub fn comments_for(&self, project_id: &str) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|c| c.project_id == project_id)
            .collect()
    }

    /// All registered stakeholders.
    pub fn stakeholders(&self) -> &[Stakeholder] {
        &self.stakeholders
    }

    /// All mitigation strategies.
    pub fn mitigation_strategies(&self) -> &[MitigationStrategy] {
        &self.mitigation_strategies
    }

    /// Mitigation strategies for one project.
    pub fn mitigation_strategies_for(&self, project_id: &str) -> Vec<&MitigationStrategy> {
        self.mitigation_strategies
            .iter()
            .filter(|m| m.project_id == project_id)
            .collect()
    }

    /// Timeline events, optionally scoped to a project and/or public-only,
    /// sorted ascending by date.
    pub fn timeline_events(
        &self,
        project_id: Option<&str>,
        public_only: bool,
    ) -> Vec<&TimelineEvent> {
        let mut events: Vec<&TimelineEvent> = self
            .timeline_events
            .iter()
            .filter(|e| project_id.is_none_or(|pid| e.project_id == pid))
            .filter(|e| !public_only || e.is_public)
            .collect();
        events.sort_by_key(|e| e.date);
        events
    }

    /// Public meetings, optionally scoped to a project, sorted ascending by
    /// date.
    pub fn public_meetings(&self, project_id: Option<&str>) -> Vec<&PublicMeeting> {
        let mut meetings: Vec<&PublicMeeting> = self
            .public_meetings
            .iter()
            .filter(|m| project_id.is_none_or(|pid| m.project_id == pid))
            .collect();
        meetings.sort_by_key(|m| m.date);
        meetings
    }

    /// Groups one project's comments and mitigation strategies by
    /// environmental category.
    pub fn comments_by_topic(&self, project_id: &str) -> Vec<CommentGroup> {
        let comments: Vec<Comment> = self
            .comments_for(project_id)
            .into_iter()
            .cloned()
            .collect();
        let strategies: Vec<MitigationStrategy> = self
            .mitigation_strategies_for(project_id)
            .into_iter()
            .cloned()
            .collect();
        group_by_topic(&comments, &strategies)
    }

    /// Aggregate metrics, optionally scoped to one project's comments.
    ///
    /// The pending-mandatory-submissions count is always registry-wide; the
    /// stakeholder registry carries no project association to scope by.
    pub fn metrics(&self, project_id: Option<&str>) -> Metrics {
        match project_id {
            Some(pid) => {
                let comments: Vec<Comment> =
                    self.comments_for(pid).into_iter().cloned().collect();
                compute_metrics(&comments, &self.stakeholders)
            }
            None => compute_metrics(&self.comments, &self.stakeholders),
        }
    }

    // -- Mutators ------------------------------------------------------------

    /// Appends a new comment with a fresh time-based id, persists, and
    /// returns the stored record.
    pub fn add_comment(&mut self, draft: CommentDraft) -> Result<Comment> {
        let now = Utc::now();
        let id = idgen::next_comment_id_at(now);
        let comment = draft.into_comment(id, now);
        self.comments.push(comment.clone());
        self.persist()?;
        Ok(comment)
    }

    /// Applies a patch to an existing comment, refreshes `updated_at`,
    /// persists, and returns the updated record.
    ///
    /// Returns `Ok(None)` without writing when no comment has the given id.
    pub fn update_comment(&mut self, id: &str, patch: &CommentPatch) -> Result<Option<Comment>> {
        let Some(comment) = self.comments.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        patch.apply(comment);
        comment.updated_at = Utc::now();
        let updated = comment.clone();
        self.persist()?;
        Ok(Some(updated))
    }
}
