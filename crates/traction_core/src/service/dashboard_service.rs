//! Dashboard use-case service.
//!
//! # Responsibility
//! - Compose the pure metric and layout computations into UI-ready views
//!   over one decoded snapshot.
//! - Own the caller-level rules the pure functions deliberately exclude:
//!   status-derived progress fallback, skipping undated projects before
//!   timeline layout, and empty-state signaling.
//!
//! # Invariants
//! - `today` is captured once per call by the caller and threaded through
//!   every computation, so one view never mixes two "now" readings.
//! - Service methods never fail on data shape; absent inputs surface as
//!   `None` fields the UI renders conditionally.

use chrono::NaiveDate;
use serde::Serialize;

use crate::layout::mountain::{layout_tiers, MountainConfig, MountainView};
use crate::layout::timeline::{layout_bar, TimelineBar, TimelineWindow};
use crate::metrics::deadline::{deadline_status, DeadlineStatus};
use crate::metrics::progress::{task_progress, ProgressSummary};
use crate::metrics::time_progress::{classify_pacing, time_progress, Pacing, TimeProgress};
use crate::model::project::{Priority, ProjectId, ProjectStatus};
use crate::model::task::Task;
use crate::snapshot::Snapshot;

/// Where a card's progress percent came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressSource {
    /// Counted from the project's tasks.
    TaskCounts,
    /// Derived from project status because the project has no tasks.
    StatusFallback,
}

/// Everything one project card on the overview screen renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    pub project_id: ProjectId,
    pub title: String,
    pub status: ProjectStatus,
    pub priority: Priority,
    /// Completion counts; counts are zero under the status fallback.
    pub progress: ProgressSummary,
    pub progress_source: ProgressSource,
    /// Elapsed-time ratio; absent when the project has no due date.
    pub time: Option<TimeProgress>,
    /// Schedule classification; absent whenever `time` is.
    pub pacing: Option<Pacing>,
    /// Deadline distance and label; absent when the project has no due date.
    pub deadline: Option<DeadlineStatus>,
}

/// One row of the month timeline view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRow {
    pub project_id: ProjectId,
    pub title: String,
    /// Bar geometry; `None` when the project's range misses the month, in
    /// which case the UI renders the row label with no bar.
    pub bar: Option<TimelineBar>,
}

/// Read-side facade over one decoded snapshot.
pub struct DashboardService {
    snapshot: Snapshot,
}

impl DashboardService {
    /// Creates a service over an already-decoded snapshot.
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// The underlying snapshot, for callers composing their own views.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Builds one card per project, in snapshot order.
    ///
    /// # Contract
    /// - Projects with tasks report counted progress; projects without tasks
    ///   fall back to status-derived percent (Done 100, In Progress 50,
    ///   Not Started 0) with zero counts.
    /// - `pacing` exists only when a time window exists.
    pub fn project_cards(&self, today: NaiveDate) -> Vec<ProjectCard> {
        self.snapshot
            .projects
            .iter()
            .map(|project| {
                let tasks = self.snapshot.tasks_for_project(project.id);
                let (progress, progress_source) = if tasks.is_empty() {
                    (
                        ProgressSummary {
                            completed: 0,
                            total: 0,
                            percent: status_fallback_percent(project.status),
                        },
                        ProgressSource::StatusFallback,
                    )
                } else {
                    (
                        task_progress(&cloned(&tasks)),
                        ProgressSource::TaskCounts,
                    )
                };

                let time = time_progress(project.created_at, project.due_date, today);
                let pacing = time
                    .as_ref()
                    .map(|window| classify_pacing(progress.percent, window));

                ProjectCard {
                    project_id: project.id,
                    title: project.title.clone(),
                    status: project.status,
                    priority: project.priority,
                    progress,
                    progress_source,
                    time,
                    pacing,
                    deadline: deadline_status(project.due_date, today),
                }
            })
            .collect()
    }

    /// Lays out the Gantt-style month view.
    ///
    /// # Contract
    /// - Returns `None` only for an invalid year/month pair.
    /// - Projects with no due date are skipped before layout; they have no
    ///   renderable range.
    /// - Remaining projects each get a row; `bar` is `None` when the range
    ///   does not intersect the month.
    pub fn month_timeline(&self, year: i32, month: u32) -> Option<Vec<TimelineRow>> {
        let window = TimelineWindow::month(year, month)?;

        Some(
            self.snapshot
                .projects
                .iter()
                .filter_map(|project| {
                    let due = project.due_date?;
                    Some(TimelineRow {
                        project_id: project.id,
                        title: project.title.clone(),
                        bar: layout_bar(&window, project.created_on(), due),
                    })
                })
                .collect(),
        )
    }

    /// Builds the mountain view for one project's ordered tasks.
    ///
    /// Returns `None` for an unknown project. A known project with no tasks
    /// yields the empty view; the UI shows its empty-state message.
    pub fn mountain_view(&self, project_id: ProjectId, config: &MountainConfig) -> Option<MountainView> {
        self.snapshot.project(project_id)?;
        let tasks = cloned(&self.snapshot.tasks_for_project(project_id));
        Some(layout_tiers(&tasks, config))
    }
}

/// Status-derived percent for projects with zero tasks.
///
/// Caller-level business rule; deliberately not part of `task_progress`.
fn status_fallback_percent(status: ProjectStatus) -> u8 {
    match status {
        ProjectStatus::Done => 100,
        ProjectStatus::InProgress => 50,
        ProjectStatus::NotStarted => 0,
    }
}

fn cloned(tasks: &[&Task]) -> Vec<Task> {
    tasks.iter().map(|task| (*task).clone()).collect()
}
