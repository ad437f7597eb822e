//! Task domain model.
//!
//! # Responsibility
//! - Define the typed task record consumed by metric and layout computations.
//! - Keep optional scheduling fields explicit instead of sentinel strings.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `project_id` is the only linkage between a task and its project.
//! - Date fields are midnight-normalized calendar dates or absent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::project::ProjectId;

/// Stable identifier for a task record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Validation failures for task records arriving from the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Task ID is the nil UUID.
    NilId,
    /// Title is empty after trimming.
    BlankTitle,
}

impl std::fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be the nil uuid"),
            Self::BlankTitle => write!(f, "task title must not be blank"),
        }
    }
}

impl std::error::Error for TaskValidationError {}

/// A unit of work tracked on the dashboard.
///
/// Tasks are owned by the external API; this crate only reads snapshots of
/// them, so every field is plain data with no behavior attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Stable global ID used for linking and auditing.
    pub id: TaskId,
    /// Short human-readable summary.
    pub title: String,
    /// Completion flag; the only input to task-count progress.
    pub done: bool,
    /// Optional deadline, already sentinel-stripped at the boundary.
    pub due_date: Option<NaiveDate>,
    /// Optional planned start date.
    pub start_date: Option<NaiveDate>,
    /// Owning project, when the task is linked to one.
    pub project_id: Option<ProjectId>,
}

impl Task {
    /// Creates a new open task with a generated stable ID.
    ///
    /// # Invariants
    /// - Optional scheduling fields are initialized to `None`.
    /// - `done` starts as `false`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            done: false,
            due_date: None,
            start_date: None,
            project_id: None,
        }
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by the snapshot boundary where identity already exists upstream.
    pub fn with_id(id: TaskId, title: impl Into<String>) -> Result<Self, TaskValidationError> {
        let mut task = Self::new(title);
        task.id = id;
        task.validate()?;
        Ok(task)
    }

    /// Checks boundary-level record invariants.
    ///
    /// # Errors
    /// - `NilId` when the ID is the nil UUID.
    /// - `BlankTitle` when the title is empty after trimming.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::BlankTitle);
        }
        Ok(())
    }

    /// Returns whether this task belongs to the given project.
    ///
    /// Association is by explicit foreign key only.
    pub fn belongs_to(&self, project_id: ProjectId) -> bool {
        self.project_id == Some(project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskValidationError};
    use uuid::Uuid;

    #[test]
    fn new_task_starts_open_and_unscheduled() {
        let task = Task::new("write report");
        assert!(!task.id.is_nil());
        assert!(!task.done);
        assert_eq!(task.due_date, None);
        assert_eq!(task.start_date, None);
        assert_eq!(task.project_id, None);
    }

    #[test]
    fn with_id_rejects_nil_uuid() {
        let err = Task::with_id(Uuid::nil(), "invalid").unwrap_err();
        assert_eq!(err, TaskValidationError::NilId);
    }

    #[test]
    fn validate_rejects_blank_title() {
        let mut task = Task::new("x");
        task.title = "   ".to_string();
        assert_eq!(task.validate().unwrap_err(), TaskValidationError::BlankTitle);
    }
}
