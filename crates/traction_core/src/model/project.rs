//! Project domain model.
//!
//! # Responsibility
//! - Define the typed project record and its status/priority vocabularies.
//! - Match the external API's wire spellings exactly on (de)serialization.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `due_date == None` means "no deadline set"; sentinel strings never reach
//!   this type.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a project record.
pub type ProjectId = Uuid;

/// Workflow state reported by the external API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// No work recorded yet.
    #[serde(rename = "Not Started")]
    NotStarted,
    /// Work underway.
    #[serde(rename = "In Progress")]
    InProgress,
    /// All work finished.
    #[serde(rename = "Done")]
    Done,
}

/// Scheduling priority reported by the external API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Validation failures for project records arriving from the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    /// Project ID is the nil UUID.
    NilId,
    /// Title is empty after trimming.
    BlankTitle,
}

impl std::fmt::Display for ProjectValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "project id must not be the nil uuid"),
            Self::BlankTitle => write!(f, "project title must not be blank"),
        }
    }
}

impl std::error::Error for ProjectValidationError {}

/// A tracked initiative grouping tasks on the dashboard.
///
/// Owned by the external API; consumed here as read-only snapshot data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable global ID used for linking tasks and views.
    pub id: ProjectId,
    /// Short human-readable name.
    pub title: String,
    /// Workflow state; also the zero-task progress fallback input.
    pub status: ProjectStatus,
    /// Scheduling priority, presentation-only for this crate.
    pub priority: Priority,
    /// Optional deadline, already sentinel-stripped at the boundary.
    pub due_date: Option<NaiveDate>,
    /// Creation instant; the origin of all elapsed-time ratios.
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Creates a not-started, medium-priority project with a generated ID.
    ///
    /// Mainly a test and tooling convenience; real records come through the
    /// snapshot boundary with upstream identity.
    pub fn new(title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            status: ProjectStatus::NotStarted,
            priority: Priority::Medium,
            due_date: None,
            created_at,
        }
    }

    /// Checks boundary-level record invariants.
    ///
    /// # Errors
    /// - `NilId` when the ID is the nil UUID.
    /// - `BlankTitle` when the title is empty after trimming.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id.is_nil() {
            return Err(ProjectValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::BlankTitle);
        }
        Ok(())
    }

    /// Midnight-normalized creation date used for day arithmetic.
    pub fn created_on(&self) -> NaiveDate {
        crate::model::dates::midnight_of(self.created_at)
    }
}
