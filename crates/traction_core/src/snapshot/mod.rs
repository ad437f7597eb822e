//! API snapshot boundary.
//!
//! # Responsibility
//! - Decode loosely-typed REST payloads into the typed domain model.
//! - Collapse sentinel date strings and unparseable fields at the edge, so
//!   core computations only ever see proper options.
//!
//! # Invariants
//! - Decoding is record-permissive: an invalid task or project is skipped and
//!   logged, it never fails the whole snapshot.
//! - Task-to-project association uses the `projectId` foreign key only.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use log::warn;
use serde::Deserialize;
use uuid::Uuid;

use crate::model::dates::{is_unset_sentinel, parse_date_like};
use crate::model::project::{Priority, Project, ProjectId, ProjectStatus};
use crate::model::task::Task;

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Failure decoding or reading a snapshot payload.
#[derive(Debug)]
pub enum SnapshotError {
    /// Payload is not valid JSON of the expected envelope shape.
    Json(serde_json::Error),
    /// Snapshot file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid snapshot payload: {err}"),
            Self::Io { path, source } => {
                write!(f, "cannot read snapshot file `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Raw envelope as served by the REST API. Every field is optional or
/// defaulted; strictness lives in the per-record conversion below.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPayload {
    #[serde(default)]
    projects: Vec<RawProject>,
    #[serde(default)]
    tasks: Vec<RawTask>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTask {
    id: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    done: bool,
    due_date: Option<String>,
    start_date: Option<String>,
    project_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProject {
    id: Option<String>,
    #[serde(default)]
    title: String,
    status: Option<String>,
    priority: Option<String>,
    due_date: Option<String>,
    created_at: Option<String>,
}

/// Decoded, validated point-in-time view of the API data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Projects in payload order.
    pub projects: Vec<Project>,
    /// Tasks in payload order; ordering feeds the mountain view directly.
    pub tasks: Vec<Task>,
}

impl Snapshot {
    /// Returns whether the snapshot carries no records at all.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.tasks.is_empty()
    }

    /// Looks up one project by stable ID.
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Tasks linked to a project, in payload order.
    ///
    /// Association is by explicit `projectId` equality only; no title or tag
    /// matching is performed.
    pub fn tasks_for_project(&self, id: ProjectId) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.belongs_to(id))
            .collect()
    }
}

/// Decodes a raw API payload into a typed snapshot.
///
/// Rules:
/// - The envelope must be valid JSON; anything else is a `SnapshotError`.
/// - Individual records with missing/invalid identity or title are skipped
///   with a warning, keeping the rest of the snapshot usable.
/// - Sentinel dates (`TBD`, `No Date`) and unparseable date strings collapse
///   to unset options; non-sentinel coercions are logged per field.
pub fn decode_snapshot(json: &str) -> SnapshotResult<Snapshot> {
    let raw: RawPayload = serde_json::from_str(json)?;

    let projects = raw
        .projects
        .into_iter()
        .filter_map(convert_project)
        .collect();
    let tasks = raw.tasks.into_iter().filter_map(convert_task).collect();

    Ok(Snapshot { projects, tasks })
}

/// Reads and decodes a snapshot payload cached on disk.
///
/// The UI shell persists the last REST response and hands the path across
/// the FFI boundary, the same way it hands the log directory.
pub fn load_snapshot_file(path: impl AsRef<Path>) -> SnapshotResult<Snapshot> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_snapshot(&json)
}

fn convert_task(raw: RawTask) -> Option<Task> {
    let id = parse_id("task", raw.id.as_deref())?;

    let task = Task {
        id,
        title: raw.title.trim().to_string(),
        done: raw.done,
        due_date: coerce_date("task", id, "dueDate", raw.due_date.as_deref()),
        start_date: coerce_date("task", id, "startDate", raw.start_date.as_deref()),
        project_id: raw
            .project_id
            .as_deref()
            .and_then(|value| Uuid::parse_str(value.trim()).ok()),
    };

    if let Err(err) = task.validate() {
        warn!("event=snapshot_record_skipped module=snapshot status=invalid kind=task id={id} reason={err}");
        return None;
    }
    Some(task)
}

fn convert_project(raw: RawProject) -> Option<Project> {
    let id = parse_id("project", raw.id.as_deref())?;

    let created_at = match raw.created_at.as_deref().and_then(parse_timestamp) {
        Some(instant) => instant,
        None => {
            warn!("event=snapshot_record_skipped module=snapshot status=invalid kind=project id={id} reason=missing_created_at");
            return None;
        }
    };

    let project = Project {
        id,
        title: raw.title.trim().to_string(),
        status: parse_status(id, raw.status.as_deref()),
        priority: parse_priority(id, raw.priority.as_deref()),
        due_date: coerce_date("project", id, "dueDate", raw.due_date.as_deref()),
        created_at,
    };

    if let Err(err) = project.validate() {
        warn!("event=snapshot_record_skipped module=snapshot status=invalid kind=project id={id} reason={err}");
        return None;
    }
    Some(project)
}

fn parse_id(kind: &str, raw: Option<&str>) -> Option<Uuid> {
    let value = raw.unwrap_or_default().trim();
    match Uuid::parse_str(value) {
        Ok(id) if !id.is_nil() => Some(id),
        _ => {
            warn!("event=snapshot_record_skipped module=snapshot status=invalid kind={kind} reason=bad_id value={value}");
            None
        }
    }
}

/// Coerces one raw date field to an option, logging non-sentinel failures.
fn coerce_date(kind: &str, id: Uuid, field: &str, raw: Option<&str>) -> Option<NaiveDate> {
    let value = raw?;
    let parsed = parse_date_like(value);
    if parsed.is_none() && !is_unset_sentinel(value) {
        warn!("event=snapshot_field_coerced module=snapshot status=unset kind={kind} id={id} field={field}");
    }
    parsed
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&Utc));
    }
    // Date-only creation stamps anchor at midnight UTC.
    parse_date_like(trimmed)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn parse_status(id: Uuid, raw: Option<&str>) -> ProjectStatus {
    match raw.map(str::trim) {
        Some("Not Started") => ProjectStatus::NotStarted,
        Some("In Progress") => ProjectStatus::InProgress,
        Some("Done") => ProjectStatus::Done,
        other => {
            if let Some(value) = other {
                warn!("event=snapshot_field_coerced module=snapshot status=defaulted kind=project id={id} field=status value={value}");
            }
            ProjectStatus::NotStarted
        }
    }
}

fn parse_priority(id: Uuid, raw: Option<&str>) -> Priority {
    match raw.map(str::trim) {
        Some("Low") => Priority::Low,
        Some("Medium") => Priority::Medium,
        Some("High") => Priority::High,
        other => {
            if let Some(value) = other {
                warn!("event=snapshot_field_coerced module=snapshot status=defaulted kind=project id={id} field=priority value={value}");
            }
            Priority::Medium
        }
    }
}
