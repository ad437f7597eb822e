//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Mirror core result types into flat bridge records (string IDs, plain
//!   numbers) so the Dart side never sees Rust-specific types.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Decode failures come back as `ok = false` envelopes, never exceptions.
//! - `today` is resolved exactly once per call and reused for every
//!   computation inside that call.

use chrono::{Local, NaiveDate};
use log::warn;
use traction_core::model::dates::parse_date_like;
use traction_core::{
    core_version as core_version_inner, decode_snapshot, init_logging as init_logging_inner,
    ping as ping_inner, DashboardService, MountainConfig, Pacing, Priority, ProgressSource,
    ProjectCard, ProjectStatus, TimelineRow,
};
use uuid::Uuid;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One project card mirrored for the Dart overview screen.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeProjectCard {
    /// Stable project ID in string form.
    pub project_id: String,
    pub title: String,
    /// API wire spelling (`Not Started|In Progress|Done`).
    pub status: String,
    /// API wire spelling (`Low|Medium|High`).
    pub priority: String,
    pub completed: u32,
    pub total: u32,
    pub percent: u8,
    /// `task_counts` or `status_fallback`.
    pub progress_source: String,
    pub time_percent: Option<u8>,
    pub elapsed_days: Option<i64>,
    pub total_days: Option<i64>,
    /// `behind|on-track|to-monitor` when a time window exists.
    pub pacing: Option<String>,
    pub days_remaining: Option<i64>,
    pub deadline_label: Option<String>,
    pub overdue: bool,
    pub urgent: bool,
}

/// Overview response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewResponse {
    /// False when the snapshot payload could not be decoded.
    pub ok: bool,
    /// Failure detail for display/logging when `ok` is false.
    pub error: Option<String>,
    pub cards: Vec<BridgeProjectCard>,
}

/// Computes overview cards from a raw snapshot payload.
///
/// Input semantics:
/// - `snapshot_json`: the REST payload the shell last fetched.
/// - `today_iso`: `YYYY-MM-DD` reference date; blank or unparseable input
///   falls back to the host clock.
///
/// # FFI contract
/// - Sync, CPU-only call; no I/O.
/// - Never panics; malformed payloads return `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_overview(snapshot_json: String, today_iso: String) -> OverviewResponse {
    let today = resolve_today(&today_iso);
    match decode_snapshot(&snapshot_json) {
        Ok(snapshot) => OverviewResponse {
            ok: true,
            error: None,
            cards: DashboardService::new(snapshot)
                .project_cards(today)
                .into_iter()
                .map(bridge_card)
                .collect(),
        },
        Err(err) => {
            warn!("event=ffi_call_failed module=ffi status=error op=dashboard_overview reason={err}");
            OverviewResponse {
                ok: false,
                error: Some(err.to_string()),
                cards: Vec::new(),
            }
        }
    }
}

/// One timeline row mirrored for the Dart month view.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeTimelineRow {
    pub project_id: String,
    pub title: String,
    /// False when the project's range misses the month (no bar drawn).
    pub has_bar: bool,
    pub left_pct: f64,
    pub width_pct: f64,
}

/// Month timeline response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineResponse {
    pub ok: bool,
    pub error: Option<String>,
    pub rows: Vec<BridgeTimelineRow>,
}

/// Lays out the Gantt-style month view for a raw snapshot payload.
///
/// # FFI contract
/// - Sync, CPU-only call; no I/O.
/// - Never panics; malformed payloads and invalid months return
///   `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn month_timeline(snapshot_json: String, year: i32, month: u32) -> TimelineResponse {
    let snapshot = match decode_snapshot(&snapshot_json) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!("event=ffi_call_failed module=ffi status=error op=month_timeline reason={err}");
            return TimelineResponse {
                ok: false,
                error: Some(err.to_string()),
                rows: Vec::new(),
            };
        }
    };

    match DashboardService::new(snapshot).month_timeline(year, month) {
        Some(rows) => TimelineResponse {
            ok: true,
            error: None,
            rows: rows.into_iter().map(bridge_row).collect(),
        },
        None => TimelineResponse {
            ok: false,
            error: Some(format!("invalid month: {year}-{month:02}")),
            rows: Vec::new(),
        },
    }
}

/// One mountain tier mirrored for the Dart SVG renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeMountainTier {
    pub index: u32,
    pub title: String,
    pub width_top: f64,
    pub width_bottom: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub label_y: f64,
    /// Hex fill color resolved from the fixed palette.
    pub color: String,
    pub done: bool,
    pub opacity: f64,
}

/// Mountain view response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct MountainResponse {
    pub ok: bool,
    pub error: Option<String>,
    pub tiers: Vec<BridgeMountainTier>,
    pub overflow_count: u32,
    pub show_summit_marker: bool,
}

/// Builds the mountain view for one project of a raw snapshot payload.
///
/// Input semantics:
/// - `project_id`: stable project UUID in string form.
/// - `compact`: selects the 5-tier sidebar preset instead of the 15-tier
///   full-page one.
///
/// # FFI contract
/// - Sync, CPU-only call; no I/O.
/// - Never panics; malformed payloads and unknown projects return
///   `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn mountain_view(snapshot_json: String, project_id: String, compact: bool) -> MountainResponse {
    let failed = |error: String| MountainResponse {
        ok: false,
        error: Some(error),
        tiers: Vec::new(),
        overflow_count: 0,
        show_summit_marker: false,
    };

    let id = match Uuid::parse_str(project_id.trim()) {
        Ok(id) => id,
        Err(err) => return failed(format!("invalid project id `{project_id}`: {err}")),
    };
    let snapshot = match decode_snapshot(&snapshot_json) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!("event=ffi_call_failed module=ffi status=error op=mountain_view reason={err}");
            return failed(err.to_string());
        }
    };

    let config = if compact {
        MountainConfig::COMPACT
    } else {
        MountainConfig::FULL
    };
    match DashboardService::new(snapshot).mountain_view(id, &config) {
        Some(view) => MountainResponse {
            ok: true,
            error: None,
            tiers: view
                .tiers
                .into_iter()
                .map(|tier| BridgeMountainTier {
                    index: tier.index as u32,
                    title: tier.title,
                    width_top: tier.width_top,
                    width_bottom: tier.width_bottom,
                    y_top: tier.y_top,
                    y_bottom: tier.y_bottom,
                    label_y: tier.label_y,
                    color: traction_core::TIER_PALETTE[tier.color_index].to_string(),
                    done: tier.done,
                    opacity: tier.opacity,
                })
                .collect(),
            overflow_count: view.overflow_count as u32,
            show_summit_marker: view.show_summit_marker,
        },
        None => failed(format!("unknown project: {id}")),
    }
}

/// Resolves the reference date for one call, host clock as fallback.
fn resolve_today(today_iso: &str) -> NaiveDate {
    parse_date_like(today_iso).unwrap_or_else(|| Local::now().date_naive())
}

fn bridge_card(card: ProjectCard) -> BridgeProjectCard {
    BridgeProjectCard {
        project_id: card.project_id.to_string(),
        title: card.title,
        status: status_label(card.status).to_string(),
        priority: priority_label(card.priority).to_string(),
        completed: card.progress.completed as u32,
        total: card.progress.total as u32,
        percent: card.progress.percent,
        progress_source: match card.progress_source {
            ProgressSource::TaskCounts => "task_counts".to_string(),
            ProgressSource::StatusFallback => "status_fallback".to_string(),
        },
        time_percent: card.time.map(|time| time.percent),
        elapsed_days: card.time.map(|time| time.elapsed_days),
        total_days: card.time.map(|time| time.total_days),
        pacing: card.pacing.map(|pacing| pacing_label(pacing).to_string()),
        days_remaining: card.deadline.as_ref().map(|deadline| deadline.days_remaining),
        deadline_label: card.deadline.as_ref().map(|deadline| deadline.label.clone()),
        overdue: card
            .deadline
            .as_ref()
            .map(|deadline| deadline.overdue)
            .unwrap_or(false),
        urgent: card
            .deadline
            .as_ref()
            .map(|deadline| deadline.urgent)
            .unwrap_or(false),
    }
}

fn bridge_row(row: TimelineRow) -> BridgeTimelineRow {
    BridgeTimelineRow {
        project_id: row.project_id.to_string(),
        title: row.title,
        has_bar: row.bar.is_some(),
        left_pct: row.bar.map(|bar| bar.left_pct).unwrap_or(0.0),
        width_pct: row.bar.map(|bar| bar.width_pct).unwrap_or(0.0),
    }
}

fn status_label(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::NotStarted => "Not Started",
        ProjectStatus::InProgress => "In Progress",
        ProjectStatus::Done => "Done",
    }
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "Low",
        Priority::Medium => "Medium",
        Priority::High => "High",
    }
}

fn pacing_label(pacing: Pacing) -> &'static str {
    match pacing {
        Pacing::Behind => "behind",
        Pacing::OnTrack => "on-track",
        Pacing::ToMonitor => "to-monitor",
    }
}
