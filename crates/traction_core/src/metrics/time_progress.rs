//! Elapsed-time ratio and schedule pacing classification.
//!
//! # Responsibility
//! - Compare how much of a project's time window has elapsed against how much
//!   of its work is done.
//!
//! # Invariants
//! - `percent` is clamped to `0..=100`; a window of zero or negative length
//!   reads as fully elapsed, never a division error.
//! - The pacing slack is a fixed business rule of 15 percentage points.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::metrics::progress::round_ratio_percent;
use crate::model::dates::{days_between, midnight_of};

/// Slack, in percentage points, granted before elapsed time counts as
/// "behind". Fixed business rule; callers must not tune it per project.
pub const PACING_SLACK_POINTS: u8 = 15;

/// How far through its time window a project is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeProgress {
    /// Elapsed share of the window, clamped to `0..=100`.
    pub percent: u8,
    /// Signed whole days since creation; negative when `today` predates it.
    pub elapsed_days: i64,
    /// Whole days from creation to deadline; zero or negative windows are
    /// reported as-is while `percent` saturates at 100.
    pub total_days: i64,
}

/// Three-way schedule classification against task completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pacing {
    /// Elapsed time exceeds task progress by more than the slack.
    Behind,
    /// Task progress has kept up with elapsed time.
    OnTrack,
    /// Inside the slack band: not behind yet, worth watching.
    ToMonitor,
}

/// Computes the elapsed-vs-total time ratio for a project window.
///
/// Rules:
/// - `None` when no due date is set; sentinel strings were already stripped
///   at the boundary.
/// - Both endpoints and `today` are midnight-normalized before subtraction,
///   so intraday drift cannot produce off-by-one-day ratios.
/// - `total_days <= 0` (deadline on or before creation) yields `percent ==
///   100`.
pub fn time_progress(
    created_at: DateTime<Utc>,
    due_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<TimeProgress> {
    let due = due_date?;
    let created = midnight_of(created_at);

    let total_days = days_between(created, due);
    let elapsed_days = days_between(created, today);
    let percent = if total_days <= 0 {
        100
    } else {
        round_ratio_percent(elapsed_days as f64, total_days as f64)
    };

    Some(TimeProgress {
        percent,
        elapsed_days,
        total_days,
    })
}

/// Classifies schedule pacing from task progress and elapsed time.
///
/// Rules (fixed thresholds, checked in order):
/// - `Behind` when `time.percent > task_percent + PACING_SLACK_POINTS`.
/// - `OnTrack` when `task_percent >= time.percent`.
/// - `ToMonitor` otherwise.
pub fn classify_pacing(task_percent: u8, time: &TimeProgress) -> Pacing {
    let time_percent = u16::from(time.percent);
    let task_percent = u16::from(task_percent);

    if time_percent > task_percent + u16::from(PACING_SLACK_POINTS) {
        Pacing::Behind
    } else if task_percent >= time_percent {
        Pacing::OnTrack
    } else {
        Pacing::ToMonitor
    }
}
