//! Deadline distance and presentation buckets.
//!
//! # Responsibility
//! - Turn an optional due date into a signed days-remaining count.
//! - Map that count onto the fixed label and styling buckets the UI uses.
//!
//! # Invariants
//! - Absent dates yield `None`, never an error.
//! - Bucket thresholds (`0..=3` urgent, `< 0` overdue) are fixed and shared
//!   by every caller that styles deadlines.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::dates::days_between;

/// Upper bound, inclusive, of the "urgent" styling bucket.
pub const URGENT_WINDOW_DAYS: i64 = 3;

/// Signed distance to a deadline plus its presentation label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineStatus {
    /// Whole days from `today` to the deadline; negative when past due.
    pub days_remaining: i64,
    /// Human-readable distance ("Today", "In 4 days", "2 days ago").
    pub label: String,
    /// `days_remaining < 0`.
    pub overdue: bool,
    /// `0 <= days_remaining <= URGENT_WINDOW_DAYS`.
    pub urgent: bool,
}

/// Signed whole days from `today` until `due_date`.
///
/// Returns `None` when no date is set. Sentinel strings and unparseable
/// input were already collapsed to `None` at the boundary, so absence is the
/// only "no answer" case left here.
pub fn days_until(due_date: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    due_date.map(|due| days_between(today, due))
}

/// Presentation label for a signed days-remaining count.
///
/// Rules:
/// - `< 0` -> "{n} days ago" (n absolute; "1 day ago" stays singular).
/// - `0` -> "Today", `1` -> "Tomorrow".
/// - `> 1` -> "In {n} days".
pub fn deadline_label(days_remaining: i64) -> String {
    match days_remaining {
        -1 => "1 day ago".to_string(),
        days if days < 0 => format!("{} days ago", -days),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        days => format!("In {days} days"),
    }
}

/// Classifies an optional due date into the full deadline status record.
pub fn deadline_status(due_date: Option<NaiveDate>, today: NaiveDate) -> Option<DeadlineStatus> {
    let days_remaining = days_until(due_date, today)?;
    Some(DeadlineStatus {
        days_remaining,
        label: deadline_label(days_remaining),
        overdue: days_remaining < 0,
        urgent: (0..=URGENT_WINDOW_DAYS).contains(&days_remaining),
    })
}
