//! Task-count completion ratio.
//!
//! # Responsibility
//! - Reduce a task snapshot to completed/total counts and a rounded percent.
//!
//! # Invariants
//! - `percent` is always an integer in `0..=100`; an empty list is the zero
//!   case, never an error or a NaN.

use serde::Serialize;

use crate::model::task::Task;

/// Completion counts plus the rounded ratio the UI renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// Number of tasks with `done == true`.
    pub completed: usize,
    /// Number of tasks observed, with no filtering applied.
    pub total: usize,
    /// `round(completed / total * 100)`, or 0 when there are no tasks.
    pub percent: u8,
}

impl ProgressSummary {
    /// The zero case used for empty snapshots.
    pub const EMPTY: Self = Self {
        completed: 0,
        total: 0,
        percent: 0,
    };

    /// Returns whether every counted task is done and at least one exists.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Computes completion counts over a task snapshot.
///
/// Rules:
/// - Nothing is filtered: `total` is the slice length, `completed` counts
///   `done` flags.
/// - Rounding is half-up on the floating quotient times 100, so 2 of 3 tasks
///   reports 67.
pub fn task_progress(tasks: &[Task]) -> ProgressSummary {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.done).count();
    let percent = if total == 0 {
        0
    } else {
        round_ratio_percent(completed as f64, total as f64)
    };

    ProgressSummary {
        completed,
        total,
        percent,
    }
}

/// Rounds `numerator / denominator * 100` half-up into `0..=100`.
///
/// Shared by the time-progress computation so both ratios round identically.
pub(crate) fn round_ratio_percent(numerator: f64, denominator: f64) -> u8 {
    let percent = (numerator / denominator * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}
