//! Month-view bar geometry for the project timeline.
//!
//! # Responsibility
//! - Clip a project's date range to a visible window and express it as
//!   percentage offsets a Gantt-style row can render directly.
//!
//! # Invariants
//! - A range that does not intersect the window produces no bar.
//! - Bar width never falls below the fixed 3% floor, keeping single-day
//!   items visible and clickable.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::dates::days_between;

/// Minimum rendered bar width, in percent of the window.
pub const MIN_BAR_WIDTH_PCT: f64 = 3.0;

/// The visible date span bars are laid out against.
///
/// Usually one calendar month, but any contiguous range works; custom ranges
/// back wider roadmap views and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineWindow {
    start: NaiveDate,
    end: NaiveDate,
    total_days: i64,
}

impl TimelineWindow {
    /// Window covering one calendar month.
    ///
    /// Returns `None` for out-of-range year/month input.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let first_of_next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Self::from_range(start, first_of_next.pred_opt()?)
    }

    /// Window covering an arbitrary inclusive date range.
    ///
    /// Returns `None` when `end` precedes `start`.
    pub fn from_range(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if end < start {
            return None;
        }
        Some(Self {
            start,
            end,
            total_days: days_between(start, end) + 1,
        })
    }

    /// First visible date.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last visible date, inclusive.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of day columns in the window.
    pub fn total_days(&self) -> i64 {
        self.total_days
    }
}

/// Horizontal placement of one bar, in percent of the window width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBar {
    /// Offset of the bar's left edge from the window's left edge.
    pub left_pct: f64,
    /// Bar width, floored at [`MIN_BAR_WIDTH_PCT`].
    pub width_pct: f64,
}

/// Lays out one date range as a bar inside the window.
///
/// Rules:
/// - Empty ranges (`item_end < item_start`) and ranges entirely outside the
///   window produce `None`; the caller simply renders no bar.
/// - The range is clipped to the window, then converted to zero-based day
///   offsets; the end offset is additionally clamped to the last day column.
/// - `left` is the start offset over `total_days`; `width` spans the clipped
///   inclusive day count, floored at 3%.
pub fn layout_bar(
    window: &TimelineWindow,
    item_start: NaiveDate,
    item_end: NaiveDate,
) -> Option<TimelineBar> {
    if item_end < item_start {
        return None;
    }
    if item_start > window.end || item_end < window.start {
        return None;
    }

    let effective_start = item_start.max(window.start);
    let effective_end = item_end.min(window.end);

    let start_day = days_between(window.start, effective_start);
    let end_day = days_between(window.start, effective_end).min(window.total_days - 1);

    let total = window.total_days as f64;
    let left_pct = start_day as f64 / total * 100.0;
    let width_pct = ((end_day - start_day + 1) as f64 / total * 100.0).max(MIN_BAR_WIDTH_PCT);

    Some(TimelineBar {
        left_pct,
        width_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::{layout_bar, TimelineWindow, MIN_BAR_WIDTH_PCT};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn month_window_knows_its_day_count() {
        let january = TimelineWindow::month(2024, 1).expect("valid month");
        assert_eq!(january.total_days(), 31);
        assert_eq!(january.start(), date(2024, 1, 1));
        assert_eq!(january.end(), date(2024, 1, 31));

        // 2024 is a leap year.
        let february = TimelineWindow::month(2024, 2).expect("valid month");
        assert_eq!(february.total_days(), 29);

        let december = TimelineWindow::month(2023, 12).expect("valid month");
        assert_eq!(december.end(), date(2023, 12, 31));
    }

    #[test]
    fn disjoint_ranges_produce_no_bar() {
        let window = TimelineWindow::month(2024, 3).expect("valid month");
        assert_eq!(
            layout_bar(&window, date(2024, 4, 1), date(2024, 4, 10)),
            None
        );
        assert_eq!(
            layout_bar(&window, date(2024, 2, 1), date(2024, 2, 29)),
            None
        );
    }

    #[test]
    fn reversed_ranges_produce_no_bar() {
        let window = TimelineWindow::month(2024, 3).expect("valid month");
        assert_eq!(
            layout_bar(&window, date(2024, 3, 10), date(2024, 3, 5)),
            None
        );
    }

    #[test]
    fn in_month_range_maps_to_day_offsets() {
        let window = TimelineWindow::month(2024, 1).expect("valid month");
        let bar = layout_bar(&window, date(2024, 1, 11), date(2024, 1, 20)).expect("bar exists");
        // Day offsets 10..=19 of 31 columns.
        assert!((bar.left_pct - 10.0 / 31.0 * 100.0).abs() < 1e-9);
        assert!((bar.width_pct - 10.0 / 31.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn overlapping_range_is_clipped_to_the_window() {
        let window = TimelineWindow::month(2024, 1).expect("valid month");
        let bar = layout_bar(&window, date(2023, 12, 15), date(2024, 2, 15)).expect("bar exists");
        assert_eq!(bar.left_pct, 0.0);
        assert!((bar.width_pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn single_day_in_a_31_day_month_stays_above_the_floor() {
        let window = TimelineWindow::month(2024, 1).expect("valid month");
        let bar = layout_bar(&window, date(2024, 1, 5), date(2024, 1, 5)).expect("bar exists");
        // 1/31 is about 3.23%, already above the floor.
        assert!(bar.width_pct >= MIN_BAR_WIDTH_PCT);
        assert!((bar.width_pct - 1.0 / 31.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn width_floor_kicks_in_on_wide_windows() {
        // A 60-day window makes one raw day about 1.67%, below the floor.
        let window =
            TimelineWindow::from_range(date(2024, 1, 1), date(2024, 2, 29)).expect("valid range");
        assert_eq!(window.total_days(), 60);
        let bar = layout_bar(&window, date(2024, 1, 15), date(2024, 1, 15)).expect("bar exists");
        assert_eq!(bar.width_pct, MIN_BAR_WIDTH_PCT);
    }
}
