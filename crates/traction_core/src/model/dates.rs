//! Date primitives shared by metric and layout computations.
//!
//! # Responsibility
//! - Recognize sentinel "no date" strings coming from the external API.
//! - Parse API date fields into `NaiveDate` without ever failing hard.
//! - Provide signed whole-day arithmetic on midnight-normalized dates.
//!
//! # Invariants
//! - Parsing is permissive: unset, sentinel and unparseable inputs all
//!   collapse to `None`; no function in this module returns an error.
//! - All day arithmetic happens on `NaiveDate`, so time-of-day and time-zone
//!   drift cannot shift a difference by one day.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid iso date regex"));

/// Literal strings the external API uses in place of an absent date.
const UNSET_SENTINELS: [&str; 2] = ["TBD", "No Date"];

/// Fallback formats tried after strict `YYYY-MM-DD` recognition.
///
/// Kept as a fixed list so the accepted surface is auditable; anything else
/// is treated as "no date".
const FALLBACK_DATE_FORMATS: [&str; 3] = ["%Y/%m/%d", "%m/%d/%Y", "%Y-%m-%d %H:%M:%S"];

/// Returns whether a raw API string means "no date set".
///
/// Rules:
/// - Blank input (empty or whitespace-only) is unset.
/// - Sentinel literals (`TBD`, `No Date`) are matched after trimming,
///   ASCII-case-insensitively, since the upstream API is loosely typed.
pub fn is_unset_sentinel(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return true;
    }
    UNSET_SENTINELS
        .iter()
        .any(|sentinel| trimmed.eq_ignore_ascii_case(sentinel))
}

/// Parses a raw API date field into a calendar date.
///
/// Rules:
/// - Sentinel/blank input returns `None`.
/// - Strict `YYYY-MM-DD` is attempted first; a string that matches the shape
///   but names an impossible date (month 13, day 40) is rejected, not passed
///   to fallbacks.
/// - Otherwise RFC 3339, naive `T`-separated datetimes, and the formats in
///   `FALLBACK_DATE_FORMATS` are tried in order; datetimes are collapsed to
///   their calendar date.
/// - Anything unrecognized returns `None`. This function never errors.
pub fn parse_date_like(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if is_unset_sentinel(trimmed) {
        return None;
    }

    if let Some(caps) = ISO_DATE_RE.captures(trimmed) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.date_naive());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.date());
    }
    for format in FALLBACK_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.date());
        }
    }

    None
}

/// Parses an optional raw API date field, treating `None` as unset.
pub fn parse_optional_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(parse_date_like)
}

/// Signed number of whole days from `from` to `to`.
///
/// Both operands are already midnight-normalized calendar dates, so the
/// result is exact and stable for any time of day the caller sampled.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Collapses a UTC timestamp to its midnight-normalized calendar date.
pub fn midnight_of(instant: DateTime<Utc>) -> NaiveDate {
    instant.date_naive()
}
