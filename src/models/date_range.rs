//! Calendar date intervals.
//!
//! All roadmap dates are whole calendar days. A [`DateRange`] is a closed
//! interval: both `start` and `end` belong to it, so a range whose start
//! equals its end lasts one day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Signed number of whole days from `earlier` to `later`.
///
/// Positive when `later` is after `earlier`, negative when it is before.
#[inline]
pub fn days_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

/// A closed calendar interval [start, end].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range. No ordering is enforced; see [`is_inverted`](Self::is_inverted).
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A one-day range.
    pub fn single(day: NaiveDate) -> Self {
        Self::new(day, day)
    }

    /// Number of days covered, counting both ends.
    ///
    /// Zero or negative for inverted ranges.
    #[inline]
    pub fn duration_days(&self) -> i64 {
        days_between(self.end, self.start) + 1
    }

    /// Whether `end` precedes `start`.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Whether a day falls within this range.
    #[inline]
    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// Whether two ranges share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
