//! Timeline windows and proportional positioning.
//!
//! A window is a closed date interval. Positions are percentages of the
//! window's span `end - start` (364 days for a common year, 365 for a leap
//! year): a bar starting on the first day has `left_percent == 0` and the
//! last day's marker sits at 100. Bar widths count both ends of the bar, so
//! a one-day bar is `1 / span` wide. Nothing is clipped; bars outside the
//! window get negative or >100 offsets and the renderer decides what to
//! show.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{days_between, DateRange};

/// Horizontal placement of a bar, in percent of the window width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarPosition {
    pub left_percent: f64,
    pub width_percent: f64,
}

impl BarPosition {
    /// Right edge (`left + width`).
    pub fn right_percent(&self) -> f64 {
        self.left_percent + self.width_percent
    }

    /// Whether any part of the bar lies within 0..=100.
    pub fn is_visible(&self) -> bool {
        self.width_percent > 0.0 && self.right_percent() > 0.0 && self.left_percent < 100.0
    }
}

/// A labelled calendar band (quarter or month) placed on the window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Band {
    pub label: String,
    /// The band's days, clipped to the window.
    pub range: DateRange,
    pub position: BarPosition,
}

/// The visible date span of a timeline.
///
/// The span `end - start` is always positive; constructors reject
/// anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TimelineWindow {
    /// Window over `start..=end`.
    ///
    /// Fails with [`Error::DegenerateWindow`] when `end` is not after
    /// `start`, since every position divides by the span.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if days_between(end, start) <= 0 {
            return Err(Error::DegenerateWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// January 1st through December 31st of `year`.
    pub fn year(year: i32) -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(Error::InvalidYear(year))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(Error::InvalidYear(year))?;
        Self::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Span from the first to the last day (364 or 365 for a year).
    #[inline]
    pub fn total_days(&self) -> i64 {
        days_between(self.end, self.start)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// Offset of a day's left edge, in percent.
    pub fn marker_percent(&self, day: NaiveDate) -> f64 {
        days_between(day, self.start) as f64 / self.total_days() as f64 * 100.0
    }

    /// Placement of a closed interval. Inverted intervals get a zero or
    /// negative width.
    pub fn position(&self, start: NaiveDate, end: NaiveDate) -> BarPosition {
        let total = self.total_days() as f64;
        BarPosition {
            left_percent: self.marker_percent(start),
            width_percent: (days_between(end, start) + 1) as f64 / total * 100.0,
        }
    }

    /// Calendar quarters overlapping the window, clipped to it.
    pub fn quarters(&self) -> Vec<Band> {
        self.bands(3, |start| {
            format!("Q{} {}", start.month0() / 3 + 1, start.year())
        })
    }

    /// Calendar months overlapping the window, clipped to it.
    pub fn months(&self) -> Vec<Band> {
        self.bands(1, |start| start.format("%b %Y").to_string())
    }

    fn bands(&self, months_per_band: u32, label: impl Fn(NaiveDate) -> String) -> Vec<Band> {
        let mut bands = Vec::new();
        let first_month = self.start.month0() / months_per_band * months_per_band + 1;
        let Some(mut band_start) = NaiveDate::from_ymd_opt(self.start.year(), first_month, 1)
        else {
            return bands;
        };

        while band_start <= self.end {
            let Some(next_start) = add_months(band_start, months_per_band) else {
                break;
            };
            let Some(band_end) = next_start.pred_opt() else {
                break;
            };
            let range = DateRange::new(band_start.max(self.start), band_end.min(self.end));
            bands.push(Band {
                label: label(band_start),
                range,
                position: self.position(range.start, range.end),
            });
            band_start = next_start;
        }
        bands
    }
}

/// First day of the month `months` after the month of `first_of_month`.
fn add_months(first_of_month: NaiveDate, months: u32) -> Option<NaiveDate> {
    let index = first_of_month.month0() + months;
    NaiveDate::from_ymd_opt(first_of_month.year() + (index / 12) as i32, index % 12 + 1, 1)
}
