//! Milestone model.
//!
//! A milestone is either a single day (`is_period == false`) or a period
//! `date..=end_date`. It is independent of deliveries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DateRange;

/// A point-in-time or period marker on the roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The milestone day, or the first day of a period.
    pub date: NaiveDate,
    #[serde(default)]
    pub is_period: bool,
    /// Last day of a period. Present iff `is_period`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub color: String,
}

impl Milestone {
    /// Creates a single-day milestone.
    pub fn point(id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: None,
            date,
            is_period: false,
            end_date: None,
            color: String::new(),
        }
    }

    /// Creates a period milestone spanning `start..=end`.
    pub fn period(id: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            is_period: true,
            end_date: Some(end),
            ..Self::point(id, start)
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Last day covered. A period without `end_date` ends on its start day.
    pub fn end(&self) -> NaiveDate {
        if self.is_period {
            self.end_date.unwrap_or(self.date)
        } else {
            self.date
        }
    }

    /// The covered interval.
    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.date, self.end())
    }
}
