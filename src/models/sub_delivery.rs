//! Sub-delivery model.
//!
//! A sub-delivery is a child work item owned by exactly one
//! [`Delivery`](super::Delivery). It has its own dates, status and progress.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::{clamp_percent, deserialize_progress};
use super::{DateRange, DeliveryStatus};

/// A child work item of a delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubDelivery {
    /// Identifier, unique within the parent.
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub responsible: String,
    #[serde(default)]
    pub status: DeliveryStatus,
    /// Percent complete (0..=100).
    #[serde(default, deserialize_with = "deserialize_progress")]
    pub progress: u8,
    /// Completion flag. Kept in step with `status` by the builders.
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira_link: Option<String>,
}

impl SubDelivery {
    /// Creates a not-started sub-delivery spanning `start..=end`.
    pub fn new(id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: String::new(),
            start_date,
            end_date,
            team: String::new(),
            responsible: String::new(),
            status: DeliveryStatus::NotStarted,
            progress: 0,
            completed: false,
            jira_link: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    pub fn with_responsible(mut self, responsible: impl Into<String>) -> Self {
        self.responsible = responsible.into();
        self
    }

    /// Sets the status and the matching `completed` flag.
    pub fn with_status(mut self, status: DeliveryStatus) -> Self {
        self.status = status;
        self.completed = status.is_completed();
        self
    }

    /// Sets progress, clamped to 0..=100.
    pub fn with_progress(mut self, progress: i64) -> Self {
        self.progress = clamp_percent(progress);
        self
    }

    pub fn with_jira_link(mut self, link: impl Into<String>) -> Self {
        self.jira_link = Some(link.into());
        self
    }

    /// Whether this item is finished, by flag or by status.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.completed || self.status.is_completed()
    }

    /// Whether the `completed` flag disagrees with `status`.
    pub fn has_inconsistent_completion(&self) -> bool {
        self.completed != self.status.is_completed()
    }

    /// The planned interval.
    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_status_sets_completed_flag() {
        let s = SubDelivery::new("s1", d(2025, 1, 1), d(2025, 1, 5))
            .with_status(DeliveryStatus::Completed);
        assert!(s.completed);
        assert!(s.is_done());
        assert!(!s.has_inconsistent_completion());

        let s = s.with_status(DeliveryStatus::Blocked);
        assert!(!s.completed);
        assert!(!s.is_done());
    }

    #[test]
    fn test_flag_alone_counts_as_done() {
        let mut s = SubDelivery::new("s1", d(2025, 1, 1), d(2025, 1, 5));
        s.completed = true;
        assert!(s.is_done());
        assert!(s.has_inconsistent_completion());
    }

    #[test]
    fn test_progress_clamped() {
        let s = SubDelivery::new("s1", d(2025, 1, 1), d(2025, 1, 5)).with_progress(140);
        assert_eq!(s.progress, 100);
        let s = s.with_progress(-3);
        assert_eq!(s.progress, 0);
        assert_eq!(s.with_progress(i64::MAX).progress, 100);
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"id":"s1","startDate":"2025-02-01","endDate":"2025-02-10","progress":180}"#;
        let s: SubDelivery = serde_json::from_str(json).unwrap();
        assert_eq!(s.progress, 100);
        assert_eq!(s.status, DeliveryStatus::NotStarted);
        assert!(!s.completed);
    }
}
