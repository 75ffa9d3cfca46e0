//! Delivery model.
//!
//! A delivery is a top-level roadmap item with a date range. It owns its
//! sub-deliveries and may reference other deliveries by id through
//! `linked_deliveries` (a non-owning relation).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::status::{
    clamp_percent, clamp_progress, deserialize_nullable_vec, deserialize_progress,
};
use super::{Complexity, DateRange, DeliveryStatus, PhaseKey, Priority, SubDelivery};
use crate::palette::Palette;

/// A planned roadmap item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    /// Unique identifier.
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub complexity: Complexity,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: DeliveryStatus,
    /// Percent complete (0..=100).
    #[serde(default, deserialize_with = "deserialize_progress")]
    pub progress: u8,
    /// Free-text phase label. `None` or blank means unphased.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_phase: Option<String>,
    /// Explicit color override. `None` = derived from the phase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_color: Option<String>,
    #[serde(default)]
    pub responsible: String,
    /// Team name; drives timeline lane bucketing.
    #[serde(default)]
    pub team: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jira_link: Option<String>,
    /// Owned children, in display order.
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub sub_deliveries: Vec<SubDelivery>,
    /// Ids of related deliveries.
    #[serde(
        default,
        deserialize_with = "deserialize_nullable_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub linked_deliveries: Vec<String>,
}

impl Delivery {
    /// Creates a not-started delivery spanning `start..=end`.
    pub fn new(id: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: String::new(),
            start_date,
            end_date,
            complexity: Complexity::default(),
            priority: Priority::default(),
            status: DeliveryStatus::NotStarted,
            progress: 0,
            delivery_phase: None,
            delivery_color: None,
            responsible: String::new(),
            team: String::new(),
            jira_link: None,
            sub_deliveries: Vec::new(),
            linked_deliveries: Vec::new(),
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

    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = complexity;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: DeliveryStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets progress, clamped to 0..=100.
    pub fn with_progress(mut self, progress: i64) -> Self {
        self.progress = clamp_percent(progress);
        self
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.delivery_phase = Some(phase.into());
        self
    }

    /// Overrides the phase-derived color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.delivery_color = Some(color.into());
        self
    }

    pub fn with_responsible(mut self, responsible: impl Into<String>) -> Self {
        self.responsible = responsible.into();
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    pub fn with_jira_link(mut self, link: impl Into<String>) -> Self {
        self.jira_link = Some(link.into());
        self
    }

    /// Appends a sub-delivery.
    pub fn with_sub_delivery(mut self, sub: SubDelivery) -> Self {
        self.sub_deliveries.push(sub);
        self
    }

    /// Adds a linked delivery id.
    pub fn with_link(mut self, delivery_id: impl Into<String>) -> Self {
        self.linked_deliveries.push(delivery_id.into());
        self
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    /// Grouping key for this delivery's phase.
    pub fn phase_key(&self) -> PhaseKey {
        PhaseKey::from_phase(self.delivery_phase.as_deref())
    }

    /// Color to render: the explicit override, else the built-in phase color.
    pub fn display_color(&self) -> String {
        self.display_color_with(&Palette::default())
    }

    /// Color to render: the explicit override, else the phase color from
    /// `palette`.
    pub fn display_color_with(&self, palette: &Palette) -> String {
        match self.delivery_color.as_deref().map(str::trim) {
            Some(color) if !color.is_empty() => color.to_string(),
            _ => palette.color_for(self.delivery_phase.as_deref()).to_string(),
        }
    }

    /// The planned interval.
    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Planned length in days, counting both ends.
    pub fn duration_days(&self) -> i64 {
        self.date_range().duration_days()
    }

    /// Progress averaged over sub-deliveries.
    ///
    /// A finished sub-delivery counts as 100 regardless of its progress field.
    /// Without sub-deliveries this is the delivery's own progress.
    pub fn rolled_up_progress(&self) -> u8 {
        if self.sub_deliveries.is_empty() {
            return self.progress;
        }
        let sum: u32 = self
            .sub_deliveries
            .iter()
            .map(|s| if s.is_done() { 100 } else { u32::from(s.progress) })
            .sum();
        clamp_progress(f64::from(sum) / self.sub_deliveries.len() as f64)
    }

    /// Finds an owned sub-delivery by id.
    pub fn sub_delivery(&self, id: &str) -> Option<&SubDelivery> {
        self.sub_deliveries.iter().find(|s| s.id == id)
    }

    /// Whether this delivery links to any other.
    pub fn has_links(&self) -> bool {
        !self.linked_deliveries.is_empty()
    }
}
