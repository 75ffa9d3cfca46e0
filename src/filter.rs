//! Delivery filtering and sorting.
//!
//! The presentation layer narrows the roadmap before laying it out. Filters
//! combine with AND; an unset criterion matches everything.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::{DateRange, Delivery, DeliveryStatus, Milestone, PhaseKey};

/// Composable delivery filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeliveryFilter {
    /// Accepted statuses. Empty = any.
    pub statuses: Vec<DeliveryStatus>,
    pub phase: Option<PhaseKey>,
    /// Case-insensitive substring of the team name.
    pub team: Option<String>,
    /// Case-insensitive substring of title, description or responsible.
    pub query: Option<String>,
    /// Keeps deliveries sharing at least one day with this range.
    pub range: Option<DateRange>,
}

impl DeliveryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts an additional status.
    pub fn with_status(mut self, status: DeliveryStatus) -> Self {
        if !self.statuses.contains(&status) {
            self.statuses.push(status);
        }
        self
    }

    pub fn with_phase(mut self, phase: PhaseKey) -> Self {
        self.phase = Some(phase);
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn within(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Whether a delivery passes every set criterion.
    pub fn matches(&self, delivery: &Delivery) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&delivery.status) {
            return false;
        }
        if let Some(phase) = &self.phase {
            if &delivery.phase_key() != phase {
                return false;
            }
        }
        if let Some(team) = non_blank(&self.team) {
            if !contains_ci(&delivery.team, team) {
                return false;
            }
        }
        if let Some(query) = non_blank(&self.query) {
            let hit = [&delivery.title, &delivery.description, &delivery.responsible]
                .iter()
                .any(|field| contains_ci(field, query));
            if !hit {
                return false;
            }
        }
        if let Some(range) = &self.range {
            if !delivery.date_range().overlaps(range) {
                return false;
            }
        }
        true
    }

    /// Deliveries that pass, in input order.
    pub fn apply(&self, deliveries: &[Delivery]) -> Vec<Delivery> {
        deliveries
            .iter()
            .filter(|d| self.matches(d))
            .cloned()
            .collect()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Sort criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    StartDate,
    EndDate,
    Priority,
    Complexity,
    Progress,
    Title,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Stable sort: deliveries with equal keys keep their input order in
/// both directions.
pub fn sort_deliveries(deliveries: &[Delivery], key: SortKey, order: SortOrder) -> Vec<Delivery> {
    let mut sorted = deliveries.to_vec();
    sorted.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
    sorted
}

fn compare(a: &Delivery, b: &Delivery, key: SortKey) -> Ordering {
    match key {
        SortKey::StartDate => a.start_date.cmp(&b.start_date),
        SortKey::EndDate => a.end_date.cmp(&b.end_date),
        SortKey::Priority => a.priority.cmp(&b.priority),
        SortKey::Complexity => a.complexity.cmp(&b.complexity),
        SortKey::Progress => a.progress.cmp(&b.progress),
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
}

/// Milestones (or milestone periods) sharing a day with `range`.
pub fn milestones_in_range(milestones: &[Milestone], range: &DateRange) -> Vec<Milestone> {
    milestones
        .iter()
        .filter(|m| m.date_range().overlaps(range))
        .cloned()
        .collect()
}
