//! Deadline alerts.
//!
//! Classifies every open delivery, sub-delivery and milestone by how many
//! days remain until its deadline, and produces a feed sorted from most to
//! least urgent together with per-tier counts.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use roadmap_engine::alerts::{compute_alerts, Urgency};
//! use roadmap_engine::models::Delivery;
//!
//! let now = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(9, 30, 0).unwrap();
//! let due = NaiveDate::from_ymd_opt(2025, 1, 18).unwrap();
//! let deliveries = vec![Delivery::new("D1", due, due)];
//!
//! let feed = compute_alerts(&deliveries, &[], now);
//! assert_eq!(feed.alerts[0].urgency, Urgency::Critical);
//! assert_eq!(feed.counts.total, 1);
//! ```

mod classifier;
mod policy;

pub use classifier::{compute_alerts, AlertClassifier};
pub use policy::{AlertPolicy, PeriodAnchor};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::DeliveryStatus;

/// Urgency tier. Ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Critical,
    High,
    Medium,
    Low,
}

impl Urgency {
    /// All tiers, most urgent first.
    pub const ALL: [Urgency; 4] = [Urgency::Critical, Urgency::High, Urgency::Medium, Urgency::Low];
}

/// Entity an alert was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    Milestone,
    Delivery,
    SubDelivery,
}

/// A derived deadline alert. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateAlert {
    /// Id of the source entity.
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    /// The deadline that was evaluated.
    pub date: NaiveDate,
    /// Signed days from today to `date`.
    pub days_until: i64,
    pub urgency: Urgency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Title of the owning delivery (sub-delivery alerts only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_delivery: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DeliveryStatus>,
}

impl DateAlert {
    /// Whether the deadline has passed.
    pub fn is_overdue(&self) -> bool {
        self.days_until < 0
    }
}

/// Alert tallies per tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub total: usize,
}

impl AlertCounts {
    /// Counts one alert of the given tier.
    pub fn record(&mut self, urgency: Urgency) {
        match urgency {
            Urgency::Critical => self.critical += 1,
            Urgency::High => self.high += 1,
            Urgency::Medium => self.medium += 1,
            Urgency::Low => self.low += 1,
        }
        self.total += 1;
    }

    /// Count for one tier.
    pub fn of(&self, urgency: Urgency) -> usize {
        match urgency {
            Urgency::Critical => self.critical,
            Urgency::High => self.high,
            Urgency::Medium => self.medium,
            Urgency::Low => self.low,
        }
    }
}

/// Sorted alerts and their counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertFeed {
    pub alerts: Vec<DateAlert>,
    pub counts: AlertCounts,
}

impl AlertFeed {
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Alerts of one tier, in feed order.
    pub fn with_urgency(&self, urgency: Urgency) -> impl Iterator<Item = &DateAlert> + '_ {
        self.alerts.iter().filter(move |a| a.urgency == urgency)
    }

    /// Finds the alert for an entity id.
    pub fn find(&self, id: &str) -> Option<&DateAlert> {
        self.alerts.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_order() {
        assert!(Urgency::Critical < Urgency::High);
        assert!(Urgency::Medium < Urgency::Low);
        let mut tiers = vec![Urgency::Low, Urgency::Critical, Urgency::Medium, Urgency::High];
        tiers.sort();
        assert_eq!(tiers, Urgency::ALL.to_vec());
    }

    #[test]
    fn test_counts_record() {
        let mut counts = AlertCounts::default();
        counts.record(Urgency::Critical);
        counts.record(Urgency::Critical);
        counts.record(Urgency::Low);
        assert_eq!(counts.of(Urgency::Critical), 2);
        assert_eq!(counts.of(Urgency::High), 0);
        assert_eq!(counts.low, 1);
        assert_eq!(counts.total, 3);
    }

    #[test]
    fn test_alert_wire_shape() {
        let alert = DateAlert {
            id: "S1".into(),
            title: "Schema".into(),
            kind: AlertKind::SubDelivery,
            date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
            days_until: 5,
            urgency: Urgency::High,
            color: None,
            parent_delivery: Some("API".into()),
            status: Some(DeliveryStatus::InProgress),
        };
        let value = serde_json::to_value(&alert).unwrap();
        assert_eq!(value["type"], "sub-delivery");
        assert_eq!(value["daysUntil"], 5);
        assert_eq!(value["urgency"], "high");
        assert_eq!(value["parentDelivery"], "API");
        assert!(value.get("color").is_none());
    }
}
