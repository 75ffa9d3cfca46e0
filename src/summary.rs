//! Roadmap summary figures.
//!
//! Aggregate indicators for dashboard badges.
//!
//! | Figure | Definition |
//! |--------|-----------|
//! | Status counts | Deliveries per status |
//! | Average progress | Mean rolled-up progress |
//! | Completion rate | Completed / total |
//! | Overdue | Not completed and `end_date` before today |
//! | Span | Earliest start to latest end |

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{DateRange, Delivery, DeliveryStatus};

/// Roadmap-wide indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapSummary {
    pub total: usize,
    pub by_status: HashMap<DeliveryStatus, usize>,
    /// Mean of [`Delivery::rolled_up_progress`] (0.0..=100.0).
    pub average_progress: f64,
    /// Fraction of deliveries completed (0.0..=1.0).
    pub completion_rate: f64,
    pub overdue: usize,
    /// Earliest start through latest end. `None` without deliveries.
    pub span: Option<DateRange>,
}

impl RoadmapSummary {
    /// Computes the summary as of `today`.
    pub fn calculate(deliveries: &[Delivery], today: NaiveDate) -> Self {
        let mut by_status: HashMap<DeliveryStatus, usize> =
            DeliveryStatus::ALL.iter().map(|s| (*s, 0)).collect();
        let mut progress_sum: f64 = 0.0;
        let mut overdue = 0;

        for delivery in deliveries {
            *by_status.entry(delivery.status).or_insert(0) += 1;
            progress_sum += f64::from(delivery.rolled_up_progress());
            if !delivery.is_completed() && delivery.end_date < today {
                overdue += 1;
            }
        }

        let total = deliveries.len();
        let (average_progress, completion_rate) = if total == 0 {
            (0.0, 0.0)
        } else {
            let completed = by_status[&DeliveryStatus::Completed];
            (
                progress_sum / total as f64,
                completed as f64 / total as f64,
            )
        };

        let span = match (
            deliveries.iter().map(|d| d.start_date).min(),
            deliveries.iter().map(|d| d.end_date).max(),
        ) {
            (Some(start), Some(end)) => Some(DateRange::new(start, end)),
            _ => None,
        };

        Self {
            total,
            by_status,
            average_progress,
            completion_rate,
            overdue,
            span,
        }
    }

    /// Count for one status.
    pub fn count(&self, status: DeliveryStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}
