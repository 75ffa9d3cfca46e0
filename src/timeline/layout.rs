//! Full timeline layout.

use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use super::{layout_lanes, Band, BarPosition, Lane, TimelineWindow};
use crate::error::Result;
use crate::models::Delivery;

/// Everything needed to draw one timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLayout {
    pub window: TimelineWindow,
    /// Quarter header bands.
    pub quarters: Vec<Band>,
    /// Month tick bands.
    pub months: Vec<Band>,
    /// Bar placement per delivery id.
    pub positions: HashMap<String, BarPosition>,
    /// Category lanes with row offsets.
    pub lanes: Vec<Lane>,
}

impl TimelineLayout {
    /// Placement of one delivery.
    pub fn position(&self, delivery_id: &str) -> Option<BarPosition> {
        self.positions.get(delivery_id).copied()
    }

    /// Total rows across all lanes.
    pub fn row_count(&self) -> usize {
        self.lanes.iter().map(Lane::row_count).sum()
    }
}

/// Lays out deliveries on an arbitrary window.
pub fn layout_window(deliveries: &[Delivery], window: TimelineWindow) -> TimelineLayout {
    let positions: HashMap<String, BarPosition> = deliveries
        .iter()
        .map(|d| (d.id.clone(), window.position(d.start_date, d.end_date)))
        .collect();
    let lanes = layout_lanes(deliveries, &window);

    debug!(
        start = %window.start(),
        end = %window.end(),
        deliveries = deliveries.len(),
        lanes = lanes.len(),
        "laid out timeline"
    );

    TimelineLayout {
        quarters: window.quarters(),
        months: window.months(),
        positions,
        lanes,
        window,
    }
}

/// Lays out deliveries on the calendar year `year` (four quarters).
///
/// Fails only for years chrono cannot represent.
pub fn layout_year(deliveries: &[Delivery], year: i32) -> Result<TimelineLayout> {
    let window = TimelineWindow::year(year)?;
    Ok(layout_window(deliveries, window))
}
