//! Category lanes.
//!
//! Deliveries are bucketed into lanes by a keyword found in their team
//! name. Within a lane, rows follow input order; overlapping bars are not
//! rearranged.

use serde::{Deserialize, Serialize};

use super::{BarPosition, TimelineWindow};
use crate::models::Delivery;

/// Timeline lane category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Mobile,
    Devops,
    Design,
    Qa,
    Data,
    Other,
}

impl Category {
    /// All lanes in display order.
    pub const ALL: [Category; 8] = [
        Category::Frontend,
        Category::Backend,
        Category::Mobile,
        Category::Devops,
        Category::Design,
        Category::Qa,
        Category::Data,
        Category::Other,
    ];

    /// Keyword matched against team names. `None` for the default lane.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Category::Frontend => Some("frontend"),
            Category::Backend => Some("backend"),
            Category::Mobile => Some("mobile"),
            Category::Devops => Some("devops"),
            Category::Design => Some("design"),
            Category::Qa => Some("qa"),
            Category::Data => Some("data"),
            Category::Other => None,
        }
    }

    /// Lane for a team name: the first category whose keyword occurs in
    /// the lowercased name, else [`Category::Other`].
    pub fn from_team(team: &str) -> Self {
        let team = team.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.keyword().is_some_and(|k| team.contains(k)))
            .unwrap_or(Category::Other)
    }

    /// Lane marker color.
    pub fn color(self) -> &'static str {
        match self {
            Category::Frontend => "#3B82F6",
            Category::Backend => "#10B981",
            Category::Mobile => "#8B5CF6",
            Category::Devops => "#F97316",
            Category::Design => "#EC4899",
            Category::Qa => "#EAB308",
            Category::Data => "#06B6D4",
            Category::Other => "#6B7280",
        }
    }

    /// Human-readable lane title.
    pub fn label(self) -> &'static str {
        match self {
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
            Category::Mobile => "Mobile",
            Category::Devops => "DevOps",
            Category::Design => "Design",
            Category::Qa => "QA",
            Category::Data => "Data",
            Category::Other => "Other",
        }
    }
}

/// One bar in a lane.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneEntry {
    pub delivery_id: String,
    /// Vertical slot within the lane (0-based, input order).
    pub row: usize,
    pub position: BarPosition,
}

/// Deliveries of one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lane {
    pub category: Category,
    pub entries: Vec<LaneEntry>,
}

impl Lane {
    /// Number of rows the lane occupies.
    pub fn row_count(&self) -> usize {
        self.entries.len()
    }
}

/// Buckets deliveries into lanes.
///
/// Lanes come out in [`Category::ALL`] order; empty lanes are omitted.
pub fn layout_lanes(deliveries: &[Delivery], window: &TimelineWindow) -> Vec<Lane> {
    let mut lanes: Vec<Lane> = Category::ALL
        .into_iter()
        .map(|category| Lane {
            category,
            entries: Vec::new(),
        })
        .collect();

    for delivery in deliveries {
        let category = Category::from_team(&delivery.team);
        // ALL is in declaration order, so the discriminant is the index.
        let lane = &mut lanes[category as usize];
        let row = lane.entries.len();
        lane.entries.push(LaneEntry {
            delivery_id: delivery.id.clone(),
            row,
            position: window.position(delivery.start_date, delivery.end_date),
        });
    }

    lanes.retain(|lane| !lane.entries.is_empty());
    lanes
}
