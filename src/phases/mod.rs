//! Phase grouping and drag-and-drop reordering.
//!
//! Pure transformations over delivery lists: grouping by phase, moving a
//! delivery within a list or into another phase, and reordering the phase
//! buckets themselves. Callers translate gesture events into plain ids and
//! hand the returned lists to the persistence layer.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use roadmap_engine::models::{Delivery, PhaseKey};
//! use roadmap_engine::phases::{group_by_phase, move_to_phase, reorder_within_list};
//!
//! let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let deliveries = vec![
//!     Delivery::new("a", day, day).with_phase("Onda 1"),
//!     Delivery::new("b", day, day),
//! ];
//!
//! let reordered = reorder_within_list(&deliveries, "b", "a");
//! assert_eq!(reordered[0].id, "b");
//!
//! let moved = move_to_phase(&reordered, "b", &PhaseKey::from_label("Onda 1"));
//! assert_eq!(group_by_phase(&moved).len(), 1);
//! ```

mod grouping;
mod reorder;

pub use grouping::{group_by_phase, group_by_phase_with_order, PhaseGroup, PhaseGroups};
pub use reorder::{
    move_to_phase, reorder_by, reorder_phase_groups, reorder_sub_deliveries, reorder_within_list,
};
