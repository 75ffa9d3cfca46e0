//! Timeline layout.
//!
//! Turns deliveries into proportional bar positions over a date window,
//! quarter and month header bands, and category lanes. Also resolves the
//! non-owning `linked_deliveries` relation for expansion rows.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use roadmap_engine::models::Delivery;
//! use roadmap_engine::timeline::layout_year;
//!
//! // 2025 spans 364 days; July 2nd is 182 days in.
//! let day = NaiveDate::from_ymd_opt(2025, 7, 2).unwrap();
//! let deliveries = vec![Delivery::new("D1", day, day).with_team("Frontend")];
//!
//! let layout = layout_year(&deliveries, 2025).unwrap();
//! let bar = layout.position("D1").unwrap();
//! assert!((bar.left_percent - 50.0).abs() < 1e-9);
//! assert!((bar.width_percent - 100.0 / 364.0).abs() < 1e-9);
//! assert_eq!(layout.quarters.len(), 4);
//! ```

mod lanes;
mod layout;
mod links;
mod window;

pub use lanes::{layout_lanes, Category, Lane, LaneEntry};
pub use layout::{layout_window, layout_year, TimelineLayout};
pub use links::{linked_from, resolve_links, unresolved_links};
pub use window::{Band, BarPosition, TimelineWindow};
