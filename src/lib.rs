//! Roadmap timeline engine.
//!
//! Turns a flat collection of deliveries, sub-deliveries and milestones
//! into the derived views a roadmap UI renders. Every operation is a pure,
//! synchronous function of its inputs: no I/O, no clocks, no shared state.
//! Persistence, authentication and rendering live outside this crate.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Delivery`, `SubDelivery`, `Milestone`,
//!   `PhaseKey`, `DateRange`
//! - **`alerts`**: Deadline classification into urgency tiers and a sorted feed
//! - **`phases`**: Phase grouping and drag-and-drop reordering
//! - **`timeline`**: Proportional bar layout, quarter bands, category lanes,
//!   linked-delivery lookup
//! - **`palette`**: Deterministic phase → color mapping
//! - **`filter`**: Delivery filtering and sorting
//! - **`summary`**: Roadmap-wide indicators
//! - **`validation`**: Input integrity checks (duplicate IDs, intervals, links)
//! - **`config`**: TOML-loadable thresholds and palette overrides
//!
//! # Time
//!
//! Dates are calendar days (`chrono::NaiveDate`). Functions that depend on
//! the current time take it as a parameter.

pub mod alerts;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod palette;
pub mod phases;
pub mod summary;
pub mod timeline;
pub mod validation;

pub use error::{Error, Result};
