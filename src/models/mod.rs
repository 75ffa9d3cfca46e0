//! Roadmap domain models.
//!
//! Plain data with builders and small derived accessors. The engines in
//! [`alerts`](crate::alerts), [`phases`](crate::phases) and
//! [`timeline`](crate::timeline) read these types and return new values;
//! nothing here mutates shared state.
//!
//! # Ownership
//!
//! | Type | Owns | References |
//! |------|------|-----------|
//! | Delivery | SubDelivery list | other Delivery ids (`linked_deliveries`) |
//! | SubDelivery | - | - |
//! | Milestone | - | - |

mod date_range;
mod delivery;
mod milestone;
mod phase;
mod status;
mod sub_delivery;

pub use date_range::{days_between, DateRange};
pub use delivery::Delivery;
pub use milestone::Milestone;
pub use phase::{PhaseKey, NO_PHASE_LABEL};
pub use status::{clamp_percent, clamp_progress, Complexity, DeliveryStatus, Priority};
pub use sub_delivery::SubDelivery;

/// Entities addressable by a string id.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Delivery {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for SubDelivery {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Milestone {
    fn id(&self) -> &str {
        &self.id
    }
}
