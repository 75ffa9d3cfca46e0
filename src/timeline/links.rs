//! Linked-delivery lookup.
//!
//! Expansion state (which deliveries are open) belongs to the caller; these
//! functions only resolve ids.

use crate::models::Delivery;

/// Deliveries referenced by `delivery.linked_deliveries`, in `all` order.
///
/// Unknown ids are skipped. An empty link list yields nothing.
pub fn resolve_links<'a>(delivery: &Delivery, all: &'a [Delivery]) -> Vec<&'a Delivery> {
    if !delivery.has_links() {
        return Vec::new();
    }
    all.iter()
        .filter(|candidate| delivery.linked_deliveries.contains(&candidate.id))
        .collect()
}

/// Linked ids with no matching delivery in `all`.
pub fn unresolved_links<'a>(delivery: &'a Delivery, all: &[Delivery]) -> Vec<&'a str> {
    delivery
        .linked_deliveries
        .iter()
        .filter(|id| !all.iter().any(|d| &d.id == *id))
        .map(String::as_str)
        .collect()
}

/// Deliveries whose link list mentions `delivery_id`.
pub fn linked_from<'a>(delivery_id: &str, all: &'a [Delivery]) -> Vec<&'a Delivery> {
    all.iter()
        .filter(|d| d.linked_deliveries.iter().any(|id| id == delivery_id))
        .collect()
}
