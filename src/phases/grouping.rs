//! Phase buckets.

use serde::{Deserialize, Serialize};

use crate::models::{Delivery, PhaseKey};

/// Deliveries sharing one phase, in their input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseGroup {
    pub phase: PhaseKey,
    pub deliveries: Vec<Delivery>,
}

impl PhaseGroup {
    pub fn new(phase: PhaseKey) -> Self {
        Self {
            phase,
            deliveries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.deliveries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }
}

/// Ordered phase buckets.
///
/// Bucket order is meaningful (it is what the user drags around) and each
/// bucket's delivery order is the input order. Every delivery lands in
/// exactly one bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhaseGroups {
    groups: Vec<PhaseGroup>,
}

impl PhaseGroups {
    /// Wraps pre-built groups. Later groups with a repeated key are merged
    /// into the first one.
    pub fn from_groups(groups: Vec<PhaseGroup>) -> Self {
        let mut merged = Self::default();
        for group in groups {
            merged.bucket_mut(&group.phase).deliveries.extend(group.deliveries);
        }
        merged
    }

    /// Buckets in order.
    pub fn groups(&self) -> &[PhaseGroup] {
        &self.groups
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhaseGroup> {
        self.groups.iter()
    }

    /// Bucket keys in order.
    pub fn keys(&self) -> Vec<&PhaseKey> {
        self.groups.iter().map(|g| &g.phase).collect()
    }

    /// Deliveries of one bucket.
    pub fn get(&self, phase: &PhaseKey) -> Option<&[Delivery]> {
        self.groups
            .iter()
            .find(|g| &g.phase == phase)
            .map(|g| g.deliveries.as_slice())
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of deliveries across all buckets.
    pub fn delivery_count(&self) -> usize {
        self.groups.iter().map(PhaseGroup::len).sum()
    }

    /// Flattens back into one list, bucket by bucket.
    pub fn into_deliveries(self) -> Vec<Delivery> {
        self.groups.into_iter().flat_map(|g| g.deliveries).collect()
    }

    pub fn into_groups(self) -> Vec<PhaseGroup> {
        self.groups
    }

    fn bucket_mut(&mut self, phase: &PhaseKey) -> &mut PhaseGroup {
        let index = match self.groups.iter().position(|g| &g.phase == phase) {
            Some(index) => index,
            None => {
                self.groups.push(PhaseGroup::new(phase.clone()));
                self.groups.len() - 1
            }
        };
        &mut self.groups[index]
    }
}

impl IntoIterator for PhaseGroups {
    type Item = PhaseGroup;
    type IntoIter = std::vec::IntoIter<PhaseGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Groups deliveries by phase.
///
/// Buckets appear in order of first occurrence. Deliveries without a
/// phase go to [`PhaseKey::Unphased`].
pub fn group_by_phase(deliveries: &[Delivery]) -> PhaseGroups {
    group_by_phase_with_order(deliveries, &[])
}

/// Groups deliveries by phase, honoring a saved bucket order.
///
/// Buckets named in `order` come first, in that order; buckets not named
/// follow in order of first occurrence. Keys in `order` with no deliveries
/// produce no bucket.
pub fn group_by_phase_with_order(deliveries: &[Delivery], order: &[PhaseKey]) -> PhaseGroups {
    let mut grouped = PhaseGroups::default();
    for phase in order {
        grouped.bucket_mut(phase);
    }
    for delivery in deliveries {
        grouped
            .bucket_mut(&delivery.phase_key())
            .deliveries
            .push(delivery.clone());
    }
    grouped.groups.retain(|g| !g.is_empty());
    grouped
}
