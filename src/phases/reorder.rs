//! Drag-and-drop reordering.
//!
//! Every operation returns a new ordering of the same items. Unknown ids
//! make the operation a no-op: a drag can race with a list refresh from the
//! persistence layer, and dropping onto a vanished item must not fail.

use tracing::debug;

use super::{PhaseGroup, PhaseGroups};
use crate::models::{Delivery, Identified, PhaseKey};

/// Moves the item whose key is `active` into the slot held by `over`.
///
/// The item is removed, then reinserted at `over`'s former index, so
/// dragging down places it after `over` and dragging up places it before.
/// Returns a copy of `list` when either key is missing.
pub fn reorder_by<T, K, F>(list: &[T], key: F, active: &K, over: &K) -> Vec<T>
where
    T: Clone,
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    let mut reordered = list.to_vec();
    let from = list.iter().position(|item| key(item) == active);
    let to = list.iter().position(|item| key(item) == over);
    match (from, to) {
        (Some(from), Some(to)) if from != to => {
            let item = reordered.remove(from);
            reordered.insert(to, item);
        }
        (Some(_), Some(_)) => {}
        _ => debug!("reorder skipped: active or over key not in list"),
    }
    reordered
}

/// Moves the item with id `active_id` to the position of `over_id`.
pub fn reorder_within_list<T>(list: &[T], active_id: &str, over_id: &str) -> Vec<T>
where
    T: Identified + Clone,
{
    reorder_by(list, T::id, active_id, over_id)
}

/// Reorders a delivery's sub-deliveries.
pub fn reorder_sub_deliveries(delivery: &Delivery, active_id: &str, over_id: &str) -> Delivery {
    Delivery {
        sub_deliveries: reorder_within_list(&delivery.sub_deliveries, active_id, over_id),
        ..delivery.clone()
    }
}

/// Sets the phase of one delivery.
///
/// [`PhaseKey::Unphased`] clears the phase field. Every other delivery,
/// and the list order, is left as is. Unknown ids are a no-op.
pub fn move_to_phase(
    deliveries: &[Delivery],
    delivery_id: &str,
    new_phase: &PhaseKey,
) -> Vec<Delivery> {
    let mut moved = deliveries.to_vec();
    match moved.iter_mut().find(|d| d.id == delivery_id) {
        Some(delivery) => {
            delivery.delivery_phase = new_phase.as_phase().map(str::to_string);
        }
        None => debug!(delivery_id, "move to phase skipped: unknown delivery"),
    }
    moved
}

/// Reorders phase buckets. Bucket contents are carried over verbatim.
pub fn reorder_phase_groups(
    grouped: &PhaseGroups,
    active_phase: &PhaseKey,
    over_phase: &PhaseKey,
) -> PhaseGroups {
    let groups: Vec<PhaseGroup> =
        reorder_by(grouped.groups(), |g| &g.phase, active_phase, over_phase);
    PhaseGroups::from_groups(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubDelivery;
    use crate::phases::group_by_phase;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn list(ids: &[&str]) -> Vec<Delivery> {
        ids.iter().map(|id| Delivery::new(*id, day(), day())).collect()
    }

    fn ids(list: &[Delivery]) -> Vec<&str> {
        list.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_drag_down() {
        let out = reorder_within_list(&list(&["a", "b", "c", "d"]), "a", "c");
        assert_eq!(ids(&out), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_drag_up() {
        let out = reorder_within_list(&list(&["a", "b", "c", "d"]), "d", "b");
        assert_eq!(ids(&out), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_same_id_is_identity() {
        let input = list(&["a", "b", "c"]);
        assert_eq!(reorder_within_list(&input, "b", "b"), input);
    }

    #[test]
    fn test_missing_ids_are_noops() {
        let input = list(&["d1", "d2"]);
        assert_eq!(ids(&reorder_within_list(&input, "missing", "d1")), vec!["d1", "d2"]);
        assert_eq!(ids(&reorder_within_list(&input, "d1", "missing")), vec!["d1", "d2"]);
        assert!(reorder_within_list::<Delivery>(&[], "a", "b").is_empty());
    }

    #[test]
    fn test_reorder_sub_deliveries() {
        let parent = Delivery::new("P", day(), day())
            .with_sub_delivery(SubDelivery::new("s1", day(), day()))
            .with_sub_delivery(SubDelivery::new("s2", day(), day()))
            .with_sub_delivery(SubDelivery::new("s3", day(), day()));
        let out = reorder_sub_deliveries(&parent, "s3", "s1");
        let order: Vec<&str> = out.sub_deliveries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(order, vec!["s3", "s1", "s2"]);
        assert_eq!(out.id, "P");
    }

    #[test]
    fn test_move_to_phase() {
        let input = vec![
            Delivery::new("1", day(), day()).with_phase("Onda 1"),
            Delivery::new("2", day(), day()).with_phase("Onda 1"),
        ];
        let out = move_to_phase(&input, "2", &"Descoberta".into());
        assert_eq!(out[0], input[0]);
        assert_eq!(out[1].delivery_phase.as_deref(), Some("Descoberta"));
        assert_eq!(ids(&out), vec!["1", "2"]);
    }

    #[test]
    fn test_move_to_no_phase_clears() {
        let input = vec![Delivery::new("1", day(), day()).with_phase("Onda 1")];
        let out = move_to_phase(&input, "1", &PhaseKey::from_label("No Phase"));
        assert_eq!(out[0].delivery_phase, None);
    }

    #[test]
    fn test_move_unknown_delivery() {
        let input = vec![Delivery::new("1", day(), day()).with_phase("A")];
        assert_eq!(move_to_phase(&input, "nope", &"B".into()), input);
    }

    #[test]
    fn test_reorder_phase_groups_keeps_contents() {
        let deliveries = vec![
            Delivery::new("1", day(), day()).with_phase("A"),
            Delivery::new("2", day(), day()).with_phase("B"),
            Delivery::new("3", day(), day()),
            Delivery::new("4", day(), day()).with_phase("A"),
        ];
        let grouped = group_by_phase(&deliveries);
        let out = reorder_phase_groups(&grouped, &PhaseKey::Unphased, &"A".into());

        let keys: Vec<&str> = out.keys().iter().map(|k| k.label()).collect();
        assert_eq!(keys, vec!["No Phase", "A", "B"]);
        assert_eq!(out.get(&"A".into()), grouped.get(&"A".into()));
        assert_eq!(out.delivery_count(), 4);
    }

    #[test]
    fn test_reorder_phase_groups_missing_key() {
        let grouped = group_by_phase(&[Delivery::new("1", day(), day()).with_phase("A")]);
        let out = reorder_phase_groups(&grouped, &"Z".into(), &"A".into());
        assert_eq!(out, grouped);
    }
}
