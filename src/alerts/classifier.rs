//! Alert feed construction.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use super::{AlertCounts, AlertFeed, AlertKind, AlertPolicy, DateAlert, PeriodAnchor};
use crate::models::{days_between, Delivery, Milestone};
use crate::palette::Palette;

/// Builds alert feeds under an [`AlertPolicy`].
///
/// Stateless apart from the policy and the palette used to color delivery
/// alerts; `now` is always passed in.
#[derive(Debug, Clone, Default)]
pub struct AlertClassifier {
    policy: AlertPolicy,
    palette: Palette,
}

impl AlertClassifier {
    /// Classifier with the default thresholds (3 / 7 / 14, 3 days grace).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: AlertPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Colors delivery and sub-delivery alerts with `palette`.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn policy(&self) -> &AlertPolicy {
        &self.policy
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Computes the alert feed at `now`.
    ///
    /// Only the calendar day of `now` matters. Completed deliveries and
    /// finished sub-deliveries are skipped; sub-deliveries of a completed
    /// delivery are still evaluated on their own status. Alerts are ordered
    /// by tier, then by `days_until`; equal keys keep input order
    /// (milestones, then deliveries, each followed by its sub-deliveries).
    pub fn classify(
        &self,
        deliveries: &[Delivery],
        milestones: &[Milestone],
        now: NaiveDateTime,
    ) -> AlertFeed {
        let today = now.date();
        let mut alerts = Vec::new();

        for milestone in milestones {
            let deadline = match self.policy.period_anchor {
                PeriodAnchor::Start => milestone.date,
                PeriodAnchor::End => milestone.end(),
            };
            let color = non_empty(&milestone.color);
            if let Some(alert) = self.alert(
                &milestone.id,
                &milestone.title,
                AlertKind::Milestone,
                deadline,
                today,
            ) {
                alerts.push(DateAlert { color, ..alert });
            }
        }

        for delivery in deliveries {
            let color = Some(delivery.display_color_with(&self.palette));

            if !delivery.is_completed() {
                if let Some(alert) = self.alert(
                    &delivery.id,
                    &delivery.title,
                    AlertKind::Delivery,
                    delivery.end_date,
                    today,
                ) {
                    alerts.push(DateAlert {
                        color: color.clone(),
                        status: Some(delivery.status),
                        ..alert
                    });
                }
            }

            for sub in delivery.sub_deliveries.iter().filter(|s| !s.is_done()) {
                if let Some(alert) = self.alert(
                    &sub.id,
                    &sub.title,
                    AlertKind::SubDelivery,
                    sub.end_date,
                    today,
                ) {
                    alerts.push(DateAlert {
                        color: color.clone(),
                        parent_delivery: Some(delivery.title.clone()),
                        status: Some(sub.status),
                        ..alert
                    });
                }
            }
        }

        alerts.sort_by_key(|a| (a.urgency, a.days_until));

        let mut counts = AlertCounts::default();
        for alert in &alerts {
            counts.record(alert.urgency);
        }

        debug!(
            %today,
            total = counts.total,
            critical = counts.critical,
            high = counts.high,
            medium = counts.medium,
            low = counts.low,
            "computed alert feed"
        );

        AlertFeed { alerts, counts }
    }

    fn alert(
        &self,
        id: &str,
        title: &str,
        kind: AlertKind,
        deadline: NaiveDate,
        today: NaiveDate,
    ) -> Option<DateAlert> {
        let days_until = days_between(deadline, today);
        if !self.policy.includes(days_until) {
            return None;
        }
        Some(DateAlert {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            date: deadline,
            days_until,
            urgency: self.policy.urgency(days_until),
            color: None,
            parent_delivery: None,
            status: None,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Computes the alert feed with the default policy.
pub fn compute_alerts(
    deliveries: &[Delivery],
    milestones: &[Milestone],
    now: NaiveDateTime,
) -> AlertFeed {
    AlertClassifier::new().classify(deliveries, milestones, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::Urgency;
    use crate::models::{DeliveryStatus, SubDelivery};
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    fn now() -> NaiveDateTime {
        today().and_hms_opt(17, 45, 0).unwrap()
    }

    fn due_in(id: &str, days: i64) -> Delivery {
        let end = today() + Duration::days(days);
        Delivery::new(id, end - Duration::days(10), end).with_title(format!("Delivery {id}"))
    }

    #[test]
    fn test_e2e_scenario() {
        let deliveries = vec![
            due_in("1", 2).with_status(DeliveryStatus::InProgress),
            due_in("2", 10).with_status(DeliveryStatus::NotStarted),
            due_in("3", -1).with_status(DeliveryStatus::Completed),
        ];
        let feed = compute_alerts(&deliveries, &[], now());

        let ids: Vec<&str> = feed.alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(feed.alerts[0].urgency, Urgency::Critical);
        assert_eq!(feed.alerts[1].urgency, Urgency::Medium);
        assert_eq!(
            feed.counts,
            AlertCounts { critical: 1, high: 0, medium: 1, low: 0, total: 2 }
        );
    }

    #[test]
    fn test_three_vs_four_days_out() {
        let feed = compute_alerts(&[due_in("a", 3), due_in("b", 4)], &[], now());
        assert_eq!(feed.find("a").unwrap().urgency, Urgency::Critical);
        assert_eq!(feed.find("b").unwrap().urgency, Urgency::High);
    }

    #[test]
    fn test_overdue_window() {
        let feed = compute_alerts(&[due_in("late3", -3), due_in("late4", -4)], &[], now());
        assert!(feed.find("late3").is_some());
        assert!(feed.find("late4").is_none());
        assert!(feed.find("late3").unwrap().is_overdue());
    }

    #[test]
    fn test_time_of_day_ignored() {
        let late_evening = today().and_hms_opt(23, 59, 59).unwrap();
        let feed = compute_alerts(&[due_in("x", 1)], &[], late_evening);
        assert_eq!(feed.alerts[0].days_until, 1);
    }

    #[test]
    fn test_sub_deliveries() {
        let parent = due_in("P", 30)
            .with_title("Platform")
            .with_status(DeliveryStatus::Completed)
            .with_sub_delivery(
                SubDelivery::new("S-open", today(), today() + Duration::days(5))
                    .with_title("Open child"),
            )
            .with_sub_delivery(
                SubDelivery::new("S-done", today(), today() + Duration::days(5))
                    .with_status(DeliveryStatus::Completed),
            );
        let mut flagged = SubDelivery::new("S-flag", today(), today() + Duration::days(5));
        flagged.completed = true;
        let parent = parent.with_sub_delivery(flagged);

        let feed = compute_alerts(&[parent], &[], now());
        // Completed parent excluded, its open child still alerts.
        assert!(feed.find("P").is_none());
        let child = feed.find("S-open").unwrap();
        assert_eq!(child.kind, AlertKind::SubDelivery);
        assert_eq!(child.parent_delivery.as_deref(), Some("Platform"));
        assert_eq!(child.urgency, Urgency::High);
        assert!(feed.find("S-done").is_none());
        assert!(feed.find("S-flag").is_none());
        assert_eq!(feed.counts.total, 1);
    }

    #[test]
    fn test_milestones() {
        let milestones = vec![
            Milestone::point("M-far", today() + Duration::days(400)).with_color("#111111"),
            Milestone::point("M-old", today() - Duration::days(4)),
            Milestone::period("M-period", today() - Duration::days(2), today() + Duration::days(20)),
        ];
        let feed = compute_alerts(&[], &milestones, now());

        let far = feed.find("M-far").unwrap();
        assert_eq!(far.urgency, Urgency::Low);
        assert_eq!(far.color.as_deref(), Some("#111111"));
        assert!(feed.find("M-old").is_none());

        // Period milestones are evaluated on their start day.
        let period = feed.find("M-period").unwrap();
        assert_eq!(period.days_until, -2);
        assert_eq!(period.urgency, Urgency::Critical);
        assert_eq!(period.color, None);
    }

    #[test]
    fn test_period_anchor_end() {
        let milestones = vec![Milestone::period(
            "M",
            today() - Duration::days(30),
            today() + Duration::days(6),
        )];
        let start_feed = compute_alerts(&[], &milestones, now());
        assert!(start_feed.is_empty());

        let classifier = AlertClassifier::new()
            .with_policy(AlertPolicy::new().with_period_anchor(PeriodAnchor::End));
        let end_feed = classifier.classify(&[], &milestones, now());
        assert_eq!(end_feed.alerts[0].days_until, 6);
        assert_eq!(end_feed.alerts[0].urgency, Urgency::High);
    }

    #[test]
    fn test_sorted_by_tier_then_days() {
        let deliveries = vec![
            due_in("low", 40),
            due_in("med", 9),
            due_in("crit-late", -2),
            due_in("high", 5),
            due_in("crit", 1),
        ];
        let feed = compute_alerts(&deliveries, &[], now());
        let ids: Vec<&str> = feed.alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["crit-late", "crit", "high", "med", "low"]);
        assert_eq!(feed.with_urgency(Urgency::Critical).count(), 2);
    }

    #[test]
    fn test_delivery_alert_carries_color_and_status() {
        let del = due_in("D", 2)
            .with_phase("Onda 1")
            .with_status(DeliveryStatus::Blocked);
        let feed = compute_alerts(&[del], &[], now());
        assert_eq!(feed.alerts[0].color.as_deref(), Some("#3B82F6"));
        assert_eq!(feed.alerts[0].status, Some(DeliveryStatus::Blocked));
        assert_eq!(feed.alerts[0].date, today() + Duration::days(2));
    }

    #[test]
    fn test_palette_overrides_alert_color() {
        let palette = Palette::new().with_phase_color("Onda 1", "#1D4ED8");
        let del = due_in("D", 2)
            .with_phase("Onda 1")
            .with_sub_delivery(SubDelivery::new("S", today(), today() + Duration::days(1)));
        let feed = AlertClassifier::new()
            .with_palette(palette)
            .classify(&[del], &[], now());

        assert_eq!(feed.find("D").unwrap().color.as_deref(), Some("#1D4ED8"));
        assert_eq!(feed.find("S").unwrap().color.as_deref(), Some("#1D4ED8"));
    }

    #[test]
    fn test_empty_inputs() {
        let feed = compute_alerts(&[], &[], now());
        assert!(feed.is_empty());
        assert_eq!(feed.counts, AlertCounts::default());
    }
}
