//! Alert thresholds.

use serde::{Deserialize, Serialize};

use super::Urgency;
use crate::error::{Error, Result};

/// Which day of a period milestone is the deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodAnchor {
    /// The period's first day (`date`).
    #[default]
    Start,
    /// The period's last day (`end_date`).
    End,
}

/// Tier boundaries and the overdue cutoff.
///
/// Boundaries are inclusive upper bounds on `days_until`:
///
/// | days_until | tier |
/// |-----------|------|
/// | `..=critical_max_days` | critical |
/// | `..=high_max_days` | high |
/// | `..=medium_max_days` | medium |
/// | otherwise | low |
///
/// Items more than `overdue_grace_days` past due are dropped from the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertPolicy {
    pub overdue_grace_days: i64,
    pub critical_max_days: i64,
    pub high_max_days: i64,
    pub medium_max_days: i64,
    pub period_anchor: PeriodAnchor,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            overdue_grace_days: 3,
            critical_max_days: 3,
            high_max_days: 7,
            medium_max_days: 14,
            period_anchor: PeriodAnchor::Start,
        }
    }
}

impl AlertPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overdue_grace(mut self, days: i64) -> Self {
        self.overdue_grace_days = days;
        self
    }

    /// Sets the three tier boundaries.
    pub fn with_tiers(mut self, critical_max: i64, high_max: i64, medium_max: i64) -> Self {
        self.critical_max_days = critical_max;
        self.high_max_days = high_max;
        self.medium_max_days = medium_max;
        self
    }

    pub fn with_period_anchor(mut self, anchor: PeriodAnchor) -> Self {
        self.period_anchor = anchor;
        self
    }

    /// Checks that tiers are strictly increasing and the grace is non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.overdue_grace_days < 0 {
            return Err(Error::InvalidPolicy(format!(
                "overdue_grace_days must be >= 0, got {}",
                self.overdue_grace_days
            )));
        }
        if !(self.critical_max_days < self.high_max_days
            && self.high_max_days < self.medium_max_days)
        {
            return Err(Error::InvalidPolicy(format!(
                "tiers must satisfy critical < high < medium, got {} / {} / {}",
                self.critical_max_days, self.high_max_days, self.medium_max_days
            )));
        }
        Ok(())
    }

    /// Whether an item this many days from its deadline belongs in the feed.
    #[inline]
    pub fn includes(&self, days_until: i64) -> bool {
        days_until >= -self.overdue_grace_days
    }

    /// Urgency tier for a signed day distance.
    pub fn urgency(&self, days_until: i64) -> Urgency {
        if days_until <= self.critical_max_days {
            Urgency::Critical
        } else if days_until <= self.high_max_days {
            Urgency::High
        } else if days_until <= self.medium_max_days {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_boundaries() {
        let p = AlertPolicy::default();
        let cases = [
            (-3, Urgency::Critical),
            (3, Urgency::Critical),
            (4, Urgency::High),
            (7, Urgency::High),
            (8, Urgency::Medium),
            (14, Urgency::Medium),
            (15, Urgency::Low),
        ];
        for (days, expected) in cases {
            assert_eq!(p.urgency(days), expected, "days_until = {days}");
        }
    }

    #[test]
    fn test_overdue_cutoff() {
        let p = AlertPolicy::default();
        assert!(p.includes(-3));
        assert!(!p.includes(-4));
        assert!(p.includes(10_000));
    }

    #[test]
    fn test_validate() {
        assert!(AlertPolicy::default().validate().is_ok());
        assert!(AlertPolicy::new().with_tiers(5, 5, 10).validate().is_err());
        assert!(AlertPolicy::new().with_tiers(1, 8, 2).validate().is_err());
        assert!(matches!(
            AlertPolicy::new().with_overdue_grace(-1).validate(),
            Err(Error::InvalidPolicy(_))
        ));
    }

    #[test]
    fn test_custom_tiers() {
        let p = AlertPolicy::new().with_tiers(0, 2, 5);
        assert_eq!(p.urgency(0), Urgency::Critical);
        assert_eq!(p.urgency(1), Urgency::High);
        assert_eq!(p.urgency(5), Urgency::Medium);
        assert_eq!(p.urgency(6), Urgency::Low);
    }
}
