//! Ordinal attributes shared by deliveries and sub-deliveries.

use serde::{Deserialize, Deserializer, Serialize};

/// Work status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Blocked,
}

impl DeliveryStatus {
    /// All statuses in workflow order.
    pub const ALL: [DeliveryStatus; 4] = [
        DeliveryStatus::NotStarted,
        DeliveryStatus::InProgress,
        DeliveryStatus::Completed,
        DeliveryStatus::Blocked,
    ];

    /// Whether the work is finished.
    #[inline]
    pub fn is_completed(self) -> bool {
        self == DeliveryStatus::Completed
    }
}

/// Estimated complexity (ordinal, lowest first).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

/// Business priority (ordinal, lowest first).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// Clamps a raw progress value into 0..=100.
///
/// Fractions are rounded; NaN becomes 0.
pub fn clamp_progress(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

/// Clamps a whole-number progress value into 0..=100.
pub fn clamp_percent(raw: i64) -> u8 {
    // In range after the clamp.
    raw.clamp(0, 100) as u8
}

pub(crate) fn deserialize_progress<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw.map(clamp_progress).unwrap_or(0))
}

/// Accepts `null` as well as a missing field for optional lists.
pub(crate) fn deserialize_nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_progress() {
        assert_eq!(clamp_progress(-5.0), 0);
        assert_eq!(clamp_progress(42.4), 42);
        assert_eq!(clamp_progress(42.5), 43);
        assert_eq!(clamp_progress(250.0), 100);
        assert_eq!(clamp_progress(f64::NAN), 0);
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(-1), 0);
        assert_eq!(clamp_percent(0), 0);
        assert_eq!(clamp_percent(57), 57);
        assert_eq!(clamp_percent(100), 100);
        assert_eq!(clamp_percent(i64::MAX), 100);
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&DeliveryStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not-started\"");
        let s: DeliveryStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(s, DeliveryStatus::InProgress);
    }

    #[test]
    fn test_ordinals() {
        assert!(Priority::Critical > Priority::High);
        assert!(Complexity::VeryHigh > Complexity::Low);
    }
}
