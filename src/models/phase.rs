//! Phase keys.
//!
//! A delivery's phase is free text. Grouping needs a total key, so an
//! absent or blank phase, or one spelled exactly [`NO_PHASE_LABEL`], maps
//! to [`PhaseKey::Unphased`]. A key therefore round-trips through its
//! label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display label of the bucket holding deliveries without a phase.
pub const NO_PHASE_LABEL: &str = "No Phase";

/// Grouping key derived from a delivery's phase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PhaseKey {
    /// A named phase (never blank).
    Named(String),
    /// The sentinel bucket.
    Unphased,
}

impl PhaseKey {
    /// Key for an optional phase field. Blank strings and the sentinel
    /// label count as absent.
    pub fn from_phase(phase: Option<&str>) -> Self {
        match phase.map(str::trim) {
            None | Some("") | Some(NO_PHASE_LABEL) => PhaseKey::Unphased,
            Some(p) => PhaseKey::Named(p.to_string()),
        }
    }

    /// Key for a bucket label as shown to users.
    pub fn from_label(label: &str) -> Self {
        Self::from_phase(Some(label))
    }

    /// Display label.
    pub fn label(&self) -> &str {
        match self {
            PhaseKey::Named(name) => name,
            PhaseKey::Unphased => NO_PHASE_LABEL,
        }
    }

    /// The phase value to store on a delivery (`None` for the sentinel).
    pub fn as_phase(&self) -> Option<&str> {
        match self {
            PhaseKey::Named(name) => Some(name),
            PhaseKey::Unphased => None,
        }
    }

    /// Whether this is the sentinel bucket.
    pub fn is_unphased(&self) -> bool {
        matches!(self, PhaseKey::Unphased)
    }
}

impl fmt::Display for PhaseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for PhaseKey {
    fn from(label: String) -> Self {
        PhaseKey::from_label(&label)
    }
}

impl From<&str> for PhaseKey {
    fn from(label: &str) -> Self {
        PhaseKey::from_label(label)
    }
}

impl From<PhaseKey> for String {
    fn from(key: PhaseKey) -> Self {
        key.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_phase_is_unphased() {
        assert_eq!(PhaseKey::from_phase(None), PhaseKey::Unphased);
        assert_eq!(PhaseKey::from_phase(Some("")), PhaseKey::Unphased);
        assert_eq!(PhaseKey::from_phase(Some("   ")), PhaseKey::Unphased);
    }

    #[test]
    fn test_named_phase_trimmed() {
        let key = PhaseKey::from_phase(Some(" Onda 1 "));
        assert_eq!(key, PhaseKey::Named("Onda 1".into()));
        assert_eq!(key.as_phase(), Some("Onda 1"));
    }

    #[test]
    fn test_sentinel_label_round_trip() {
        assert_eq!(PhaseKey::from_label(NO_PHASE_LABEL), PhaseKey::Unphased);
        assert_eq!(PhaseKey::Unphased.label(), NO_PHASE_LABEL);
        assert_eq!(PhaseKey::Unphased.as_phase(), None);
        assert_eq!(PhaseKey::Unphased.to_string(), "No Phase");
    }

    #[test]
    fn test_sentinel_text_is_unphased() {
        assert_eq!(PhaseKey::from_phase(Some("No Phase")), PhaseKey::Unphased);
        assert_eq!(PhaseKey::from_phase(Some(" No Phase ")), PhaseKey::Unphased);
        let key: PhaseKey = serde_json::from_str("\"No Phase\"").unwrap();
        assert_eq!(key, PhaseKey::from_phase(Some("No Phase")));
    }

    #[test]
    fn test_serde_as_label() {
        let json = serde_json::to_string(&PhaseKey::Unphased).unwrap();
        assert_eq!(json, "\"No Phase\"");
        let key: PhaseKey = serde_json::from_str("\"Descoberta\"").unwrap();
        assert_eq!(key, PhaseKey::Named("Descoberta".into()));
    }
}
