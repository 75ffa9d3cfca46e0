//! Engine configuration.
//!
//! Every field has a default, so an empty document is a valid config.
//!
//! ```toml
//! [alerts]
//! overdue_grace_days = 3
//! critical_max_days = 3
//! high_max_days = 7
//! medium_max_days = 14
//! period_anchor = "start"
//!
//! [palette]
//! no_phase_color = "#6B7280"
//!
//! [palette.phase_colors]
//! "Onda 1" = "#1D4ED8"
//! ```

use serde::{Deserialize, Serialize};

use crate::alerts::{AlertClassifier, AlertPolicy};
use crate::error::Result;
use crate::palette::Palette;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapConfig {
    pub alerts: AlertPolicy,
    pub palette: Palette,
}

impl RoadmapConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        self.alerts.validate()
    }

    /// Alert classifier using this configuration's policy and palette.
    pub fn classifier(&self) -> AlertClassifier {
        AlertClassifier::new()
            .with_policy(self.alerts.clone())
            .with_palette(self.palette.clone())
    }
}
