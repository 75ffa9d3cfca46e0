//! Phase color assignment.
//!
//! Maps a phase label to a hex color. Known phases use a fixed palette;
//! any other label is hashed into a 10-color fallback palette. The mapping
//! is total and deterministic: the same label always yields the same color.
//!
//! # Hash
//!
//! The fallback index comes from the rolling hash
//! `hash = unit + ((hash << 5) - hash)` over the label's UTF-16 code units,
//! evaluated with 32-bit signed wraparound, then `|hash| % 10`. Keeping the
//! 32-bit arithmetic explicit keeps colors identical to those the web
//! client computes for the same label.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Color for deliveries without a phase.
pub const NO_PHASE_COLOR: &str = "#6B7280";

/// Fixed colors for the known phases.
pub const PHASE_COLORS: [(&str, &str); 12] = [
    ("Onda 1", "#3B82F6"),
    ("Onda 2", "#8B5CF6"),
    ("Onda 3", "#EC4899"),
    ("Onda 4", "#F97316"),
    ("Descoberta", "#06B6D4"),
    ("Planejamento", "#6366F1"),
    ("Design", "#A855F7"),
    ("Desenvolvimento", "#10B981"),
    ("Testes", "#F59E0B"),
    ("Homologação", "#EAB308"),
    ("Produção", "#22C55E"),
    ("Sustentação", "#64748B"),
];

/// Colors for phases outside [`PHASE_COLORS`], indexed by [`phase_hash`].
pub const FALLBACK_PALETTE: [&str; 10] = [
    "#EF4444", "#F97316", "#F59E0B", "#84CC16", "#10B981", "#14B8A6", "#0EA5E9", "#6366F1",
    "#D946EF", "#F43F5E",
];

/// 32-bit rolling hash (multiply by 31) over UTF-16 code units.
pub fn phase_hash(phase: &str) -> i32 {
    phase.encode_utf16().fold(0i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    })
}

/// Fallback palette entry for an arbitrary label.
pub fn fallback_color(phase: &str) -> &'static str {
    let index = i64::from(phase_hash(phase)).unsigned_abs() % FALLBACK_PALETTE.len() as u64;
    FALLBACK_PALETTE[index as usize]
}

/// Fixed color for a known phase, if any.
pub fn known_phase_color(phase: &str) -> Option<&'static str> {
    PHASE_COLORS
        .iter()
        .find(|(name, _)| *name == phase)
        .map(|(_, color)| *color)
}

/// Color for an optional phase using the built-in palettes.
///
/// Empty or absent → [`NO_PHASE_COLOR`]; exact known phase → its fixed
/// color; anything else, whitespace included, → [`fallback_color`] of the
/// label as given.
pub fn color_for_phase(phase: Option<&str>) -> &'static str {
    match phase {
        None | Some("") => NO_PHASE_COLOR,
        Some(p) => known_phase_color(p).unwrap_or_else(|| fallback_color(p)),
    }
}

/// Configurable palette.
///
/// Per-phase overrides are consulted before the built-in palette. With no
/// overrides this behaves exactly like [`color_for_phase`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Phase label → hex color.
    pub phase_colors: BTreeMap<String, String>,
    /// Color for unphased deliveries.
    pub no_phase_color: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            phase_colors: BTreeMap::new(),
            no_phase_color: NO_PHASE_COLOR.to_string(),
        }
    }
}

impl Palette {
    /// Creates the built-in palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a phase color override.
    pub fn with_phase_color(mut self, phase: impl Into<String>, color: impl Into<String>) -> Self {
        self.phase_colors.insert(phase.into(), color.into());
        self
    }

    /// Color for an optional phase.
    pub fn color_for<'a>(&'a self, phase: Option<&str>) -> &'a str {
        match phase {
            None | Some("") => self.no_phase_color.as_str(),
            Some(p) => match self.phase_colors.get(p) {
                Some(color) => color.as_str(),
                None => color_for_phase(Some(p)),
            },
        }
    }
}
