//! Error types for the roadmap engine.
//!
//! Only conditions that indicate a caller bug are errors. Unknown ids in
//! reorder operations, missing phases and inverted intervals degrade to
//! documented defaults instead.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Engine error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A timeline window whose end is not after its start.
    #[error("Degenerate timeline window: {start} .. {end} has a zero-day span")]
    DegenerateWindow { start: NaiveDate, end: NaiveDate },

    /// Year outside the supported calendar range.
    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    /// Alert thresholds are not strictly ordered.
    #[error("Invalid alert policy: {0}")]
    InvalidPolicy(String),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
