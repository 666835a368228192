//! Error types for the demo handlers.

use thiserror::Error;

/// Errors raised while resolving or formatting wall-clock time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// The identifier is not a known IANA time zone.
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

impl TimeError {
    /// The offending time zone identifier.
    #[must_use]
    pub fn timezone(&self) -> &str {
        match self {
            Self::InvalidTimezone(tz) => tz,
        }
    }
}
