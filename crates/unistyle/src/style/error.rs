//! Style resolution errors.

use thiserror::Error;

/// Error returned when a style cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The name does not match any of the six styles.
    #[error("unknown style '{tag}'. Available: {}", .available.join(", "))]
    UnknownStyleTag {
        tag: String,
        available: Vec<&'static str>,
    },
}
