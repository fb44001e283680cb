//! Rating construction errors.

use thiserror::Error;

/// Rating error variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RatingError {
    /// The value is outside `1..=5`.
    #[error("rating must be between 1 and 5, got {value}")]
    OutOfRange {
        /// Rejected value.
        value: u8,
    },
}
