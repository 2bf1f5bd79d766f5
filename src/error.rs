//! Error type shared by the solver and the distance layer.

use thiserror::Error;

/// Errors reported before or while setting up a solver run.
///
/// Every variant is an input problem detected up front; once the colony
/// starts iterating nothing can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    /// A tour needs at least two distinct stops.
    #[error("at least 2 locations are required, got {0}")]
    TooFewLocations(usize),

    /// The requested start index does not name a location.
    #[error("start index {start} is out of range for {len} locations")]
    StartOutOfRange { start: usize, len: usize },

    /// A solver parameter is outside its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A pre-computed distance matrix is malformed.
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AcoError>;
