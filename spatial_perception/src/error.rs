//! Error types for the spatial perception core
//!
//! This module defines the errors surfaced by tree construction, the
//! dynamic entity commit protocol and the culling traversals.

use std::fmt;

/// Result type for spatial perception operations
pub type Result<T> = std::result::Result<T, Error>;

/// Spatial perception errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An argument or configuration value was rejected
    /// (bad setting, unknown policy, unsupported dimensionality, ...)
    InvalidArgument(String),

    /// A tree cannot be built: no world bounds and no entity bounds
    EmptyBounds,

    /// A mobile entity lies outside the world bounds under the reject policy
    OutOfWorldBounds(String),

    /// The tree structure changed or is inconsistent under a traversal
    ConcurrentModification(String),

    /// A structural invariant of a tree does not hold (bounding, exclusivity, leaf size)
    InvariantViolation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::EmptyBounds => write!(f, "Empty bounding volume"),
            Error::OutOfWorldBounds(msg) => write!(f, "Out of world bounds: {}", msg),
            Error::ConcurrentModification(msg) => write!(f, "Concurrent modification: {}", msg),
            Error::InvariantViolation(msg) => write!(f, "Invariant violation: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
