//! Domain Errors for the identifier algebra

use thiserror::Error;

/// Errors that can occur while building or comparing node identifiers.
///
/// Every operation in the domain layer is pure, so retrying with the same
/// input always reproduces the same error. Callers must fix the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeIdError {
    /// Source material is too short, or two identifiers of different
    /// lengths were compared by ring distance.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A character in a hex-encoded identifier is not a hex digit.
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },

    /// Identifier-space configuration is unusable.
    #[error("invalid id space config: {0}")]
    InvalidConfig(String),
}
