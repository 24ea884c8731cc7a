//! Domain error types.
//!
//! These errors represent content metadata that cannot be represented in
//! the domain model. They are distinct from transport and validation errors.

/// Domain-level errors for malformed content metadata.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Rating outside the 0-100 percentage range
    #[error("invalid rating {0}: must be a percentage between 0 and 100")]
    InvalidRating(i64),

    /// Rating that is not a finite number
    #[error("invalid rating: not a finite number")]
    NonFiniteRating,

    /// Unrecognised content type name
    #[error("unknown content type: {0}")]
    UnknownContentType(String),
}
