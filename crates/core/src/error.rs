//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure of a review or syndication operation is one of these kinds.
/// The boundary layer decides how each kind is disclosed (status codes etc).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A referenced store, review or edge does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A field constraint was violated, or a self-syndication was attempted.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation crosses an organization boundary.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The storage backend failed (e.g. a poisoned lock).
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Stable, machine-readable name of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::NotFound(_) => "not_found",
            DomainError::InvalidArgument(_) => "invalid_argument",
            DomainError::Forbidden(_) => "forbidden",
            DomainError::Storage(_) => "storage_error",
        }
    }
}
