//! Error types for bulletin service operations
//!
//! This module defines the outcome taxonomy every operation maps onto.
//! The surrounding transport layer is responsible for turning these into
//! its own protocol; the helpers here give it accurate, non-leaky codes.

use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use bulletin_model::Lifecycle;
use bulletin_rbac::Denial;
use bulletin_store::StoreError;

/// Why a mutation was structurally invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The requested lifecycle transition is not in the transition table
    IllegalTransition {
        /// State the bulletin was in
        from: Lifecycle,
        /// State the caller asked for
        to: Lifecycle,
    },

    /// Publishing requires a non-empty title
    EmptyTitle,

    /// Publishing requires at least one section
    EmptyContent,

    /// The same section id appeared more than once in the payload
    DuplicateSection(Uuid),
}

impl InvalidReason {
    /// Get the machine-readable reason code.
    pub fn reason_code(&self) -> &'static str {
        match self {
            InvalidReason::IllegalTransition { .. } => "illegal_transition",
            InvalidReason::EmptyTitle => "empty_title",
            InvalidReason::EmptyContent => "empty_content",
            InvalidReason::DuplicateSection(_) => "duplicate_section",
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidReason::IllegalTransition { from, to } => {
                write!(f, "illegal transition from '{}' to '{}'", from.as_str(), to.as_str())
            }
            InvalidReason::EmptyTitle => write!(f, "a published bulletin requires a title"),
            InvalidReason::EmptyContent => {
                write!(f, "a published bulletin requires at least one section")
            }
            InvalidReason::DuplicateSection(id) => write!(f, "duplicate section id {id}"),
        }
    }
}

/// Bulletin service error types.
///
/// `Forbidden`, `Invalid`, and `NotFound` are terminal and surfaced
/// immediately. `Conflict` is retried internally before being surfaced.
/// `Transient` is surfaced immediately without automatic retry; retry
/// policy for store outages belongs to the caller.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Authorization denied
    #[error("Forbidden: {0}")]
    Forbidden(Denial),

    /// Version mismatch persisted past the retry budget
    #[error("Version conflict: concurrent update won")]
    Conflict,

    /// Structural validation failed
    #[error("Invalid: {0}")]
    Invalid(InvalidReason),

    /// Resource id unresolved
    #[error("Bulletin not found")]
    NotFound,

    /// Underlying store I/O failure
    #[error("Transient store failure: {0}")]
    Transient(String),
}

/// Result type for bulletin service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Check if this error should be logged at error level.
    ///
    /// Denials and validation failures are expected outcomes and should
    /// not be logged as errors.
    pub fn is_server_error(&self) -> bool {
        matches!(self, ServiceError::Transient(_))
    }

    /// Get an HTTP-shaped status code hint for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Forbidden(_) => 403,
            ServiceError::Conflict => 409,
            ServiceError::Invalid(_) => 400,
            ServiceError::NotFound => 404,
            ServiceError::Transient(_) => 503,
        }
    }

    /// Get the error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::Forbidden(_) => "FORBIDDEN",
            ServiceError::Conflict => "CONFLICT",
            ServiceError::Invalid(_) => "INVALID",
            ServiceError::NotFound => "NOT_FOUND",
            ServiceError::Transient(_) => "TRANSIENT_ERROR",
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ServiceError::NotFound,
            StoreError::VersionMismatch { .. } => ServiceError::Conflict,
            StoreError::Io(message) => ServiceError::Transient(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulletin_rbac::{Action, Role};

    #[test]
    fn test_status_codes() {
        let denial = Denial::InsufficientRole {
            role: Role::Viewer,
            action: Action::Delete,
        };
        assert_eq!(ServiceError::Forbidden(denial).status_code(), 403);
        assert_eq!(ServiceError::Conflict.status_code(), 409);
        assert_eq!(ServiceError::Invalid(InvalidReason::EmptyTitle).status_code(), 400);
        assert_eq!(ServiceError::NotFound.status_code(), 404);
        assert_eq!(ServiceError::Transient("down".into()).status_code(), 503);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ServiceError::Conflict.error_code(), "CONFLICT");
        assert_eq!(ServiceError::NotFound.error_code(), "NOT_FOUND");
        assert_eq!(
            ServiceError::Transient("down".into()).error_code(),
            "TRANSIENT_ERROR"
        );
    }

    #[test]
    fn test_only_transient_is_server_error() {
        assert!(ServiceError::Transient("down".into()).is_server_error());
        assert!(!ServiceError::Conflict.is_server_error());
        assert!(!ServiceError::NotFound.is_server_error());
        assert!(!ServiceError::Invalid(InvalidReason::EmptyContent).is_server_error());
    }

    #[test]
    fn test_store_error_mapping() {
        assert!(matches!(
            ServiceError::from(StoreError::NotFound),
            ServiceError::NotFound
        ));
        assert!(matches!(
            ServiceError::from(StoreError::VersionMismatch { expected: 1, actual: 2 }),
            ServiceError::Conflict
        ));
        assert!(matches!(
            ServiceError::from(StoreError::Io("disk".into())),
            ServiceError::Transient(_)
        ));
    }

    #[test]
    fn test_invalid_reason_codes() {
        assert_eq!(
            InvalidReason::IllegalTransition {
                from: Lifecycle::Archived,
                to: Lifecycle::Published,
            }
            .reason_code(),
            "illegal_transition"
        );
        assert_eq!(InvalidReason::EmptyTitle.reason_code(), "empty_title");
        assert_eq!(InvalidReason::EmptyContent.reason_code(), "empty_content");
        assert_eq!(
            InvalidReason::DuplicateSection(Uuid::now_v7()).reason_code(),
            "duplicate_section"
        );
    }
}
