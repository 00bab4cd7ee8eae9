//! Causeway API — error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use causeway_core::error::{DomainError, FieldErrors};

use crate::envelope;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection or pool error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// HTTP-layer error that renders as the response envelope.
///
/// Handlers attach the operation-specific failure message ("Cause create
/// failed", "Cause update failed", ...) when mapping domain errors, so the
/// envelope contract is preserved per operation.
#[derive(Debug)]
pub enum ApiError {
    /// The requested cause id does not resolve to an existing cause.
    CauseNotFound,
    /// The payload failed validation, or a store constraint rejected it.
    Validation {
        /// Operation-specific envelope message.
        message: &'static str,
        /// Per-field errors for the body.
        errors: FieldErrors,
    },
    /// An unexpected storage failure. Treated as fatal for the request.
    Internal(String),
}

impl ApiError {
    /// Wraps domain-level validation errors with the operation's failure
    /// message.
    #[must_use]
    pub fn validation(message: &'static str, errors: FieldErrors) -> Self {
        Self::Validation { message, errors }
    }

    /// Maps a repository error into an HTTP-layer error, attaching the
    /// operation's failure message to validation errors.
    #[must_use]
    pub fn from_domain(message: &'static str, err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => Self::Validation { message, errors },
            DomainError::Infrastructure(detail) => Self::Internal(detail),
        }
    }
}

/// Fallback mapping for operations where no validation can occur (reads and
/// deletes): only the infrastructure arm is reachable.
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::from_domain("Validation failed", err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::CauseNotFound => {
                envelope::message_only(StatusCode::NOT_FOUND, "Cause Not Found")
            }
            Self::Validation { message, errors } => {
                envelope::failure(StatusCode::BAD_REQUEST, message, &errors)
            }
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "storage failure while handling request");
                envelope::message_only(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_cause_not_found_maps_to_404() {
        assert_eq!(status_of(ApiError::CauseNotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError::validation(
            "Cause create failed",
            FieldErrors::single("title", "This field is required."),
        );
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_500() {
        assert_eq!(
            status_of(ApiError::Internal("db down".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_domain_validation_keeps_operation_message() {
        let domain = DomainError::Validation(FieldErrors::single(
            "title",
            "cause with this title already exists.",
        ));

        match ApiError::from_domain("Cause update failed", domain) {
            ApiError::Validation { message, .. } => assert_eq!(message, "Cause update failed"),
            other => panic!("expected a validation error, got {other:?}"),
        }
    }
}
