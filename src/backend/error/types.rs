/**
 * Backend Error Types
 *
 * This module defines the error taxonomy used by HTTP handlers:
 *
 * - Validation: missing or malformed input
 * - Conflict: a uniqueness constraint was violated
 * - Unauthenticated: missing or bad credentials/token
 * - Forbidden: valid identity, insufficient rights for the resource
 * - NotFound: the addressed resource does not exist
 * - Internal: unexpected failure (database, hashing, signing)
 *
 * Each variant maps to exactly one HTTP status in `status_code()`.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error type
///
/// Returned by every handler; converts to an HTTP response via the
/// `IntoResponse` impl in `error::conversion`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input
    #[error("{message}")]
    Validation { message: String },

    /// Uniqueness violation (duplicate username/email)
    #[error("{message}")]
    Conflict { message: String },

    /// Missing or invalid credentials or token
    #[error("{message}")]
    Unauthenticated { message: String },

    /// Authenticated but not authorized for this resource
    #[error("{message}")]
    Forbidden { message: String },

    /// Resource absent
    #[error("{message}")]
    NotFound { message: String },

    /// Unexpected failure; the detail is logged, not sent to the client
    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` / `Conflict` - 400 Bad Request
    /// - `Unauthenticated` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The client-visible error message
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Conflict { message }
            | Self::Unauthenticated { message }
            | Self::Forbidden { message }
            | Self::NotFound { message }
            | Self::Internal { message } => message,
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        tracing::error!("Password hashing failed: {:?}", err);
        Self::internal("Server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::conflict("dup").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthenticated("no token").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::forbidden("not yours").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::not_found("gone").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_message() {
        let error = ApiError::conflict("Username already exists");
        assert_eq!(error.message(), "Username already exists");
        assert_eq!(error.to_string(), "Username already exists");
    }
}
