/**
 * Error Conversion
 *
 * Conversion implementations for backend errors: HTTP responses with a
 * JSON body, and classification of database errors into the API taxonomy.
 *
 * # Response Format
 *
 * ```json
 * { "error": "Error message" }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sqlx::error::ErrorKind;

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Convert a backend error into an HTTP response
    ///
    /// Internal errors log their detail and send a generic message; all
    /// other variants send their message verbatim.
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error: {}", self.message());
        }

        let body = serde_json::json!({ "error": self.message() });
        (status, Json(body)).into_response()
    }
}

/// Classify database failures into the API taxonomy.
///
/// Uniqueness races surface here when the pre-check passed but the insert
/// still hit the constraint; check violations come from the rating bounds
/// on `reviews`; foreign key violations mean the referenced user or movie
/// is gone.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = err {
            return Self::not_found("Resource not found");
        }

        if let Some(db_err) = err.as_database_error() {
            return match db_err.kind() {
                ErrorKind::UniqueViolation => Self::conflict("Already exists"),
                ErrorKind::CheckViolation => {
                    Self::validation("Rating must be between 1 and 5")
                }
                ErrorKind::ForeignKeyViolation => {
                    Self::validation("Referenced user or movie does not exist")
                }
                _ => {
                    tracing::error!("Database error: {:?}", db_err);
                    Self::internal("Database error")
                }
            };
        }

        tracing::error!("Database error: {:?}", err);
        Self::internal("Database error")
    }
}
