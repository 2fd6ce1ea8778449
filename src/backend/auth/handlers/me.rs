/**
 * Current User Handler
 *
 * GET /api/auth/me
 *
 * Returns the identity embedded in the caller's token, re-resolved
 * against current storage. The route sits behind the auth middleware, so
 * the token has already been verified; this handler only needs the
 * attached identity. A valid token whose user has since been deleted
 * yields 404.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::users::db::get_user_by_id;
use crate::shared::types::UserResponse;

/// Current user handler
///
/// # Errors
///
/// * `404 Not Found` - the token's user no longer exists
/// * `500 Internal Server Error` - database failure
pub async fn get_me(
    State(pool): State<SqlitePool>,
    AuthUser(current): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = get_user_by_id(&pool, current.id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token user no longer exists: {}", current.id);
            ApiError::not_found("User not found")
        })?;

    Ok(Json(user))
}
