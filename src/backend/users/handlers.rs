/**
 * Users Resource Handlers
 *
 * HTTP handlers for `/api/users`. All three routes sit behind the auth
 * middleware. Deletion is restricted to the account owner: a valid token
 * for a different user gets 403.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::users::db;
use crate::shared::types::UserResponse;

/// GET /api/users
pub async fn list_users(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = db::get_all_users(&pool).await?;
    Ok(Json(users))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = db::get_user_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(Json(user))
}

/// DELETE /api/users/{id}
///
/// Only the authenticated user may delete their own account. The schema
/// cascades the deletion to every review they authored.
pub async fn delete_user(
    State(pool): State<SqlitePool>,
    AuthUser(current): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    if current.id != id {
        tracing::warn!(
            "User {} attempted to delete user {}",
            current.id,
            id
        );
        return Err(ApiError::forbidden("Unauthorized to delete this user"));
    }

    let deleted = db::delete_user(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    tracing::info!("User deleted: {} ({})", deleted.username, deleted.id);
    Ok(Json(deleted))
}
