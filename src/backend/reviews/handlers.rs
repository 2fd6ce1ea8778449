/**
 * Reviews Resource Handlers
 *
 * HTTP handlers for `/api/reviews`. Reads are public. Creation takes the
 * owner from the caller's token and never from the body. Deletion is
 * owner-only: the handler compares the token identity against the
 * review's `user_id`, independent of the middleware.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::reviews::db;
use crate::shared::types::{NewReview, Review};

/// POST /api/reviews
///
/// Out-of-range ratings and unknown movies are rejected with 400; the
/// storage-layer constraints back both checks, so a race cannot slip a
/// bad row in.
pub async fn create_review(
    State(pool): State<SqlitePool>,
    AuthUser(current): AuthUser,
    Json(request): Json<NewReview>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let review = db::create_review(
        &pool,
        current.id,
        request.movie_id,
        request.rating,
        request.comment.as_deref(),
    )
    .await?;

    tracing::info!(
        "Review {} created by user {} for movie {}",
        review.id,
        review.user_id,
        review.movie_id
    );
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/reviews
pub async fn list_reviews(State(pool): State<SqlitePool>) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = db::get_all_reviews(&pool).await?;
    Ok(Json(reviews))
}

/// GET /api/reviews/{id}
pub async fn get_review(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Review>, ApiError> {
    let review = db::get_review_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Review not found"))?;
    Ok(Json(review))
}

/// DELETE /api/reviews/{id}
///
/// Only the review's author may delete it; any other valid token gets 403.
pub async fn delete_review(
    State(pool): State<SqlitePool>,
    AuthUser(current): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Review>, ApiError> {
    let review = db::get_review_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Review not found"))?;

    if review.user_id != current.id {
        tracing::warn!(
            "User {} attempted to delete review {} owned by user {}",
            current.id,
            review.id,
            review.user_id
        );
        return Err(ApiError::forbidden("Unauthorized to delete this review"));
    }

    let deleted = db::delete_review(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Review not found"))?;

    tracing::info!("Review {} deleted by user {}", deleted.id, current.id);
    Ok(Json(deleted))
}
