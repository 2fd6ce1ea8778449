/**
 * Movies Resource Handlers
 *
 * HTTP handlers for `/api/movies`. The listing and fetch routes are
 * public; create and delete sit behind the auth middleware.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::error::ApiError;
use crate::backend::movies::db;
use crate::shared::types::{Movie, NewMovie};

/// POST /api/movies
pub async fn create_movie(
    State(pool): State<SqlitePool>,
    Json(request): Json<NewMovie>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::validation("Title is required"));
    }

    let movie = db::create_movie(&pool, &request).await?;
    tracing::info!("Movie created: {} ({})", movie.title, movie.id);
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /api/movies
pub async fn list_movies(State(pool): State<SqlitePool>) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = db::get_all_movies(&pool).await?;
    Ok(Json(movies))
}

/// GET /api/movies/{id}
pub async fn get_movie(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, ApiError> {
    let movie = db::get_movie_by_id(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Movie not found"))?;
    Ok(Json(movie))
}

/// DELETE /api/movies/{id}
pub async fn delete_movie(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, ApiError> {
    let deleted = db::delete_movie(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Movie not found"))?;

    tracing::info!("Movie deleted: {} ({})", deleted.title, deleted.id);
    Ok(Json(deleted))
}
