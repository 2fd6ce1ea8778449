/**
 * Review Repository
 *
 * Database operations for the `reviews` table. The schema is the
 * authority on the interesting invariants here: the rating CHECK
 * constraint rejects anything outside 1..=5 at the storage layer, and
 * both foreign keys cascade so reviews disappear with their user or
 * movie.
 */

use chrono::Utc;
use sqlx::SqlitePool;

use crate::shared::types::Review;

/// Insert a new review and return the stored row.
///
/// Out-of-range ratings fail the CHECK constraint; a missing user or
/// movie fails the foreign key. Both surface as database errors for the
/// caller to classify.
pub async fn create_review(
    pool: &SqlitePool,
    user_id: i64,
    movie_id: i64,
    rating: i64,
    comment: Option<&str>,
) -> Result<Review, sqlx::Error> {
    sqlx::query_as::<_, Review>(
        r#"
        INSERT INTO reviews (user_id, movie_id, rating, comment, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, movie_id, rating, comment, created_at
        "#,
    )
    .bind(user_id)
    .bind(movie_id)
    .bind(rating)
    .bind(comment)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// List all reviews.
pub async fn get_all_reviews(pool: &SqlitePool) -> Result<Vec<Review>, sqlx::Error> {
    sqlx::query_as::<_, Review>(
        "SELECT id, user_id, movie_id, rating, comment, created_at FROM reviews",
    )
    .fetch_all(pool)
    .await
}

/// Get a review by id, or `None` if not found.
pub async fn get_review_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<Review>, sqlx::Error> {
    sqlx::query_as::<_, Review>(
        r#"
        SELECT id, user_id, movie_id, rating, comment, created_at
        FROM reviews
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a review by id, returning the deleted row or `None`.
pub async fn delete_review(pool: &SqlitePool, id: i64) -> Result<Option<Review>, sqlx::Error> {
    sqlx::query_as::<_, Review>(
        r#"
        DELETE FROM reviews
        WHERE id = $1
        RETURNING id, user_id, movie_id, rating, comment, created_at
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::db;
    use crate::backend::movies::db::{create_movie, delete_movie};
    use crate::backend::users::db::{create_user, delete_user};
    use crate::shared::types::NewMovie;
    use sqlx::error::ErrorKind;

    async fn fixture(pool: &SqlitePool) -> (i64, i64) {
        let user = create_user(pool, "alice@example.com", "alice", "hash")
            .await
            .unwrap();
        let movie = create_movie(
            pool,
            &NewMovie {
                title: "Inception".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        (user.id, movie.id)
    }

    #[tokio::test]
    async fn test_create_review_happy_path() {
        let pool = db::test_pool().await;
        let (user_id, movie_id) = fixture(&pool).await;

        let review = create_review(&pool, user_id, movie_id, 4, Some("Great"))
            .await
            .unwrap();
        assert_eq!(review.user_id, user_id);
        assert_eq!(review.movie_id, movie_id);
        assert_eq!(review.rating, 4);
        assert_eq!(review.comment.as_deref(), Some("Great"));

        let fetched = get_review_by_id(&pool, review.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, review.id);
        assert_eq!(fetched.created_at, review.created_at);
    }

    #[tokio::test]
    async fn test_rating_bounds_enforced_by_schema() {
        let pool = db::test_pool().await;
        let (user_id, movie_id) = fixture(&pool).await;

        for bad in [0, 6] {
            let err = create_review(&pool, user_id, movie_id, bad, None)
                .await
                .unwrap_err();
            let db_err = err.as_database_error().expect("database error");
            assert_eq!(db_err.kind(), ErrorKind::CheckViolation, "rating {}", bad);
        }

        for good in [1, 5] {
            create_review(&pool, user_id, movie_id, good, None)
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_unknown_movie_fails_foreign_key() {
        let pool = db::test_pool().await;
        let (user_id, _) = fixture(&pool).await;

        let err = create_review(&pool, user_id, 9999, 3, None)
            .await
            .unwrap_err();
        let db_err = err.as_database_error().expect("database error");
        assert_eq!(db_err.kind(), ErrorKind::ForeignKeyViolation);
    }

    #[tokio::test]
    async fn test_deleting_user_cascades_to_reviews() {
        let pool = db::test_pool().await;
        let (user_id, movie_id) = fixture(&pool).await;
        create_review(&pool, user_id, movie_id, 5, None).await.unwrap();

        delete_user(&pool, user_id).await.unwrap();

        assert!(get_all_reviews(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deleting_movie_cascades_to_reviews() {
        let pool = db::test_pool().await;
        let (user_id, movie_id) = fixture(&pool).await;
        create_review(&pool, user_id, movie_id, 2, None).await.unwrap();

        delete_movie(&pool, movie_id).await.unwrap();

        assert!(get_all_reviews(&pool).await.unwrap().is_empty());
    }
}
