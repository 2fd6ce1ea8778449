/**
 * Schema Bootstrap and Seed Fixtures
 *
 * Drops and recreates the three tables unconditionally, then optionally
 * loads development fixture data. This is a development seeding tool,
 * not a production migration: running it destroys all stored data.
 *
 * # Tables
 *
 * - `users`    - unique username, unique optional email, bcrypt hash
 * - `movies`   - title required, the rest optional
 * - `reviews`  - user/movie foreign keys (ON DELETE CASCADE),
 *                rating CHECK-constrained to 1..=5, insert-time timestamp
 */

use sqlx::SqlitePool;

use crate::backend::{movies, reviews, users};
use crate::shared::types::NewMovie;

/// Drop and recreate all three tables.
///
/// Order matters twice over: drops run child-first so no foreign key is
/// left dangling, and creates run parent-first so the references resolve.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("DROP TABLE IF EXISTS reviews")
        .execute(pool)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS movies")
        .execute(pool)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS users")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT UNIQUE NOT NULL,
            email TEXT UNIQUE,
            password TEXT NOT NULL,
            name TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE movies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            genre TEXT,
            year INTEGER,
            poster_url TEXT,
            summary TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE reviews (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            movie_id INTEGER NOT NULL REFERENCES movies(id) ON DELETE CASCADE,
            rating INTEGER CHECK (rating >= 1 AND rating <= 5),
            comment TEXT,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Load the development fixtures through the repositories.
pub async fn seed_data(pool: &SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Creating users");
    let alice = users::db::create_user(
        pool,
        "alice@example.com",
        "alice",
        &bcrypt::hash("superSecretPassword123", bcrypt::DEFAULT_COST)?,
    )
    .await?;
    let bob = users::db::create_user(
        pool,
        "bob@example.com",
        "bob",
        &bcrypt::hash("hunter2", bcrypt::DEFAULT_COST)?,
    )
    .await?;
    let charlie = users::db::create_user(
        pool,
        "charlie@example.com",
        "charlie",
        &bcrypt::hash("charliePass456", bcrypt::DEFAULT_COST)?,
    )
    .await?;

    tracing::info!("Creating movies");
    let inception = movies::db::create_movie(
        pool,
        &NewMovie {
            title: "Inception".to_string(),
            genre: Some("Sci-Fi".to_string()),
            year: Some(2010),
            poster_url: Some("http://example.com/inception.jpg".to_string()),
            summary: Some("A mind-bending thriller...".to_string()),
        },
    )
    .await?;
    let godfather = movies::db::create_movie(
        pool,
        &NewMovie {
            title: "The Godfather".to_string(),
            genre: Some("Crime".to_string()),
            year: Some(1972),
            poster_url: Some("http://example.com/godfather.jpg".to_string()),
            summary: Some("Classic mafia drama.".to_string()),
        },
    )
    .await?;

    tracing::info!("Creating reviews");
    reviews::db::create_review(
        pool,
        alice.id,
        inception.id,
        4,
        Some("Really enjoyed this movie!"),
    )
    .await?;
    reviews::db::create_review(pool, bob.id, godfather.id, 5, Some("Masterpiece.")).await?;
    reviews::db::create_review(pool, charlie.id, godfather.id, 3, Some("Pretty good!")).await?;

    tracing::info!("Seed data loaded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::db;

    #[tokio::test]
    async fn test_create_schema_is_idempotent() {
        let pool = db::test_pool().await;
        // A second run must drop and recreate without error.
        create_schema(&pool).await.unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0);
    }

    #[tokio::test]
    async fn test_schema_recreate_clears_rows() {
        let pool = db::test_pool().await;
        sqlx::query("INSERT INTO movies (title) VALUES ('Alien')")
            .execute(&pool)
            .await
            .unwrap();

        create_schema(&pool).await.unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movies")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0);
    }
}
