/**
 * Movie Repository
 *
 * Database operations for the `movies` table. Movies carry no ownership;
 * any authenticated user may create or delete them.
 */

use sqlx::SqlitePool;

use crate::shared::types::{Movie, NewMovie};

/// Insert a new movie and return the stored row.
pub async fn create_movie(pool: &SqlitePool, movie: &NewMovie) -> Result<Movie, sqlx::Error> {
    sqlx::query_as::<_, Movie>(
        r#"
        INSERT INTO movies (title, genre, year, poster_url, summary)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, genre, year, poster_url, summary
        "#,
    )
    .bind(&movie.title)
    .bind(&movie.genre)
    .bind(movie.year)
    .bind(&movie.poster_url)
    .bind(&movie.summary)
    .fetch_one(pool)
    .await
}

/// List all movies.
pub async fn get_all_movies(pool: &SqlitePool) -> Result<Vec<Movie>, sqlx::Error> {
    sqlx::query_as::<_, Movie>(
        "SELECT id, title, genre, year, poster_url, summary FROM movies",
    )
    .fetch_all(pool)
    .await
}

/// Get a movie by id, or `None` if not found.
pub async fn get_movie_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Movie>, sqlx::Error> {
    sqlx::query_as::<_, Movie>(
        r#"
        SELECT id, title, genre, year, poster_url, summary
        FROM movies
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a movie by id, returning the deleted row or `None`.
///
/// Reviews of the movie cascade away with it.
pub async fn delete_movie(pool: &SqlitePool, id: i64) -> Result<Option<Movie>, sqlx::Error> {
    sqlx::query_as::<_, Movie>(
        r#"
        DELETE FROM movies
        WHERE id = $1
        RETURNING id, title, genre, year, poster_url, summary
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
