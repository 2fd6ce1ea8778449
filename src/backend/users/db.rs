/**
 * User Repository
 *
 * Database operations for the `users` table. The full `User` row carries
 * the password hash and stays inside the backend; every function that
 * serves read traffic returns the hash-free `UserResponse` instead.
 */

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::shared::types::UserResponse;

/// A full user row, including the stored password hash.
///
/// Only the credential-comparison path in login should touch `password`;
/// nothing serialized to a client ever includes it.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    /// bcrypt hash, never the raw password
    pub password: String,
    /// Optional display name
    pub name: Option<String>,
}

/// Insert a new user, returning the hash-free summary.
///
/// A duplicate username or email surfaces as a unique-violation database
/// error; callers map it to a client-visible conflict.
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    username: &str,
    password_hash: &str,
) -> Result<UserResponse, sqlx::Error> {
    sqlx::query_as::<_, UserResponse>(
        r#"
        INSERT INTO users (email, username, password)
        VALUES ($1, $2, $3)
        RETURNING id, username, email
        "#,
    )
    .bind(email)
    .bind(username)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

/// Get a full user row by username, or `None` if not found.
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password, name
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

/// Get a full user row by email, or `None` if not found.
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password, name
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get a user summary by id, or `None` if not found.
pub async fn get_user_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<UserResponse>, sqlx::Error> {
    sqlx::query_as::<_, UserResponse>(
        r#"
        SELECT id, username, email
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List all users as hash-free summaries.
pub async fn get_all_users(pool: &SqlitePool) -> Result<Vec<UserResponse>, sqlx::Error> {
    sqlx::query_as::<_, UserResponse>("SELECT id, username, email FROM users")
        .fetch_all(pool)
        .await
}

/// Delete a user by id, returning the deleted summary or `None`.
///
/// The schema cascades: all reviews authored by the user go with them.
pub async fn delete_user(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<UserResponse>, sqlx::Error> {
    sqlx::query_as::<_, UserResponse>(
        r#"
        DELETE FROM users
        WHERE id = $1
        RETURNING id, username, email
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
