//! Database Module
//!
//! Connection setup for the SQLite store plus the development schema
//! bootstrap. The pool is created once at startup and injected into the
//! application state; repositories borrow it per call.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Schema bootstrap and seed fixtures
pub mod schema;

/// Open the SQLite database named by `database_url`.
///
/// The pool is capped at a single connection: the store is used
/// sequentially by whichever request is currently being handled, and each
/// statement is atomic on its own. Foreign key enforcement is switched on
/// so the review cascades hold.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
}

/// In-memory database with the schema applied, for tests.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    schema::create_schema(&pool)
        .await
        .expect("Failed to create schema");
    pool
}
