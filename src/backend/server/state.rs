/**
 * Application State Management
 *
 * `AppState` is the central state container: the database pool (one
 * shared connection, acquired at startup, released on shutdown when the
 * pool drops) and the token keys (read-only after startup). `FromRef`
 * implementations let handlers extract just the part they need.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::tokens::JwtKeys;

/// Shared application state, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    /// Database pool, capped at a single connection
    pub db: SqlitePool,
    /// Token signing/verification keys built from the configured secret
    pub jwt: JwtKeys,
}

impl AppState {
    pub fn new(db: SqlitePool, jwt: JwtKeys) -> Self {
        Self { db, jwt }
    }
}

/// Lets handlers take `State<SqlitePool>` directly.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

/// Lets handlers take `State<JwtKeys>` directly.
impl FromRef<AppState> for JwtKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.jwt.clone()
    }
}
