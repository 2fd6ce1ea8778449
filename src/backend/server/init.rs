/**
 * Server Initialization
 *
 * Assembles the running application from configuration:
 *
 * 1. Open the database (single shared connection)
 * 2. Build the token keys from the configured secret
 * 3. Create the router with all routes and layers
 *
 * Unlike development seeding, startup never drops tables; a database
 * that cannot be reached is an unrecoverable startup failure surfaced to
 * `main`, which logs and exits non-zero.
 */

use axum::Router;

use crate::backend::auth::tokens::JwtKeys;
use crate::backend::db;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::Config;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application.
pub async fn create_app(config: &Config) -> Result<Router, sqlx::Error> {
    tracing::info!("Connecting to database: {}", config.database_url);
    let pool = db::connect(&config.database_url).await?;
    tracing::info!("Database connection established");

    let state = AppState::new(pool, JwtKeys::from_secret(config.jwt_secret.as_bytes()));

    Ok(create_router(state))
}
