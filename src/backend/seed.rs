/**
 * Development Seed Tool
 *
 * Drops and recreates all tables, then loads fixture data. Intended only
 * for development seeding: running it against a database with real data
 * destroys that data.
 *
 * Usage: `cargo run --bin reelview-seed` (honors DATABASE_URL).
 */

use reelview::backend::db::{self, schema};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:reelview.db".to_string());

    tracing::info!("Connecting to {}", database_url);
    let pool = match db::connect(&database_url).await {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!("Failed to connect: {}", err);
            std::process::exit(1);
        }
    };

    tracing::info!("Dropping and recreating tables");
    if let Err(err) = schema::create_schema(&pool).await {
        tracing::error!("Failed to create schema: {}", err);
        std::process::exit(1);
    }

    if let Err(err) = schema::seed_data(&pool).await {
        tracing::error!("Failed to seed data: {}", err);
        std::process::exit(1);
    }

    pool.close().await;
    tracing::info!("Done");
}
