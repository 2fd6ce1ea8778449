/**
 * Reelview Server Entry Point
 *
 * Loads configuration, assembles the Axum application, and serves it.
 * Startup failures (missing signing secret, unreachable database) are
 * logged and exit the process with a non-zero status; nothing after
 * startup may terminate the process.
 */

use reelview::backend::server::{config::Config, init::create_app};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Configuration error: {}", err);
            std::process::exit(1);
        }
    };

    let app = match create_app(&config).await {
        Ok(app) => app,
        Err(err) => {
            tracing::error!("Failed to initialize server: {}", err);
            std::process::exit(1);
        }
    };

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server is running on port {}", config.port);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind {}: {}", addr, err);
            std::process::exit(1);
        }
    };

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", err);
        std::process::exit(1);
    }
}
