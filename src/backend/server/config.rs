/**
 * Server Configuration
 *
 * Environment-driven configuration, loaded once at process start:
 *
 * - `DATABASE_URL`  - SQLite connection string (default `sqlite:reelview.db`)
 * - `JWT_SECRET`    - token signing secret, REQUIRED
 * - `SERVER_PORT`   - listen port (default 3000)
 *
 * A missing signing secret is a startup-time configuration error, never
 * a silent default: a deployment that forgot it must not come up signing
 * tokens with a well-known string.
 */

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite:reelview.db";
const DEFAULT_PORT: u16 = 3000;

/// Startup configuration errors. Any of these aborts the process.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET is not set; refusing to start without a signing secret")]
    MissingJwtSecret,
    #[error("SERVER_PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Process-wide configuration, read-only after startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable source.
    ///
    /// `from_env` delegates here; tests pass closures instead of mutating
    /// the process environment.
    pub fn load(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = get("DATABASE_URL").unwrap_or_else(|| {
            tracing::warn!(
                "DATABASE_URL not set, using {}",
                DEFAULT_DATABASE_URL
            );
            DEFAULT_DATABASE_URL.to_string()
        });

        let jwt_secret = get("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let port = match get("SERVER_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
        })
    }
}
