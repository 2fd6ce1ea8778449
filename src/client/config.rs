use std::fs;
use std::path::PathBuf;

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Client configuration: server location plus the session token.
///
/// The token is persisted to a small file under the platform config
/// directory so a restarted client stays logged in until the token
/// expires server-side.
#[derive(Debug, Clone)]
pub struct Config {
    server_url: String,
    token: Option<String>,
    token_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let server_url = std::env::var("CLIENT_API_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let token_path = token_path();
        let token = token_path.as_ref().and_then(load_token);
        Self {
            server_url,
            token,
            token_path,
        }
    }
}

impl Config {
    /// Create a new configuration from the environment, restoring any
    /// persisted token
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration pointed at an explicit server, with token
    /// persistence disabled
    pub fn with_server_url(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            token: None,
            token_path: None,
        }
    }

    /// Set the JWT token and persist it across restarts
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
        if let Some(path) = &self.token_path {
            match &self.token {
                Some(value) => save_token(path, value),
                None => remove_token(path),
            }
        }
    }

    /// Get the JWT token
    pub fn get_token(&self) -> Option<&String> {
        self.token.as_ref()
    }

    /// Clear the token (logout)
    pub fn clear_token(&mut self) {
        self.set_token(None);
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

fn token_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("reelview").join("token"))
}

fn load_token(path: &PathBuf) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn save_token(path: &PathBuf, token: &str) {
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            tracing::warn!("Failed to create config directory: {}", err);
            return;
        }
    }
    if let Err(err) = fs::write(path, token) {
        tracing::warn!("Failed to persist token: {}", err);
    }
}

fn remove_token(path: &PathBuf) {
    if path.exists() {
        if let Err(err) = fs::remove_file(path) {
            tracing::warn!("Failed to remove persisted token: {}", err);
        }
    }
}
