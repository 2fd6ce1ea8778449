/**
 * API Client Module
 *
 * Blocking HTTP client functions for the Reelview REST API. Each call
 * spins up a small Tokio runtime so it can be driven from a plain
 * background thread spawned by the UI.
 */

use crate::client::config::Config;
use crate::shared::types::{
    AuthResponse, ErrorResponse, LoginRequest, Movie, NewMovie, NewReview, RegisterRequest,
    Review, UserResponse,
};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;

/// Login with a username or email plus password
pub fn login(config: &Config, identifier: String, password: String) -> Result<AuthResponse, String> {
    let client = Client::new();
    let url = config.api_url("/api/auth/login");

    let request = LoginRequest {
        identifier: Some(identifier),
        username: None,
        email: None,
        password,
    };

    block_on(async {
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        parse_response(response).await
    })
}

/// Register a new account
pub fn register(
    config: &Config,
    email: String,
    username: String,
    password: String,
) -> Result<AuthResponse, String> {
    let client = Client::new();
    let url = config.api_url("/api/auth/register");

    let request = RegisterRequest {
        email,
        username,
        password,
    };

    block_on(async {
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        parse_response(response).await
    })
}

/// Resolve the identity behind a token against current storage
pub fn fetch_me(config: &Config, token: &str) -> Result<UserResponse, String> {
    let client = Client::new();
    let url = config.api_url("/api/auth/me");

    send_authed(client.get(&url), token)
}

/// Fetch the movie catalog
pub fn fetch_movies(config: &Config) -> Result<Vec<Movie>, String> {
    let client = Client::new();
    let url = config.api_url("/api/movies");

    block_on(async {
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        parse_response(response).await
    })
}

/// Fetch all reviews
pub fn fetch_reviews(config: &Config) -> Result<Vec<Review>, String> {
    let client = Client::new();
    let url = config.api_url("/api/reviews");

    block_on(async {
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        parse_response(response).await
    })
}

/// Add a movie to the catalog (requires a token)
pub fn create_movie(config: &Config, token: &str, movie: NewMovie) -> Result<Movie, String> {
    let client = Client::new();
    let url = config.api_url("/api/movies");

    send_authed(client.post(&url).json(&movie), token)
}

/// Post a review for a movie (requires a token)
pub fn create_review(config: &Config, token: &str, review: NewReview) -> Result<Review, String> {
    let client = Client::new();
    let url = config.api_url("/api/reviews");

    send_authed(client.post(&url).json(&review), token)
}

/// Delete one of the current user's reviews
pub fn delete_review(config: &Config, token: &str, review_id: i64) -> Result<Review, String> {
    let client = Client::new();
    let url = config.api_url(&format!("/api/reviews/{}", review_id));

    send_authed(client.delete(&url), token)
}

fn send_authed<T: DeserializeOwned>(request: RequestBuilder, token: &str) -> Result<T, String> {
    let request = request.bearer_auth(token);

    block_on(async {
        let response = request
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        parse_response(response).await
    })
}

fn block_on<T>(
    future: impl std::future::Future<Output = Result<T, String>>,
) -> Result<T, String> {
    // Create a runtime for async execution
    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;
    rt.block_on(future)
}

/// Decode a success body, or surface the server's `{"error": ...}` message
async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let status = response.status();

    if !status.is_success() {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        return Err(message);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
