//! Backend Module
//!
//! This module contains all server-side code for the Reelview application:
//! an Axum HTTP server over a SQLite database, exposing users, movies, and
//! reviews as REST resources with token-based authentication.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`db`** - Connection setup, schema bootstrap, and seed fixtures
//! - **`users`** / **`movies`** / **`reviews`** - Repository + handlers per resource
//! - **`auth`** - Registration, login, tokens
//! - **`middleware`** - Bearer-token authorization middleware
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`error`** - Backend error types and HTTP conversion
//!
//! # Error Handling
//!
//! All handlers return `Result<_, ApiError>`; the error converts into an
//! HTTP status plus a `{"error": message}` JSON body, so no repository or
//! auth failure propagates as an unhandled fault.

/// Server setup and configuration
pub mod server;

/// Database connection, schema, and fixtures
pub mod db;

/// User repository and handlers
pub mod users;

/// Movie repository and handlers
pub mod movies;

/// Review repository and handlers
pub mod reviews;

/// Authentication: registration, login, tokens
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::state::AppState;
