//! Movies Module
//!
//! Movie storage and the HTTP handlers for the `/api/movies` resource.
//! Reads are public; creation and deletion require a valid token.

/// Movie repository
pub mod db;

/// HTTP handlers for the movies resource
pub mod handlers;

pub use handlers::{create_movie, delete_movie, get_movie, list_movies};
