//! Reviews Module
//!
//! Review storage and the HTTP handlers for the `/api/reviews` resource.
//! Reads are public; creating a review requires a token (the owner comes
//! from the token, never the body) and deleting one requires being its
//! owner.

/// Review repository
pub mod db;

/// HTTP handlers for the reviews resource
pub mod handlers;

pub use handlers::{create_review, delete_review, get_review, list_reviews};
