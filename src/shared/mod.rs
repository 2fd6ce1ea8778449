//! Shared Module
//!
//! Types that cross the wire between the backend and the desktop client.
//! Everything here is serde-serializable and carries no server-side
//! behavior beyond row mapping.

/// Request and response types for the REST API
pub mod types;

pub use types::{
    AuthResponse, ErrorResponse, LoginRequest, Movie, NewMovie, NewReview, RegisterRequest,
    Review, UserResponse,
};
