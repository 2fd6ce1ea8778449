//! Backend Error Module
//!
//! Error taxonomy for the HTTP API and its conversions to responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - ApiError definition and constructors
//! └── conversion.rs - IntoResponse and From<sqlx::Error>
//! ```
//!
//! Every handler returns `Result<_, ApiError>`; the `IntoResponse` impl in
//! `conversion` turns the error into a status code plus an
//! `{"error": message}` JSON body.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
