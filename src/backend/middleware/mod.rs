//! Middleware Module
//!
//! HTTP middleware for the backend server. Currently a single concern:
//!
//! - **`auth`** - bearer-token authorization for protected routes

pub mod auth;

pub use auth::{auth_middleware, AuthUser, CurrentUser};
