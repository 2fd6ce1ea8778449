//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints:
//!
//! - **`register`** - POST /api/auth/register - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`get_me`** - GET /api/auth/me - Current user info
//!
//! Request and response bodies live in `crate::shared::types` so the
//! desktop client can reuse them.

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handler
pub mod me;

pub use login::login;
pub use me::get_me;
pub use register::register;
