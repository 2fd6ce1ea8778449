//! Authentication Module
//!
//! Registration, login, and token management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── tokens.rs       - Signed token issuance and verification
//! └── handlers/       - HTTP handlers
//!     ├── register.rs - POST /api/auth/register
//!     ├── login.rs    - POST /api/auth/login
//!     └── me.rs       - GET /api/auth/me
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email/username/password → uniqueness checks → bcrypt
//!    hash stored → token returned
//! 2. **Login**: identifier (username or email) + password → bcrypt
//!    comparison → token returned
//! 3. **Me**: bearer token → verified claims → user re-resolved from
//!    storage
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never returned
//! - Tokens are HS256-signed with the process-wide secret and expire
//!   after 24 hours
//! - Invalid credentials return one generic 401 (no enumeration)

/// Token issuance and verification
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use tokens::{Claims, JwtKeys};
