//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! - **`api_routes`** - the public and token-gated route tables
//! - **`router`** - merges them, applies middleware and layers

/// Route tables
pub mod api_routes;

/// Router assembly
pub mod router;

pub use router::create_router;
