//! Users Module
//!
//! User storage and the HTTP handlers for the `/api/users` resource.
//! Registration itself lives in `backend::auth`; this module owns reads
//! and deletion.

/// User repository
pub mod db;

/// HTTP handlers for the users resource
pub mod handlers;

pub use db::User;
pub use handlers::{delete_user, get_user, list_users};
