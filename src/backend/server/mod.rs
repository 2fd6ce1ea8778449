//! Server Module
//!
//! Initialization and configuration for the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration, loaded once at startup
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - Pool creation and app assembly
//! ```

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::Config;
pub use init::create_app;
pub use state::AppState;
