//! Reelview - Main Library
//!
//! Reelview is a small movie-review web application: a REST API backed by
//! SQLite, serving users, movies, and reviews with token-based
//! authentication, plus a native egui client for login, registration, and
//! browsing.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Request/response types shared between client and server
//! - **`backend`** - Axum HTTP server, repositories, auth, and middleware
//! - **`client`** - Native desktop app (egui/eframe)
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use reelview::backend::server::{config::Config, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(&config).await?;
//! // Use app with Axum server
//! # Ok(())
//! # }
//! ```
//!
//! ## Desktop Client
//!
//! ```rust,no_run
//! use reelview::client::state::AppState;
//!
//! let state = AppState::new();
//! // Drive state from an eframe::App implementation
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;

/// egui native desktop app
pub mod client;
