//! Client Module
//!
//! Native desktop client (egui/eframe) for the Reelview API: login and
//! registration forms, a movie browser with reviews, and a review
//! composer. Network calls run on background threads and report back
//! over channels polled from the UI loop; the issued token is persisted
//! and attached to subsequent mutating requests.

/// Client configuration and token persistence
pub mod config;

/// HTTP client functions for the REST API
pub mod api;

/// UI state and request orchestration
pub mod state;

/// Color constants
pub mod theme;

/// UI views
pub mod views;

pub use state::{AppState, View};
