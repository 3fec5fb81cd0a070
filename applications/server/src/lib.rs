//! Encore Server Library
//!
//! JSON HTTP service over the booking directory: venue and artist pages,
//! name search, location grouping and create/edit/delete of listings.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use api::router;
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
