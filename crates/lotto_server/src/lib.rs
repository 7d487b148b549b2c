//! REST API server for the unique-draw generator
//!
//! This crate provides an HTTP REST API over the history store and the
//! generator core, exposing draw generation, latest-draw lookup and a
//! mutex-guarded history refresh.

pub mod config;
pub mod routes;
pub mod server;

// Re-export the layers the server glues together
pub use lotto_core;
pub use lotto_store;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
