//! HTTP layer for the lendit backend.
//!
//! Thin Axum handlers over the `lendit-core` rules and `lendit-db`
//! repositories. Exposed as a library so integration tests can build the
//! exact router (middleware stack included) that `main.rs` serves.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
