//! Axum web server adapter for predictor.
//!
//! Exposes the people API over HTTP. [`bootstrap`] wires the `SQLite`
//! repositories and the demographics client into a [`AxumContext`];
//! [`create_router`] turns that context into a router.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod openapi;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, bootstrap, start_server};
pub use config::{ConfigError, Environment, ServerConfig};
pub use error::HttpError;
pub use logging::init_tracing;
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
