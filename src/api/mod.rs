//! HTTP API module for the health, info, and echo endpoints.

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::{create_router, serve, serve_with_shutdown};
