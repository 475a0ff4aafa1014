//! Minimal HTTP service with health, info, and echo endpoints.
//!
//! ```text
//! GET /health      -> {"status":"ok"}
//! GET /info        -> {"app":"gke-flask-api","version":"1.0","environment":"<ENV>"}
//! GET /echo/{msg}  -> {"you_said":"<msg>"}
//! ```
//!
//! Handlers are stateless; the only shared value is the immutable
//! [`Config`] loaded at startup.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`api`]: Handlers, route table and server loop
//! - [`metrics`]: Request counters and latency histograms
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
