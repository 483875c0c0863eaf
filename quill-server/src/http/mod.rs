//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Urlencoded and multipart post forms
//! - Panic recovery into 500 responses
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig, ServerError};
