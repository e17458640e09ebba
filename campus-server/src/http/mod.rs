//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - Uniform JSON error envelope (`timestamp`, `status`, `error`, `message`, `path`)

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use server::{build_router, run_server, ServerConfig, ServerError};
