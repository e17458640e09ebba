//! campus-server: HTTP API and persistence for students, courses, teachers and departments
//!
//! Layering:
//! - [`db`]: pool, schema, unit of work, one repository per entity
//! - [`service`]: one transaction per operation, batch-loads associations
//! - [`assembler`]: builds the one-level-deep JSON responses
//! - [`http`]: axum routes, extractors, error envelope, server lifecycle

pub mod assembler;
pub mod db;
pub mod http;
pub mod models;
pub mod service;
pub mod state;

pub use db::{create_pool, create_pool_with_options, DbError};
pub use http::{build_router, run_server, ServerConfig, ServerError};
pub use state::AppState;
