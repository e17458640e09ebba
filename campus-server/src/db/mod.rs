//! Database layer - connection pool, unit of work and repositories
//!
//! # Design Principles
//!
//! - One pooled connection per unit of work, released on commit or drop
//! - Repositories are built over the unit of work's connection, never the pool
//! - List endpoints batch child lookups with `= ANY($1)` (no N+1)
//! - Optional references are resolved with LEFT JOINs in the same round trip

pub mod aggregate;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod unit_of_work;

pub use aggregate::{group_by_parent, take_children, ChildrenByParent};
pub use error::DbError;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use unit_of_work::UnitOfWork;
