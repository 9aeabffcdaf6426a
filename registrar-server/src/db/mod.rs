//! Database layer - connection pool, schema scripts and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default)
//! - Rely on DB constraints, classify conflicts - no check-then-insert
//! - One transaction per write operation
//! - Cascades live in the schema as `ON DELETE CASCADE`

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use sqlx::PgPool;
