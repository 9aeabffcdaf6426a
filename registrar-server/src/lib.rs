//! registrar-server: relational core and HTTP API for school administration
//!
//! Fifteen interrelated tables (faculties, teachers, courses, students,
//! grades, ...) exposed as JSON CRUD endpoints under `/api/v1`.
//!
//! Layers, leaves first:
//! - [`db::schema`]: embedded SQL scripts that create, seed and drop the schema
//! - [`models`]: row types, write payloads and input validation
//! - [`db::repos`]: transactional data access with constraint classification
//! - [`http`]: axum router, extractors and error-to-status mapping

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;

pub use config::DatabaseConfig;
pub use error::{Error, Result};
pub use http::{build_router, run_server, AppState, ServerConfig};
