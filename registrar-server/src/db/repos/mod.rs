//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Writes run in a transaction scoped to the single operation
//! - Uniqueness and foreign keys are enforced by the schema; failures are
//!   classified into [`DbError`] variants instead of pre-checked
//! - Reads are single statements

pub mod crud;
pub mod error;
pub mod students;

pub use crud::CrudRepo;
pub use error::DbError;
pub use students::StudentRepo;
