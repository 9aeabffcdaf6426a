//! Traits tying row types to their tables
//!
//! Every table has a SERIAL `id` owned by the database. [`Entity`] describes
//! how to read a row back; [`Draft`] describes the writable columns and how to
//! bind them, so create and full-replace update share one shape.

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use super::ValidationError;

/// A `query_as` statement under construction for entity `E`
pub type BoundQuery<'q, E> = QueryAs<'q, Postgres, E, PgArguments>;

/// A row type backed by one table
pub trait Entity: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + 'static {
    /// Singular name used in error messages ("student")
    const RESOURCE: &'static str;

    /// Table name
    const TABLE: &'static str;

    /// Selected columns, `id` first, matching the struct fields
    const COLUMNS: &'static str;

    /// Foreign-key columns usable with `list_by_parent`
    const PARENTS: &'static [&'static str] = &[];

    /// Payload accepted by create and update
    type Draft: Draft;
}

/// Every writable field of an entity
pub trait Draft: DeserializeOwned + Send + Sync + 'static {
    /// Column names, in bind order
    const FIELDS: &'static [&'static str];

    /// Check field contents beyond what decoding already guarantees.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Bind one value per entry in [`Draft::FIELDS`], in the same order.
    fn bind<'q, E>(&'q self, query: BoundQuery<'q, E>) -> BoundQuery<'q, E>;
}
