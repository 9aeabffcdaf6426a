//! Generic repository for any [`Entity`]
//!
//! Statements are assembled from the entity's table and column lists; every
//! value goes through bind parameters.

use std::marker::PhantomData;

use sqlx::PgPool;

use super::DbError;
use crate::models::{Draft, Entity, Pagination};

/// Repository over one entity table
pub struct CrudRepo<'a, E> {
    pool: &'a PgPool,
    entity: PhantomData<fn() -> E>,
}

impl<'a, E: Entity> CrudRepo<'a, E> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self {
            pool,
            entity: PhantomData,
        }
    }

    /// Get a single row by id.
    pub async fn get(&self, id: i32) -> Result<E, DbError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", E::COLUMNS, E::TABLE);

        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found(E::RESOURCE, id))
    }

    /// List rows ordered by id.
    pub async fn list(&self, page: Pagination) -> Result<Vec<E>, DbError> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id LIMIT $1 OFFSET $2",
            E::COLUMNS,
            E::TABLE
        );

        let rows = sqlx::query_as::<_, E>(&sql)
            .bind(page.limit)
            .bind(page.offset)
            .fetch_all(self.pool)
            .await?;

        Ok(rows)
    }

    /// List rows whose foreign key `parent` equals `parent_id`.
    ///
    /// `parent` must be one of [`Entity::PARENTS`].
    pub async fn list_by_parent(&self, parent: &str, parent_id: i32) -> Result<Vec<E>, DbError> {
        if !E::PARENTS.contains(&parent) {
            return Err(DbError::Sqlx(sqlx::Error::ColumnNotFound(parent.to_owned())));
        }

        let sql = format!(
            "SELECT {} FROM {} WHERE {} = $1 ORDER BY id",
            E::COLUMNS,
            E::TABLE,
            parent
        );

        let rows = sqlx::query_as::<_, E>(&sql)
            .bind(parent_id)
            .fetch_all(self.pool)
            .await?;

        Ok(rows)
    }

    /// Insert a row (single transaction).
    ///
    /// A unique or foreign-key violation rolls the transaction back and is
    /// returned as `Duplicate` / `Integrity`.
    pub async fn create(&self, draft: &E::Draft) -> Result<E, DbError> {
        let sql = insert_sql(E::TABLE, <E::Draft as Draft>::FIELDS, E::COLUMNS);
        let mut tx = self.pool.begin().await?;

        let row = draft
            .bind(sqlx::query_as::<_, E>(&sql))
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| DbError::from_write(E::RESOURCE, e))?;

        tx.commit().await?;
        tracing::debug!(resource = E::RESOURCE, "created");
        Ok(row)
    }

    /// Replace every writable field of an existing row (single transaction).
    pub async fn update(&self, id: i32, draft: &E::Draft) -> Result<E, DbError> {
        let sql = update_sql(E::TABLE, <E::Draft as Draft>::FIELDS, E::COLUMNS);
        let mut tx = self.pool.begin().await?;

        let row = draft
            .bind(sqlx::query_as::<_, E>(&sql))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DbError::from_write(E::RESOURCE, e))?
            .ok_or_else(|| DbError::not_found(E::RESOURCE, id))?;

        tx.commit().await?;
        tracing::debug!(resource = E::RESOURCE, id, "updated");
        Ok(row)
    }

    /// Delete a row, returning it (single transaction).
    ///
    /// Dependent rows declared `ON DELETE CASCADE` go with it.
    pub async fn delete(&self, id: i32) -> Result<E, DbError> {
        let sql = format!(
            "DELETE FROM {} WHERE id = $1 RETURNING {}",
            E::TABLE,
            E::COLUMNS
        );
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DbError::from_write(E::RESOURCE, e))?
            .ok_or_else(|| DbError::not_found(E::RESOURCE, id))?;

        tx.commit().await?;
        tracing::debug!(resource = E::RESOURCE, id, "deleted");
        Ok(row)
    }
}

fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

fn insert_sql(table: &str, fields: &[&str], columns: &str) -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        table,
        fields.join(", "),
        placeholders(fields.len()),
        columns
    )
}

/// The id is bound after the fields, as the last parameter.
fn update_sql(table: &str, fields: &[&str], columns: &str) -> String {
    let assignments = fields
        .iter()
        .enumerate()
        .map(|(i, field)| format!("{} = ${}", field, i + 1))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE {} SET {} WHERE id = ${} RETURNING {}",
        table,
        assignments,
        fields.len() + 1,
        columns
    )
}
