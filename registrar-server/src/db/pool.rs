//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Create a PostgreSQL connection pool from resolved configuration.
///
/// # Errors
///
/// Returns an error if the first connection cannot be established.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::from_env()?).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(config.connect.clone(), config.max_connections).await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `connect` - PostgreSQL connect options
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    connect: PgConnectOptions,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        host = connect.get_host(),
        database = connect.get_database().unwrap_or_default(),
        max_connections,
        "Connecting to database"
    );

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p registrar-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let config = DatabaseConfig::from_env().expect("DATABASE_URL required");
        let pool = create_pool(&config).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let config = DatabaseConfig::from_env().expect("DATABASE_URL required");
        let pool = create_pool(&config).await.expect("pool creation failed");

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i32,) = sqlx::query_as("SELECT $1::int")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i32);
        }
    }
}
