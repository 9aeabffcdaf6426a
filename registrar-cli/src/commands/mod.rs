//! Command implementations for the registrar CLI

pub mod db;
pub mod serve;

pub use db::run_db;
pub use serve::run_serve;

use anyhow::{Context, Result};
use clap::Args;

use registrar_server::db::create_pool;
use registrar_server::DatabaseConfig;
use registrar_server::db::PgPool;

/// Connection arguments shared by every command that touches the database
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (falls back to DB_HOST/DB_PORT/DB_NAME/DB_USER/DB_PASS)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pool connections (overrides DB_MAX_CONNECTIONS, default 5)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_connections: Option<u32>,
}

impl DatabaseArgs {
    /// Resolve connection settings from flags, then the environment.
    pub fn resolve(&self) -> Result<DatabaseConfig> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    fn resolve_with(&self, env: impl Fn(&str) -> Option<String>) -> Result<DatabaseConfig> {
        let mut config = DatabaseConfig::from_lookup(|key| match key {
            "DATABASE_URL" => self.database_url.clone().or_else(|| env(key)),
            _ => env(key),
        })
        .context("Failed to resolve database configuration")?;

        if let Some(max) = self.max_connections {
            config.max_connections = max;
        }

        Ok(config)
    }

    /// Resolve settings and open the pool.
    pub async fn connect(&self) -> Result<PgPool> {
        let config = self.resolve()?;
        create_pool(&config)
            .await
            .context("Failed to create database pool")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        db: DatabaseArgs,
    }

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    fn args(url: Option<&str>, max: Option<u32>) -> DatabaseArgs {
        DatabaseArgs {
            database_url: url.map(str::to_owned),
            max_connections: max,
        }
    }

    #[test]
    fn env_pool_size_applies_with_url() {
        let config = args(Some("postgres://app@localhost/school"), None)
            .resolve_with(env(&[("DB_MAX_CONNECTIONS", "12")]))
            .unwrap();
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.connect.get_database(), Some("school"));
    }

    #[test]
    fn flag_pool_size_wins_over_env() {
        let config = args(Some("postgres://app@localhost/school"), Some(3))
            .resolve_with(env(&[("DB_MAX_CONNECTIONS", "12")]))
            .unwrap();
        assert_eq!(config.max_connections, 3);
    }

    #[test]
    fn flag_url_wins_over_env_url() {
        let config = args(Some("postgres://app@flag-host/school"), None)
            .resolve_with(env(&[("DATABASE_URL", "postgres://app@env-host/school")]))
            .unwrap();
        assert_eq!(config.connect.get_host(), "flag-host");
    }

    #[test]
    fn falls_back_to_parts() {
        let config = args(None, None)
            .resolve_with(env(&[
                ("DB_HOST", "localhost"),
                ("DB_NAME", "school"),
                ("DB_USER", "admin"),
            ]))
            .unwrap();
        assert_eq!(config.connect.get_host(), "localhost");
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn missing_configuration_is_an_error() {
        let err = args(None, None).resolve_with(env(&[])).unwrap_err();
        assert!(format!("{:#}", err).contains("DATABASE_URL not set"));
    }

    #[test]
    fn zero_max_connections_flag_is_rejected() {
        assert!(Harness::try_parse_from(["registrar", "--max-connections", "0"]).is_err());
    }
}
