//! Database configuration loaded from the environment
//!
//! - `DATABASE_URL`: full connection string, takes precedence
//! - `DB_HOST`, `DB_PORT` (default 5432), `DB_NAME`, `DB_USER`, `DB_PASS`:
//!   assembled into connect options when `DATABASE_URL` is absent
//! - `DB_MAX_CONNECTIONS`: pool size (default 5)

use sqlx::postgres::PgConnectOptions;

use crate::error::{Error, Result};

/// Default maximum connections for the pool.
/// Kept low for a single-instance deployment.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const DEFAULT_PORT: u16 = 5432;

/// How to reach the database
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connect: PgConnectOptions,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an explicit connection string.
    ///
    /// Uses the default pool size; see [`DatabaseConfig::from_lookup`] for
    /// `DB_MAX_CONNECTIONS`.
    pub fn with_url(url: &str) -> Result<Self> {
        let connect = url
            .parse::<PgConnectOptions>()
            .map_err(|e| Error::Config(format!("invalid database url: {}", e)))?;

        Ok(Self {
            connect,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        })
    }

    /// Resolve config through an arbitrary variable lookup.
    ///
    /// `DB_MAX_CONNECTIONS` applies whichever way the connection is given.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => Self::with_url(&url)?,
            None => Self::from_parts(&lookup)?,
        };

        if let Some(raw) = lookup("DB_MAX_CONNECTIONS") {
            config.max_connections = parse_pool_size(&raw)?;
        }

        Ok(config)
    }

    fn from_parts(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key).filter(|v| !v.is_empty()).ok_or_else(|| {
                Error::Config(format!(
                    "DATABASE_URL not set and {} is missing (set DATABASE_URL or DB_HOST/DB_NAME/DB_USER)",
                    key
                ))
            })
        };

        let host = required("DB_HOST")?;
        let database = required("DB_NAME")?;
        let user = required("DB_USER")?;
        let port = match lookup("DB_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("DB_PORT must be a port number, got '{}'", raw)))?,
            None => DEFAULT_PORT,
        };

        let mut connect = PgConnectOptions::new()
            .host(&host)
            .port(port)
            .database(&database)
            .username(&user);
        if let Some(password) = lookup("DB_PASS") {
            connect = connect.password(&password);
        }

        Ok(Self {
            connect,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        })
    }
}

fn parse_pool_size(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| {
            Error::Config(format!(
                "DB_MAX_CONNECTIONS must be a positive integer, got '{}'",
                raw
            ))
        })
}
