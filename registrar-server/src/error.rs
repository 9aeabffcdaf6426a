//! Error types for registrar-server startup and schema management

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Schema script '{script}' failed: {source}")]
    Migration {
        script: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
