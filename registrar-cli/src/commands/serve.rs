//! HTTP server command
//!
//! Runs the registrar API, optionally preparing the schema first.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use registrar_server::db::schema;
use registrar_server::http::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub database: DatabaseArgs,

    /// Drop and recreate all tables before serving
    #[arg(long)]
    pub migrate: bool,

    /// Load fixture rows after migrating (implies --migrate)
    #[arg(long)]
    pub seed: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let pool = args.database.connect().await?;

    if args.migrate || args.seed {
        schema::reset(&pool, args.seed)
            .await
            .context("Failed to prepare schema")?;
        tracing::info!(seeded = args.seed, "Schema recreated");
    }

    tracing::info!("Starting registrar server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
