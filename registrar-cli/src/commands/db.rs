//! Schema maintenance commands
//!
//! `registrar db migrate|seed|drop|reset`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use registrar_server::db::schema;

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct DbArgs {
    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(subcommand)]
    pub command: DbCommand,
}

#[derive(Subcommand, Debug)]
pub enum DbCommand {
    /// Create every table (fails if they already exist)
    Migrate,
    /// Insert the fixture rows into an empty schema
    Seed,
    /// Drop every table
    Drop,
    /// Drop and recreate every table
    Reset {
        /// Load fixture rows after recreating
        #[arg(long)]
        seed: bool,
    },
}

pub async fn run_db(args: DbArgs) -> Result<()> {
    let pool = args.database.connect().await?;

    match args.command {
        DbCommand::Migrate => {
            schema::apply_migrations(&pool).await.context("Migration failed")?;
            tracing::info!(tables = schema::TABLES.len(), "Tables created");
        }
        DbCommand::Seed => {
            schema::seed_fixtures(&pool).await.context("Seeding failed")?;
            tracing::info!("Fixture rows inserted");
        }
        DbCommand::Drop => {
            schema::drop_all(&pool).await.context("Drop failed")?;
            tracing::info!("All tables dropped");
        }
        DbCommand::Reset { seed } => {
            schema::reset(&pool, seed).await.context("Reset failed")?;
            tracing::info!(seeded = seed, "Schema recreated");
        }
    }

    pool.close().await;
    Ok(())
}
