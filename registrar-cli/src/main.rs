use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "registrar",
    version,
    about = "School administration records over a JSON HTTP API",
    long_about = "Serve CRUD endpoints for faculties, teachers, courses, students, grades and \
                  related records backed by PostgreSQL, and manage the database schema."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create, seed or drop the database schema
    Db(commands::db::DbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Db(args) => commands::run_db(args).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["registrar", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.bind.to_string(), "127.0.0.1:8000");
        assert!(!args.cors_permissive);
        assert!(!args.migrate);
    }

    #[test]
    fn reset_accepts_seed_flag() {
        let cli = Cli::try_parse_from(["registrar", "--debug", "db", "reset", "--seed"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(
            cli.command,
            Commands::Db(commands::db::DbArgs {
                command: commands::db::DbCommand::Reset { seed: true },
                ..
            })
        ));
    }
}
