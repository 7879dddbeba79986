//! `blog-api` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`   — start the API server.
//! - `init-db` — create the `blogs` table and exit.
//!
//! A `.env` file in the working directory is read before flags are parsed,
//! so every `env = ...` flag below can be set there.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blog-api", about = "Blog post CRUD service", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
        bind: SocketAddr,

        #[command(flatten)]
        database: DatabaseArgs,
    },
    /// Create the database schema if it is missing.
    InitDb {
        #[command(flatten)]
        database: DatabaseArgs,
    },
}

#[derive(Args)]
struct DatabaseArgs {
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://blogs.db")]
    database_url: String,

    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    max_connections: u32,
}

impl DatabaseArgs {
    async fn connect(&self) -> Result<db::DbPool> {
        db::pool::create_pool(&self.database_url, self.max_connections)
            .await
            .with_context(|| format!("failed to open database {}", self.database_url))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind, database } => {
            info!("Starting API server on {bind}");
            let pool = database.connect().await?;
            api::serve(api::ServerConfig { bind_addr: bind }, pool)
                .await
                .context("server failed")?;
        }
        Command::InitDb { database } => {
            info!("Initialising schema in {}", database.database_url);
            let pool = database.connect().await?;
            db::pool::init_schema(&pool)
                .await
                .context("schema bootstrap failed")?;
            info!("Schema ready");
        }
    }

    Ok(())
}
