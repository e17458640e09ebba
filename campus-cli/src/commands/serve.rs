//! HTTP server command
//!
//! Runs the campus API until Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use campus_server::db::{create_pool_with_options, migrations};
use campus_server::run_server;

use super::DatabaseArgs;
use crate::config::{FileConfig, Overrides, Settings};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', env = "CAMPUS_BIND")]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Apply the schema before accepting requests
    #[arg(long)]
    pub migrate: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, file: FileConfig) -> Result<()> {
    let settings = Settings::resolve(
        Overrides {
            database_url: args.db.database_url,
            bind: args.bind,
            max_connections: args.db.max_connections,
            cors_permissive: args.cors_permissive,
        },
        file,
    );

    let pool = create_pool_with_options(settings.database_url()?, settings.max_connections)
        .await
        .context("Failed to create database pool")?;

    if args.migrate {
        migrations::run(&pool)
            .await
            .context("Failed to apply schema")?;
    }

    tracing::info!(
        bind = %settings.server.bind_addr,
        max_connections = settings.max_connections,
        "Starting campus server"
    );

    // Blocks until shutdown; the pool is closed on the way out.
    run_server(pool, settings.server_config())
        .await
        .context("Server error")?;

    Ok(())
}
