//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use campus_server::db::{create_pool_with_options, migrations};

use super::DatabaseArgs;
use crate::config::{FileConfig, Overrides, Settings};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create any missing tables and indexes
pub async fn run_migrate(args: MigrateArgs, file: FileConfig) -> Result<()> {
    let settings = Settings::resolve(
        Overrides {
            database_url: args.db.database_url,
            max_connections: args.db.max_connections,
            ..Overrides::default()
        },
        file,
    );

    let pool = create_pool_with_options(settings.database_url()?, settings.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to apply schema")?;
    pool.close().await;

    println!("Schema is up to date");
    Ok(())
}
