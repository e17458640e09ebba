//! Subcommand implementations

pub mod migrate;
pub mod serve;

use clap::Args;

pub use migrate::{run_migrate, MigrateArgs};
pub use serve::{run_serve, ServeArgs};

/// Database connection flags shared by every subcommand that needs the store
#[derive(Args, Debug, Clone, Default)]
pub struct DatabaseArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled connections (default: 5)
    #[arg(long)]
    pub max_connections: Option<u32>,
}
