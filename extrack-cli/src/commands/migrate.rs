//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use extrack_server::db::{create_pool_with_options, migrations};

use crate::config::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Apply the schema and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let url = args.db.require_url()?;
    let pool = create_pool_with_options(url, args.db.max_connections)
        .await
        .context("Failed to create database pool")?;

    let result = migrations::run(&pool).await.context("Migration failed");
    pool.close().await;
    result
}
