//! HTTP server command
//!
//! Connects the store, serves the API until SIGINT/SIGTERM, then closes it.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use extrack_server::{run_server, MemoryStore, PgStore, ServerConfig, Store};

use crate::config::{parse_calendar, DatabaseArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// IANA time zone used for "today" when an exercise has no date
    #[arg(long, env = "EXTRACK_TIMEZONE", default_value = "UTC")]
    pub timezone: String,

    /// Keep data in memory instead of PostgreSQL (lost on exit)
    #[arg(long)]
    pub in_memory: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let calendar = parse_calendar(&args.timezone)?;

    let store: Arc<dyn Store> = if args.in_memory {
        tracing::warn!("Using in-memory store; data will not survive a restart");
        Arc::new(MemoryStore::new())
    } else {
        let url = args.db.require_url()?;
        let store = PgStore::connect(url, args.db.max_connections)
            .await
            .context("Failed to connect to database")?;
        Arc::new(store)
    };

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
        calendar,
    };

    // Blocks until shutdown; the store is closed on the way out
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
