//! Shared command-line configuration
//!
//! Values come from flags, then environment (a `.env` file in the working
//! directory is loaded first), then defaults.

use anyhow::{anyhow, Context, Result};
use chrono_tz::Tz;
use clap::Args;

use extrack_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use extrack_server::models::Calendar;

/// Database connection options
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, env = "EXTRACK_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// The connection string, or an error explaining where to set it.
    pub fn require_url(&self) -> Result<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")
    }
}

/// Parse an IANA time zone name into a calendar.
pub fn parse_calendar(name: &str) -> Result<Calendar> {
    let tz: Tz = name
        .trim()
        .parse()
        .map_err(|e| anyhow!("invalid timezone '{}': {}", name, e))?;
    Ok(Calendar::new(tz))
}
