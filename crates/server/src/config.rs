// crates/server/src/config.rs
//! Runtime settings: command-line flags first, then environment, then defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Default port for the server.
pub const DEFAULT_PORT: u16 = 3001;

/// Token lifetime when `JOBLY_TOKEN_TTL_HOURS` is unset.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

const DEV_SECRET: &str = "secret-dev";

/// jobly: job postings REST API.
#[derive(Debug, Default, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Port to listen on [env: JOBLY_PORT, PORT]
    #[arg(long)]
    pub port: Option<u16>,

    /// Address to bind [env: JOBLY_HOST]
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// SQLite database file [env: JOBLY_DB]
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Effective settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    /// `None` means the platform default location.
    pub db_path: Option<PathBuf>,
    pub secret_key: String,
    pub token_ttl_hours: i64,
}

impl Config {
    /// Resolve settings from the process environment.
    pub fn resolve(cli: Cli) -> Self {
        Self::resolve_with(cli, |key| std::env::var(key).ok())
    }

    /// Resolve settings with an explicit environment lookup.
    pub fn resolve_with(cli: Cli, env: impl Fn(&str) -> Option<String>) -> Self {
        let port = cli
            .port
            .or_else(|| env("JOBLY_PORT").and_then(|p| p.parse().ok()))
            .or_else(|| env("PORT").and_then(|p| p.parse().ok()))
            .unwrap_or(DEFAULT_PORT);
        let host = cli
            .host
            .or_else(|| env("JOBLY_HOST").and_then(|h| h.parse().ok()))
            .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let db_path = cli.db.or_else(|| env("JOBLY_DB").map(PathBuf::from));

        let secret_key = env("SECRET_KEY").unwrap_or_else(|| {
            tracing::warn!("SECRET_KEY not set; using the development secret");
            DEV_SECRET.to_string()
        });
        let token_ttl_hours = env("JOBLY_TOKEN_TTL_HOURS")
            .and_then(|h| h.parse().ok())
            .filter(|h: &i64| *h > 0)
            .unwrap_or(DEFAULT_TOKEN_TTL_HOURS);

        Self {
            addr: SocketAddr::new(host, port),
            db_path,
            secret_key,
            token_ttl_hours,
        }
    }
}
