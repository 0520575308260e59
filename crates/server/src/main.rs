// crates/server/src/main.rs
//! Jobly server binary.
//!
//! Opens (and migrates) the database, then serves the API until Ctrl-C.

use anyhow::{Context, Result};
use clap::Parser;
use jobly_db::Database;
use jobly_server::{create_app, AppState, AuthKeys, Cli, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,jobly_server=info,jobly_db=info".into()),
        )
        .init();

    let config = Config::resolve(Cli::parse());

    let db = match &config.db_path {
        Some(path) => Database::new(path).await,
        None => Database::open_default().await,
    }
    .context("failed to open database")?;
    info!(path = %db.db_path().display(), "Database ready");

    let auth = AuthKeys::new(
        &config.secret_key,
        chrono::Duration::hours(config.token_ttl_hours),
    );
    let state = AppState::new(db, auth)?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    info!("Jobly listening on http://{}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
