// crates/server/src/routes/health.rs
//! Liveness plus a database round trip.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// `GET /health` body. `status` is "degraded" when the database does not answer.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthReport> {
    let db_ok = match state.db.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            false
        }
    };

    Json(HealthReport {
        status: if db_ok { "ok" } else { "degraded" },
        database: if db_ok { "reachable" } else { "unreachable" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.uptime_secs(),
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
