// crates/server/src/lib.rs
//! Jobly server library.
//!
//! This crate provides the Axum-based HTTP server for jobly: a REST API for
//! posting, searching, updating, and removing job listings.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod schemas;
pub mod state;

pub use auth::{AuthKeys, Claims};
pub use config::{Cli, Config};
pub use error::*;
pub use routes::api_routes;
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the Axum application with all routes and middleware.
///
/// This sets up:
/// - API routes (health, jobs) behind token authentication
/// - CORS (allows any origin)
/// - Request tracing
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api_routes(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Integration Tests
// ============================================================================
