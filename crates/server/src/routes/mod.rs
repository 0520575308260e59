//! API route handlers for the jobly server.

pub mod health;
pub mod jobs;

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::Router;

use crate::auth::authenticate;
use crate::state::AppState;

/// Create the combined API router.
///
/// Routes:
/// - GET    /health    - Health check
/// - POST   /jobs      - Create a job (admin)
/// - GET    /jobs      - Search jobs
/// - GET    /jobs/{id} - Job detail with company
/// - PATCH  /jobs/{id} - Update a job (admin)
/// - DELETE /jobs/{id} - Delete a job (admin)
///
/// Every request passes through [`authenticate`], which attaches the
/// caller's claims when a valid bearer token is present.
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health::router())
        .merge(jobs::router())
        .layer(from_fn_with_state(state.clone(), authenticate))
        .with_state(state)
}
