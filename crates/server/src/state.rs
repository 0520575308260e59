// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::Arc;
use std::time::Instant;

use jobly_db::Database;

use crate::auth::AuthKeys;
use crate::error::ApiResult;
use crate::schemas::JobSchemas;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// Database handle for job and company queries.
    pub db: Database,
    /// Token signing and verification keys.
    pub auth: AuthKeys,
    /// Compiled request validators.
    pub schemas: JobSchemas,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(db: Database, auth: AuthKeys) -> ApiResult<Arc<Self>> {
        Ok(Arc::new(Self {
            start_time: Instant::now(),
            db,
            auth,
            schemas: JobSchemas::new()?,
        }))
    }

    /// Get the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
