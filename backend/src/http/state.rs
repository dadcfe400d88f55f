//! Application state for the HTTP server.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::services::DashboardSnapshot;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Snapshot served by every endpoint
    pub snapshot: Arc<DashboardSnapshot>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create a new application state around a built snapshot.
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            started_at: Utc::now(),
        }
    }
}
