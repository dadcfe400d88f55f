//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{correlation, distribution, overview, rankings, records, timeline};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Read-only API; any origin may read it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Snapshot and entities
        .route(overview::GET_SNAPSHOT, get(handlers::get_snapshot))
        .route(overview::GET_STATS, get(handlers::get_stats))
        .route(overview::LIST_COASTERS, get(handlers::list_coasters))
        .route(overview::GET_COASTER, get(handlers::get_coaster))
        .route(overview::GET_PARK_LEGEND, get(handlers::get_park_legend))
        // Visualization endpoints
        .route(rankings::GET_RANKING, get(handlers::get_ranking))
        .route(correlation::GET_SCATTER_DATA, get(handlers::get_scatter))
        .route(timeline::GET_TIMELINE_DATA, get(handlers::get_timeline))
        .route(distribution::GET_DISTRIBUTION, get(handlers::get_distribution))
        .route(
            distribution::GET_MANUFACTURER_BREAKDOWN,
            get(handlers::get_manufacturer_breakdown),
        )
        .route(records::GET_RECORD_CATEGORIES, get(handlers::get_record_categories))
        // Lookups
        .route("/lookup/park-color/{park}", get(handlers::lookup_park_color))
        .route(
            "/lookup/manufacturer-color/{manufacturer}",
            get(handlers::lookup_manufacturer_color),
        )
        .route("/lookup/truncate/{name}", get(handlers::lookup_display_name));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::services::DashboardSnapshot;

    #[test]
    fn test_router_creation() {
        let snapshot = DashboardSnapshot::build(&[], DashboardConfig::default()).unwrap();
        let _router = create_router(AppState::new(snapshot));
    }
}
