//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and reads from the shared
//! snapshot; nothing is recomputed per request.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use super::dto::{
    CoasterDetailResponse, CoasterListResponse, ColorLookupResponse, DerivedStats,
    DistributionKind, DistributionSlice, HealthResponse, LegendEntry, ManufacturerBreakdown,
    RankingKind, RankingQuery, RankingResponse, RecordCategory, ScatterData, TimelinePoint,
    TruncateResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::services::DashboardSnapshot;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        coasters: state.snapshot.coasters.len(),
        fingerprint: state.snapshot.fingerprint.clone(),
        started_at: state.started_at,
    }))
}

// =============================================================================
// Snapshot and Coasters
// =============================================================================

/// GET /v1/snapshot
///
/// Every view in one response.
pub async fn get_snapshot(State(state): State<AppState>) -> HandlerResult<DashboardSnapshot> {
    Ok(Json(state.snapshot.as_ref().clone()))
}

/// GET /v1/stats
pub async fn get_stats(State(state): State<AppState>) -> HandlerResult<DerivedStats> {
    Ok(Json(state.snapshot.stats.clone()))
}

/// GET /v1/coasters
pub async fn list_coasters(State(state): State<AppState>) -> HandlerResult<CoasterListResponse> {
    let coasters = state.snapshot.coasters.clone();
    let total = coasters.len();
    Ok(Json(CoasterListResponse { coasters, total }))
}

/// GET /v1/coasters/{name}
///
/// Exact-name lookup, used to reopen a coaster picked from any view.
pub async fn get_coaster(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> HandlerResult<CoasterDetailResponse> {
    let coaster = state.snapshot.require_coaster(&name)?;
    Ok(Json(coaster.clone().into()))
}

/// GET /v1/legend
pub async fn get_park_legend(State(state): State<AppState>) -> HandlerResult<Vec<LegendEntry>> {
    Ok(Json(state.snapshot.park_legend.clone()))
}

// =============================================================================
// Visualization Endpoints
// =============================================================================

/// GET /v1/rankings/{kind}?limit=N
///
/// One ranking, trimmed to `limit` bars (default: the configured chart size).
pub async fn get_ranking(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<RankingQuery>,
) -> HandlerResult<RankingResponse> {
    let kind: RankingKind = kind.parse().map_err(AppError::NotFound)?;
    let limit = query
        .limit
        .unwrap_or(state.snapshot.config().display.max_bar_items);
    if limit == 0 {
        return Err(AppError::BadRequest("limit must be positive".to_string()));
    }

    let ranking = state.snapshot.ranking(kind);
    Ok(Json(RankingResponse {
        kind,
        unit: ranking.unit.clone(),
        total: ranking.entries.len(),
        entries: ranking.top(limit).to_vec(),
    }))
}

/// GET /v1/scatter
pub async fn get_scatter(State(state): State<AppState>) -> HandlerResult<ScatterData> {
    Ok(Json(state.snapshot.scatter.clone()))
}

/// GET /v1/timeline
pub async fn get_timeline(State(state): State<AppState>) -> HandlerResult<Vec<TimelinePoint>> {
    Ok(Json(state.snapshot.timeline.clone()))
}

/// GET /v1/distributions/{kind}
pub async fn get_distribution(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> HandlerResult<Vec<DistributionSlice>> {
    let kind: DistributionKind = kind.parse().map_err(AppError::NotFound)?;
    Ok(Json(state.snapshot.distribution(kind).to_vec()))
}

/// GET /v1/manufacturers
pub async fn get_manufacturer_breakdown(
    State(state): State<AppState>,
) -> HandlerResult<Vec<ManufacturerBreakdown>> {
    Ok(Json(state.snapshot.manufacturer_breakdown.clone()))
}

/// GET /v1/records
pub async fn get_record_categories(
    State(state): State<AppState>,
) -> HandlerResult<Vec<RecordCategory>> {
    Ok(Json(state.snapshot.record_categories.clone()))
}

// =============================================================================
// Lookups
// =============================================================================

/// GET /v1/lookup/park-color/{park}
///
/// Unknown parks get the fallback color, never an error.
pub async fn lookup_park_color(
    State(state): State<AppState>,
    Path(park): Path<String>,
) -> HandlerResult<ColorLookupResponse> {
    let color = state.snapshot.park_color(&park).to_string();
    Ok(Json(ColorLookupResponse { name: park, color }))
}

/// GET /v1/lookup/manufacturer-color/{manufacturer}
pub async fn lookup_manufacturer_color(
    State(state): State<AppState>,
    Path(manufacturer): Path<String>,
) -> HandlerResult<ColorLookupResponse> {
    let color = state.snapshot.manufacturer_color(&manufacturer).to_string();
    Ok(Json(ColorLookupResponse {
        name: manufacturer,
        color,
    }))
}

/// GET /v1/lookup/truncate/{name}
pub async fn lookup_display_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> HandlerResult<TruncateResponse> {
    let display_name = state.snapshot.truncate_name(&name);
    let truncated = display_name != name;
    Ok(Json(TruncateResponse {
        name,
        display_name,
        truncated,
    }))
}
