//! Data Transfer Objects for the HTTP API.
//!
//! Most view-model DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Entities
    EnrichedCoaster, LegendEntry,
    // Overview
    DerivedStats,
    // Rankings
    RankedCoaster, Ranking, RankingKind,
    // Correlation
    ScatterData, ScatterPoint,
    // Timeline
    TimelinePoint,
    // Distributions
    DistributionKind, DistributionSlice, ManufacturerBreakdown,
    // Records
    PodiumEntry, RecordCategory,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
    /// Number of coasters in the served snapshot
    pub coasters: usize,
    /// Snapshot fingerprint
    pub fingerprint: String,
    pub started_at: DateTime<Utc>,
}

/// Query parameters for ranking endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RankingQuery {
    /// Maximum number of bars (default: `display.max_bar_items`)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Ranking response trimmed to the requested limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub kind: RankingKind,
    pub unit: String,
    /// Entries before trimming
    pub total: usize,
    pub entries: Vec<RankedCoaster>,
}

/// Coaster list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoasterListResponse {
    pub coasters: Vec<EnrichedCoaster>,
    pub total: usize,
}

/// Coaster detail: the enriched coaster plus ready-to-use video links.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoasterDetailResponse {
    #[serde(flatten)]
    pub coaster: EnrichedCoaster,
    pub video_embed_url: Option<String>,
    pub video_watch_url: Option<String>,
}

impl From<EnrichedCoaster> for CoasterDetailResponse {
    fn from(coaster: EnrichedCoaster) -> Self {
        let video_embed_url = coaster.pov_video.as_ref().map(|v| v.embed_url());
        let video_watch_url = coaster.pov_video.as_ref().map(|v| v.watch_url());
        Self {
            coaster,
            video_embed_url,
            video_watch_url,
        }
    }
}

/// Park or manufacturer color lookup response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorLookupResponse {
    pub name: String,
    pub color: String,
}

/// Display-name lookup response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruncateResponse {
    pub name: String,
    pub display_name: String,
    pub truncated: bool,
}
