//! Immutable dashboard snapshot: the whole pipeline run once.

use serde::Serialize;

use crate::checksum::calculate_checksum;
use crate::config::{DashboardConfig, LegendEntry};
use crate::error::{DashboardError, DashboardResult};
use crate::models::{CoasterRecord, EnrichedCoaster};
use crate::routes::correlation::ScatterData;
use crate::routes::distribution::{DistributionKind, DistributionSlice, ManufacturerBreakdown};
use crate::routes::overview::DerivedStats;
use crate::routes::rankings::{Ranking, RankingKind};
use crate::routes::records::RecordCategory;
use crate::routes::timeline::TimelinePoint;
use crate::store::RecordStore;

use super::aggregation::compute_stats;
use super::correlation::compute_scatter_data;
use super::distributions::{
    decade_distribution, manufacturer_breakdown, manufacturer_distribution, park_distribution,
    type_distribution,
};
use super::enrichment::Enricher;
use super::lookup::{find_coaster_by_name, require_coaster_by_name, truncate_name};
use super::rankings::compute_ranking;
use super::records::compute_record_categories;
use super::timeline::compute_timeline;

/// Every derived view of one ride log under one configuration.
///
/// Built once by [`DashboardSnapshot::build`] and never mutated. Building
/// twice from the same input yields equal snapshots with equal fingerprints.
/// Configurations built in code are validated the same way loaded ones are.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// SHA-256 over the records and configuration
    pub fingerprint: String,
    pub coasters: Vec<EnrichedCoaster>,
    pub stats: DerivedStats,
    pub height_ranking: Ranking,
    pub speed_ranking: Ranking,
    pub track_ranking: Ranking,
    pub g_force_ranking: Ranking,
    pub inversion_ranking: Ranking,
    pub drop_angle_ranking: Ranking,
    pub scatter: ScatterData,
    pub timeline: Vec<TimelinePoint>,
    pub park_distribution: Vec<DistributionSlice>,
    pub manufacturer_distribution: Vec<DistributionSlice>,
    pub decade_distribution: Vec<DistributionSlice>,
    pub type_distribution: Vec<DistributionSlice>,
    pub manufacturer_breakdown: Vec<ManufacturerBreakdown>,
    pub record_categories: Vec<RecordCategory>,
    pub park_legend: Vec<LegendEntry>,
    #[serde(skip)]
    config: DashboardConfig,
}

impl DashboardSnapshot {
    /// Run enrichment, aggregation and every projection over `records`.
    pub fn build(records: &[CoasterRecord], config: DashboardConfig) -> DashboardResult<Self> {
        config.validate().map_err(|e| e.with_operation("build_snapshot"))?;
        let fingerprint = fingerprint(records, &config)?;
        let coasters = Enricher::new(&config).enrich_all(records);
        let stats = compute_stats(&coasters);

        let snapshot = Self {
            fingerprint,
            height_ranking: compute_ranking(&coasters, RankingKind::Height, &config),
            speed_ranking: compute_ranking(&coasters, RankingKind::Speed, &config),
            track_ranking: compute_ranking(&coasters, RankingKind::Track, &config),
            g_force_ranking: compute_ranking(&coasters, RankingKind::GForce, &config),
            inversion_ranking: compute_ranking(&coasters, RankingKind::Inversions, &config),
            drop_angle_ranking: compute_ranking(&coasters, RankingKind::DropAngle, &config),
            scatter: compute_scatter_data(&coasters, &config),
            timeline: compute_timeline(&coasters, &config),
            park_distribution: park_distribution(&coasters, &config),
            manufacturer_distribution: manufacturer_distribution(&coasters, &config),
            decade_distribution: decade_distribution(&coasters),
            type_distribution: type_distribution(&coasters),
            manufacturer_breakdown: manufacturer_breakdown(&coasters, &config),
            record_categories: compute_record_categories(&coasters, &config),
            park_legend: config.park_group_colors.clone(),
            stats,
            coasters,
            config,
        };

        log::info!(
            "Built dashboard snapshot: {} coasters, fingerprint {}",
            snapshot.coasters.len(),
            &snapshot.fingerprint[..12]
        );
        Ok(snapshot)
    }

    /// Build from a loaded record store.
    pub fn from_store(store: &RecordStore, config: DashboardConfig) -> DashboardResult<Self> {
        Self::build(store.records(), config)
    }

    /// Bundled ride log with the built-in configuration.
    pub fn load_default() -> DashboardResult<Self> {
        let store = RecordStore::embedded()?;
        Self::from_store(&store, DashboardConfig::default())
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn ranking(&self, kind: RankingKind) -> &Ranking {
        match kind {
            RankingKind::Height => &self.height_ranking,
            RankingKind::Speed => &self.speed_ranking,
            RankingKind::Track => &self.track_ranking,
            RankingKind::GForce => &self.g_force_ranking,
            RankingKind::Inversions => &self.inversion_ranking,
            RankingKind::DropAngle => &self.drop_angle_ranking,
        }
    }

    pub fn distribution(&self, kind: DistributionKind) -> &[DistributionSlice] {
        match kind {
            DistributionKind::Parks => &self.park_distribution,
            DistributionKind::Manufacturers => &self.manufacturer_distribution,
            DistributionKind::Decades => &self.decade_distribution,
            DistributionKind::Types => &self.type_distribution,
        }
    }

    pub fn find_coaster(&self, name: &str) -> Option<&EnrichedCoaster> {
        find_coaster_by_name(&self.coasters, name)
    }

    pub fn require_coaster(&self, name: &str) -> DashboardResult<&EnrichedCoaster> {
        require_coaster_by_name(&self.coasters, name)
    }

    /// Park color with the configured fallback.
    pub fn park_color(&self, park: &str) -> &str {
        self.config.park_color(park)
    }

    /// Manufacturer color with the configured fallback.
    pub fn manufacturer_color(&self, manufacturer_short: &str) -> &str {
        self.config.manufacturer_color(manufacturer_short)
    }

    /// Display name shortened to the configured length.
    pub fn truncate_name(&self, name: &str) -> String {
        truncate_name(name, self.config.display.truncate_name_length)
    }
}

fn fingerprint(records: &[CoasterRecord], config: &DashboardConfig) -> DashboardResult<String> {
    let encode_error = |e: serde_json::Error| {
        DashboardError::internal(format!("Failed to encode snapshot input: {}", e))
            .with_operation("fingerprint")
    };
    let records_json = serde_json::to_vec(records).map_err(encode_error)?;
    let config_json = serde_json::to_vec(config).map_err(encode_error)?;
    Ok(calculate_checksum([records_json, config_json]))
}
