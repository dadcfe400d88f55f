//! Derivation pipeline.
//!
//! Enrichment turns raw records into [`EnrichedCoaster`](crate::models::EnrichedCoaster)s;
//! aggregation and the view projections then read only the enriched set.
//! Everything here is pure and total. [`DashboardSnapshot`] runs it all once.

pub mod aggregation;
pub mod correlation;
pub mod distributions;
pub mod enrichment;
pub mod lookup;
pub mod rankings;
pub mod records;
pub mod snapshot;
pub mod timeline;

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;

pub use aggregation::compute_stats;
pub use correlation::{compute_scatter_data, scatter_points};
pub use distributions::{
    decade_distribution, manufacturer_breakdown, manufacturer_distribution, park_distribution,
    type_distribution,
};
pub use enrichment::Enricher;
pub use lookup::{find_coaster_by_name, require_coaster_by_name, truncate_name};
pub use rankings::{
    compute_ranking, drop_angle_ranking, g_force_ranking, height_ranking, inversion_ranking,
    speed_ranking, track_ranking,
};
pub use records::{compute_record_categories, top_n};
pub use snapshot::DashboardSnapshot;
pub use timeline::compute_timeline;
