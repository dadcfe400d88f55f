//! Public API surface for the backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::config::LegendEntry;
pub use crate::models::CoasterRecord;
pub use crate::models::EnrichedCoaster;
pub use crate::models::Metric;
pub use crate::models::PovVideo;
pub use crate::routes::correlation::ScatterData;
pub use crate::routes::correlation::ScatterPoint;
pub use crate::routes::distribution::DistributionKind;
pub use crate::routes::distribution::DistributionSlice;
pub use crate::routes::distribution::ManufacturerBreakdown;
pub use crate::routes::overview::DerivedStats;
pub use crate::routes::rankings::RankedCoaster;
pub use crate::routes::rankings::Ranking;
pub use crate::routes::rankings::RankingKind;
pub use crate::routes::records::Medal;
pub use crate::routes::records::PodiumEntry;
pub use crate::routes::records::RecordCategory;
pub use crate::routes::records::SortOrder;
pub use crate::routes::timeline::TimelinePoint;
pub use crate::store::ValidationReport;
