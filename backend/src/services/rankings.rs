//! Bar chart rankings.
//!
//! Every ranking follows the same template: keep records that define the
//! metric, stable-sort highest first, then shape each survivor into a
//! [`RankedCoaster`]. Equal values keep their original record order.

use crate::config::DashboardConfig;
use crate::models::{EnrichedCoaster, Metric};
use crate::routes::rankings::{RankedCoaster, Ranking, RankingKind};
use crate::routes::records::SortOrder;

use super::lookup::truncate_name;

/// Records defining `metric`, paired with its value and stable-sorted.
pub(crate) fn sorted_by_metric(
    coasters: &[EnrichedCoaster],
    metric: Metric,
    order: SortOrder,
) -> Vec<(&EnrichedCoaster, f64)> {
    let mut entries: Vec<_> = coasters
        .iter()
        .filter_map(|c| c.metric(metric).map(|v| (c, v)))
        .collect();
    match order {
        SortOrder::Descending => entries.sort_by(|a, b| b.1.total_cmp(&a.1)),
        SortOrder::Ascending => entries.sort_by(|a, b| a.1.total_cmp(&b.1)),
    }
    entries
}

/// Build the ranking for `kind`.
///
/// The inversion ranking additionally drops coasters without inversions;
/// zero is a real value there but has no bar to draw.
pub fn compute_ranking(
    coasters: &[EnrichedCoaster],
    kind: RankingKind,
    config: &DashboardConfig,
) -> Ranking {
    let metric = kind.metric();
    let max_len = config.display.truncate_name_length;

    let entries = sorted_by_metric(coasters, metric, SortOrder::Descending)
        .into_iter()
        .filter(|(_, value)| kind != RankingKind::Inversions || *value > 0.0)
        .enumerate()
        .map(|(i, (coaster, value))| RankedCoaster {
            rank: i + 1,
            name: truncate_name(coaster.name(), max_len),
            full_name: coaster.name().to_string(),
            value,
            fill: config.park_color(coaster.park()).to_string(),
            park: coaster.park().to_string(),
        })
        .collect::<Vec<_>>();

    log::debug!("Ranking '{}' has {} entries", kind, entries.len());

    Ranking {
        kind,
        metric,
        unit: metric.unit().to_string(),
        entries,
    }
}

pub fn height_ranking(coasters: &[EnrichedCoaster], config: &DashboardConfig) -> Ranking {
    compute_ranking(coasters, RankingKind::Height, config)
}

pub fn speed_ranking(coasters: &[EnrichedCoaster], config: &DashboardConfig) -> Ranking {
    compute_ranking(coasters, RankingKind::Speed, config)
}

pub fn track_ranking(coasters: &[EnrichedCoaster], config: &DashboardConfig) -> Ranking {
    compute_ranking(coasters, RankingKind::Track, config)
}

pub fn g_force_ranking(coasters: &[EnrichedCoaster], config: &DashboardConfig) -> Ranking {
    compute_ranking(coasters, RankingKind::GForce, config)
}

pub fn inversion_ranking(coasters: &[EnrichedCoaster], config: &DashboardConfig) -> Ranking {
    compute_ranking(coasters, RankingKind::Inversions, config)
}

pub fn drop_angle_ranking(coasters: &[EnrichedCoaster], config: &DashboardConfig) -> Ranking {
    compute_ranking(coasters, RankingKind::DropAngle, config)
}
