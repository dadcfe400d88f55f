//! Aggregation stage: one [`DerivedStats`] over the enriched set.

use std::collections::BTreeMap;

use crate::models::{EnrichedCoaster, Feet, GForce, Metric, MilesPerHour};
use crate::routes::overview::DerivedStats;

/// Largest defined value of `metric`, or `None` if no record defines it.
pub(crate) fn max_of(coasters: &[EnrichedCoaster], metric: Metric) -> Option<f64> {
    coasters
        .iter()
        .filter_map(|c| c.metric(metric))
        .max_by(|a, b| a.total_cmp(b))
}

/// Arithmetic mean of defined values of `metric`.
pub(crate) fn mean_of(coasters: &[EnrichedCoaster], metric: Metric) -> Option<f64> {
    let values: Vec<f64> = coasters.iter().filter_map(|c| c.metric(metric)).collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn count_by<F>(coasters: &[EnrichedCoaster], key: F) -> BTreeMap<String, usize>
where
    F: Fn(&EnrichedCoaster) -> Option<String>,
{
    let mut counts = BTreeMap::new();
    for key in coasters.iter().filter_map(key) {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Compute summary statistics.
///
/// Maxima and the average only consider records that define the field and
/// are `None` when none do. `avg_speed` rounds half away from zero.
pub fn compute_stats(coasters: &[EnrichedCoaster]) -> DerivedStats {
    let total_track = coasters
        .iter()
        .filter_map(|c| c.record.track_length)
        .map(|t| t.value())
        .sum::<f64>();

    let stats = DerivedStats {
        total_coasters: coasters.len(),
        total_track: Feet::new(total_track),
        total_inversions: coasters.iter().map(|c| c.record.inversions).sum(),
        max_height: max_of(coasters, Metric::Height).map(Feet::new),
        max_speed: max_of(coasters, Metric::Speed).map(MilesPerHour::new),
        max_g_force: max_of(coasters, Metric::MaxGForce).map(GForce::new),
        avg_speed: mean_of(coasters, Metric::Speed).map(|v| MilesPerHour::new(v.round())),
        park_counts: count_by(coasters, |c| Some(c.park_group.clone())),
        manufacturer_counts: count_by(coasters, |c| Some(c.manufacturer_short.clone())),
        decade_counts: count_by(coasters, EnrichedCoaster::decade),
    };

    log::debug!(
        "Aggregated {} coasters across {} park groups",
        stats.total_coasters,
        stats.park_counts.len()
    );
    stats
}
