//! Count breakdowns for pie and bar charts.

use std::collections::HashMap;
use std::hash::Hash;

use crate::config::DashboardConfig;
use crate::models::{decade_label, decade_start, EnrichedCoaster};
use crate::routes::distribution::{DistributionSlice, ManufacturerBreakdown};

/// Counts in first-appearance order.
fn ordered_counts<K, F>(coasters: &[EnrichedCoaster], key: F) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    F: Fn(&EnrichedCoaster) -> Option<K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for label in coasters.iter().filter_map(key) {
        match index.get(&label) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(label.clone(), counts.len());
                counts.push((label, 1));
            }
        }
    }
    counts
}

/// Counts sorted by count descending; equal counts keep first appearance.
fn counts_by_frequency<F>(coasters: &[EnrichedCoaster], key: F) -> Vec<(String, usize)>
where
    F: Fn(&EnrichedCoaster) -> Option<String>,
{
    let mut counts = ordered_counts(coasters, key);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Coasters per park group, with the group's legend color.
pub fn park_distribution(
    coasters: &[EnrichedCoaster],
    config: &DashboardConfig,
) -> Vec<DistributionSlice> {
    counts_by_frequency(coasters, |c| Some(c.park_group.clone()))
        .into_iter()
        .map(|(name, value)| DistributionSlice {
            fill: Some(config.park_group_color(&name).to_string()),
            name,
            value,
        })
        .collect()
}

/// Coasters per short manufacturer name, with the manufacturer color.
pub fn manufacturer_distribution(
    coasters: &[EnrichedCoaster],
    config: &DashboardConfig,
) -> Vec<DistributionSlice> {
    counts_by_frequency(coasters, |c| Some(c.manufacturer_short.clone()))
        .into_iter()
        .map(|(name, value)| DistributionSlice {
            fill: Some(config.manufacturer_color(&name).to_string()),
            name,
            value,
        })
        .collect()
}

/// Coasters per opening decade in chronological order.
///
/// Records without an opening year are not counted.
pub fn decade_distribution(coasters: &[EnrichedCoaster]) -> Vec<DistributionSlice> {
    let mut counts = ordered_counts(coasters, |c| c.record.year_opened.map(decade_start));
    counts.sort_by_key(|&(decade, _)| decade);
    counts
        .into_iter()
        .map(|(decade, value)| DistributionSlice {
            name: decade_label(decade),
            value,
            fill: None,
        })
        .collect()
}

/// Coasters per coaster type ("Steel", "Wooden", ...), most common first.
pub fn type_distribution(coasters: &[EnrichedCoaster]) -> Vec<DistributionSlice> {
    counts_by_frequency(coasters, |c| {
        let kind = c.record.coaster_type.trim();
        (!kind.is_empty()).then(|| kind.to_string())
    })
    .into_iter()
    .map(|(name, value)| DistributionSlice {
        name,
        value,
        fill: None,
    })
    .collect()
}

/// Per-manufacturer cards: count, color, share and coaster names.
pub fn manufacturer_breakdown(
    coasters: &[EnrichedCoaster],
    config: &DashboardConfig,
) -> Vec<ManufacturerBreakdown> {
    let total = coasters.len();
    manufacturer_distribution(coasters, config)
        .into_iter()
        .map(|slice| {
            let names = coasters
                .iter()
                .filter(|c| c.manufacturer_short == slice.name)
                .map(|c| c.name().to_string())
                .collect();
            let share_pct = if total == 0 {
                0.0
            } else {
                slice.value as f64 / total as f64 * 100.0
            };
            ManufacturerBreakdown {
                fill: config.manufacturer_color(&slice.name).to_string(),
                name: slice.name,
                count: slice.value,
                share_pct,
                coasters: names,
            }
        })
        .collect()
}
