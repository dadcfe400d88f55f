//! Opening-year timeline.

use crate::config::DashboardConfig;
use crate::models::EnrichedCoaster;
use crate::routes::timeline::TimelinePoint;

/// Coasters with a known opening year, oldest first.
///
/// Height and speed stay optional so the chart can show them when present
/// without inventing values.
pub fn compute_timeline(
    coasters: &[EnrichedCoaster],
    config: &DashboardConfig,
) -> Vec<TimelinePoint> {
    let mut points: Vec<TimelinePoint> = coasters
        .iter()
        .filter_map(|c| {
            c.record.year_opened.map(|year| TimelinePoint {
                name: c.name().to_string(),
                year,
                height: c.record.height,
                speed: c.record.speed,
                fill: config.park_color(c.park()).to_string(),
                park: c.park().to_string(),
            })
        })
        .collect();
    points.sort_by_key(|p| p.year);
    points
}
