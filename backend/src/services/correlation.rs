//! Height vs speed scatter with its rank correlation.

use crate::config::DashboardConfig;
use crate::models::EnrichedCoaster;
use crate::routes::correlation::{ScatterData, ScatterPoint};

/// Scatter points for coasters defining both height and speed.
///
/// Bubble size is track length (or the configured default when unknown)
/// divided by the configured bubble scale.
pub fn scatter_points(
    coasters: &[EnrichedCoaster],
    config: &DashboardConfig,
) -> Vec<ScatterPoint> {
    let display = &config.display;
    coasters
        .iter()
        .filter_map(|c| {
            let height = c.record.height?;
            let speed = c.record.speed?;
            let track = c.record.track_length;
            let size_basis = track
                .map(|t| t.value())
                .unwrap_or(display.default_track_length);
            Some(ScatterPoint {
                name: c.name().to_string(),
                x: height,
                y: speed,
                z: size_basis / display.bubble_scale,
                fill: config.park_color(c.park()).to_string(),
                park: c.park().to_string(),
                track,
            })
        })
        .collect()
}

/// Scatter points plus the Spearman coefficient of height vs speed.
pub fn compute_scatter_data(
    coasters: &[EnrichedCoaster],
    config: &DashboardConfig,
) -> ScatterData {
    let points = scatter_points(coasters, config);
    let heights: Vec<f64> = points.iter().map(|p| p.x.value()).collect();
    let speeds: Vec<f64> = points.iter().map(|p| p.y.value()).collect();
    let spearman = compute_spearman_correlation(&heights, &speeds);
    log::debug!(
        "Scatter has {} points (spearman {:?})",
        points.len(),
        spearman
    );
    ScatterData { points, spearman }
}

/// Average (1-based) ranks; tied values share the mean of their positions.
fn average_ranks(values: &[f64]) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len() && values[order[end + 1]] == values[order[start]] {
            end += 1;
        }
        let rank = (start + end) as f64 / 2.0 + 1.0;
        for &idx in &order[start..=end] {
            ranks[idx] = rank;
        }
        start = end + 1;
    }
    ranks
}

/// Spearman rank correlation, or `None` for fewer than two pairs or
/// mismatched lengths. Constant input yields `Some(0.0)`.
pub(crate) fn compute_spearman_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let n = x.len() as f64;
    let x_ranks = average_ranks(x);
    let y_ranks = average_ranks(y);

    // Pearson correlation on ranks
    let mean_x = x_ranks.iter().sum::<f64>() / n;
    let mean_y = y_ranks.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;
    for (rx, ry) in x_ranks.iter().zip(&y_ranks) {
        let dx = rx - mean_x;
        let dy = ry - mean_y;
        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == 0.0 {
        Some(0.0)
    } else {
        Some(numerator / denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CoasterRecord, Feet, MilesPerHour};
    use crate::services::enrichment::Enricher;

    fn coaster(name: &str, h: Option<f64>, s: Option<f64>, t: Option<f64>) -> CoasterRecord {
        let mut r = CoasterRecord::new(name, "Busch Gardens Tampa", "Intamin");
        r.height = h.map(Feet::new);
        r.speed = s.map(MilesPerHour::new);
        r.track_length = t.map(Feet::new);
        r
    }

    #[test]
    fn test_requires_height_and_speed() {
        let config = DashboardConfig::default();
        let coasters = Enricher::new(&config).enrich_all(&[
            coaster("Both", Some(200.0), Some(70.0), Some(4000.0)),
            coaster("No speed", Some(100.0), None, None),
            coaster("No height", None, Some(50.0), None),
            coaster("No track", Some(50.0), Some(40.0), None),
        ]);
        let points = scatter_points(&coasters, &config);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].name, "Both");
        assert_eq!(points[0].z, 10.0);
        assert_eq!(points[0].fill, "#FF6B6B");
        assert_eq!(points[1].track, None);
        assert_eq!(points[1].z, 5.0);
    }

    #[test]
    fn test_spearman_perfect_monotonic() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [10.0, 20.0, 40.0, 80.0];
        assert!((compute_spearman_correlation(&x, &y).unwrap() - 1.0).abs() < 1e-12);

        let y_rev = [80.0, 40.0, 20.0, 10.0];
        assert!((compute_spearman_correlation(&x, &y_rev).unwrap() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_spearman_degenerate_inputs() {
        assert_eq!(compute_spearman_correlation(&[], &[]), None);
        assert_eq!(compute_spearman_correlation(&[1.0], &[2.0]), None);
        assert_eq!(compute_spearman_correlation(&[1.0, 2.0], &[2.0]), None);
        assert_eq!(compute_spearman_correlation(&[5.0, 5.0], &[1.0, 2.0]), Some(0.0));
    }

    #[test]
    fn test_average_ranks_with_ties() {
        assert_eq!(average_ranks(&[10.0, 20.0, 10.0]), vec![1.5, 3.0, 1.5]);
    }
}
