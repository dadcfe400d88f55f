//! Record leaderboards ("Tallest", "Fastest", ...).

use crate::config::DashboardConfig;
use crate::models::{EnrichedCoaster, Metric};
use crate::routes::records::{Medal, PodiumEntry, RecordCategory, SortOrder};

use super::rankings::sorted_by_metric;

/// Static description of one leaderboard.
struct CategoryDef {
    id: &'static str,
    title: &'static str,
    field: Metric,
    icon: &'static str,
    order: SortOrder,
}

const fn category(
    id: &'static str,
    title: &'static str,
    field: Metric,
    icon: &'static str,
    order: SortOrder,
) -> CategoryDef {
    CategoryDef {
        id,
        title,
        field,
        icon,
        order,
    }
}

const CATEGORIES: [CategoryDef; 8] = [
    category("tallest", "Tallest", Metric::Height, "🏔️", SortOrder::Descending),
    category("fastest", "Fastest", Metric::Speed, "⚡", SortOrder::Descending),
    category("longest", "Longest Track", Metric::TrackLength, "📏", SortOrder::Descending),
    category("inversions", "Most Inversions", Metric::Inversions, "🔄", SortOrder::Descending),
    category("gforce", "Highest G-Force", Metric::MaxGForce, "💥", SortOrder::Descending),
    category("steepest", "Steepest Drop", Metric::DropAngle, "🎯", SortOrder::Descending),
    category("oldest", "Oldest", Metric::YearOpened, "📜", SortOrder::Ascending),
    category("newest", "Newest", Metric::YearOpened, "✨", SortOrder::Descending),
];

/// The first `n` coasters defining `metric`, in the given order.
///
/// Returns fewer than `n` when fewer qualify; never pads.
pub fn top_n(
    coasters: &[EnrichedCoaster],
    metric: Metric,
    order: SortOrder,
    n: usize,
) -> Vec<(&EnrichedCoaster, f64)> {
    let mut sorted = sorted_by_metric(coasters, metric, order);
    sorted.truncate(n);
    sorted
}

fn medal_color(config: &DashboardConfig, medal: Medal) -> String {
    match medal {
        Medal::Gold => config.medal_colors.gold.clone(),
        Medal::Silver => config.medal_colors.silver.clone(),
        Medal::Bronze => config.medal_colors.bronze.clone(),
    }
}

/// Every leaderboard category with up to `leaderboard_size` entries each.
///
/// Inversions are always defined, so coasters without inversions still
/// qualify for "Most Inversions" when fewer than the board size have any.
pub fn compute_record_categories(
    coasters: &[EnrichedCoaster],
    config: &DashboardConfig,
) -> Vec<RecordCategory> {
    let size = config.display.leaderboard_size;
    CATEGORIES
        .iter()
        .map(|def| {
            let entries = top_n(coasters, def.field, def.order, size)
                .into_iter()
                .enumerate()
                .map(|(i, (coaster, value))| {
                    let place = i + 1;
                    let medal = Medal::for_place(place);
                    PodiumEntry {
                        place,
                        medal,
                        medal_color: medal.map(|m| medal_color(config, m)),
                        name: coaster.name().to_string(),
                        park: coaster.park().to_string(),
                        value,
                        fill: config.park_color(coaster.park()).to_string(),
                    }
                })
                .collect();
            RecordCategory {
                id: def.id.to_string(),
                title: def.title.to_string(),
                field: def.field,
                unit: def.field.unit().to_string(),
                icon: def.icon.to_string(),
                order: def.order,
                entries,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CoasterRecord, Feet};
    use crate::services::enrichment::Enricher;

    fn find_board<'a>(categories: &'a [RecordCategory], id: &str) -> &'a RecordCategory {
        categories.iter().find(|c| c.id == id).unwrap()
    }

    #[test]
    fn test_tallest_with_two_heights_returns_two() {
        let config = DashboardConfig::default();
        let mut a = CoasterRecord::new("A", "Kings Island", "Intamin");
        a.height = Some(Feet::new(100.0));
        let mut b = CoasterRecord::new("B", "Kings Island", "Intamin");
        b.height = Some(Feet::new(300.0));
        let c = CoasterRecord::new("C", "Kings Island", "Intamin");
        let d = CoasterRecord::new("D", "Kings Island", "Intamin");

        let categories =
            compute_record_categories(&Enricher::new(&config).enrich_all(&[a, b, c, d]), &config);
        let tallest = find_board(&categories, "tallest");
        assert_eq!(tallest.entries.len(), 2);
        assert_eq!(tallest.entries[0].name, "B");
        assert_eq!(tallest.entries[0].medal, Some(Medal::Gold));
        assert_eq!(tallest.entries[0].medal_color.as_deref(), Some("#FFD700"));
        assert_eq!(tallest.entries[1].medal, Some(Medal::Silver));
        assert_eq!(tallest.unit, "ft");

        assert!(find_board(&categories, "fastest").entries.is_empty());
        assert_eq!(find_board(&categories, "inversions").entries.len(), 3);
    }

    #[test]
    fn test_oldest_and_newest() {
        let config = DashboardConfig::default();
        let records: Vec<_> = [1990, 1924, 2022, 1979]
            .iter()
            .enumerate()
            .map(|(i, year)| {
                let mut r = CoasterRecord::new(format!("C{}", i), "Kings Island", "Intamin");
                r.year_opened = Some(*year);
                r
            })
            .collect();
        let categories =
            compute_record_categories(&Enricher::new(&config).enrich_all(&records), &config);

        let values = |id: &str| -> Vec<f64> {
            find_board(&categories, id).entries.iter().map(|e| e.value).collect()
        };
        let oldest = values("oldest");
        assert_eq!(oldest, [1924.0, 1979.0, 1990.0]);
        let newest = values("newest");
        assert_eq!(newest, [2022.0, 1990.0, 1979.0]);
    }

    #[test]
    fn test_configured_board_size_beyond_podium() {
        let mut config = DashboardConfig::default();
        config.display.leaderboard_size = 5;
        let records: Vec<_> = (0..6)
            .map(|i| CoasterRecord::new(format!("C{}", i), "Kings Island", "Intamin"))
            .collect();
        let categories =
            compute_record_categories(&Enricher::new(&config).enrich_all(&records), &config);
        let board = find_board(&categories, "inversions");
        assert_eq!(board.entries.len(), 5);
        assert_eq!(board.entries[3].medal, None);
        assert_eq!(board.entries[3].medal_color, None);
        assert_eq!(board.entries[4].place, 5);
    }

    #[test]
    fn test_category_order_is_fixed() {
        let ids: Vec<_> = compute_record_categories(&[], &DashboardConfig::default())
            .into_iter()
            .map(|c| c.id)
            .collect();
        let expected = [
            "tallest",
            "fastest",
            "longest",
            "inversions",
            "gforce",
            "steepest",
            "oldest",
            "newest",
        ];
        assert_eq!(ids, expected);
    }
}
