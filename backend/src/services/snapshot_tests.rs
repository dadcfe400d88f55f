use super::snapshot::DashboardSnapshot;
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::models::{CoasterRecord, Feet};
use crate::routes::distribution::DistributionKind;
use crate::routes::rankings::RankingKind;
use crate::store::RecordStore;

#[test]
fn test_build_is_deterministic() {
    let store = RecordStore::embedded().unwrap();
    let a = DashboardSnapshot::from_store(&store, DashboardConfig::default()).unwrap();
    let b = DashboardSnapshot::from_store(&store, DashboardConfig::default()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.fingerprint, b.fingerprint);
    assert_eq!(a.fingerprint.len(), 64);
}

#[test]
fn test_fingerprint_tracks_config_and_records() {
    let records = RecordStore::embedded().unwrap().into_records();
    let base = DashboardSnapshot::build(&records, DashboardConfig::default()).unwrap();

    let mut config = DashboardConfig::default();
    config.display.truncate_name_length = 12;
    let reconfigured = DashboardSnapshot::build(&records, config).unwrap();
    assert_ne!(base.fingerprint, reconfigured.fingerprint);

    let fewer = DashboardSnapshot::build(&records[1..], DashboardConfig::default()).unwrap();
    assert_ne!(base.fingerprint, fewer.fingerprint);
}

#[test]
fn test_embedded_snapshot_shape() {
    let snapshot = DashboardSnapshot::load_default().unwrap();
    assert_eq!(snapshot.stats.total_coasters, 29);
    assert_eq!(snapshot.coasters.len(), 29);
    assert_eq!(snapshot.stats.max_height, Some(Feet::new(325.0)));
    assert_eq!(snapshot.height_ranking.entries[0].full_name, "Fury 325");
    assert_eq!(snapshot.record_categories.len(), 8);
    assert_eq!(snapshot.park_legend.len(), 6);

    let parks: usize = snapshot.distribution(DistributionKind::Parks).iter().map(|s| s.value).sum();
    assert_eq!(parks, 29);
    assert_eq!(snapshot.stats.park_counts["Walt Disney World"], 7);
}

#[test]
fn test_accessors_match_fields() {
    let snapshot = DashboardSnapshot::load_default().unwrap();
    assert_eq!(snapshot.ranking(RankingKind::Speed), &snapshot.speed_ranking);
    assert_eq!(
        snapshot.distribution(DistributionKind::Decades),
        snapshot.decade_distribution.as_slice()
    );
    assert_eq!(snapshot.park_color("Unrecognized Park Name"), "#4ECDC4");
    assert_eq!(snapshot.manufacturer_color("Unrecognized Mfr"), "#8E99A4");
    assert_eq!(snapshot.truncate_name("Short"), "Short");
    assert_eq!(snapshot.find_coaster("Kumba").unwrap().manufacturer_short, "B&M");
    assert!(snapshot.require_coaster("Nope").unwrap_err().is_not_found());
}

#[test]
fn test_empty_log_is_total() {
    let snapshot = DashboardSnapshot::build(&[], DashboardConfig::default()).unwrap();
    assert_eq!(snapshot.stats.total_coasters, 0);
    assert_eq!(snapshot.stats.max_speed, None);
    assert!(snapshot.height_ranking.entries.is_empty());
    assert!(snapshot.scatter.points.is_empty());
    assert_eq!(snapshot.scatter.spearman, None);
    assert!(snapshot.record_categories.iter().all(|c| c.entries.is_empty()));
}

#[test]
fn test_snapshot_serializes_without_config() {
    let snapshot = DashboardSnapshot::build(
        &[CoasterRecord::new("Solo", "Kings Island", "Intamin")],
        DashboardConfig::default(),
    )
    .unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();
    assert!(json.get("config").is_none());
    assert_eq!(json["coasters"][0]["parkGroup"], "Kings Island");
    assert_eq!(json["stats"]["totalCoasters"], 1);
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = DashboardConfig::default();
    config.display.truncate_name_length = 0;
    let err = DashboardSnapshot::build(&[], config).unwrap_err();
    assert!(matches!(err, DashboardError::ConfigurationError { .. }));
    assert_eq!(err.context().operation.as_deref(), Some("build_snapshot"));
}
