use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use coaster_log::config::DashboardConfig;
use coaster_log::models::CoasterRecord;
use coaster_log::routes::rankings::RankingKind;
use coaster_log::services::{compute_ranking, DashboardSnapshot, Enricher};
use coaster_log::store::RecordStore;

fn bench_snapshot_build(c: &mut Criterion) {
    let records = RecordStore::embedded().unwrap().into_records();

    let mut group = c.benchmark_group("snapshot");
    group.bench_function("build_embedded", |b| {
        b.iter(|| {
            DashboardSnapshot::build(black_box(&records), DashboardConfig::default()).unwrap()
        })
    });
    group.finish();
}

fn bench_large_log(c: &mut Criterion) {
    let base = RecordStore::embedded().unwrap().into_records();
    let records: Vec<CoasterRecord> = (0..100)
        .flat_map(|i| {
            base.iter().map(move |r| {
                let mut r = r.clone();
                r.name = format!("{} #{}", r.name, i);
                r
            })
        })
        .collect();

    let mut group = c.benchmark_group("large_log");
    group.bench_function("snapshot_build_2900", |b| {
        b.iter(|| {
            DashboardSnapshot::build(black_box(&records), DashboardConfig::default()).unwrap()
        })
    });

    let config = DashboardConfig::default();
    let coasters = Enricher::new(&config).enrich_all(&records);
    group.bench_function("height_ranking_2900", |b| {
        b.iter(|| compute_ranking(black_box(&coasters), RankingKind::Height, &config))
    });
    group.finish();
}

criterion_group!(benches, bench_snapshot_build, bench_large_log);
criterion_main!(benches);
