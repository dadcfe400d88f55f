#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use coaster_log::config::DashboardConfig;
use coaster_log::models::{CoasterRecord, Degrees, Feet, GForce, MilesPerHour};
use coaster_log::services::DashboardSnapshot;
use coaster_log::store::RecordStore;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Records from the bundled ride log.
pub fn embedded_records() -> Vec<CoasterRecord> {
    RecordStore::embedded()
        .expect("bundled ride log must load")
        .into_records()
}

/// Snapshot of the bundled ride log under the built-in configuration.
pub fn embedded_snapshot() -> DashboardSnapshot {
    DashboardSnapshot::build(&embedded_records(), DashboardConfig::default())
        .expect("bundled ride log must build")
}

/// Builder for hand-made records.
pub struct CoasterBuilder {
    record: CoasterRecord,
}

pub fn coaster(name: &str, park: &str) -> CoasterBuilder {
    CoasterBuilder {
        record: CoasterRecord::new(name, park, "Intamin"),
    }
}

impl CoasterBuilder {
    pub fn manufacturer(mut self, manufacturer: &str) -> Self {
        self.record.manufacturer = manufacturer.to_string();
        self
    }

    pub fn height(mut self, ft: f64) -> Self {
        self.record.height = Some(Feet::new(ft));
        self
    }

    pub fn speed(mut self, mph: f64) -> Self {
        self.record.speed = Some(MilesPerHour::new(mph));
        self
    }

    pub fn track(mut self, ft: f64) -> Self {
        self.record.track_length = Some(Feet::new(ft));
        self
    }

    pub fn g_force(mut self, g: f64) -> Self {
        self.record.max_g_force = Some(GForce::new(g));
        self
    }

    pub fn drop_angle(mut self, deg: f64) -> Self {
        self.record.drop_angle = Some(Degrees::new(deg));
        self
    }

    pub fn inversions(mut self, n: u32) -> Self {
        self.record.inversions = n;
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.record.year_opened = Some(year);
        self
    }

    pub fn build(self) -> CoasterRecord {
        self.record
    }
}
