//! Ride log validation with error and warning reporting.
//!
//! Errors mark the dataset unusable: duplicate identities, empty names, or a
//! physical metric recorded as zero, negative or non-finite (absence must be
//! written as `null`). Warnings flag values worth a second look but do not
//! block loading.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{CoasterRecord, Metric};

/// Earliest opening year accepted without a warning.
pub const EARLIEST_PLAUSIBLE_YEAR: i32 = 1880;

/// Validation result with categorized issues and statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub stats: ValidationStats,
}

/// Summary counts gathered while validating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationStats {
    pub total_records: usize,
    pub duplicate_names: usize,
    pub duplicate_ids: usize,
    pub invalid_metrics: usize,
    /// Records missing at least one optional physical metric
    pub incomplete_records: usize,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            ..Default::default()
        }
    }

    /// Adds a critical error and marks the report as invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// Metrics that must be strictly positive when present.
const POSITIVE_METRICS: [Metric; 6] = [
    Metric::Height,
    Metric::Drop,
    Metric::DropAngle,
    Metric::Speed,
    Metric::TrackLength,
    Metric::MaxGForce,
];

/// Validate a full ride log.
pub fn validate_records(records: &[CoasterRecord]) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.stats.total_records = records.len();

    let current_year = chrono::Utc::now().year();
    let mut names = HashSet::new();
    let mut ids = HashSet::new();

    for (index, record) in records.iter().enumerate() {
        let label = if record.name.trim().is_empty() {
            format!("record #{}", index)
        } else {
            format!("'{}'", record.name)
        };

        if record.name.trim().is_empty() {
            report.add_error(format!("{} has an empty name", label));
        } else if !names.insert(record.name.as_str()) {
            report.stats.duplicate_names += 1;
            report.add_error(format!("Duplicate coaster name {}", label));
        }

        if record.id.trim().is_empty() {
            report.add_error(format!("{} has an empty id", label));
        } else if !ids.insert(record.id.as_str()) {
            report.stats.duplicate_ids += 1;
            report.add_error(format!("Duplicate coaster id '{}' on {}", record.id, label));
        }

        let mut incomplete = false;
        for metric in POSITIVE_METRICS {
            match record.metric(metric) {
                Some(value) if !value.is_finite() || value <= 0.0 => {
                    report.stats.invalid_metrics += 1;
                    report.add_error(format!(
                        "{} has {} = {}; record unknown values as null",
                        label,
                        metric.field_name(),
                        value
                    ));
                }
                Some(_) => {}
                None => incomplete = true,
            }
        }
        if incomplete {
            report.stats.incomplete_records += 1;
        }

        if let Some(angle) = record.drop_angle {
            if angle.value() > 180.0 {
                report.stats.invalid_metrics += 1;
                report.add_error(format!(
                    "{} has dropAngle = {} beyond 180 degrees",
                    label,
                    angle.value()
                ));
            }
        }

        if let Some(year) = record.year_opened {
            if year < EARLIEST_PLAUSIBLE_YEAR || year > current_year + 1 {
                report.add_warning(format!("{} has an unusual yearOpened = {}", label, year));
            }
        }
    }

    report
}
