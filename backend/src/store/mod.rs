//! Record store: the ordered, immutable ride log.
//!
//! The bundled log is compiled into the binary from `data/coasters.json`.
//! Alternative logs can be loaded from a file or string with the same
//! camelCase JSON shape. Loading validates every record; a log with errors is
//! rejected as a whole.

pub mod validator;

use std::path::Path;

use crate::checksum::calculate_checksum;
use crate::error::{DashboardError, DashboardResult, ErrorContext};
use crate::models::CoasterRecord;

pub use validator::{validate_records, ValidationReport, ValidationStats};

/// The bundled ride log.
pub const EMBEDDED_DATASET: &str = include_str!("../../data/coasters.json");

/// Validated ride log in original record order.
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<CoasterRecord>,
    checksum: String,
    report: ValidationReport,
}

impl RecordStore {
    /// Load the bundled ride log.
    pub fn embedded() -> DashboardResult<Self> {
        Self::from_json_str(EMBEDDED_DATASET)
    }

    /// Parse and validate a ride log from JSON text.
    pub fn from_json_str(json: &str) -> DashboardResult<Self> {
        let records: Vec<CoasterRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Read, parse and validate a ride log file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            DashboardError::data_with_context(
                format!("Failed to read dataset file: {}", e),
                ErrorContext::new("load_dataset").with_entity_id(path.display()),
            )
        })?;
        Self::from_json_str(&json).map_err(|e| e.with_operation("load_dataset"))
    }

    /// Validate already-decoded records.
    pub fn from_records(records: Vec<CoasterRecord>) -> DashboardResult<Self> {
        let report = validate_records(&records);
        for warning in &report.warnings {
            log::warn!("Ride log: {}", warning);
        }
        if !report.is_valid {
            return Err(DashboardError::validation_with_context(
                format!(
                    "Ride log has {} invalid entries: {}",
                    report.errors.len(),
                    report.errors.join("; ")
                ),
                ErrorContext::new("validate_dataset").with_entity("coaster"),
            ));
        }

        let canonical = serde_json::to_string(&records)
            .map_err(|e| DashboardError::internal(format!("Failed to encode records: {}", e)))?;
        let checksum = calculate_checksum([canonical]);

        log::debug!(
            "Loaded ride log with {} records (checksum {})",
            records.len(),
            &checksum[..12]
        );

        Ok(Self {
            records,
            checksum,
            report,
        })
    }

    pub fn records(&self) -> &[CoasterRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CoasterRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// SHA-256 of the canonical JSON encoding of the records.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn validation_report(&self) -> &ValidationReport {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Metric;

    #[test]
    fn test_embedded_dataset_loads() {
        let store = RecordStore::embedded().unwrap();
        assert_eq!(store.len(), 29);
        assert!(store.validation_report().is_valid);
        assert_eq!(store.records()[0].name, "The Beast");
        assert_eq!(store.records()[0].park, "Kings Island");
    }

    #[test]
    fn test_embedded_dataset_keeps_absent_metrics() {
        let store = RecordStore::embedded().unwrap();
        let blue_ridge = store
            .records()
            .iter()
            .find(|r| r.name == "Blue Ridge Mountain Coaster")
            .unwrap();
        assert_eq!(blue_ridge.metric(Metric::Height), None);
        assert_eq!(blue_ridge.metric(Metric::YearOpened), None);
        assert_eq!(blue_ridge.inversions, 0);
    }

    #[test]
    fn test_checksum_is_stable() {
        let a = RecordStore::embedded().unwrap();
        let b = RecordStore::embedded().unwrap();
        assert_eq!(a.checksum(), b.checksum());
    }

    #[test]
    fn test_invalid_json_is_data_error() {
        let err = RecordStore::from_json_str("[{").unwrap_err();
        assert!(matches!(err, DashboardError::DataError { .. }));
    }

    #[test]
    fn test_invalid_records_rejected() {
        let json = r#"[
            {"id": "a", "name": "A", "park": "P", "manufacturer": "M", "coasterType": "Steel", "height": 0},
            {"id": "b", "name": "B", "park": "P", "manufacturer": "M", "coasterType": "Steel"}
        ]"#;
        let err = RecordStore::from_json_str(json).unwrap_err();
        assert!(matches!(err, DashboardError::ValidationError { .. }));
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn test_missing_file() {
        let err = RecordStore::from_file("/nonexistent/coasters.json").unwrap_err();
        assert_eq!(err.context().operation.as_deref(), Some("load_dataset"));
    }
}
