//! Enrichment stage: fold configuration lookups into each raw record.

use crate::config::DashboardConfig;
use crate::models::{CoasterRecord, EnrichedCoaster};

/// Adds park group, manufacturer abbreviation and POV video to records.
///
/// Total over any input: unknown parks are their own group, unmapped
/// manufacturers keep their long name and unmatched names get no video.
pub struct Enricher<'a> {
    config: &'a DashboardConfig,
}

impl<'a> Enricher<'a> {
    pub fn new(config: &'a DashboardConfig) -> Self {
        Self { config }
    }

    /// Enrich a single record.
    pub fn enrich_record(&self, record: &CoasterRecord) -> EnrichedCoaster {
        let park_group = self.config.park_group(&record.park).to_string();
        let manufacturer_short = self
            .config
            .manufacturer_short(&record.manufacturer)
            .to_string();
        let pov_video = self.config.pov_video(&record.name).cloned();

        if !self.config.park_colors.contains_key(&record.park) {
            log::debug!("No color configured for park '{}'", record.park);
        }
        if !self
            .config
            .manufacturer_short_names
            .contains_key(&record.manufacturer)
        {
            log::debug!("No short name for manufacturer '{}'", record.manufacturer);
        }

        EnrichedCoaster {
            record: record.clone(),
            park_group,
            manufacturer_short,
            pov_video,
        }
    }

    /// Enrich every record, preserving length and order.
    pub fn enrich_all(&self, records: &[CoasterRecord]) -> Vec<EnrichedCoaster> {
        let enriched: Vec<_> = records.iter().map(|r| self.enrich_record(r)).collect();
        let with_video = enriched.iter().filter(|c| c.pov_video.is_some()).count();
        log::debug!(
            "Enriched {} records ({} with POV video)",
            enriched.len(),
            with_video
        );
        enriched
    }
}
