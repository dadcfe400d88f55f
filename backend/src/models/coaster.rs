//! Coaster entities: raw log records and their enriched form.

use serde::{Deserialize, Serialize};

use super::units::{Degrees, Feet, GForce, MilesPerHour};

/// One ridden roller coaster as recorded in the ride log.
///
/// Every physical metric other than `inversions` is optional. Absence is a
/// distinct state from zero: a coaster without a known height is left out of
/// height rankings rather than ranked at the bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoasterRecord {
    pub id: String,
    pub name: String,
    pub park: String,
    pub manufacturer: String,
    pub year_opened: Option<i32>,
    pub coaster_type: String,
    pub height: Option<Feet>,
    pub drop: Option<Feet>,
    pub drop_angle: Option<Degrees>,
    pub speed: Option<MilesPerHour>,
    pub track_length: Option<Feet>,
    pub duration: Option<String>,
    #[serde(default)]
    pub inversions: u32,
    pub max_g_force: Option<GForce>,
    pub special_elements: Option<String>,
    pub records: Option<String>,
    pub times_ridden: Option<u32>,
    pub reeds_age_on_first_ride: Option<u32>,
    pub image_url: Option<String>,
}

impl CoasterRecord {
    /// Minimal record with every optional field absent.
    pub fn new(
        name: impl Into<String>,
        park: impl Into<String>,
        manufacturer: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            id: slugify(&name),
            name,
            park: park.into(),
            manufacturer: manufacturer.into(),
            year_opened: None,
            coaster_type: String::new(),
            height: None,
            drop: None,
            drop_angle: None,
            speed: None,
            track_length: None,
            duration: None,
            inversions: 0,
            max_g_force: None,
            special_elements: None,
            records: None,
            times_ridden: None,
            reeds_age_on_first_ride: None,
            image_url: None,
        }
    }

    /// Numeric value of `metric`, or `None` when the record does not define it.
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Height => self.height.map(|v| v.value()),
            Metric::Drop => self.drop.map(|v| v.value()),
            Metric::DropAngle => self.drop_angle.map(|v| v.value()),
            Metric::Speed => self.speed.map(|v| v.value()),
            Metric::TrackLength => self.track_length.map(|v| v.value()),
            Metric::Inversions => Some(f64::from(self.inversions)),
            Metric::MaxGForce => self.max_g_force.map(|v| v.value()),
            Metric::YearOpened => self.year_opened.map(f64::from),
        }
    }
}

/// Lowercase, dash-separated identifier derived from a coaster name.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Numeric fields a projection can filter and sort on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Height,
    Drop,
    DropAngle,
    Speed,
    TrackLength,
    Inversions,
    MaxGForce,
    YearOpened,
}

impl Metric {
    /// Field name as it appears in the serialized record.
    pub fn field_name(&self) -> &'static str {
        match self {
            Metric::Height => "height",
            Metric::Drop => "drop",
            Metric::DropAngle => "dropAngle",
            Metric::Speed => "speed",
            Metric::TrackLength => "trackLength",
            Metric::Inversions => "inversions",
            Metric::MaxGForce => "maxGForce",
            Metric::YearOpened => "yearOpened",
        }
    }

    /// Display unit used next to values of this metric.
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Height | Metric::Drop | Metric::TrackLength => Feet::UNIT,
            Metric::Speed => MilesPerHour::UNIT,
            Metric::DropAngle => Degrees::UNIT,
            Metric::MaxGForce => GForce::UNIT,
            Metric::Inversions | Metric::YearOpened => "",
        }
    }
}

/// Point-of-view ride video reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PovVideo {
    /// YouTube video id
    pub id: String,
    pub title: String,
}

impl PovVideo {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Privacy-friendly embed URL that autoplays once the viewer opts in.
    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}?autoplay=1&rel=0", self.id)
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }
}

/// A record plus the fields derived from configuration lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCoaster {
    #[serde(flatten)]
    pub record: CoasterRecord,
    pub park_group: String,
    pub manufacturer_short: String,
    pub pov_video: Option<PovVideo>,
}

impl EnrichedCoaster {
    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn park(&self) -> &str {
        &self.record.park
    }

    pub fn metric(&self, metric: Metric) -> Option<f64> {
        self.record.metric(metric)
    }

    /// Opening decade label, e.g. `"1970s"` for 1979.
    pub fn decade(&self) -> Option<String> {
        self.record.year_opened.map(decade_label)
    }
}

/// First year of the decade containing `year`.
pub fn decade_start(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// Floor a year to its decade and render it as `"<decade>s"`.
pub fn decade_label(year: i32) -> String {
    format!("{}s", decade_start(year))
}
