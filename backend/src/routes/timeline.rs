use serde::{Deserialize, Serialize};

use crate::models::{Feet, MilesPerHour};

// =========================================================
// Timeline types + route
// =========================================================

/// A coaster placed on the opening-year axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    pub name: String,
    pub year: i32,
    pub height: Option<Feet>,
    pub speed: Option<MilesPerHour>,
    pub fill: String,
    pub park: String,
}

/// Route for the opening-year timeline.
pub const GET_TIMELINE_DATA: &str = "/timeline";
