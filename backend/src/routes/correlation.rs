use serde::{Deserialize, Serialize};

use crate::models::{Feet, MilesPerHour};

// =========================================================
// Height vs speed correlation types + route
// =========================================================

/// One bubble in the height/speed scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub name: String,
    /// Height (x axis)
    pub x: Feet,
    /// Speed (y axis)
    pub y: MilesPerHour,
    /// Bubble size derived from track length
    pub z: f64,
    pub fill: String,
    pub park: String,
    /// Track length for the tooltip, when known
    pub track: Option<Feet>,
}

/// Scatter points plus their rank correlation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterData {
    pub points: Vec<ScatterPoint>,
    /// Spearman coefficient of height vs speed; `None` below two points
    pub spearman: Option<f64>,
}

/// Route for the scatter chart.
pub const GET_SCATTER_DATA: &str = "/scatter";
