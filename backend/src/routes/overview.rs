use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Feet, GForce, MilesPerHour};

// =========================================================
// Overview types + routes
// =========================================================

/// Summary statistics over the whole ride log.
///
/// Maxima and the average are `None` when no record defines the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub total_coasters: usize,
    /// Sum of defined track lengths
    pub total_track: Feet,
    pub total_inversions: u32,
    pub max_height: Option<Feet>,
    pub max_speed: Option<MilesPerHour>,
    pub max_g_force: Option<GForce>,
    /// Mean of defined speeds, rounded to the nearest whole mph
    pub avg_speed: Option<MilesPerHour>,
    /// Coasters per park group
    pub park_counts: BTreeMap<String, usize>,
    /// Coasters per short manufacturer name
    pub manufacturer_counts: BTreeMap<String, usize>,
    /// Coasters per opening decade ("1970s", ...)
    pub decade_counts: BTreeMap<String, usize>,
}

/// Route for the whole snapshot.
pub const GET_SNAPSHOT: &str = "/snapshot";
/// Route for [`DerivedStats`].
pub const GET_STATS: &str = "/stats";
/// Route listing every enriched coaster.
pub const LIST_COASTERS: &str = "/coasters";
/// Route for one coaster by exact name.
pub const GET_COASTER: &str = "/coasters/{name}";
/// Route for the ordered park group legend.
pub const GET_PARK_LEGEND: &str = "/legend";
