use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =========================================================
// Distribution types + routes
// =========================================================

/// Count breakdowns offered by the dashboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionKind {
    Parks,
    Manufacturers,
    Decades,
    Types,
}

impl DistributionKind {
    pub const ALL: [DistributionKind; 4] = [
        DistributionKind::Parks,
        DistributionKind::Manufacturers,
        DistributionKind::Decades,
        DistributionKind::Types,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionKind::Parks => "parks",
            DistributionKind::Manufacturers => "manufacturers",
            DistributionKind::Decades => "decades",
            DistributionKind::Types => "types",
        }
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistributionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistributionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown distribution '{}'", s))
    }
}

/// One pie slice (or one bar) of a count breakdown.
///
/// `fill` is set for park and manufacturer breakdowns and omitted for the
/// decade and coaster-type breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSlice {
    pub name: String,
    pub value: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fill: Option<String>,
}

/// Per-manufacturer card on the builders view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerBreakdown {
    /// Short manufacturer name
    pub name: String,
    pub count: usize,
    pub fill: String,
    /// Share of all coasters, in percent
    pub share_pct: f64,
    /// Coaster names in record order
    pub coasters: Vec<String>,
}

/// Route for one count breakdown.
pub const GET_DISTRIBUTION: &str = "/distributions/{kind}";
/// Route for the manufacturer cards.
pub const GET_MANUFACTURER_BREAKDOWN: &str = "/manufacturers";
