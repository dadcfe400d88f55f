use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Metric;

// =========================================================
// Ranking types + route
// =========================================================

/// Bar chart rankings offered by the dashboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RankingKind {
    Height,
    Speed,
    Track,
    #[serde(rename = "gforce")]
    GForce,
    Inversions,
    DropAngle,
}

impl RankingKind {
    pub const ALL: [RankingKind; 6] = [
        RankingKind::Height,
        RankingKind::Speed,
        RankingKind::Track,
        RankingKind::GForce,
        RankingKind::Inversions,
        RankingKind::DropAngle,
    ];

    /// Record field the ranking sorts on.
    pub fn metric(&self) -> Metric {
        match self {
            RankingKind::Height => Metric::Height,
            RankingKind::Speed => Metric::Speed,
            RankingKind::Track => Metric::TrackLength,
            RankingKind::GForce => Metric::MaxGForce,
            RankingKind::Inversions => Metric::Inversions,
            RankingKind::DropAngle => Metric::DropAngle,
        }
    }

    /// Path segment used in `/rankings/{kind}`.
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingKind::Height => "height",
            RankingKind::Speed => "speed",
            RankingKind::Track => "track",
            RankingKind::GForce => "gforce",
            RankingKind::Inversions => "inversions",
            RankingKind::DropAngle => "drop-angle",
        }
    }
}

impl fmt::Display for RankingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RankingKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown ranking '{}'", s))
    }
}

/// One bar in a ranking chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCoaster {
    /// 1-based position
    pub rank: usize,
    /// Display name, shortened with an ellipsis when too long
    pub name: String,
    /// Untruncated name for tooltips and detail lookup
    pub full_name: String,
    pub value: f64,
    /// Park color
    pub fill: String,
    pub park: String,
}

/// A complete ranking, highest value first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ranking {
    pub kind: RankingKind,
    pub metric: Metric,
    pub unit: String,
    pub entries: Vec<RankedCoaster>,
}

impl Ranking {
    /// The first `limit` entries.
    pub fn top(&self, limit: usize) -> &[RankedCoaster] {
        &self.entries[..limit.min(self.entries.len())]
    }
}

/// Route for a single ranking.
pub const GET_RANKING: &str = "/rankings/{kind}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_kind_round_trip_through_path_segment() {
        for kind in RankingKind::ALL {
            assert_eq!(kind.as_str().parse::<RankingKind>().unwrap(), kind);
            assert_eq!(
                serde_json::to_value(kind).unwrap(),
                serde_json::Value::String(kind.to_string())
            );
        }
        assert!("weight".parse::<RankingKind>().is_err());
    }

    #[test]
    fn test_top_clamps_to_length() {
        let ranking = Ranking {
            kind: RankingKind::Height,
            metric: Metric::Height,
            unit: "ft".to_string(),
            entries: vec![RankedCoaster {
                rank: 1,
                name: "Fury 325".to_string(),
                full_name: "Fury 325".to_string(),
                value: 325.0,
                fill: "#6BCB77".to_string(),
                park: "Carowinds".to_string(),
            }],
        };
        assert_eq!(ranking.top(15).len(), 1);
        assert!(ranking.top(0).is_empty());
    }
}
