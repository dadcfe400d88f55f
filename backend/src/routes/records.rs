use serde::{Deserialize, Serialize};

use crate::models::Metric;

// =========================================================
// Record leaderboard types + route
// =========================================================

/// Direction a leaderboard is ordered in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Podium place.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a 1-based place; places past third get none.
    pub fn for_place(place: usize) -> Option<Medal> {
        match place {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }
}

/// One coaster on a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodiumEntry {
    /// 1-based place
    pub place: usize,
    pub medal: Option<Medal>,
    pub medal_color: Option<String>,
    /// Exact coaster name, usable for detail lookup
    pub name: String,
    pub park: String,
    pub value: f64,
    /// Park color
    pub fill: String,
}

/// A leaderboard category such as "Tallest".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCategory {
    pub id: String,
    pub title: String,
    pub field: Metric,
    pub unit: String,
    pub icon: String,
    pub order: SortOrder,
    /// Between zero and `leaderboard_size` entries; never padded
    pub entries: Vec<PodiumEntry>,
}

/// Route for every leaderboard.
pub const GET_RECORD_CATEGORIES: &str = "/records";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medal_for_place() {
        assert_eq!(Medal::for_place(1), Some(Medal::Gold));
        assert_eq!(Medal::for_place(3), Some(Medal::Bronze));
        assert_eq!(Medal::for_place(4), None);
        assert_eq!(Medal::for_place(0), None);
    }
}
