//! Dashboard configuration: lookup tables and display limits.
//!
//! Every free-text vocabulary the pipeline depends on (park grouping, colors,
//! manufacturer abbreviations, POV videos) lives here instead of in the
//! derivation code, so the pipeline can run against any dataset. The built-in
//! [`DashboardConfig::default`] matches the bundled ride log; a TOML file can
//! override any section and omitted sections keep their defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DashboardError, DashboardResult, ErrorContext};
use crate::models::PovVideo;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "DASHBOARD_CONFIG";

/// An umbrella label that several park names fold into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkGroup {
    pub name: String,
    pub parks: Vec<String>,
}

/// One legend row: a park group and its display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub name: String,
    pub color: String,
}

/// Podium colors for leaderboard places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedalColors {
    pub gold: String,
    pub silver: String,
    pub bronze: String,
}

impl Default for MedalColors {
    fn default() -> Self {
        Self {
            gold: "#FFD700".to_string(),
            silver: "#C0C0C0".to_string(),
            bronze: "#CD7F32".to_string(),
        }
    }
}

/// Display limits and chart constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Names longer than this are shortened with a trailing ellipsis
    pub truncate_name_length: usize,
    /// Default number of bars in a ranking chart
    pub max_bar_items: usize,
    /// Entries per record leaderboard
    pub leaderboard_size: usize,
    /// Track length assumed for scatter bubble sizing when unknown (ft)
    pub default_track_length: f64,
    /// Divisor turning track length into a bubble size
    pub bubble_scale: f64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            truncate_name_length: 18,
            max_bar_items: 15,
            leaderboard_size: 3,
            default_track_length: 2000.0,
            bubble_scale: 400.0,
        }
    }
}

/// Complete dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub park_groups: Vec<ParkGroup>,
    pub park_colors: BTreeMap<String, String>,
    /// Ordered legend of park groups
    pub park_group_colors: Vec<LegendEntry>,
    pub manufacturer_colors: BTreeMap<String, String>,
    /// Long manufacturer name -> display abbreviation
    pub manufacturer_short_names: BTreeMap<String, String>,
    /// Coaster name -> POV video
    pub pov_videos: BTreeMap<String, PovVideo>,
    pub fallback_park_color: String,
    pub fallback_manufacturer_color: String,
    pub medal_colors: MedalColors,
    pub display: DisplaySettings,
}

fn string_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn default_pov_videos() -> BTreeMap<String, PovVideo> {
    [
        ("The Beast", "ZJuhNpWMfdE", "The Beast POV - Kings Island"),
        ("Mystic Timbers", "X2kNPlOTGqk", "Mystic Timbers POV - Kings Island"),
        ("The Bat", "TPLdiw5AQDQ", "The Bat POV - Kings Island (Official)"),
        ("Backlot Stunt Coaster", "rERFA-BQrcU", "Backlot Stunt Coaster POV - Kings Island"),
        ("The Racer", "r9BF9kL-SuI", "The Racer POV - Kings Island (Official)"),
        ("Woodstock Express", "O6hXd9XCkH4", "Woodstock Express POV - Kings Island (Official)"),
        (
            "Rock 'n' Roller Coaster",
            "DcTikoA5jNE",
            "Rock 'n' Roller Coaster POV - Hollywood Studios",
        ),
        ("Seven Dwarfs Mine Train", "sf8NARziZZM", "Seven Dwarfs Mine Train POV - Magic Kingdom"),
        ("Slinky Dog Dash", "FlzHw4qWIps", "Slinky Dog Dash POV - Hollywood Studios"),
        ("Expedition Everest", "KTji1hOICEI", "Expedition Everest POV - Animal Kingdom"),
        ("The Barnstormer", "BRTpVIAzhNQ", "The Barnstormer POV - Magic Kingdom"),
        (
            "Big Thunder Mountain Railroad",
            "ZVT66d0kg_A",
            "Big Thunder Mountain POV - Magic Kingdom",
        ),
        ("Guardians of the Galaxy: Cosmic Rewind", "fQ0ZPRmDA58", "Cosmic Rewind POV - EPCOT"),
        ("Fury 325", "VyX6jzXSSSs", "Fury 325 POV - Carowinds"),
        ("Thunder Striker", "aDPCu1u3UCo", "Thunder Striker POV - Carowinds (Official)"),
        ("Carolina Cyclone", "0Txobf7jrHw", "Carolina Cyclone POV - Carowinds (Official)"),
        ("Ricochet", "lRtG7C5ilN0", "Ricochet POV - Carowinds (Official)"),
        ("Montu", "fi_ugEfCvMA", "Montu POV - Busch Gardens Tampa"),
        ("SheiKra", "mMEed3OdU3A", "SheiKra POV - Busch Gardens Tampa"),
        ("Iron Gwazi", "NkCtNaThbmE", "Iron Gwazi POV - Busch Gardens Tampa"),
        ("Kumba", "pOCIs2dfDWY", "Kumba POV - Busch Gardens Tampa"),
        (
            "Phoenix Rising",
            "kw5Z-9sdCTE",
            "Phoenix Rising POV - Busch Gardens Tampa (CoasterForce)",
        ),
        ("Tigris", "lpuQPYZysks", "Tigris POV - Busch Gardens Tampa (CoasterForce)"),
        ("Cheetah Hunt", "gqSxb5VonmM", "Cheetah Hunt POV - Busch Gardens Tampa"),
        ("Mako", "ekEkDyp3lYs", "Mako POV - SeaWorld Orlando"),
        (
            "Pipeline: The Surf Coaster",
            "aLiCaYLer1g",
            "Pipeline Surf Coaster POV - SeaWorld Orlando (CoasterForce)",
        ),
        ("Kraken", "glgRO5rYVmM", "Kraken POV - SeaWorld Orlando (CoasterForce)"),
        (
            "Blue Ridge Mountain Coaster",
            "1NcD2-4Q5MU",
            "Blue Ridge Mountain Coaster POV - Jellystone Park NC",
        ),
    ]
    .iter()
    .map(|(name, id, title)| (name.to_string(), PovVideo::new(*id, *title)))
    .collect()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let disney = "#FFD93D";
        Self {
            park_groups: vec![ParkGroup {
                name: "Walt Disney World".to_string(),
                parks: ["Hollywood Studios", "Magic Kingdom", "EPCOT", "Animal Kingdom"]
                    .iter()
                    .map(|p| p.to_string())
                    .collect(),
            }],
            park_colors: string_map(&[
                ("Kings Island", "#4ECDC4"),
                ("Hollywood Studios", disney),
                ("Magic Kingdom", disney),
                ("EPCOT", disney),
                ("Animal Kingdom", disney),
                ("Carowinds", "#6BCB77"),
                ("Busch Gardens Tampa", "#FF6B6B"),
                ("SeaWorld Orlando", "#4D96FF"),
                ("Jellystone Park", "#C084FC"),
            ]),
            park_group_colors: [
                ("Kings Island", "#4ECDC4"),
                ("Walt Disney World", disney),
                ("Carowinds", "#6BCB77"),
                ("Busch Gardens Tampa", "#FF6B6B"),
                ("SeaWorld Orlando", "#4D96FF"),
                ("Jellystone Park", "#C084FC"),
            ]
            .iter()
            .map(|(name, color)| LegendEntry {
                name: name.to_string(),
                color: color.to_string(),
            })
            .collect(),
            manufacturer_colors: string_map(&[
                ("B&M", "#FF6B6B"),
                ("Vekoma", "#4D96FF"),
                ("Arrow", "#FFD93D"),
                ("PTC", "#4ECDC4"),
                ("Premier", "#C084FC"),
                ("Intamin", "#FF9A3C"),
                ("GCI", "#6BCB77"),
                ("RMC", "#FF4081"),
                ("Mack", "#00BFA5"),
                ("Wiegand", "#8E99A4"),
            ]),
            manufacturer_short_names: string_map(&[
                ("Philadelphia Toboggan Coasters", "PTC"),
                ("Great Coasters International (GCI)", "GCI"),
                ("Bolliger & Mabillard (B&M)", "B&M"),
                ("Rocky Mountain Construction (RMC)", "RMC"),
                ("Arrow Dynamics", "Arrow"),
                ("Premier Rides", "Premier"),
                ("Vekoma", "Vekoma"),
                ("Mack Rides", "Mack"),
                ("Intamin", "Intamin"),
                ("Wiegand Sports", "Wiegand"),
                ("Vekoma / WED Enterprises", "Vekoma"),
            ]),
            pov_videos: default_pov_videos(),
            fallback_park_color: "#4ECDC4".to_string(),
            fallback_manufacturer_color: "#8E99A4".to_string(),
            medal_colors: MedalColors::default(),
            display: DisplaySettings::default(),
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

impl DashboardConfig {
    /// Parse configuration from TOML text and validate it.
    pub fn from_toml_str(content: &str) -> DashboardResult<Self> {
        let config: DashboardConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(DashboardConfig)` if successful
    /// * `Err(DashboardError)` if file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DashboardError::configuration_with_context(
                format!("Failed to read config file: {}", e),
                ErrorContext::new("load_config").with_entity_id(path.display()),
            )
        })?;

        let config = Self::from_toml_str(&content).map_err(|e| e.with_operation("load_config"))?;
        log::info!("Loaded dashboard config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(Some(DashboardConfig))` if found and parsed successfully
    /// * `Ok(None)` if no config file exists (callers use the defaults)
    /// * `Err(DashboardError)` on read or parse errors
    pub fn from_default_location() -> DashboardResult<Option<Self>> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }

        log::debug!("No dashboard.toml found in standard locations, using built-in config");
        Ok(None)
    }

    /// Resolve the configuration the way the server does.
    ///
    /// `DASHBOARD_CONFIG` wins when set; otherwise the default locations are
    /// searched, and the built-in configuration is used when nothing is found.
    pub fn load() -> DashboardResult<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path),
            _ => Ok(Self::from_default_location()?.unwrap_or_default()),
        }
    }

    /// Check colors and display limits.
    pub fn validate(&self) -> DashboardResult<()> {
        let colors = self
            .park_colors
            .iter()
            .chain(self.manufacturer_colors.iter())
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .chain(
                self.park_group_colors
                    .iter()
                    .map(|e| (e.name.as_str(), e.color.as_str())),
            )
            .chain([
                ("fallback_park_color", self.fallback_park_color.as_str()),
                (
                    "fallback_manufacturer_color",
                    self.fallback_manufacturer_color.as_str(),
                ),
                ("medal_colors.gold", self.medal_colors.gold.as_str()),
                ("medal_colors.silver", self.medal_colors.silver.as_str()),
                ("medal_colors.bronze", self.medal_colors.bronze.as_str()),
            ]);

        for (key, color) in colors {
            if !is_hex_color(color) {
                return Err(DashboardError::configuration_with_context(
                    format!("Invalid color '{}' for '{}', expected #RRGGBB", color, key),
                    ErrorContext::new("validate_config").with_entity_id(key),
                ));
            }
        }

        let display = &self.display;
        if display.truncate_name_length < 2 {
            return Err(DashboardError::configuration(
                "display.truncate_name_length must be at least 2",
            ));
        }
        if display.max_bar_items == 0 || display.leaderboard_size == 0 {
            return Err(DashboardError::configuration(
                "display.max_bar_items and display.leaderboard_size must be positive",
            ));
        }
        if !(display.default_track_length > 0.0 && display.bubble_scale > 0.0) {
            return Err(DashboardError::configuration(
                "display.default_track_length and display.bubble_scale must be positive",
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for park in self.park_groups.iter().flat_map(|g| g.parks.iter()) {
            if !seen.insert(park.as_str()) {
                return Err(DashboardError::configuration_with_context(
                    format!("Park '{}' belongs to more than one park group", park),
                    ErrorContext::new("validate_config").with_entity("park_groups"),
                ));
            }
        }

        // A group label must not fold into some other group.
        for group in &self.park_groups {
            let nested = self
                .park_groups
                .iter()
                .filter(|other| other.name != group.name)
                .any(|other| other.parks.contains(&group.name));
            if nested {
                return Err(DashboardError::configuration_with_context(
                    format!("Park group '{}' is also a member of another group", group.name),
                    ErrorContext::new("validate_config").with_entity("park_groups"),
                ));
            }
        }

        Ok(())
    }

    /// Umbrella group for `park`; parks outside every group are their own group.
    pub fn park_group<'a>(&'a self, park: &'a str) -> &'a str {
        self.park_groups
            .iter()
            .find(|g| g.parks.iter().any(|p| p == park))
            .map(|g| g.name.as_str())
            .unwrap_or(park)
    }

    /// Display abbreviation for a long manufacturer name, or the name itself.
    pub fn manufacturer_short<'a>(&'a self, manufacturer: &'a str) -> &'a str {
        self.manufacturer_short_names
            .get(manufacturer)
            .map(String::as_str)
            .unwrap_or(manufacturer)
    }

    pub fn park_color(&self, park: &str) -> &str {
        self.park_colors
            .get(park)
            .map(String::as_str)
            .unwrap_or(self.fallback_park_color.as_str())
    }

    pub fn park_group_color(&self, group: &str) -> &str {
        self.park_group_colors
            .iter()
            .find(|e| e.name == group)
            .map(|e| e.color.as_str())
            .unwrap_or(self.fallback_park_color.as_str())
    }

    pub fn manufacturer_color(&self, manufacturer_short: &str) -> &str {
        self.manufacturer_colors
            .get(manufacturer_short)
            .map(String::as_str)
            .unwrap_or(self.fallback_manufacturer_color.as_str())
    }

    pub fn pov_video(&self, name: &str) -> Option<&PovVideo> {
        self.pov_videos.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        DashboardConfig::default().validate().unwrap();
    }

    #[test]
    fn test_park_group_folds_disney_parks() {
        let config = DashboardConfig::default();
        for park in ["Hollywood Studios", "Magic Kingdom", "EPCOT", "Animal Kingdom"] {
            assert_eq!(config.park_group(park), "Walt Disney World");
        }
        assert_eq!(config.park_group("Kings Island"), "Kings Island");
        assert_eq!(config.park_group("Cedar Point"), "Cedar Point");
    }

    #[test]
    fn test_park_group_is_idempotent() {
        let config = DashboardConfig::default();
        let once = config.park_group("EPCOT");
        assert_eq!(config.park_group(once), once);
    }

    #[test]
    fn test_lookup_fallbacks() {
        let config = DashboardConfig::default();
        assert_eq!(config.park_color("Kings Island"), "#4ECDC4");
        assert_eq!(config.park_color("Carowinds"), "#6BCB77");
        assert_eq!(config.park_color("Unrecognized Park Name"), "#4ECDC4");
        assert_eq!(config.manufacturer_color("B&M"), "#FF6B6B");
        assert_eq!(config.manufacturer_color("Intamin"), "#FF9A3C");
        assert_eq!(config.manufacturer_color("Unknown Manufacturer"), "#8E99A4");
        assert_eq!(config.manufacturer_short("Unrecognized Mfr"), "Unrecognized Mfr");
        assert_eq!(config.manufacturer_short("Bolliger & Mabillard (B&M)"), "B&M");
        assert!(config.pov_video("Nope").is_none());
        assert_eq!(config.pov_video("Fury 325").unwrap().id, "VyX6jzXSSSs");
    }

    #[test]
    fn test_disney_parks_share_color_and_group_legend_excludes_them() {
        let config = DashboardConfig::default();
        assert_eq!(config.park_color("EPCOT"), config.park_color("Magic Kingdom"));
        assert_eq!(config.park_group_color("Walt Disney World"), "#FFD93D");
        assert!(config
            .park_group_colors
            .iter()
            .all(|e| e.name != "Hollywood Studios"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml = r##"
fallback_park_color = "#000000"

[display]
truncate_name_length = 12
"##;
        let config = DashboardConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.fallback_park_color, "#000000");
        assert_eq!(config.display.truncate_name_length, 12);
        assert_eq!(config.display.max_bar_items, 15);
        assert_eq!(config.park_group("EPCOT"), "Walt Disney World");
    }

    #[test]
    fn test_custom_vocabulary() {
        let toml = r##"
park_groups = [{ name = "Six Flags", parks = ["Six Flags Magic Mountain", "Six Flags Great Adventure"] }]

[manufacturer_short_names]
"Bolliger & Mabillard" = "B&M"

[pov_videos."Kingda Ka"]
id = "xyz"
title = "Kingda Ka POV"
"##;
        let config = DashboardConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.park_group("Six Flags Great Adventure"), "Six Flags");
        assert_eq!(config.park_group("EPCOT"), "EPCOT");
        assert_eq!(config.manufacturer_short("Bolliger & Mabillard"), "B&M");
        assert_eq!(
            config.manufacturer_short("Bolliger & Mabillard (B&M)"),
            "Bolliger & Mabillard (B&M)"
        );
        assert_eq!(config.pov_video("Kingda Ka").unwrap().title, "Kingda Ka POV");
    }

    #[test]
    fn test_invalid_color_rejected() {
        let toml = r##"
[park_colors]
"Kings Island" = "teal"
"##;
        let err = DashboardConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigurationError { .. }));
        assert!(err.to_string().contains("Kings Island"));
    }

    #[test]
    fn test_overlapping_groups_rejected() {
        let toml = r##"
park_groups = [
    { name = "A", parks = ["Shared Park"] },
    { name = "B", parks = ["Shared Park"] },
]
"##;
        assert!(DashboardConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_group_name_cannot_be_member_park() {
        let toml = r##"
park_groups = [
    { name = "EPCOT", parks = ["Magic Kingdom"] },
    { name = "Resort", parks = ["EPCOT"] },
]
"##;
        let err = DashboardConfig::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigurationError { .. }));
        assert!(err.to_string().contains("EPCOT"));
    }

    #[test]
    fn test_group_may_list_its_own_name() {
        let toml = r##"
park_groups = [{ name = "Kings Island", parks = ["Kings Island", "Kings Dominion"] }]
"##;
        let config = DashboardConfig::from_toml_str(toml).unwrap();
        let once = config.park_group("Kings Dominion");
        assert_eq!(once, "Kings Island");
        assert_eq!(config.park_group(once), once);
    }

    #[test]
    fn test_partial_medal_colors_keep_defaults() {
        let toml = r##"
[medal_colors]
gold = "#FFCC00"
"##;
        let config = DashboardConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.medal_colors.gold, "#FFCC00");
        assert_eq!(config.medal_colors.silver, "#C0C0C0");
        assert_eq!(config.medal_colors.bronze, "#CD7F32");
    }

    #[test]
    fn test_zero_display_limit_rejected() {
        let toml = r##"
[display]
leaderboard_size = 0
"##;
        assert!(DashboardConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = DashboardConfig::from_toml_str("park_groups = [").unwrap_err();
        assert_eq!(err.context().operation.as_deref(), Some("parse_config"));
    }
}
