//! Level metadata and raw statistics value objects.
//!
//! These are the inputs the external map library hands over: descriptive
//! level details plus the computed counts, balances, and HQ positions for
//! a loaded map. The report builder in [`crate::report`] shapes them into
//! the stable output structure; nothing here performs I/O.

use serde::{Deserialize, Serialize};

use crate::tileset::Tileset;

/// The gameplay type of a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapType {
    /// Campaign mission map.
    Campaign,
    /// Saved-game map.
    Savegame,
    /// Multiplayer skirmish map.
    Skirmish,
}

impl MapType {
    /// Get the lowercase name used in reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Campaign => "campaign",
            Self::Savegame => "savegame",
            Self::Skirmish => "skirmish",
        }
    }
}

/// Descriptive, non-geometric information about a map.
///
/// Optional metadata uses real `Option`s: "not provided" is distinct from
/// any in-band empty value, and the report omits absent fields entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDetails {
    /// Map name.
    pub name: String,
    /// Gameplay type.
    pub map_type: MapType,
    /// Number of player slots.
    pub players: u32,
    /// Declared tileset.
    pub tileset: Tileset,
    /// Primary author, when recorded.
    #[serde(default)]
    pub author: Option<String>,
    /// Additional authors, possibly empty.
    #[serde(default)]
    pub additional_authors: Vec<String>,
    /// License identifier, when recorded.
    #[serde(default)]
    pub license: Option<String>,
    /// Creation date string, when recorded.
    #[serde(default)]
    pub created: Option<String>,
    /// Generator tool identifier, when recorded.
    #[serde(default)]
    pub generator: Option<String>,
}

/// Minimum and maximum of a per-player metric across all players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MinMax {
    /// Smallest per-player count.
    pub min: u32,
    /// Largest per-player count.
    pub max: u32,
}

/// Per-metric min/max counts across players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerPlayerCounts {
    /// Units per player.
    pub units: MinMax,
    /// Structures per player.
    pub structures: MinMax,
    /// Resource extractors per player.
    pub resource_extractors: MinMax,
    /// Power generators per player.
    pub power_generators: MinMax,
    /// Regular factories per player.
    pub reg_factories: MinMax,
    /// VTOL factories per player.
    pub vtol_factories: MinMax,
    /// Cyborg factories per player.
    pub cyborg_factories: MinMax,
    /// Research centers per player.
    pub research_centers: MinMax,
    /// Defensive structures per player.
    pub defense_structures: MinMax,
}

/// Start-equality flags: whether every player begins with the same count
/// of each metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StartEquality {
    /// Equal starting units.
    pub units: bool,
    /// Equal starting structures.
    pub structures: bool,
    /// Equal starting resource extractors.
    pub resource_extractors: bool,
    /// Equal starting power generators.
    pub power_generators: bool,
    /// Equal starting factories of any kind, combined.
    pub factories: bool,
    /// Equal starting regular factories.
    pub reg_factories: bool,
    /// Equal starting VTOL factories.
    pub vtol_factories: bool,
    /// Equal starting cyborg factories.
    pub cyborg_factories: bool,
    /// Equal starting research centers.
    pub research_centers: bool,
    /// Equal starting defensive structures.
    pub defense_structures: bool,
}

/// A tile coordinate on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPosition {
    /// Horizontal tile coordinate.
    pub x: u32,
    /// Vertical tile coordinate.
    pub y: u32,
}

/// Raw statistics computed for a loaded map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MapStats {
    /// Map width in tiles.
    pub map_width: u32,
    /// Map height in tiles.
    pub map_height: u32,
    /// Scavenger-owned units.
    pub scavenger_units: u32,
    /// Scavenger-owned structures.
    pub scavenger_structures: u32,
    /// Scavenger-owned factories.
    pub scavenger_factories: u32,
    /// Scavenger-owned resource extractors.
    pub scavenger_resource_extractors: u32,
    /// Total oil wells on the map.
    pub oil_wells_total: u32,
    /// Per-player min/max counts.
    pub per_player: PerPlayerCounts,
    /// Start-equality balance flags.
    pub balance: StartEquality,
    /// Per-player-slot HQ coordinate history, in placement order.
    ///
    /// A slot may record zero positions (no HQ) or several (maps with
    /// multiple placed HQs).
    #[serde(default)]
    pub hq_history: Vec<Vec<MapPosition>>,
}

/// Level-info file format a package was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelFormat {
    /// Flat `.lev` level file (old).
    Lev,
    /// JSON level file.
    Json,
}

impl LevelFormat {
    /// Get the lowercase identifier used in reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Lev => "lev",
            Self::Json => "json",
        }
    }
}

/// Map data format a map was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapFormat {
    /// A mix of formats.
    Mixed,
    /// Old binary format.
    Binary,
    /// First JSON format revision.
    JsonV1,
    /// Script-generated map.
    Script,
    /// Second JSON format revision.
    JsonV2,
}

impl MapFormat {
    /// Get the lowercase identifier used in reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mixed => "mixed",
            Self::Binary => "binary",
            Self::JsonV1 => "jsonv1",
            Self::Script => "script",
            Self::JsonV2 => "jsonv2",
        }
    }
}

/// Package-level facts known only when the map came from a package.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PackageInfo {
    /// Whether the package is a map-mod (carries gameplay modifications).
    pub map_mod: bool,
    /// Names of the modification types present, when a map-mod.
    #[serde(default)]
    pub mod_types: Vec<String>,
    /// Format the level details were loaded from, when known.
    #[serde(default)]
    pub level_format: Option<LevelFormat>,
    /// Format the map data was loaded from, when known.
    #[serde(default)]
    pub map_format: Option<MapFormat>,
    /// Whether the package uses the flat single-folder layout.
    pub flat_map_package: bool,
}
