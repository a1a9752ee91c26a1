//! Stable statistics report assembly.
//!
//! [`MapStatsReport`] is the serialization-ready shape of a map's
//! statistics. The struct's field declaration order *is* the output key
//! order; that order is part of the contract so snapshots and diffs stay
//! reproducible, even though consumers parse by key. Conditional fields
//! are omitted entirely when the source data does not provide them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::stats::{LevelDetails, MapPosition, MapStats, MinMax, PackageInfo};

/// A named author entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorInfo {
    /// Author name.
    pub name: String,
}

/// Map dimensions in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSize {
    /// Width in tiles.
    pub w: u32,
    /// Height in tiles.
    pub h: u32,
}

/// Scavenger-owned object counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScavengerCounts {
    /// Scavenger units.
    pub units: u32,
    /// Scavenger structures.
    pub structures: u32,
    /// Scavenger factories.
    pub factories: u32,
    /// Scavenger resource extractors.
    pub resource_extractors: u32,
}

/// Per-player min/max counts, one entry per metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCountsReport {
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

/// Start-equality flags per metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartEqualityReport {
    /// Equal starting units.
    pub units: bool,
    /// Equal starting structures.
    pub structures: bool,
    /// Equal starting resource extractors.
    pub resource_extractors: bool,
    /// Equal starting power generators.
    pub power_generators: bool,
    /// Equal starting factories of any kind.
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

/// The balance section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Start-equality flags.
    #[serde(rename = "startEquality")]
    pub start_equality: StartEqualityReport,
}

/// One HQ entry per player slot.
///
/// Serializes as `{"x": ..., "y": ...}` when a position is recorded and
/// as `{}` when the slot has no HQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HqEntry {
    /// Last recorded HQ position, if any.
    #[serde(flatten)]
    pub position: Option<MapPosition>,
}

/// Ordered, schema-stable statistics report for one map.
///
/// Built from [`LevelDetails`] and [`MapStats`]; package-only fields are
/// appended via [`MapStatsReport::with_package_info`] and stay absent
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStatsReport {
    /// Map name.
    pub name: String,
    /// Gameplay type name.
    #[serde(rename = "type")]
    pub map_type: String,
    /// Player slot count.
    pub players: u32,
    /// Tileset name.
    pub tileset: String,
    /// Primary author, when recorded.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub author: Option<AuthorInfo>,
    /// Additional authors, when any are recorded.
    #[serde(
        rename = "additionalAuthors",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub additional_authors: Option<Vec<AuthorInfo>>,
    /// License identifier, when recorded.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub license: Option<String>,
    /// Creation date, when recorded.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created: Option<String>,
    /// Generator tool identifier, when recorded.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub generator: Option<String>,
    /// Map dimensions.
    pub mapsize: MapSize,
    /// Scavenger counts.
    pub scavenger: ScavengerCounts,
    /// Total oil wells.
    #[serde(rename = "oilWells")]
    pub oil_wells: u32,
    /// Per-player min/max counts.
    pub player: PlayerCountsReport,
    /// Balance section.
    pub balance: BalanceReport,
    /// HQ positions, one entry per player slot.
    pub hq: Vec<HqEntry>,
    /// Whether the package is a map-mod (package inputs only).
    #[serde(rename = "mapMod", skip_serializing_if = "Option::is_none", default)]
    pub map_mod: Option<bool>,
    /// Modification-type flags (map-mods only).
    #[serde(rename = "modTypes", skip_serializing_if = "Option::is_none", default)]
    pub mod_types: Option<BTreeMap<String, bool>>,
    /// Loaded level-info format (package inputs only).
    #[serde(
        rename = "levelFormat",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub level_format: Option<String>,
    /// Loaded map-data format (package inputs only).
    #[serde(rename = "mapFormat", skip_serializing_if = "Option::is_none", default)]
    pub map_format: Option<String>,
    /// Whether the package uses the flat layout (package inputs only).
    #[serde(
        rename = "flatMapPackage",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub flat_map_package: Option<bool>,
}

impl MapStatsReport {
    /// Shape level details and raw statistics into the report structure.
    ///
    /// Deterministic and total: identical inputs produce byte-identical
    /// serialized output, and no input can make assembly fail.
    #[must_use]
    pub fn build(details: &LevelDetails, stats: &MapStats) -> Self {
        let author = details.author.clone().map(|name| AuthorInfo { name });
        let additional_authors = if details.additional_authors.is_empty() {
            None
        } else {
            Some(
                details
                    .additional_authors
                    .iter()
                    .map(|name| AuthorInfo { name: name.clone() })
                    .collect(),
            )
        };

        // One HQ entry per declared player slot. A slot with several
        // recorded HQs reports the last one (most recent wins).
        let hq = (0..details.players as usize)
            .map(|slot| HqEntry {
                position: stats.hq_history.get(slot).and_then(|h| h.last()).copied(),
            })
            .collect();

        Self {
            name: details.name.clone(),
            map_type: details.map_type.name().to_string(),
            players: details.players,
            tileset: details.tileset.name().to_string(),
            author,
            additional_authors,
            license: details.license.clone(),
            created: details.created.clone(),
            generator: details.generator.clone(),
            mapsize: MapSize {
                w: stats.map_width,
                h: stats.map_height,
            },
            scavenger: ScavengerCounts {
                units: stats.scavenger_units,
                structures: stats.scavenger_structures,
                factories: stats.scavenger_factories,
                resource_extractors: stats.scavenger_resource_extractors,
            },
            oil_wells: stats.oil_wells_total,
            player: PlayerCountsReport {
                units: stats.per_player.units,
                structures: stats.per_player.structures,
                resource_extractors: stats.per_player.resource_extractors,
                power_generators: stats.per_player.power_generators,
                reg_factories: stats.per_player.reg_factories,
                vtol_factories: stats.per_player.vtol_factories,
                cyborg_factories: stats.per_player.cyborg_factories,
                research_centers: stats.per_player.research_centers,
                defense_structures: stats.per_player.defense_structures,
            },
            balance: BalanceReport {
                start_equality: StartEqualityReport {
                    units: stats.balance.units,
                    structures: stats.balance.structures,
                    resource_extractors: stats.balance.resource_extractors,
                    power_generators: stats.balance.power_generators,
                    factories: stats.balance.factories,
                    reg_factories: stats.balance.reg_factories,
                    vtol_factories: stats.balance.vtol_factories,
                    cyborg_factories: stats.balance.cyborg_factories,
                    research_centers: stats.balance.research_centers,
                    defense_structures: stats.balance.defense_structures,
                },
            },
            hq,
            map_mod: None,
            mod_types: None,
            level_format: None,
            map_format: None,
            flat_map_package: None,
        }
    }

    /// Append package-level fields to a report.
    ///
    /// `modTypes` is emitted only for map-mods that name at least one
    /// modification type; the format identifiers only when known.
    #[must_use]
    pub fn with_package_info(mut self, package: &PackageInfo) -> Self {
        self.map_mod = Some(package.map_mod);
        if !package.mod_types.is_empty() {
            self.mod_types = Some(
                package
                    .mod_types
                    .iter()
                    .map(|name| (name.clone(), true))
                    .collect(),
            );
        }
        self.level_format = package.level_format.map(|f| f.name().to_string());
        self.map_format = package.map_format.map(|f| f.name().to_string());
        self.flat_map_package = Some(package.flat_map_package);
        self
    }

    /// Serialize the report as JSON with 4-space indentation.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures (none are reachable
    /// from a well-formed report).
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        let mut out = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        self.serialize(&mut serializer)?;
        // Serializer output is the serialization of UTF-8 strings.
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}
