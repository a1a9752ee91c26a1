//! Map bundle loading.
//!
//! A bundle is the JSON export the external map library produces for a
//! loaded map: level details when a level file was present, the raw
//! terrain-type table, computed statistics, package facts, and (for
//! previews) a coarse tile-class grid plus placed features. The tools
//! only deserialize it; the map library owns the actual map formats.

use std::path::Path;

use serde::{Deserialize, Serialize};

use mapsight_core::players::PlayerSlot;
use mapsight_core::stats::{LevelDetails, MapStats, PackageInfo};
use mapsight_core::tileset::{infer_tileset, Tileset};

use crate::error::Result;

/// Everything the map library exported for one map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapBundle {
    /// Level details, when a level file was present.
    #[serde(default)]
    pub level: Option<LevelDetails>,
    /// Raw terrain-type table, used for tileset inference.
    #[serde(default)]
    pub terrain_types: Vec<u32>,
    /// Computed statistics, when the export requested them.
    #[serde(default)]
    pub stats: Option<MapStats>,
    /// Package facts, when the map came from a package.
    #[serde(default)]
    pub package: Option<PackageInfo>,
    /// Tile-class grid for preview rendering.
    #[serde(default)]
    pub tiles: Option<TileGrid>,
    /// Placed features for preview rendering.
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl MapBundle {
    /// Load a bundle from a JSON file.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(serde_json::from_str(&text)?)
    }

    /// Resolve the map's tileset: the declared one when level details are
    /// present, otherwise inferred from the terrain-type table.
    #[must_use]
    pub fn resolve_tileset(&self) -> Tileset {
        match &self.level {
            Some(level) => level.tileset,
            None => infer_tileset(&self.terrain_types),
        }
    }
}

/// Coarse per-tile surface classes, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    /// Grid width in tiles.
    pub width: u32,
    /// Grid height in tiles.
    pub height: u32,
    /// One class per tile, `width * height` entries.
    pub classes: Vec<TileClass>,
}

impl TileGrid {
    /// Check that the class list matches the declared dimensions.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.classes.len() == self.width as usize * self.height as usize
    }

    /// Class at a coordinate, or `None` when out of bounds.
    #[must_use]
    pub fn class_at(&self, x: u32, y: u32) -> Option<TileClass> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.classes
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }
}

/// Surface class of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileClass {
    /// Open ground.
    Ground,
    /// Road surface.
    Road,
    /// Water.
    Water,
    /// Cliff face.
    Cliff,
}

/// A placed feature the preview draws on top of the terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feature {
    /// A player HQ.
    Hq {
        /// Tile coordinate.
        x: u32,
        /// Tile coordinate.
        y: u32,
        /// Owning slot.
        owner: PlayerSlot,
    },
    /// Any other structure.
    Structure {
        /// Tile coordinate.
        x: u32,
        /// Tile coordinate.
        y: u32,
        /// Owning slot.
        owner: PlayerSlot,
    },
    /// An oil resource.
    OilResource {
        /// Tile coordinate.
        x: u32,
        /// Tile coordinate.
        y: u32,
    },
    /// An oil barrel.
    OilBarrel {
        /// Tile coordinate.
        x: u32,
        /// Tile coordinate.
        y: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_minimal_json() {
        let bundle: MapBundle = serde_json::from_str(r#"{"terrain_types": [2, 2, 2]}"#).unwrap();
        assert!(bundle.level.is_none());
        assert_eq!(bundle.resolve_tileset(), Tileset::Urban);
    }

    #[test]
    fn test_declared_tileset_wins_over_inference() {
        let json = r#"{
            "level": {
                "name": "m",
                "map_type": "skirmish",
                "players": 2,
                "tileset": "rockies"
            },
            "terrain_types": [2, 2, 2]
        }"#;
        let bundle: MapBundle = serde_json::from_str(json).unwrap();
        assert_eq!(bundle.resolve_tileset(), Tileset::Rockies);
    }

    #[test]
    fn test_grid_consistency() {
        let grid = TileGrid {
            width: 2,
            height: 2,
            classes: vec![TileClass::Ground; 4],
        };
        assert!(grid.is_consistent());
        assert_eq!(grid.class_at(1, 1), Some(TileClass::Ground));
        assert_eq!(grid.class_at(2, 0), None);

        let truncated = TileGrid {
            width: 2,
            height: 2,
            classes: vec![TileClass::Ground; 3],
        };
        assert!(!truncated.is_consistent());
    }
}
