//! Tileset enumeration, terrain palettes, and the inference heuristic.
//!
//! Every map uses exactly one of three named tilesets. When level metadata
//! does not declare one, the tileset is guessed from the first three
//! entries of the map's raw terrain-type table. The guess never fails:
//! unrecognized signatures fall back to Arizona with a logged warning,
//! since a preview with a guessed palette is still useful.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// A named terrain palette/theme applied to a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tileset {
    /// Desert theme (the conservative default).
    Arizona,
    /// Ruined-city theme.
    Urban,
    /// Alpine theme.
    Rockies,
}

impl Tileset {
    /// Get the lowercase name used in reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Arizona => "arizona",
            Self::Urban => "urban",
            Self::Rockies => "rockies",
        }
    }

    /// Resolve the terrain palette for this tileset.
    ///
    /// The mapping is exhaustive by construction; every tileset has a
    /// palette and there is no fallback branch.
    #[must_use]
    pub const fn palette(&self) -> &'static TilesetPalette {
        match self {
            Self::Arizona => &ARIZONA_PALETTE,
            Self::Urban => &URBAN_PALETTE,
            Self::Rockies => &ROCKIES_PALETTE,
        }
    }
}

/// Terrain colors consumed by the preview rasterizer.
///
/// Low/high pairs bracket the height shading range for each surface kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilesetPalette {
    /// Cliff color at the lowest height.
    pub cliff_low: Rgba,
    /// Cliff color at the highest height.
    pub cliff_high: Rgba,
    /// Water color.
    pub water: Rgba,
    /// Road color at the lowest height.
    pub road_low: Rgba,
    /// Road color at the highest height.
    pub road_high: Rgba,
    /// Ground color at the lowest height.
    pub ground_low: Rgba,
    /// Ground color at the highest height.
    pub ground_high: Rgba,
}

/// Arizona terrain palette.
pub static ARIZONA_PALETTE: TilesetPalette = TilesetPalette {
    cliff_low: Rgba::rgb(0x68, 0x3C, 0x24),
    cliff_high: Rgba::rgb(0xE8, 0x84, 0x5C),
    water: Rgba::rgb(0x3F, 0x68, 0x9A),
    road_low: Rgba::rgb(0x24, 0x1F, 0x16),
    road_high: Rgba::rgb(0xB2, 0x9A, 0x66),
    ground_low: Rgba::rgb(0x24, 0x1F, 0x16),
    ground_high: Rgba::rgb(0xCC, 0xB2, 0x80),
};

/// Urban terrain palette.
pub static URBAN_PALETTE: TilesetPalette = TilesetPalette {
    cliff_low: Rgba::rgb(0x3C, 0x3C, 0x3C),
    cliff_high: Rgba::rgb(0x84, 0x84, 0x84),
    water: Rgba::rgb(0x3F, 0x68, 0x9A),
    road_low: Rgba::rgb(0x00, 0x00, 0x00),
    road_high: Rgba::rgb(0x24, 0x24, 0x24),
    ground_low: Rgba::rgb(0x1F, 0x1F, 0x1F),
    ground_high: Rgba::rgb(0xB2, 0xB2, 0xB2),
};

/// Rockies terrain palette.
pub static ROCKIES_PALETTE: TilesetPalette = TilesetPalette {
    cliff_low: Rgba::rgb(0x3C, 0x3C, 0x3C),
    cliff_high: Rgba::rgb(0xFF, 0xFF, 0xFF),
    water: Rgba::rgb(0x3F, 0x68, 0x9A),
    road_low: Rgba::rgb(0x24, 0x1F, 0x16),
    road_high: Rgba::rgb(0x3D, 0x21, 0x0A),
    ground_low: Rgba::rgb(0x00, 0x1C, 0x0E),
    ground_high: Rgba::rgb(0xFF, 0xFF, 0xFF),
};

/// Guess the tileset from a map's raw terrain-type table.
///
/// Only the first three codes participate. This is a heuristic, not a
/// validator: signatures that match no known tileset (and tables shorter
/// than three entries) default to [`Tileset::Arizona`] and emit a
/// warning through `tracing`.
#[must_use]
pub fn infer_tileset(terrain_types: &[u32]) -> Tileset {
    match terrain_types {
        [1, 0, 2, ..] => Tileset::Arizona,
        [2, 2, 2, ..] => Tileset::Urban,
        [0, 0, 2, ..] => Tileset::Rockies,
        [a, b, c, ..] => {
            tracing::warn!(
                signature = ?(a, b, c),
                "unknown terrain types signature, defaulting to arizona tileset"
            );
            Tileset::Arizona
        }
        _ => {
            tracing::warn!(
                entries = terrain_types.len(),
                "terrain type table too short to infer tileset, defaulting to arizona"
            );
            Tileset::Arizona
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_known_signatures() {
        assert_eq!(infer_tileset(&[1, 0, 2, 5, 7]), Tileset::Arizona);
        assert_eq!(infer_tileset(&[2, 2, 2]), Tileset::Urban);
        assert_eq!(infer_tileset(&[0, 0, 2, 0]), Tileset::Rockies);
    }

    #[test]
    fn test_infer_unrecognized_signature_defaults_to_arizona() {
        assert_eq!(infer_tileset(&[9, 9, 9]), Tileset::Arizona);
    }

    #[test]
    fn test_infer_short_table_defaults_to_arizona() {
        assert_eq!(infer_tileset(&[1, 0]), Tileset::Arizona);
        assert_eq!(infer_tileset(&[]), Tileset::Arizona);
    }

    #[test]
    fn test_every_tileset_has_a_palette() {
        for tileset in [Tileset::Arizona, Tileset::Urban, Tileset::Rockies] {
            // Water reads as water in every theme.
            assert_eq!(tileset.palette().water, Rgba::rgb(0x3F, 0x68, 0x9A));
        }
    }

    #[test]
    fn test_report_names() {
        assert_eq!(Tileset::Arizona.name(), "arizona");
        assert_eq!(Tileset::Urban.name(), "urban");
        assert_eq!(Tileset::Rockies.name(), "rockies");
    }
}
