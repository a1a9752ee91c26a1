//! Preview color scheme assembly.
//!
//! A [`PreviewColorScheme`] is the complete color configuration the
//! rasterizer consumes: fixed marker colors, the tileset's terrain
//! palette, the player color strategy, and the draw-layer mask. It is
//! built once per preview and not mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::layers::DrawLayerMask;
use crate::players::{PlayerColorMode, PlayerColors, DEFAULT_SCAVENGER_COLOR};
use crate::tileset::{Tileset, TilesetPalette};

/// HQ marker color.
pub const HQ_COLOR: Rgba = Rgba::rgb(255, 0, 255);

/// Oil resource marker color.
pub const OIL_RESOURCE_COLOR: Rgba = Rgba::rgb(255, 255, 0);

/// Oil barrel marker color.
pub const OIL_BARREL_COLOR: Rgba = Rgba::rgb(128, 192, 0);

/// Complete color configuration for one preview render.
///
/// Marker colors are constants of the builder; only the tileset, the
/// player-color strategy, the scavenger color, and the layer mask are
/// caller-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewColorScheme {
    /// HQ marker color.
    pub hq: Rgba,
    /// Oil resource marker color.
    pub oil_resource: Rgba,
    /// Oil barrel marker color.
    pub oil_barrel: Rgba,
    /// Tileset whose terrain palette the renderer draws with.
    pub tileset: Tileset,
    /// Player color assignment strategy.
    pub player_colors: PlayerColors,
    /// Which layers to draw.
    pub layers: DrawLayerMask,
}

impl PreviewColorScheme {
    /// Build a scheme from the caller-configurable inputs.
    #[must_use]
    pub const fn new(
        tileset: Tileset,
        mode: PlayerColorMode,
        scavenger_color: Rgba,
        layers: DrawLayerMask,
    ) -> Self {
        Self {
            hq: HQ_COLOR,
            oil_resource: OIL_RESOURCE_COLOR,
            oil_barrel: OIL_BARREL_COLOR,
            tileset,
            player_colors: PlayerColors::new(mode, scavenger_color),
            layers,
        }
    }

    /// Build a default scheme for a tileset: simple player colors, the
    /// default scavenger color, all layers drawn.
    #[must_use]
    pub const fn for_tileset(tileset: Tileset) -> Self {
        Self::new(
            tileset,
            PlayerColorMode::Simple,
            DEFAULT_SCAVENGER_COLOR,
            DrawLayerMask::ALL,
        )
    }

    /// Set the player color strategy, keeping the current scavenger color.
    #[must_use]
    pub fn with_player_colors(mut self, mode: PlayerColorMode) -> Self {
        self.player_colors = PlayerColors::new(mode, self.scavenger_color());
        self
    }

    /// Set the scavenger color, keeping the current strategy.
    #[must_use]
    pub fn with_scavenger_color(mut self, color: Rgba) -> Self {
        self.player_colors = match self.player_colors {
            PlayerColors::Simple { .. } => PlayerColors::Simple { scavengers: color },
            PlayerColors::Distinct { .. } => PlayerColors::Distinct { scavengers: color },
        };
        self
    }

    /// Set the draw-layer mask.
    #[must_use]
    pub const fn with_layers(mut self, layers: DrawLayerMask) -> Self {
        self.layers = layers;
        self
    }

    /// The configured scavenger color.
    #[must_use]
    pub const fn scavenger_color(&self) -> Rgba {
        match self.player_colors {
            PlayerColors::Simple { scavengers } | PlayerColors::Distinct { scavengers } => {
                scavengers
            }
        }
    }

    /// The terrain palette resolved from the tileset.
    #[must_use]
    pub const fn terrain(&self) -> &'static TilesetPalette {
        self.tileset.palette()
    }
}
