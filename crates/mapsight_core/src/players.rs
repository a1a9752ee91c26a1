//! Player color assignment strategies.
//!
//! A preview colors map objects by owner. Two strategies ship: `Simple`
//! (one color for every player, one for scavengers) and `Distinct` (a
//! fixed 16-slot palette). The strategy is chosen once at scheme
//! construction; it is a closed sum, not open-ended dispatch.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// An owner slot on the map: a numbered player or the scavenger faction.
///
/// Scavengers are a real variant rather than a magic index so the
/// sentinel can never collide with a player number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    /// A player by slot index.
    Player(u8),
    /// The scavenger/neutral faction.
    Scavengers,
}

/// Which player-color strategy to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColorMode {
    /// One color for all players, one for scavengers.
    #[default]
    Simple,
    /// A distinct palette color per player slot.
    Distinct,
}

/// Color every player's objects receive under the `Simple` strategy.
pub const SIMPLE_PLAYER_COLOR: Rgba = Rgba::new(0, 255, 2, 255);

/// Default scavenger color (maroon), shared by both strategies.
pub const DEFAULT_SCAVENGER_COLOR: Rgba = Rgba::rgb(128, 0, 0);

/// Fixed palette for the `Distinct` strategy, indexed by player slot.
///
/// These match the in-game player colors, not the in-game *order* (which
/// is randomized per match anyway). Slot 2 is a dark grey rather than
/// black so it stays visible against dark terrain.
pub const DISTINCT_PLAYER_PALETTE: [Rgba; 16] = [
    Rgba::rgb(0, 255, 0),     // green
    Rgba::rgb(255, 192, 40),  // orange
    Rgba::rgb(55, 55, 55),    // black (rendered dark grey)
    Rgba::rgb(255, 0, 0),     // red
    Rgba::rgb(20, 20, 255),   // blue
    Rgba::rgb(255, 0, 192),   // pink
    Rgba::rgb(0, 255, 255),   // cyan
    Rgba::rgb(255, 255, 0),   // yellow
    Rgba::rgb(144, 0, 255),   // purple
    Rgba::rgb(255, 255, 255), // grey
    Rgba::rgb(200, 255, 255), // white
    Rgba::rgb(128, 128, 255), // bright blue
    Rgba::rgb(128, 255, 128), // neon green
    Rgba::rgb(128, 0, 0),     // infrared
    Rgba::rgb(64, 0, 128),    // ultraviolet
    Rgba::rgb(128, 128, 0),   // brown
];

/// Player color assignment strategy, selected at scheme construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerColors {
    /// One fixed color for every player; configurable scavenger color.
    Simple {
        /// Color for scavenger-owned objects.
        scavengers: Rgba,
    },
    /// Distinct per-slot palette; configurable scavenger color.
    Distinct {
        /// Color for scavenger-owned objects.
        scavengers: Rgba,
    },
}

impl Default for PlayerColors {
    fn default() -> Self {
        Self::new(PlayerColorMode::Simple, DEFAULT_SCAVENGER_COLOR)
    }
}

impl PlayerColors {
    /// Create a strategy from a mode and a scavenger color.
    ///
    /// The scavenger color is plumbed identically into both variants.
    #[must_use]
    pub const fn new(mode: PlayerColorMode, scavengers: Rgba) -> Self {
        match mode {
            PlayerColorMode::Simple => Self::Simple { scavengers },
            PlayerColorMode::Distinct => Self::Distinct { scavengers },
        }
    }

    /// Resolve the color for an owner slot.
    ///
    /// Under `Distinct`, a player index at or beyond the palette length
    /// returns opaque black: an out-of-defined-range slot is signaled
    /// visually rather than failing a render.
    #[must_use]
    pub fn color_for(&self, slot: PlayerSlot) -> Rgba {
        match (self, slot) {
            (Self::Simple { scavengers } | Self::Distinct { scavengers }, PlayerSlot::Scavengers) => {
                *scavengers
            }
            (Self::Simple { .. }, PlayerSlot::Player(_)) => SIMPLE_PLAYER_COLOR,
            (Self::Distinct { .. }, PlayerSlot::Player(index)) => DISTINCT_PLAYER_PALETTE
                .get(usize::from(index))
                .copied()
                .unwrap_or(Rgba::BLACK),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_simple_uses_one_color_for_all_players() {
        let colors = PlayerColors::new(PlayerColorMode::Simple, DEFAULT_SCAVENGER_COLOR);
        for index in 0..16 {
            assert_eq!(colors.color_for(PlayerSlot::Player(index)), SIMPLE_PLAYER_COLOR);
        }
    }

    #[test]
    fn test_distinct_palette_is_unique_and_deterministic() {
        let colors = PlayerColors::new(PlayerColorMode::Distinct, DEFAULT_SCAVENGER_COLOR);
        let mut seen = HashSet::new();
        for index in 0..16 {
            let color = colors.color_for(PlayerSlot::Player(index));
            assert_eq!(color, colors.color_for(PlayerSlot::Player(index)));
            assert!(seen.insert(color), "palette color for slot {index} repeats");
        }
    }

    #[test]
    fn test_distinct_out_of_range_is_opaque_black() {
        let colors = PlayerColors::new(PlayerColorMode::Distinct, DEFAULT_SCAVENGER_COLOR);
        assert_eq!(colors.color_for(PlayerSlot::Player(16)), Rgba::BLACK);
        assert_eq!(colors.color_for(PlayerSlot::Player(255)), Rgba::BLACK);
    }

    #[test]
    fn test_scavenger_color_is_honored_by_both_variants() {
        let scav = Rgba::rgb(128, 0, 0);
        for mode in [PlayerColorMode::Simple, PlayerColorMode::Distinct] {
            let colors = PlayerColors::new(mode, scav);
            assert_eq!(colors.color_for(PlayerSlot::Scavengers), scav);
        }
    }
}
