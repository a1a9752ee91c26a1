//! Draw-layer mask and its textual encoding.
//!
//! A preview is composed of three independently toggleable layers:
//! terrain, structures, and oil. The textual form is either the literal
//! `all` or a comma-separated subset of the layer names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PreviewError, Result};

/// Which visual layers a preview should draw.
///
/// The default is all layers enabled. The all-false mask is a valid
/// transient value but callers accepting end-user input should reject it
/// (see [`DrawLayerMask::is_empty`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawLayerMask {
    /// Draw terrain tiles.
    pub terrain: bool,
    /// Draw structures (including HQs).
    pub structures: bool,
    /// Draw oil resources and barrels.
    pub oil: bool,
}

impl Default for DrawLayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl DrawLayerMask {
    /// All layers enabled.
    pub const ALL: Self = Self {
        terrain: true,
        structures: true,
        oil: true,
    };

    /// No layers enabled.
    pub const NONE: Self = Self {
        terrain: false,
        structures: false,
        oil: false,
    };

    /// Check whether no layer is enabled.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.terrain && !self.structures && !self.oil
    }
}

impl FromStr for DrawLayerMask {
    type Err = PreviewError;

    /// Parse a layer list.
    ///
    /// `all` enables every layer. Otherwise the input is a comma-separated
    /// list of layer names; empty items between commas are skipped and
    /// duplicates are idempotent. Parsing is all-or-nothing: any
    /// unrecognized name fails the whole parse with
    /// [`PreviewError::UnknownDrawLayer`] and no partial mask escapes.
    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            return Ok(Self::ALL);
        }
        let mut mask = Self::NONE;
        for name in s.split(',') {
            match name {
                "" => {}
                "terrain" => mask.terrain = true,
                "structures" => mask.structures = true,
                "oil" => mask.oil = true,
                other => return Err(PreviewError::UnknownDrawLayer(other.to_string())),
            }
        }
        Ok(mask)
    }
}

impl fmt::Display for DrawLayerMask {
    /// Canonical text form: `all` when every layer is enabled, otherwise
    /// the comma-separated list of enabled layer names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::ALL {
            return f.write_str("all");
        }
        let mut names = Vec::with_capacity(3);
        if self.terrain {
            names.push("terrain");
        }
        if self.structures {
            names.push("structures");
        }
        if self.oil {
            names.push("oil");
        }
        f.write_str(&names.join(","))
    }
}
