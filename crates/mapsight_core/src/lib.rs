//! # Mapsight Core
//!
//! Preview color-scheme composition and statistics reporting for
//! strategy-game maps.
//!
//! This crate contains **only** pure transforms over in-memory data:
//! - No rendering (the rasterizer is an external collaborator behind
//!   [`render::PreviewRenderer`])
//! - No IO
//! - No shared mutable state across invocations
//!
//! This separation enables:
//! - Deterministic, byte-identical report output
//! - Safe concurrent use across maps without locking
//! - Headless testing of every color/report decision
//!
//! ## Crate Structure
//!
//! - [`color`] - RGBA value type and hex color codec
//! - [`layers`] - draw-layer mask and its textual encoding
//! - [`tileset`] - tileset enumeration, terrain palettes, inference heuristic
//! - [`players`] - player color assignment strategies
//! - [`scheme`] - preview color scheme assembly
//! - [`stats`] - level metadata and raw statistics value objects
//! - [`report`] - stable statistics report structure
//! - [`render`] - pixel buffer and renderer collaborator seam

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod color;
pub mod error;
pub mod layers;
pub mod players;
pub mod render;
pub mod report;
pub mod scheme;
pub mod stats;
pub mod tileset;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{PreviewError, Result};
    pub use crate::layers::DrawLayerMask;
    pub use crate::players::{PlayerColorMode, PlayerColors, PlayerSlot};
    pub use crate::render::{PreviewImage, PreviewRenderer};
    pub use crate::report::MapStatsReport;
    pub use crate::scheme::PreviewColorScheme;
    pub use crate::stats::{LevelDetails, MapStats, MapType, PackageInfo};
    pub use crate::tileset::{infer_tileset, Tileset, TilesetPalette};
}
