//! Test fixtures and helpers.
//!
//! Pre-built level metadata, statistics, and a stub renderer for
//! consistent testing across crates.

use mapsight_core::error::Result;
use mapsight_core::render::{PreviewImage, PreviewRenderer};
use mapsight_core::scheme::PreviewColorScheme;
use mapsight_core::stats::{
    LevelDetails, MapPosition, MapStats, MapType, MinMax, PerPlayerCounts, StartEquality,
};
use mapsight_core::tileset::Tileset;

/// A 2-player skirmish level-details fixture.
///
/// Carries an author and a license but no created-date or generator, so
/// both presence branches of the report builder get exercised.
#[must_use]
pub fn level_details() -> LevelDetails {
    LevelDetails {
        name: "Sample Valley".to_string(),
        map_type: MapType::Skirmish,
        players: 2,
        tileset: Tileset::Arizona,
        author: Some("Sample Author".to_string()),
        additional_authors: Vec::new(),
        license: Some("CC0-1.0".to_string()),
        created: None,
        generator: None,
    }
}

/// Raw statistics matching [`level_details`]: a balanced 64x64 two-player
/// map with one HQ per slot.
#[must_use]
pub fn map_stats() -> MapStats {
    let per_metric = MinMax { min: 4, max: 4 };
    MapStats {
        map_width: 64,
        map_height: 64,
        scavenger_units: 6,
        scavenger_structures: 3,
        scavenger_factories: 1,
        scavenger_resource_extractors: 0,
        oil_wells_total: 12,
        per_player: PerPlayerCounts {
            units: MinMax { min: 10, max: 10 },
            structures: per_metric,
            resource_extractors: MinMax { min: 2, max: 2 },
            power_generators: MinMax { min: 1, max: 1 },
            reg_factories: MinMax { min: 1, max: 1 },
            vtol_factories: MinMax { min: 0, max: 0 },
            cyborg_factories: MinMax { min: 0, max: 0 },
            research_centers: MinMax { min: 1, max: 1 },
            defense_structures: MinMax { min: 2, max: 2 },
        },
        balance: StartEquality {
            units: true,
            structures: true,
            resource_extractors: true,
            power_generators: true,
            factories: true,
            reg_factories: true,
            vtol_factories: true,
            cyborg_factories: true,
            research_centers: true,
            defense_structures: true,
        },
        hq_history: vec![
            vec![MapPosition { x: 8, y: 8 }],
            vec![MapPosition { x: 56, y: 56 }],
        ],
    }
}

/// A renderer that paints a single pixel with the scheme's HQ color.
///
/// Enough to drive the preview pipeline end to end without a real
/// rasterizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubRenderer;

impl PreviewRenderer for StubRenderer {
    fn render(&self, scheme: &PreviewColorScheme) -> Result<PreviewImage> {
        let mut image = PreviewImage::new(1, 1);
        image.put_pixel(0, 0, scheme.hq);
        Ok(image)
    }
}
