//! Bundle-backed preview rendering.
//!
//! [`BundleRenderer`] is a paint-by-class implementation of the core's
//! renderer seam: one pixel per tile, colored from the scheme's terrain
//! palette, with features drawn on top in player and marker colors. The
//! map library's real rasterizer (heights, shading, footprints) remains
//! the production collaborator; this keeps the shipped binary working on
//! bundle exports.

use mapsight_core::error::{PreviewError, Result};
use mapsight_core::render::{PreviewImage, PreviewRenderer};
use mapsight_core::scheme::PreviewColorScheme;

use crate::bundle::{Feature, MapBundle, TileClass, TileGrid};

/// Renders a preview from a bundle's tile grid and feature list.
#[derive(Debug, Clone, Copy)]
pub struct BundleRenderer<'a> {
    grid: &'a TileGrid,
    features: &'a [Feature],
}

impl<'a> BundleRenderer<'a> {
    /// Create a renderer over a bundle's tile grid.
    ///
    /// # Errors
    ///
    /// Returns [`PreviewError::RenderingFailed`] when the bundle has no
    /// tile grid or the grid's class list does not match its dimensions.
    pub fn for_bundle(bundle: &'a MapBundle) -> Result<Self> {
        let grid = bundle.tiles.as_ref().ok_or_else(|| {
            PreviewError::RenderingFailed("bundle carries no tile grid".to_string())
        })?;
        if !grid.is_consistent() {
            return Err(PreviewError::RenderingFailed(format!(
                "tile grid size mismatch: {}x{} declared, {} classes",
                grid.width,
                grid.height,
                grid.classes.len()
            )));
        }
        Ok(Self {
            grid,
            features: &bundle.features,
        })
    }
}

impl PreviewRenderer for BundleRenderer<'_> {
    fn render(&self, scheme: &PreviewColorScheme) -> Result<PreviewImage> {
        let mut image = PreviewImage::new(self.grid.width, self.grid.height);
        let palette = scheme.terrain();

        if scheme.layers.terrain {
            for y in 0..self.grid.height {
                for x in 0..self.grid.width {
                    let Some(class) = self.grid.class_at(x, y) else {
                        continue;
                    };
                    let color = match class {
                        TileClass::Ground => palette.ground_high,
                        TileClass::Road => palette.road_high,
                        TileClass::Water => palette.water,
                        TileClass::Cliff => palette.cliff_high,
                    };
                    image.put_pixel(x, y, color);
                }
            }
        }

        // Oil below structures so an extractor covers its well.
        if scheme.layers.oil {
            for feature in self.features {
                match *feature {
                    Feature::OilResource { x, y } => image.put_pixel(x, y, scheme.oil_resource),
                    Feature::OilBarrel { x, y } => image.put_pixel(x, y, scheme.oil_barrel),
                    Feature::Hq { .. } | Feature::Structure { .. } => {}
                }
            }
        }

        if scheme.layers.structures {
            for feature in self.features {
                match *feature {
                    Feature::Structure { x, y, owner } => {
                        image.put_pixel(x, y, scheme.player_colors.color_for(owner));
                    }
                    Feature::Hq { x, y, .. } => image.put_pixel(x, y, scheme.hq),
                    Feature::OilResource { .. } | Feature::OilBarrel { .. } => {}
                }
            }
        }

        Ok(image)
    }
}
