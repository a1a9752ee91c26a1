//! The renderer seam exercised through an external implementation.

use mapsight_core::render::PreviewRenderer;
use mapsight_core::scheme::PreviewColorScheme;
use mapsight_core::tileset::Tileset;
use mapsight_test_utils::fixtures::StubRenderer;

#[test]
fn test_renderer_seam_accepts_any_implementation() {
    let scheme = PreviewColorScheme::for_tileset(Tileset::Arizona);
    let image = StubRenderer.render(&scheme).unwrap();
    assert_eq!(image.get_pixel(0, 0), Some(scheme.hq));
}
