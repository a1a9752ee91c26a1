//! Command implementations shared by the CLI entry point and tests.

use std::path::Path;

use mapsight_core::color::Rgba;
use mapsight_core::layers::DrawLayerMask;
use mapsight_core::players::PlayerColorMode;
use mapsight_core::render::PreviewRenderer;
use mapsight_core::report::MapStatsReport;
use mapsight_core::scheme::PreviewColorScheme;

use crate::bundle::MapBundle;
use crate::error::{Result, ToolsError};
use crate::png::write_png;
use crate::render::BundleRenderer;

/// Options for the `preview` command, already parsed and validated by the
/// argument layer.
#[derive(Debug, Clone, Copy)]
pub struct PreviewOptions {
    /// Player color strategy.
    pub mode: PlayerColorMode,
    /// Scavenger color.
    pub scavenger_color: Rgba,
    /// Draw-layer mask.
    pub layers: DrawLayerMask,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            mode: PlayerColorMode::Simple,
            scavenger_color: mapsight_core::players::DEFAULT_SCAVENGER_COLOR,
            layers: DrawLayerMask::ALL,
        }
    }
}

/// Generate a preview PNG from a bundle file.
///
/// The tileset comes from the bundle's level details when present,
/// otherwise from terrain-type inference. An all-false layer mask is
/// rejected before any rendering work.
pub fn run_preview(input: &Path, output: &Path, options: PreviewOptions) -> Result<()> {
    if options.layers.is_empty() {
        return Err(ToolsError::EmptyLayerMask);
    }

    let bundle = MapBundle::load(input)?;
    let tileset = bundle.resolve_tileset();
    let scheme = PreviewColorScheme::new(
        tileset,
        options.mode,
        options.scavenger_color,
        options.layers,
    );

    let renderer = BundleRenderer::for_bundle(&bundle)?;
    let image = renderer.render(&scheme)?;
    write_png(output, &image)?;

    tracing::info!(
        output = %output.display(),
        width = image.width,
        height = image.height,
        tileset = tileset.name(),
        "generated map preview"
    );
    Ok(())
}

/// Build the statistics report for a bundle file.
///
/// Package-only fields are appended when the bundle carries package
/// facts. Returns the 4-space-indented JSON text.
pub fn build_info(input: &Path) -> Result<String> {
    let bundle = MapBundle::load(input)?;
    let level = bundle
        .level
        .as_ref()
        .ok_or(ToolsError::MissingBundleData("level details"))?;
    let stats = bundle
        .stats
        .as_ref()
        .ok_or(ToolsError::MissingBundleData("map statistics"))?;

    let mut report = MapStatsReport::build(level, stats);
    if let Some(package) = &bundle.package {
        report = report.with_package_info(package);
    }
    Ok(report.to_json_string()?)
}

/// Run the `info` command: write the report to a file or stdout.
pub fn run_info(input: &Path, output: Option<&Path>) -> Result<()> {
    let json = build_info(input)?;
    match output {
        Some(path) => {
            std::fs::write(path, &json)?;
            tracing::info!(output = %path.display(), "wrote map info JSON");
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use mapsight_test_utils::fixtures;

    use crate::bundle::{TileClass, TileGrid};

    use super::*;

    fn write_bundle(name: &str, bundle: &MapBundle) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, serde_json::to_string(bundle).unwrap()).unwrap();
        path
    }

    fn stats_bundle() -> MapBundle {
        MapBundle {
            level: Some(fixtures::level_details()),
            terrain_types: vec![1, 0, 2],
            stats: Some(fixtures::map_stats()),
            package: None,
            tiles: None,
            features: Vec::new(),
        }
    }

    #[test]
    fn test_info_from_bundle_file() {
        let path = write_bundle("mapsight_info_test.json", &stats_bundle());
        let json = build_info(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(json.contains("\"name\": \"Sample Valley\""));
        assert!(json.contains("\"oilWells\": 12"));
    }

    #[test]
    fn test_info_requires_stats() {
        let mut bundle = stats_bundle();
        bundle.stats = None;
        let path = write_bundle("mapsight_info_missing_stats.json", &bundle);
        let err = build_info(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, ToolsError::MissingBundleData("map statistics")));
    }

    #[test]
    fn test_preview_rejects_empty_mask_before_io() {
        let err = run_preview(
            Path::new("does-not-exist.json"),
            Path::new("unused.png"),
            PreviewOptions {
                layers: DrawLayerMask::NONE,
                ..PreviewOptions::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, ToolsError::EmptyLayerMask));
    }

    #[test]
    fn test_preview_end_to_end() {
        let mut bundle = stats_bundle();
        bundle.tiles = Some(TileGrid {
            width: 4,
            height: 4,
            classes: vec![TileClass::Ground; 16],
        });
        let input = write_bundle("mapsight_preview_test.json", &bundle);
        let output = std::env::temp_dir().join("mapsight_preview_test.png");

        run_preview(&input, &output, PreviewOptions::default()).unwrap();
        let bytes = std::fs::read(&output).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);

        std::fs::remove_file(&input).ok();
        std::fs::remove_file(&output).ok();
    }
}
