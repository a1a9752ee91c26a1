//! Report-builder properties over the shared fixtures.

use mapsight_core::report::{AuthorInfo, MapSize, MapStatsReport};
use mapsight_core::stats::{LevelFormat, MapFormat, MapPosition, PackageInfo};
use mapsight_test_utils::fixtures;

#[test]
fn test_always_present_fields() {
    let report = MapStatsReport::build(&fixtures::level_details(), &fixtures::map_stats());

    assert_eq!(report.name, "Sample Valley");
    assert_eq!(report.map_type, "skirmish");
    assert_eq!(report.players, 2);
    assert_eq!(report.tileset, "arizona");
    assert_eq!(report.mapsize, MapSize { w: 64, h: 64 });
    assert_eq!(report.oil_wells, 12);
    assert_eq!(report.hq.len(), 2);
}

#[test]
fn test_conditional_fields_absent_from_output() {
    let mut details = fixtures::level_details();
    details.author = None;
    details.additional_authors.clear();
    details.license = None;
    details.created = None;
    details.generator = None;

    let report = MapStatsReport::build(&details, &fixtures::map_stats());
    let json = report.to_json_string().unwrap();

    for key in ["author", "additionalAuthors", "license", "created", "generator"] {
        assert!(!json.contains(key), "unexpected key {key} in output");
    }
    // No package info: package-only keys never appear.
    for key in ["mapMod", "modTypes", "levelFormat", "mapFormat", "flatMapPackage"] {
        assert!(!json.contains(key), "unexpected key {key} in output");
    }
}

#[test]
fn test_optional_metadata_is_emitted_when_present() {
    let report = MapStatsReport::build(&fixtures::level_details(), &fixtures::map_stats());
    assert_eq!(
        report.author,
        Some(AuthorInfo {
            name: "Sample Author".to_string()
        })
    );
    assert_eq!(report.license, Some("CC0-1.0".to_string()));
}

#[test]
fn test_hq_reports_last_recorded_position() {
    // Fixed policy, preserved as observed behavior: when a slot has
    // several recorded HQs the report takes the most recent, not the
    // first or any aggregate.
    let mut stats = fixtures::map_stats();
    stats.hq_history = vec![
        vec![MapPosition { x: 4, y: 4 }, MapPosition { x: 30, y: 31 }],
        vec![],
    ];

    let report = MapStatsReport::build(&fixtures::level_details(), &stats);
    assert_eq!(report.hq[0].position, Some(MapPosition { x: 30, y: 31 }));
    assert_eq!(report.hq[1].position, None);
}

#[test]
fn test_package_fields_appended() {
    let package = PackageInfo {
        map_mod: true,
        mod_types: vec!["scripts".to_string(), "stats".to_string()],
        level_format: Some(LevelFormat::Json),
        map_format: Some(MapFormat::JsonV2),
        flat_map_package: false,
    };
    let report = MapStatsReport::build(&fixtures::level_details(), &fixtures::map_stats())
        .with_package_info(&package);

    assert_eq!(report.map_mod, Some(true));
    assert_eq!(report.level_format.as_deref(), Some("json"));
    assert_eq!(report.map_format.as_deref(), Some("jsonv2"));
    assert_eq!(report.flat_map_package, Some(false));
    let mod_types = report.mod_types.unwrap();
    assert_eq!(mod_types.get("scripts"), Some(&true));
    assert_eq!(mod_types.get("stats"), Some(&true));
}

#[test]
fn test_key_order_is_stable() {
    let json = MapStatsReport::build(&fixtures::level_details(), &fixtures::map_stats())
        .to_json_string()
        .unwrap();

    let expected_order = [
        "\"name\"",
        "\"type\"",
        "\"players\"",
        "\"tileset\"",
        "\"author\"",
        "\"license\"",
        "\"mapsize\"",
        "\"scavenger\"",
        "\"oilWells\"",
        "\"player\"",
        "\"balance\"",
        "\"hq\"",
    ];
    let positions: Vec<usize> = expected_order
        .iter()
        .map(|key| json.find(key).unwrap_or_else(|| panic!("missing {key}")))
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "keys out of order in:\n{json}"
    );
}

#[test]
fn test_serialization_is_deterministic() {
    let details = fixtures::level_details();
    let stats = fixtures::map_stats();
    let a = MapStatsReport::build(&details, &stats)
        .to_json_string()
        .unwrap();
    let b = MapStatsReport::build(&details, &stats)
        .to_json_string()
        .unwrap();
    assert_eq!(a, b);
    assert!(a.contains("    \"name\""), "expected 4-space indentation");
}
