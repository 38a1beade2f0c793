//! End-to-end generation scenarios across the full pipeline.

use hotelgen_build::{
    BoardBuilder, BoardParams, ComplexBuilder, GardenLayoutEngine, HotelBuilder, PresetRegistry,
    RoadShape,
};
use hotelgen_core::{BuildingParams, BuildingPlacement, ComplexParams, Role, Settings};
use hotelgen_styles::{GardenTheme, StyleRegistry};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn scenario_params(printer_type: &str) -> BuildingParams {
    BuildingParams {
        width: 30.0,
        depth: 25.0,
        num_floors: 4,
        floor_height: 5.0,
        printer_type: printer_type.to_string(),
        seed: 42,
        ..BuildingParams::for_style("modern")
    }
}

#[test]
fn test_hotel_build_modern_fdm() {
    let builder = HotelBuilder::new(Settings::default());
    let result = builder.build(&scenario_params("fdm")).unwrap();

    assert!(result.is_watertight);
    assert!(result.triangle_count > 0);
    // Base slab dips below Z=0
    assert!(result.bounding_box.0.z < 0.0);
}

#[test]
fn test_hotel_build_modern_resin() {
    let builder = HotelBuilder::new(Settings::default());
    let result = builder.build(&scenario_params("resin")).unwrap();

    assert!(result.is_watertight);
    assert!(result.triangle_count > 0);
    assert!(result.bounding_box.0.z < 0.0);
}

#[test]
fn test_complex_build_three_modern_buildings() {
    let builder = ComplexBuilder::new(Settings::default());
    let params = ComplexParams {
        num_buildings: 3,
        seed: 1,
        ..ComplexParams::for_style("modern")
    };
    let result = builder.build(&params).unwrap();

    assert_eq!(result.buildings.len(), 3);
    assert!(result.buildings.iter().all(|b| b.is_watertight));
    assert!(!result.combined.is_empty());
    assert!(result.combined.volume() > 0.0);
}

#[test]
fn test_every_style_builds_under_both_profiles() {
    let builder = HotelBuilder::new(Settings::default());
    let styles = StyleRegistry::new();
    for name in styles.names() {
        for printer_type in ["fdm", "resin"] {
            let params = BuildingParams {
                printer_type: printer_type.to_string(),
                ..BuildingParams::for_style(name)
            };
            let result = builder
                .build(&params)
                .unwrap_or_else(|e| panic!("{name}/{printer_type}: {e}"));
            assert!(result.is_watertight, "{name}/{printer_type}");
            assert!(result.solid.volume() > 0.0, "{name}/{printer_type}");
        }
    }
}

#[test]
fn test_preset_coverage_both_printers() {
    let builder = ComplexBuilder::new(Settings::default());
    let presets = PresetRegistry::new();
    for preset_name in presets.names() {
        let expected = presets.get(preset_name).unwrap().num_buildings as usize;
        for printer_type in ["fdm", "resin"] {
            let params = ComplexParams {
                preset: Some(preset_name.to_string()),
                printer_type: printer_type.to_string(),
                ..ComplexParams::for_style("modern")
            };
            let result = builder
                .build(&params)
                .unwrap_or_else(|e| panic!("preset {preset_name}/{printer_type}: {e}"));
            assert_eq!(
                result.buildings.len(),
                expected,
                "preset {preset_name}/{printer_type}"
            );
            assert!(
                result.buildings.iter().all(|b| b.is_watertight),
                "preset {preset_name}/{printer_type}"
            );
        }
    }
}

#[test]
fn test_complex_determinism_by_volume() {
    let builder = ComplexBuilder::new(Settings::default());
    let params = ComplexParams {
        num_buildings: 2,
        seed: 77,
        ..ComplexParams::for_style("townhouse")
    };
    let a = builder.build(&params).unwrap();
    let b = builder.build(&params).unwrap();
    approx::assert_relative_eq!(a.combined.volume(), b.combined.volume(), epsilon = 1e-9);
}

#[test]
fn test_garden_layout_reproducible() {
    let engine = GardenLayoutEngine;
    let placements = vec![BuildingPlacement {
        x: 0.0,
        y: 45.0,
        rotation: 0.0,
        width: 30.0,
        depth: 25.0,
        num_floors: 4,
        floor_height: 5.0,
        role: Role::Main,
    }];
    let theme = GardenTheme::default();

    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    let a = engine.compute_layout(100.0, 80.0, 8.0, &placements, &theme, &mut rng_a);
    let b = engine.compute_layout(100.0, 80.0, 8.0, &placements, &theme, &mut rng_b);

    assert_eq!(a.len(), b.len());
    for (fa, fb) in a.iter().zip(&b) {
        assert_eq!(fa.feature.kind_name(), fb.feature.kind_name());
        assert!((fa.x - fb.x).abs() < 1e-12);
        assert!((fa.y - fb.y).abs() < 1e-12);
        assert!((fa.rotation - fb.rotation).abs() < 1e-12);
    }
}

#[test]
fn test_board_two_property_linear() {
    let builder = BoardBuilder::new(Settings::default());
    let params = BoardParams {
        road_shape: RoadShape::Linear,
        num_properties: 2,
        ..BoardParams::default()
    };
    let result = builder.build(&params).unwrap();

    assert_eq!(result.properties.len(), 2);
    for property in &result.properties {
        assert!(property.plate.volume() > 0.0);
    }
    assert!(result.frame.piece_count() > 0);
}
