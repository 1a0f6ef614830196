use std::path::PathBuf;

use geomath_core::config::{ControlsConfig, OverlayConfig, PrepareConfig};
use geomath_core::error::GeomathError;

#[test]
fn test_defaults_match_hard_coded_behaviour() {
    let config = OverlayConfig::default();
    assert_eq!(config.assets_dir, None);
    assert_eq!(config.prepare.transparency_alpha, 2);
    assert_eq!(config.prepare.white_tolerance, 0);
    assert_eq!(config.prepare.contrast, 2.0);
    assert_eq!(config.prepare.brightness, 1.2);
    assert_eq!(config.controls.zoom_in_factor, 1.1);
    assert_eq!(config.controls.zoom_out_factor, 0.9);
    assert_eq!(config.controls.fine_rotation_deg, 1.0);
    assert_eq!(config.controls.drag_rotation_sensitivity, 0.2);
    assert_eq!(config.controls.composite_spacing, 20);
}

#[test]
fn test_toml_roundtrip() {
    let config = OverlayConfig {
        assets_dir: Some(PathBuf::from("/opt/geomathiques/assets")),
        prepare: PrepareConfig {
            white_tolerance: 8,
            ..PrepareConfig::default()
        },
        controls: ControlsConfig {
            drag_rotation_sensitivity: 0.5,
            ..ControlsConfig::default()
        },
    };
    let text = config.to_toml().unwrap();
    let parsed = OverlayConfig::from_toml(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let parsed = OverlayConfig::from_toml(
        r#"
        [prepare]
        white_tolerance = 10
        "#,
    )
    .unwrap();
    assert_eq!(parsed.prepare.white_tolerance, 10);
    assert_eq!(parsed.prepare.contrast, 2.0);
    assert_eq!(parsed.controls, ControlsConfig::default());
}

#[test]
fn test_empty_file_is_default() {
    assert_eq!(OverlayConfig::from_toml("").unwrap(), OverlayConfig::default());
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = OverlayConfig::from_toml("[prepare\ncontrast = ").unwrap_err();
    assert!(matches!(err, GeomathError::Config(_)));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = OverlayConfig::load_or_default(&dir.path().join("missing.toml")).unwrap();
    assert_eq!(config, OverlayConfig::default());
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("geomathiques.toml");
    std::fs::write(&path, "assets_dir = \"tools\"\n[controls]\nzoom_in_factor = 1.25\n").unwrap();

    let config = OverlayConfig::load(&path).unwrap();
    assert_eq!(config.assets_dir, Some(PathBuf::from("tools")));
    assert_eq!(config.controls.zoom_in_factor, 1.25);
}
