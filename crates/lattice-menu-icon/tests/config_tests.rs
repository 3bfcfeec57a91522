//! Integration tests for loading configuration files.

use std::time::Duration;

use lattice_menu_icon::animation::Easing;
use lattice_menu_icon::render::Color;
use lattice_menu_icon::{AnimatedMenuIcon, Dp, MenuIconConfig, MenuIconError};

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu_icon.toml");
    std::fs::write(
        &path,
        r##"
        menu_opened = true
        size_dp = 48.0
        density = 2.0
        foreground = "#FF0000"
        duration_ms = 200
        easing = "linear-out-slow-in"
        "##,
    )
    .unwrap();

    let config = MenuIconConfig::load(&path).unwrap();
    assert!(config.menu_opened);
    assert_eq!(config.size, Dp(48.0));
    assert_eq!(config.size_px(), 96.0);
    assert_eq!(config.foreground, Color::from_rgb8(255, 0, 0));
    assert_eq!(config.transition.duration, Duration::from_millis(200));
    assert_eq!(config.transition.easing, Easing::LinearOutSlowIn);

    let icon = AnimatedMenuIcon::new(config);
    assert!(icon.is_menu_opened());
    assert_eq!(icon.size_px(), 96.0);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "size_dp = 32.0\n").unwrap();

    let config = MenuIconConfig::load(file.path()).unwrap();
    let defaults = MenuIconConfig::default();
    assert_eq!(config.size, Dp(32.0));
    assert_eq!(config.foreground, defaults.foreground);
    assert_eq!(config.transition, defaults.transition);
    assert_eq!(config.density, defaults.density);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.toml");

    let err = MenuIconConfig::load(&path).unwrap_err();
    match &err {
        MenuIconError::Io { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(err.to_string().contains("does_not_exist.toml"));
}

#[test]
fn test_malformed_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "size_dp = \"large\"\n").unwrap();

    assert!(matches!(
        MenuIconConfig::load(file.path()),
        Err(MenuIconError::Config(_))
    ));
}
