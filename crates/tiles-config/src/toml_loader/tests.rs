//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_web_tiles_config.toml"));
    assert!(matches!(
        result.unwrap_err(),
        tiles_common::ConfigError::ParseError(_)
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[window]
title = "dashboards"

[layout]
gap = 4
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "dashboards");
    assert_eq!(config.layout.gap, 4);
    // Defaults preserved
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.layout.min_tile_size, 50);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    assert!(matches!(
        load_from_path(&path).unwrap_err(),
        tiles_common::ConfigError::ParseError(_)
    ));
}

#[test]
fn default_template_parses_to_defaults() {
    let config: crate::TilesConfig = toml::from_str(&template::default_config_toml()).unwrap();
    assert_eq!(config.window.title, "web tiles");
    assert_eq!(config.keybinds.open_menu, "F1");
}

#[test]
fn create_default_config_writes_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    create_default_config(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[keybinds]"));
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.gap, 6);
}

#[test]
fn default_config_path_ends_with_app_dir() {
    let path = default_config_path().unwrap();
    assert_eq!(path.file_name().unwrap(), "config.toml");
    assert!(path.parent().unwrap().ends_with(APP_DIR));
}

#[test]
fn load_from_path_leaves_range_checks_to_caller() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[layout]\ngap = 99\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.gap, 99);
    assert!(crate::validation::validate(&config).is_err());
}
