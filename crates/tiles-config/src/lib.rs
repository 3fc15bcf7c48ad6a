//! Web Tiles configuration and persisted settings.
//!
//! Two stores live here:
//! - `config.toml`: user-edited application configuration (window, layout,
//!   webview, keybinds, logging). All sections use serde defaults so
//!   partial configs work out of the box.
//! - `settings.json`: state the application writes on its own (tile URLs,
//!   splitter sizes, lock and 4-tile flags). Last write wins.

pub mod keybinds;
pub mod schema;
pub mod settings;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::TilesConfig;
pub use settings::SettingsStore;
pub use toml_writer::save_config_to_path;

use std::path::Path;

use tiles_common::ConfigError;

/// Load config from the platform default path, creating it if missing,
/// and validate the result.
pub fn load_config() -> Result<TilesConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate the result.
pub fn load_config_from(path: &Path) -> Result<TilesConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_from_missing_path_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[layout]\ngap = 99\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
