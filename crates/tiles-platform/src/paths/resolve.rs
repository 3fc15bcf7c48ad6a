use std::path::PathBuf;

use tiles_common::{PlatformError, TileId};
use tiles_config::toml_loader::APP_DIR;

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/web-tiles`
/// - Linux: `$XDG_CONFIG_HOME/web-tiles` (defaults to `~/.config/web-tiles`)
/// - Windows: `%APPDATA%\web-tiles`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_DIR))
}

/// Returns the platform-specific data directory.
///
/// - macOS: `~/Library/Application Support/web-tiles`
/// - Linux: `$XDG_DATA_HOME/web-tiles` (defaults to `~/.local/share/web-tiles`)
/// - Windows: `%APPDATA%\web-tiles`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_DIR))
}

/// Located at `data_dir()/settings.json`.
pub fn settings_file() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("settings.json"))
}

/// Parent of all per-tile browser profiles.
pub fn profiles_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("profiles"))
}

/// Cookie and storage directory for one tile, named after its store key.
pub fn profile_dir(tile: TileId) -> Result<PathBuf, PlatformError> {
    Ok(profiles_dir()?.join(tile.store_key()))
}

/// Located at `data_dir()/logs`.
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// Located at `log_dir()/crash-reports`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}
