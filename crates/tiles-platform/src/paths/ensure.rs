use std::fs;

use tiles_common::{PlatformError, TileId};

use super::resolve::{config_dir, crash_report_dir, data_dir, profile_dir};

/// Creates the config, data, profile and crash report directories.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    let mut dirs = vec![config_dir()?, data_dir()?, crash_report_dir()?];
    for tile in TileId::all() {
        dirs.push(profile_dir(tile)?);
    }
    for dir in dirs {
        fs::create_dir_all(&dir)
            .map_err(|e| PlatformError::PathError(format!("{}: {e}", dir.display())))?;
    }
    Ok(())
}
