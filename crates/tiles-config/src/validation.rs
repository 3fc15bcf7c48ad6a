//! Full configuration validation.
//!
//! Validates numeric ranges and keybinds, collecting every error.

use crate::keybinds;
use crate::schema::TilesConfig;
use tiles_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TilesConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_keybinds(&config.keybinds) {
        errors.push(e.to_string());
    }

    validate_range(&mut errors, "window.width", config.window.width, 200, 10_000);
    validate_range(&mut errors, "window.height", config.window.height, 200, 10_000);

    validate_range(&mut errors, "layout.gap", config.layout.gap, 0, 20);
    validate_range(
        &mut errors,
        "layout.min_tile_size",
        config.layout.min_tile_size,
        10,
        400,
    );

    if config.logging.level.trim().is_empty() {
        errors.push("logging.level must not be empty".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
