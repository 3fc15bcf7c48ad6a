//! Keybind validation utilities.

use crate::schema::KeybindConfig;
use std::collections::HashMap;
use tiles_common::ConfigError;

/// Returns all keybinds as `(name, binding)` pairs.
pub fn all_keybinds(config: &KeybindConfig) -> Vec<(&str, &str)> {
    vec![
        ("reload_all", &config.reload_all),
        ("reset_layout", &config.reset_layout),
        ("toggle_four_tiles", &config.toggle_four_tiles),
        ("toggle_lock", &config.toggle_lock),
        ("open_menu", &config.open_menu),
        ("close_overlay", &config.close_overlay),
        ("quit", &config.quit),
        ("reload_tile_1", &config.reload_tile_1),
        ("reload_tile_2", &config.reload_tile_2),
        ("reload_tile_3", &config.reload_tile_3),
        ("reload_tile_4", &config.reload_tile_4),
        ("tile_url_1", &config.tile_url_1),
        ("tile_url_2", &config.tile_url_2),
        ("tile_url_3", &config.tile_url_3),
        ("tile_url_4", &config.tile_url_4),
    ]
}

/// Validate that every keybind is set and no two share a key combination.
pub fn validate_keybinds(config: &KeybindConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for (name, binding) in &binds {
        if binding.trim().is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "keybind '{name}' is empty"
            )));
        }
        if let Some(existing_name) = seen.get(binding) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(binding, name);
    }

    Ok(())
}
