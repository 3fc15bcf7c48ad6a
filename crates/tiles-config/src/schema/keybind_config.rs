//! Keyboard shortcuts configuration types.
//!
//! Named `keybind_config` to avoid clash with the crate-level `keybinds` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts configuration.
///
/// Format: "Modifier+Key" where Modifier is one of: Cmd, Option, Control, Shift.
/// `Cmd` maps to Command on macOS and Ctrl elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindConfig {
    pub reload_all: String,
    pub reset_layout: String,
    pub toggle_four_tiles: String,
    pub toggle_lock: String,
    pub open_menu: String,
    pub close_overlay: String,
    pub quit: String,
    pub reload_tile_1: String,
    pub reload_tile_2: String,
    pub reload_tile_3: String,
    pub reload_tile_4: String,
    pub tile_url_1: String,
    pub tile_url_2: String,
    pub tile_url_3: String,
    pub tile_url_4: String,
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            reload_all: "Cmd+Shift+R".into(),
            reset_layout: "Cmd+Shift+E".into(),
            toggle_four_tiles: "Cmd+Shift+T".into(),
            toggle_lock: "Cmd+Shift+L".into(),
            open_menu: "F1".into(),
            close_overlay: "Escape".into(),
            quit: "Cmd+Q".into(),
            reload_tile_1: "Option+1".into(),
            reload_tile_2: "Option+2".into(),
            reload_tile_3: "Option+3".into(),
            reload_tile_4: "Option+4".into(),
            tile_url_1: "Cmd+1".into(),
            tile_url_2: "Cmd+2".into(),
            tile_url_3: "Cmd+3".into(),
            tile_url_4: "Cmd+4".into(),
        }
    }
}
