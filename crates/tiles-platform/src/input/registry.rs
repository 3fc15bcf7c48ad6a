use std::collections::HashMap;

use tiles_common::{Action, TileId};
use tiles_config::schema::KeybindConfig;

use crate::keymap::{keybind_to_display, parse_keybind};

use super::key_combo::KeyCombo;

/// Maps key combinations to [`Action`]s.
pub struct KeybindRegistry {
    bindings: HashMap<KeyCombo, Action>,
}

impl KeybindRegistry {
    /// Build the registry from the config keybind section.
    ///
    /// Invalid keybind strings are logged as warnings and skipped.
    pub fn from_config(config: &KeybindConfig) -> Self {
        let mut mappings: Vec<(&str, Action)> = vec![
            (&config.reload_all, Action::ReloadAll),
            (&config.reset_layout, Action::ResetLayout),
            (&config.toggle_four_tiles, Action::ToggleFourTiles),
            (&config.toggle_lock, Action::ToggleLock),
            (&config.open_menu, Action::OpenMenu),
            (&config.close_overlay, Action::CloseOverlay),
            (&config.quit, Action::Quit),
        ];
        let reloads = [
            &config.reload_tile_1,
            &config.reload_tile_2,
            &config.reload_tile_3,
            &config.reload_tile_4,
        ];
        let urls = [
            &config.tile_url_1,
            &config.tile_url_2,
            &config.tile_url_3,
            &config.tile_url_4,
        ];
        for (tile, (reload, url)) in TileId::all().zip(reloads.into_iter().zip(urls)) {
            mappings.push((reload.as_str(), Action::ReloadTile(tile)));
            mappings.push((url.as_str(), Action::SetTileUrl(tile)));
        }

        let mut bindings = HashMap::new();
        for (binding_str, action) in mappings {
            match parse_keybind(binding_str) {
                Ok(kb) => {
                    bindings.insert(KeyCombo::from_keybind(&kb), action);
                }
                Err(e) => {
                    tracing::warn!("invalid keybind '{binding_str}': {e}");
                }
            }
        }

        Self { bindings }
    }

    pub fn lookup(&self, combo: &KeyCombo) -> Option<Action> {
        self.bindings.get(combo).copied()
    }

    /// Display string of the key bound to `action`, for the menu overlay.
    pub fn keybind_for_action(&self, action: &Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(combo, _)| keybind_to_display(&combo.to_keybind()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
