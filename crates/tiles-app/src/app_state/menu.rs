//! Menu entries shown by the menu overlay.
//!
//! Entries for tile 4 are only created the first time the 4-tile layout
//! is shown. After that they are hidden and shown with the layout, and a
//! hidden entry's action is ignored wherever it comes from.

use tiles_common::{Action, TileId};
use tiles_platform::KeybindRegistry;
use tiles_webview::content::MenuItem;

const SECTION_ACTION: &str = "Action";
const SECTION_RELOAD: &str = "Reload";
const SECTION_TILES: &str = "Tiles";

/// Display order of the menu sections.
const SECTIONS: [&str; 3] = [SECTION_ACTION, SECTION_RELOAD, SECTION_TILES];

#[derive(Debug, Clone, PartialEq)]
struct MenuEntry {
    section: &'static str,
    action: Action,
    visible: bool,
}

impl MenuEntry {
    fn new(section: &'static str, action: Action) -> Self {
        Self {
            section,
            action,
            visible: true,
        }
    }
}

#[derive(Debug, Clone)]
pub(super) struct MenuModel {
    entries: Vec<MenuEntry>,
}

impl MenuModel {
    pub(super) fn new(show_four: bool) -> Self {
        let mut entries = vec![
            MenuEntry::new(SECTION_ACTION, Action::ReloadAll),
            MenuEntry::new(SECTION_ACTION, Action::ResetLayout),
            MenuEntry::new(SECTION_ACTION, Action::ToggleFourTiles),
            MenuEntry::new(SECTION_ACTION, Action::ToggleLock),
        ];
        for tile in [TileId::ONE, TileId::TWO, TileId::THREE] {
            entries.extend(tile_entries(tile));
        }
        let mut model = Self { entries };
        if show_four {
            model.show_tile_four();
        }
        model
    }

    /// Show the tile-4 entries, creating them on first use.
    pub(super) fn show_tile_four(&mut self) {
        if !self.has_tile_four() {
            self.entries.extend(tile_entries(TileId::FOUR));
            tracing::debug!("Tile 4 menu entries created");
            return;
        }
        self.set_tile_four_visible(true);
    }

    pub(super) fn hide_tile_four(&mut self) {
        self.set_tile_four_visible(false);
    }

    fn set_tile_four_visible(&mut self, visible: bool) {
        for entry in &mut self.entries {
            if entry.action.tile() == Some(TileId::FOUR) {
                entry.visible = visible;
            }
        }
    }

    pub(super) fn has_tile_four(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.action.tile() == Some(TileId::FOUR))
    }

    /// Whether `action` may run. Menu actions follow their entry's
    /// visibility; tile-4 actions are disabled until their entries exist.
    /// Actions outside the menu are always enabled.
    pub(super) fn is_enabled(&self, action: Action) -> bool {
        match self.entries.iter().find(|e| e.action == action) {
            Some(entry) => entry.visible,
            None => action.tile().is_none(),
        }
    }

    /// Visible entries in display order, with the bound shortcut of each.
    pub(super) fn items(&self, registry: &KeybindRegistry, locked: bool) -> Vec<MenuItem> {
        SECTIONS
            .iter()
            .flat_map(|section| {
                self.entries
                    .iter()
                    .filter(move |e| e.visible && e.section == *section)
            })
            .map(|entry| {
                let mut label = entry.action.label();
                if entry.action == Action::ToggleLock {
                    label.push_str(if locked { " (on)" } else { " (off)" });
                }
                MenuItem {
                    section: entry.section.to_string(),
                    label,
                    tip: entry.action.status_tip(),
                    shortcut: registry.keybind_for_action(&entry.action),
                    action: entry.action,
                }
            })
            .collect()
    }
}

fn tile_entries(tile: TileId) -> [MenuEntry; 2] {
    [
        MenuEntry::new(SECTION_RELOAD, Action::ReloadTile(tile)),
        MenuEntry::new(SECTION_TILES, Action::SetTileUrl(tile)),
    ]
}
