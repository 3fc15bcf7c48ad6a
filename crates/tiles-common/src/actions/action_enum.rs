use serde::{Deserialize, Serialize};

use crate::types::TileId;

/// Every user-triggerable action in the application.
///
/// Keybinds and the menu overlay both resolve to an `Action`.
/// The app state dispatcher matches on this enum to route to subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Action menu --
    ReloadAll,
    ResetLayout,
    ToggleFourTiles,
    ToggleLock,
    ReloadTile(TileId),

    // -- Tiles menu --
    SetTileUrl(TileId),

    // -- Overlay --
    OpenMenu,
    CloseOverlay,

    // -- Window --
    Quit,

    // -- Noop --
    None,
}

impl Action {
    /// Text shown for this action in the menu overlay.
    pub fn label(&self) -> String {
        match self {
            Action::ReloadAll => "Reload all".into(),
            Action::ResetLayout => "Reset Layout".into(),
            Action::ToggleFourTiles => "Toggle 4 tiles".into(),
            Action::ToggleLock => "Tile lock".into(),
            Action::ReloadTile(tile) => tile.label(),
            Action::SetTileUrl(tile) => format!("{} url", tile.label()),
            Action::OpenMenu => "Menu".into(),
            Action::CloseOverlay => "Close".into(),
            Action::Quit => "Quit".into(),
            Action::None => String::new(),
        }
    }

    /// One-line description shown next to the menu entry.
    pub fn status_tip(&self) -> String {
        match self {
            Action::ReloadAll => "force web page reload of all tiles".into(),
            Action::ResetLayout => "Reset layout view back to defaults".into(),
            Action::ToggleFourTiles => "Toggle 4 tile layout".into(),
            Action::ToggleLock => "Lock tiles so they move together".into(),
            Action::ReloadTile(tile) => format!("Reload tile {}", tile.get()),
            Action::SetTileUrl(tile) => format!("set url for tile {}", tile.get()),
            Action::OpenMenu => "Show the application menu".into(),
            Action::CloseOverlay => "Close the open overlay".into(),
            Action::Quit => "Save layout and quit".into(),
            Action::None => String::new(),
        }
    }

    /// The tile this action targets, if any.
    pub fn tile(&self) -> Option<TileId> {
        match self {
            Action::ReloadTile(tile) | Action::SetTileUrl(tile) => Some(*tile),
            _ => None,
        }
    }
}
