//! Action dispatch: routes an `Action` to the code that performs it.

use tiles_common::Action;

use super::core::WebTilesApp;
use super::types::Overlay;

impl WebTilesApp {
    /// Perform `action`. Actions of hidden menu entries are ignored.
    pub(super) fn dispatch(&mut self, action: Action) {
        if !self.menu.is_enabled(action) {
            tracing::debug!(?action, "Ignoring disabled action");
            return;
        }
        tracing::debug!(?action, "Dispatching action");

        match action {
            Action::ReloadAll => self.reload_all(),
            Action::ResetLayout => self.reset_layout(),
            Action::ToggleFourTiles => self.toggle_four_tiles(),
            Action::ToggleLock => self.toggle_lock(),
            Action::ReloadTile(tile) => self.reload_tile(tile),
            Action::SetTileUrl(tile) => self.open_url_prompt(tile),
            Action::OpenMenu => self.toggle_menu(),
            Action::CloseOverlay => {
                if matches!(self.overlay, Some(Overlay::Prompt { .. })) {
                    self.finish_prompt(None);
                } else {
                    self.close_overlay();
                }
            }
            Action::Quit => {
                self.shutdown();
                self.should_exit = true;
            }
            Action::None => {}
        }
    }
}
