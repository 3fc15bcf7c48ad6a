//! Tile operations: reloads, the 4-tile toggle, and lock mode.

use tiles_common::TileId;
use tiles_config::settings::keys;
use tiles_layout::SplitterKey;
use tiles_webview::WebViewId;

use super::core::WebTilesApp;

impl WebTilesApp {
    pub(super) fn reload_all(&mut self) {
        for tile in TileId::all() {
            self.reload_tile(tile);
        }
    }

    pub(super) fn reload_tile(&mut self, tile: TileId) {
        let Some(handle) = self
            .webviews
            .as_ref()
            .and_then(|r| r.get(WebViewId::Tile(tile)))
        else {
            return;
        };
        match handle.reload() {
            Ok(()) => tracing::debug!(%tile, "Tile reloaded"),
            Err(e) => tracing::warn!(%tile, error = %e, "Failed to reload tile"),
        }
    }

    /// Switch between the 3-tile and 4-tile layouts.
    ///
    /// The `show4tiles` key is the source of truth for the mode.
    pub(super) fn toggle_four_tiles(&mut self) {
        if self.settings.contains(keys::SHOW_FOUR_TILES) {
            self.settings.remove(keys::SHOW_FOUR_TILES);
            self.sync_settings();

            if let Some(sizes) = self.layout.remove_split3() {
                if !sizes.split3.is_empty() {
                    self.settings.set_sizes(keys::SPLIT3, &sizes.split3);
                }
                if !sizes.split2.is_empty() {
                    self.settings.set_sizes(keys::SPLIT2, &sizes.split2);
                }
                self.sync_settings();
            }
            self.menu.hide_tile_four();
            tracing::info!("Switched to 3 tiles");
        } else {
            self.settings.set_bool(keys::SHOW_FOUR_TILES, true);
            self.sync_settings();

            self.layout.add_split3();
            self.restore_splitter_sizes(SplitterKey::Split3);
            self.restore_splitter_sizes(SplitterKey::Split2);
            self.menu.show_tile_four();

            let tile_four = WebViewId::Tile(TileId::FOUR);
            if self.webviews.as_ref().is_some_and(|r| !r.contains(tile_four)) {
                self.create_tile_webview(TileId::FOUR);
            }
            tracing::info!("Switched to 4 tiles");
        }
        self.sync_webview_bounds();
    }

    pub(super) fn toggle_lock(&mut self) {
        let locked = !self.layout.is_locked();
        self.layout.set_locked(locked);
        self.settings.set_bool(keys::LOCKSTEP, locked);
        self.sync_settings();
        tracing::info!(locked, "Tile lock toggled");
    }

    pub(super) fn reset_layout(&mut self) {
        self.layout.reset_view();
        self.sync_webview_bounds();
    }
}
