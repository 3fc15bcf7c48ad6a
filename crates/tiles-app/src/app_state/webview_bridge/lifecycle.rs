//! Tile webview lifecycle: create, configure, and keep bounds in sync.

use tiles_common::{Action, TileId};
use tiles_config::settings::keys;
use tiles_webview::content::placeholder_html;
use tiles_webview::{WebViewConfig, WebViewId, WebViewManager, WebViewRegistry};

use crate::app_state::core::WebTilesApp;

use super::bounds::tiling_rect_to_wry;

impl WebTilesApp {
    pub(in crate::app_state) fn initialize_webviews(&mut self) {
        self.webviews = Some(WebViewRegistry::new(WebViewManager::new()));
        tracing::debug!("WebView registry initialized");
    }

    /// Create webviews for every visible tile.
    pub(in crate::app_state) fn create_tile_webviews(&mut self) {
        for tile in self.layout.visible_tiles() {
            self.create_tile_webview(tile);
        }
    }

    /// Configuration for a tile: its stored URL, or the placeholder when
    /// none is stored, with its own profile directory.
    pub(in crate::app_state) fn tile_config(&self, tile: TileId) -> WebViewConfig {
        let stored = self
            .settings
            .get_string(&keys::tile_store(tile))
            .map(str::trim)
            .filter(|url| !url.is_empty());

        let mut config = match stored {
            Some(url) => WebViewConfig::with_url(url),
            None => {
                let shortcut = self.registry.keybind_for_action(&Action::SetTileUrl(tile));
                WebViewConfig::placeholder(placeholder_html(tile, shortcut.as_deref()))
            }
        };
        config.devtools |= self.config.webview.devtools;
        config.autoplay = self.config.webview.autoplay;
        config.user_agent = self.config.webview.user_agent.clone();

        match tiles_platform::profile_dir(tile) {
            Ok(dir) => config.data_directory(dir),
            Err(e) => {
                tracing::warn!(%tile, error = %e, "No profile directory, using shared storage");
                config
            }
        }
    }

    pub(in crate::app_state) fn create_tile_webview(&mut self, tile: TileId) {
        self.update_viewport();
        let config = self.tile_config(tile);
        let bounds = self
            .layout
            .compute_layout()
            .into_iter()
            .find(|(id, _)| *id == tile)
            .map(|(_, r)| tiling_rect_to_wry(&r))
            .unwrap_or_default();

        let (Some(window), Some(registry)) = (&self.window, &mut self.webviews) else {
            tracing::warn!(%tile, "Cannot create webview: no window");
            return;
        };

        let url = config.url.clone();
        match registry.create(WebViewId::Tile(tile), window.as_ref(), bounds, config) {
            Ok(()) => tracing::info!(%tile, url = url.as_deref().unwrap_or("placeholder"), "Tile created"),
            Err(e) => tracing::error!(%tile, error = %e, "Failed to create tile webview"),
        }
    }

    /// Refresh the layout viewport from the window size.
    pub(in crate::app_state) fn update_viewport(&mut self) {
        let viewport = self.viewport();
        self.layout.set_viewport(viewport);
    }

    /// Place every tile webview at its layout rect, hide tiles that are
    /// not in the layout, and stretch the overlay over the window.
    pub(in crate::app_state) fn sync_webview_bounds(&mut self) {
        self.update_viewport();
        let rects = self.layout.compute_layout();
        let viewport = self.layout.viewport();

        let Some(registry) = &mut self.webviews else {
            return;
        };

        for tile in TileId::all() {
            let Some(handle) = registry.get_mut(WebViewId::Tile(tile)) else {
                continue;
            };
            let result = match rects.iter().find(|(id, _)| *id == tile) {
                Some((_, rect)) => handle.set_bounds(tiling_rect_to_wry(rect)).and_then(|_| {
                    if handle.is_visible() {
                        Ok(())
                    } else {
                        handle.set_visible(true)
                    }
                }),
                None if handle.is_visible() => handle.set_visible(false),
                None => Ok(()),
            };
            if let Err(e) = result {
                tracing::warn!(%tile, error = %e, "Failed to update tile bounds");
            }
        }

        if let Some(overlay) = registry.get(WebViewId::Overlay) {
            if let Err(e) = overlay.set_bounds(tiling_rect_to_wry(&viewport)) {
                tracing::warn!(error = %e, "Failed to update overlay bounds");
            }
        }
    }
}
