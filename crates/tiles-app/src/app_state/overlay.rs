//! The overlay webview that hosts the menu and the URL prompt.
//!
//! One overlay webview covers the whole window while open and is hidden
//! otherwise. It is created on first use.

use tiles_webview::content::{menu_html, prompt_html};
use tiles_webview::{WebViewConfig, WebViewId};

use super::core::WebTilesApp;
use super::types::Overlay;
use super::webview_bridge::tiling_rect_to_wry;

impl WebTilesApp {
    /// Open the menu, or close it if it is already open.
    pub(super) fn toggle_menu(&mut self) {
        if self.overlay == Some(Overlay::Menu) {
            self.close_overlay();
        } else {
            self.overlay = Some(Overlay::Menu);
            self.show_overlay();
        }
    }

    /// Render the current overlay state into the overlay webview.
    pub(super) fn show_overlay(&mut self) {
        let html = match &self.overlay {
            Some(Overlay::Menu) => {
                menu_html(&self.menu.items(&self.registry, self.layout.is_locked()))
            }
            Some(Overlay::Prompt { tile, initial }) => prompt_html(*tile, initial),
            None => return,
        };
        let bounds = tiling_rect_to_wry(&self.viewport());
        let devtools = self.config.webview.devtools;

        let (Some(window), Some(registry)) = (&self.window, &mut self.webviews) else {
            return;
        };

        if let Some(handle) = registry.get_mut(WebViewId::Overlay) {
            let shown = handle
                .load_html(&html)
                .and_then(|_| handle.set_bounds(bounds))
                .and_then(|_| handle.set_visible(true))
                .and_then(|_| handle.focus());
            if let Err(e) = shown {
                tracing::warn!(error = %e, "Failed to show overlay");
            }
            return;
        }

        let config = WebViewConfig {
            transparent: true,
            devtools,
            ..WebViewConfig::with_html(html)
        };
        match registry.create(WebViewId::Overlay, window.as_ref(), bounds, config) {
            Ok(()) => {
                tracing::debug!("Overlay webview created");
                if let Some(Err(e)) = registry.get(WebViewId::Overlay).map(|h| h.focus()) {
                    tracing::debug!(error = %e, "Failed to focus overlay");
                }
            }
            Err(e) => tracing::error!(error = %e, "Failed to create overlay webview"),
        }
    }

    /// Hide the overlay and give keyboard focus back to the window.
    pub(super) fn close_overlay(&mut self) {
        if self.overlay.take().is_none() {
            return;
        }
        let Some(handle) = self
            .webviews
            .as_mut()
            .and_then(|r| r.get_mut(WebViewId::Overlay))
        else {
            return;
        };
        if let Err(e) = handle.set_visible(false).and_then(|_| handle.focus_parent()) {
            tracing::warn!(error = %e, "Failed to hide overlay");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::core::test_support::app_with_settings;

    #[test]
    fn menu_toggles_without_window() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_settings(&dir.path().join("settings.json"));

        app.toggle_menu();
        assert_eq!(app.overlay, Some(Overlay::Menu));
        app.toggle_menu();
        assert!(app.overlay.is_none());
    }

    #[test]
    fn closing_without_overlay_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_settings(&dir.path().join("settings.json"));
        app.close_overlay();
        assert!(app.overlay.is_none());
    }
}
