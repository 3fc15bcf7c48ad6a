//! The tile URL prompt: opening it, and applying what the user typed.

use tiles_common::TileId;
use tiles_config::settings::keys;
use tiles_webview::WebViewId;

use super::core::WebTilesApp;
use super::types::Overlay;

/// What to do with the text of a closed URL prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum PromptOutcome {
    /// Load this URL into the tile and persist it.
    Load(String),
    /// Cancelled, empty, or the same as before.
    Unchanged,
    /// Text that is not a usable URL.
    Invalid(String),
}

/// Decide what a prompt result means for a tile whose prompt was
/// prefilled with `initial`. `None` means the prompt was cancelled.
pub(super) fn evaluate_url_input(initial: &str, input: Option<&str>) -> PromptOutcome {
    let Some(text) = input.map(str::trim) else {
        return PromptOutcome::Unchanged;
    };
    if text.is_empty() || text == initial.trim() {
        return PromptOutcome::Unchanged;
    }
    match url::Url::parse(text) {
        Ok(url) if url.scheme() == "javascript" => PromptOutcome::Invalid(text.to_string()),
        Ok(_) => PromptOutcome::Load(text.to_string()),
        Err(_) => PromptOutcome::Invalid(text.to_string()),
    }
}

impl WebTilesApp {
    /// Open the URL prompt for `tile`, prefilled with its current URL
    /// unless the tile shows its placeholder.
    pub(super) fn open_url_prompt(&mut self, tile: TileId) {
        let initial = self
            .webviews
            .as_ref()
            .and_then(|r| r.get(WebViewId::Tile(tile)))
            .filter(|h| !h.is_placeholder())
            .map(|h| h.current_url().to_string())
            .or_else(|| {
                self.settings
                    .get_string(&keys::tile_store(tile))
                    .map(str::to_string)
            })
            .unwrap_or_default();
        self.overlay = Some(Overlay::Prompt { tile, initial });
        self.show_overlay();
    }

    /// Close the prompt and apply `input` to its tile.
    pub(super) fn finish_prompt(&mut self, input: Option<&str>) {
        let Some(Overlay::Prompt { tile, initial }) = self.overlay.clone() else {
            return;
        };
        self.close_overlay();

        match evaluate_url_input(&initial, input) {
            PromptOutcome::Load(url) => self.set_tile_url(tile, &url),
            PromptOutcome::Unchanged => {
                tracing::debug!(%tile, "Tile URL unchanged");
            }
            PromptOutcome::Invalid(text) => {
                tracing::warn!(%tile, input = %text, "Ignoring invalid tile URL");
            }
        }
    }

    /// Load `url` into `tile` and persist it under `tile-store{n}`.
    pub(super) fn set_tile_url(&mut self, tile: TileId, url: &str) {
        if let Some(handle) = self
            .webviews
            .as_mut()
            .and_then(|r| r.get_mut(WebViewId::Tile(tile)))
        {
            if let Err(e) = handle.load_url(url) {
                tracing::error!(%tile, url, error = %e, "Failed to load tile URL");
                return;
            }
        }
        self.settings.set_string(&keys::tile_store(tile), url);
        self.sync_settings();
        tracing::info!(%tile, url, "Tile URL set");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::core::test_support::app_with_settings;
    use tiles_config::SettingsStore;

    #[test]
    fn cancel_empty_and_unchanged_leave_tile() {
        let initial = "https://example.com/";
        assert_eq!(evaluate_url_input(initial, None), PromptOutcome::Unchanged);
        assert_eq!(evaluate_url_input(initial, Some("")), PromptOutcome::Unchanged);
        assert_eq!(evaluate_url_input(initial, Some("   ")), PromptOutcome::Unchanged);
        assert_eq!(
            evaluate_url_input(initial, Some(" https://example.com/ ")),
            PromptOutcome::Unchanged
        );
    }

    #[test]
    fn unparsable_text_is_invalid() {
        assert_eq!(
            evaluate_url_input("", Some("example.com")),
            PromptOutcome::Invalid("example.com".into())
        );
        assert_eq!(
            evaluate_url_input("", Some("not a url")),
            PromptOutcome::Invalid("not a url".into())
        );
        assert_eq!(
            evaluate_url_input("", Some("javascript:alert(1)")),
            PromptOutcome::Invalid("javascript:alert(1)".into())
        );
    }

    #[test]
    fn new_url_is_trimmed_and_loaded() {
        assert_eq!(
            evaluate_url_input("https://old.example", Some("  https://new.example/page  ")),
            PromptOutcome::Load("https://new.example/page".into())
        );
        assert_eq!(
            evaluate_url_input("", Some("file:///tmp/index.html")),
            PromptOutcome::Load("file:///tmp/index.html".into())
        );
    }

    #[test]
    fn finishing_prompt_persists_tile_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut app = app_with_settings(&path);

        app.open_url_prompt(TileId::TWO);
        assert_eq!(
            app.overlay,
            Some(Overlay::Prompt {
                tile: TileId::TWO,
                initial: String::new()
            })
        );

        app.finish_prompt(Some("https://example.org"));
        assert!(app.overlay.is_none());

        let stored = SettingsStore::open(&path);
        assert_eq!(stored.get_string("tile-store2"), Some("https://example.org"));
    }

    #[test]
    fn cancelled_prompt_stores_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut app = app_with_settings(&path);

        app.open_url_prompt(TileId::ONE);
        app.finish_prompt(None);
        assert!(app.overlay.is_none());
        assert!(!SettingsStore::open(&path).contains("tile-store1"));
    }

    #[test]
    fn prompt_prefills_stored_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"tile-store3": "https://stored.example"}"#).unwrap();
        let mut app = app_with_settings(&path);

        app.open_url_prompt(TileId::THREE);
        assert_eq!(
            app.overlay,
            Some(Overlay::Prompt {
                tile: TileId::THREE,
                initial: "https://stored.example".into()
            })
        );
    }
}
