//! `WebTilesApp` struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::keyboard::ModifiersState;
use winit::window::Window;

use tiles_common::Rect;
use tiles_config::settings::keys;
use tiles_config::{SettingsStore, TilesConfig};
use tiles_layout::{LayoutEngine, SplitterKey, TileLayout};
use tiles_platform::KeybindRegistry;
use tiles_webview::WebViewRegistry;

use super::menu::MenuModel;
use super::resize_drag::DragState;
use super::types::Overlay;

/// Top-level application state.
pub struct WebTilesApp {
    pub(super) config: TilesConfig,
    pub(super) registry: KeybindRegistry,
    pub(super) settings: SettingsStore,

    pub(super) window: Option<Arc<Window>>,
    pub(super) webviews: Option<WebViewRegistry>,
    pub(super) layout: TileLayout,
    pub(super) menu: MenuModel,
    pub(super) overlay: Option<Overlay>,

    pub(super) modifiers: ModifiersState,
    /// Last cursor position in logical pixels.
    pub(super) cursor_pos: (f64, f64),
    pub(super) drag: Option<DragState>,

    pub(super) last_poll: Instant,
    pub(super) should_exit: bool,
    /// Set once shutdown has flushed settings and destroyed webviews.
    pub(super) shut_down: bool,
}

impl WebTilesApp {
    /// Build the app from config and stored settings. The window and
    /// webviews are created later, in `resumed`.
    pub fn new(config: TilesConfig, registry: KeybindRegistry, settings: SettingsStore) -> Self {
        let show_four = settings.contains(keys::SHOW_FOUR_TILES);
        let engine = LayoutEngine {
            gap: config.layout.gap,
            min_tile_size: config.layout.min_tile_size as f64,
        };
        let mut layout = TileLayout::with_engine(engine, show_four);
        layout.set_locked(settings.get_bool(keys::LOCKSTEP) == Some(true));

        let mut app = Self {
            config,
            registry,
            settings,
            window: None,
            webviews: None,
            layout,
            menu: MenuModel::new(show_four),
            overlay: None,
            modifiers: ModifiersState::empty(),
            cursor_pos: (0.0, 0.0),
            drag: None,
            last_poll: Instant::now(),
            should_exit: false,
            shut_down: false,
        };
        for key in SplitterKey::all() {
            app.restore_splitter_sizes(key);
        }
        tracing::info!(
            show_four,
            locked = app.layout.is_locked(),
            "Layout restored"
        );
        app
    }

    /// Apply stored sizes to a visible splitter. Missing or mismatched
    /// sizes leave the splitter as it is.
    pub(super) fn restore_splitter_sizes(&mut self, key: SplitterKey) {
        let Some(sizes) = self.settings.get_sizes(key.as_str()) else {
            return;
        };
        if !self.layout.set_splitter_sizes(key, &sizes) {
            tracing::debug!(splitter = %key, ?sizes, "Stored splitter sizes not applied");
        }
    }

    pub(super) fn sync_settings(&mut self) {
        if let Err(e) = self.settings.sync() {
            tracing::warn!("Failed to save settings: {e}");
        }
    }

    /// Window content area in logical pixels. Without a window this is the
    /// layout's last known viewport.
    pub(super) fn viewport(&self) -> Rect {
        match &self.window {
            Some(w) => {
                let size = w.inner_size().to_logical::<f64>(w.scale_factor());
                Rect {
                    x: 0.0,
                    y: 0.0,
                    width: size.width,
                    height: size.height,
                }
            }
            None => self.layout.viewport(),
        }
    }
}

#[cfg(test)]
pub(super) mod test_support {
    use std::path::Path;

    use tiles_config::{SettingsStore, TilesConfig};
    use tiles_platform::KeybindRegistry;

    use super::WebTilesApp;

    /// App backed by a settings file at `path`, without a window.
    pub fn app_with_settings(path: &Path) -> WebTilesApp {
        let config = TilesConfig::default();
        let registry = KeybindRegistry::from_config(&config.keybinds);
        WebTilesApp::new(config, registry, SettingsStore::open(path))
    }
}
