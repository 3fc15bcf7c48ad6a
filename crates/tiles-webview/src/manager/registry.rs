use std::collections::BTreeMap;

use tracing::debug;
use wry::raw_window_handle;

use crate::events::WebViewEvent;

use super::handle::WebViewHandle;
use super::types::{WebViewConfig, WebViewId};
use super::WebViewManager;

/// Owns every live WebView, keyed by id.
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: BTreeMap<WebViewId, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: BTreeMap::new(),
        }
    }

    /// Create a WebView and register it, replacing any previous one with
    /// the same id.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        id: WebViewId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(id, window, bounds, config)?;
        if self.handles.insert(id, handle).is_some() {
            debug!(%id, "Replaced existing WebView");
        }
        Ok(())
    }

    pub fn get(&self, id: WebViewId) -> Option<&WebViewHandle> {
        self.handles.get(&id)
    }

    pub fn get_mut(&mut self, id: WebViewId) -> Option<&mut WebViewHandle> {
        self.handles.get_mut(&id)
    }

    pub fn contains(&self, id: WebViewId) -> bool {
        self.handles.contains_key(&id)
    }

    pub fn destroy(&mut self, id: WebViewId) -> bool {
        if self.handles.remove(&id).is_some() {
            debug!(%id, "WebView destroyed");
            self.manager.push_event(WebViewEvent::Closed { id });
            true
        } else {
            false
        }
    }

    /// Ids of all live WebViews, tiles first in tile order.
    pub fn active_ids(&self) -> Vec<WebViewId> {
        self.handles.keys().copied().collect()
    }

    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Destroy all active WebViews. Used during graceful shutdown.
    pub fn destroy_all(&mut self) {
        for id in self.active_ids() {
            self.destroy(id);
        }
    }

    pub fn count(&self) -> usize {
        self.handles.len()
    }
}
