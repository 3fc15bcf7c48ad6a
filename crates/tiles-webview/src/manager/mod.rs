//! WebView lifecycle management.
//!
//! `WebViewManager` creates and tracks `wry::WebView` instances: one per
//! tile plus the overlay used for the menu and URL prompt.

use std::sync::{Arc, Mutex};

use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use registry::WebViewRegistry;
pub use types::{WebViewConfig, WebViewId};

/// Creates WebViews and collects their events.
pub struct WebViewManager {
    /// Event sink. Handlers push here; the event loop drains.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub(crate) fn push_event(&self, event: WebViewEvent) {
        handlers::push(&self.events, event);
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
