use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::{WebViewId, WebViewManager};

pub(crate) fn push(events: &Mutex<Vec<WebViewEvent>>, event: WebViewEvent) {
    match events.lock() {
        Ok(mut evts) => evts.push(event),
        Err(poisoned) => poisoned.into_inner().push(event),
    }
}

/// Schemes an overlay may never navigate to; it only shows generated pages.
const OVERLAY_BLOCKED_SCHEMES: &[&str] = &["http://", "https://", "file://"];

/// Tiles may go anywhere; overlays stay on their generated content.
pub fn is_navigation_allowed(id: WebViewId, url: &str) -> bool {
    match id {
        WebViewId::Tile(_) => true,
        WebViewId::Overlay => {
            let lower = url.to_ascii_lowercase();
            !OVERLAY_BLOCKED_SCHEMES.iter().any(|s| lower.starts_with(s))
        }
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        id: WebViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(%id, body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(%id, body_len = body.len(), "IPC message from JS");
            push(&events, WebViewEvent::IpcMessage { id, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        id: WebViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%id, ?state, url = %url, "page load");
            push(&events, WebViewEvent::PageLoad { id, state, url });
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        id: WebViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(id, &url) {
                warn!(%id, url = %url, "navigation blocked");
                return false;
            }
            true
        })
    }

    /// `window.open` and `target="_blank"` links never open inside a tile;
    /// the request is queued so the app can hand it to the system browser.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        id: WebViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            debug!(%id, url = %url, "new window requested");
            push(&events, WebViewEvent::NewWindowRequested { id, url });
            false
        })
    }
}
