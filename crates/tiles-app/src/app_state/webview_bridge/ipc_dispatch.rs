//! Handling of events queued by the webviews.

use tiles_common::Action;
use tiles_platform::{is_web_url, normalize_dom_key, open_in_browser, KeyCombo};
use tiles_webview::{IpcCommand, IpcMessage, PageLoadState, WebViewEvent, WebViewId};

use crate::app_state::core::WebTilesApp;

impl WebTilesApp {
    pub(in crate::app_state) fn handle_webview_event(&mut self, event: WebViewEvent) {
        match event {
            WebViewEvent::PageLoad { id, state, url } => {
                tracing::debug!(%id, ?state, url = %url, "Page load");
                if state == PageLoadState::Finished {
                    if let Some(handle) = self.webviews.as_mut().and_then(|r| r.get_mut(id)) {
                        handle.record_navigation(&url);
                    }
                }
            }
            WebViewEvent::IpcMessage { id, body } => self.handle_ipc_message(id, &body),
            WebViewEvent::NewWindowRequested { id, url } => {
                if !is_web_url(&url) {
                    tracing::debug!(%id, url = %url, "Ignoring new window request");
                    return;
                }
                tracing::info!(%id, url = %url, "Opening new window in browser");
                if let Err(e) = open_in_browser(&url) {
                    tracing::warn!(%id, error = %e, "Failed to open browser");
                }
            }
            WebViewEvent::Closed { id } => {
                tracing::debug!(%id, "WebView closed");
            }
        }
    }

    fn handle_ipc_message(&mut self, id: WebViewId, body: &str) {
        let Some(message) = IpcMessage::from_json(body) else {
            tracing::debug!(%id, "Ignoring malformed IPC message");
            return;
        };

        match message.command() {
            IpcCommand::Keybind(press) => {
                let key = normalize_dom_key(&press.code, &press.key);
                let combo = KeyCombo::from_parts(press.ctrl, press.alt, press.shift, press.meta, key);
                if let Some(action) = self.registry.lookup(&combo) {
                    self.dispatch(action);
                }
            }
            // Only the overlay may drive the menu and the prompt.
            command if id != WebViewId::Overlay => {
                tracing::warn!(%id, ?command, "Ignoring overlay command from tile");
            }
            IpcCommand::MenuSelect(action) => {
                self.close_overlay();
                self.dispatch(action);
            }
            IpcCommand::PromptSubmit(text) => self.finish_prompt(Some(&text)),
            IpcCommand::PromptCancel => self.finish_prompt(None),
            IpcCommand::CloseOverlay => self.dispatch(Action::CloseOverlay),
            IpcCommand::Unknown(kind) => {
                tracing::debug!(%id, kind = %kind, "Unknown IPC message kind");
            }
        }
    }
}
