use wry::{WebContext, WebView};

use crate::content::is_generated_url;

use super::WebViewId;

/// Handle to a managed WebView instance. Provides methods to interact
/// with the underlying WebView (navigate, evaluate JS, resize, etc.).
pub struct WebViewHandle {
    /// Declared before `_context` so the WebView is dropped first.
    pub(super) webview: WebView,
    /// Per-tile profile; must outlive the WebView.
    pub(super) _context: Option<WebContext>,
    pub(super) id: WebViewId,
    /// Current URL (best-effort tracking).
    pub(super) current_url: String,
    /// True while the tile shows its placeholder page.
    pub(super) placeholder: bool,
    pub(super) visible: bool,
}

impl WebViewHandle {
    pub fn id(&self) -> WebViewId {
        self.id
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Whether the tile shows its placeholder instead of a chosen page.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.webview.load_url(url)?;
        self.current_url = url.to_string();
        self.placeholder = false;
        Ok(())
    }

    /// Load raw HTML content.
    pub fn load_html(&mut self, html: &str) -> Result<(), wry::Error> {
        self.webview.load_html(html)?;
        self.current_url = "about:blank".to_string();
        Ok(())
    }

    /// Reload the current page through the engine, bypassing page scripts.
    ///
    /// A placeholder is generated content with nothing to refetch, so it is
    /// left as is.
    pub fn reload(&self) -> Result<(), wry::Error> {
        if self.placeholder {
            return Ok(());
        }
        self.webview.reload()
    }

    /// Track the URL reported by a page load.
    ///
    /// Generated pages (`about:blank`, `data:`) do not replace a real URL.
    pub fn record_navigation(&mut self, url: &str) {
        if is_generated_url(url) {
            return;
        }
        self.current_url = url.to_string();
        self.placeholder = false;
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn set_visible(&mut self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)?;
        self.visible = visible;
        Ok(())
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    /// Return focus to the parent window.
    pub fn focus_parent(&self) -> Result<(), wry::Error> {
        self.webview.focus_parent()
    }
}
