use std::sync::Arc;

use tracing::debug;
use wry::{raw_window_handle, WebContext, WebViewBuilder};

use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::{WebViewConfig, WebViewId};
use super::WebViewManager;

impl WebViewManager {
    /// Create a new WebView as a child of the given window.
    ///
    /// When `config.data_directory` is set the WebView gets its own
    /// `WebContext`, so cookies and storage persist per tile and are not
    /// shared with other tiles.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        id: WebViewId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut context = config
            .data_directory
            .clone()
            .map(|dir| WebContext::new(Some(dir)));
        let mut builder = match context.as_mut() {
            Some(ctx) => WebViewBuilder::with_web_context(ctx),
            None => WebViewBuilder::new(),
        };

        builder = builder
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_autoplay(config.autoplay)
            .with_focused(false)
            .with_initialization_script(IPC_INIT_SCRIPT);

        for script in &config.init_scripts {
            builder = builder.with_initialization_script(script);
        }

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), id);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), id);
        builder = Self::attach_navigation_handler(builder, id);
        builder = Self::attach_new_window_handler(builder, Arc::clone(&events), id);

        let initial_url;
        let mut placeholder = false;
        if let Some(url) = &config.url {
            builder = builder.with_url(url);
            initial_url = url.clone();
        } else if let Some(html) = &config.html {
            builder = builder.with_html(html);
            initial_url = "about:blank".to_string();
            placeholder = config.placeholder;
        } else {
            builder = builder.with_html("<html><body></body></html>");
            initial_url = "about:blank".to_string();
        }

        let webview = builder.build_as_child(window)?;

        if let WebViewId::Tile(_) = id {
            #[cfg(target_os = "linux")]
            crate::permissions::linux::install(&webview, id);
            #[cfg(target_os = "windows")]
            crate::permissions::windows::install(&webview, id);
        }

        debug!(%id, url = %initial_url, placeholder, "WebView created");

        Ok(WebViewHandle {
            webview,
            _context: context,
            id,
            current_url: initial_url,
            placeholder,
            visible: true,
        })
    }
}
