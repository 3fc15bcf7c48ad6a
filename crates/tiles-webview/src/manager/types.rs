use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tiles_common::TileId;

/// Which WebView an event or handle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WebViewId {
    Tile(TileId),
    /// The menu or URL prompt drawn above the tiles.
    Overlay,
}

impl WebViewId {
    pub fn tile(self) -> Option<TileId> {
        match self {
            WebViewId::Tile(tile) => Some(tile),
            WebViewId::Overlay => None,
        }
    }
}

impl fmt::Display for WebViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebViewId::Tile(tile) => write!(f, "{tile}"),
            WebViewId::Overlay => f.write_str("overlay"),
        }
    }
}

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (takes precedence over `html`).
    pub url: Option<String>,
    /// Initial HTML content to render.
    pub html: Option<String>,
    /// Whether `html` is the tile placeholder rather than real content.
    pub placeholder: bool,
    pub transparent: bool,
    pub devtools: bool,
    pub user_agent: Option<String>,
    pub autoplay: bool,
    /// Directory for cookies and storage. `None` uses the engine default.
    pub data_directory: Option<PathBuf>,
    /// Extra scripts run before page scripts, after the IPC bridge.
    pub init_scripts: Vec<String>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            placeholder: false,
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: None,
            autoplay: true,
            data_directory: None,
            init_scripts: Vec::new(),
        }
    }
}

impl WebViewConfig {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }

    /// A tile showing its placeholder page.
    pub fn placeholder(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            placeholder: true,
            ..Default::default()
        }
    }

    pub fn data_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_directory = Some(dir.into());
        self
    }
}
