use serde::{Deserialize, Serialize};

/// Options applied to every tile webview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    /// Enable the web inspector (always on in debug builds).
    pub devtools: bool,
    /// Override the engine's user agent string.
    pub user_agent: Option<String>,
    /// Allow media to start playing without a user gesture.
    pub autoplay: bool,
}

impl Default for WebViewSettings {
    fn default() -> Self {
        Self {
            devtools: cfg!(debug_assertions),
            user_agent: None,
            autoplay: true,
        }
    }
}
