//! Configuration schema types for Web Tiles.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod keybind_config;
mod layout;
mod logging;
mod webview;
mod window;

pub use keybind_config::*;
pub use layout::*;
pub use logging::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TilesConfig {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub webview: WebViewSettings,
    pub keybinds: KeybindConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: TilesConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.title, "web tiles");
        assert_eq!(config.layout.gap, 6);
        assert_eq!(config.keybinds.open_menu, "F1");
        assert_eq!(config.logging.level, "web_tiles=info,tiles=info");
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: TilesConfig = toml::from_str(
            r#"
[window]
width = 1600

[keybinds]
reload_all = "F5"
"#,
        )
        .unwrap();
        assert_eq!(config.window.width, 1600);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.keybinds.reload_all, "F5");
        assert_eq!(config.keybinds.toggle_lock, "Cmd+Shift+L");
    }
}
