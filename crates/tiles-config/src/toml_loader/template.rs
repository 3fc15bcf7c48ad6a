//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Web Tiles Configuration
# Only override what you want to change -- missing fields use defaults.
# Tile URLs and splitter sizes are not kept here; the app stores them in
# settings.json in its data directory.

[window]
# title = "web tiles"
# width = 1280           # 200-10000
# height = 800           # 200-10000

[layout]
# gap = 6                # 0-20, splitter handle width
# min_tile_size = 50     # 10-400

[webview]
# devtools = false
# user_agent = "Mozilla/5.0 ..."
# autoplay = true

[keybinds]
# Cmd means Command on macOS and Ctrl elsewhere.
# reload_all = "Cmd+Shift+R"
# reset_layout = "Cmd+Shift+E"
# toggle_four_tiles = "Cmd+Shift+T"
# toggle_lock = "Cmd+Shift+L"
# open_menu = "F1"
# close_overlay = "Escape"
# quit = "Cmd+Q"
# reload_tile_1 = "Option+1"
# reload_tile_2 = "Option+2"
# reload_tile_3 = "Option+3"
# reload_tile_4 = "Option+4"
# tile_url_1 = "Cmd+1"
# tile_url_2 = "Cmd+2"
# tile_url_3 = "Cmd+3"
# tile_url_4 = "Cmd+4"

[logging]
# level = "web_tiles=info,tiles=info"
"##
    .to_string()
}
