//! Inline HTML pages: tile placeholder, URL prompt, and menu overlay.
//!
//! Every page is self-contained and talks back through `window.tiles.ipc`
//! (see [`crate::ipc::IPC_INIT_SCRIPT`]).

use tiles_common::{Action, TileId};

/// URL prefixes that mean a WebView is showing generated content rather
/// than a page the user chose.
const GENERATED_PREFIXES: &[&str] = &["data:text/html", "about:blank"];

/// One clickable entry of the menu overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    /// Heading the entry is listed under, e.g. `Action` or `Tiles`.
    pub section: String,
    pub label: String,
    pub tip: String,
    /// Display form of the bound shortcut, if any.
    pub shortcut: Option<String>,
    pub action: Action,
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// True for URLs of generated pages (placeholder, blank) rather than sites.
pub fn is_generated_url(url: &str) -> bool {
    url.is_empty() || GENERATED_PREFIXES.iter().any(|p| url.starts_with(p))
}

const BASE_STYLE: &str = r#"
html, body { margin: 0; height: 100%; font-family: -apple-system, "Segoe UI", Ubuntu, sans-serif; }
body { color: #222; background: #fafafa; }
"#;

/// Page shown by a tile that has no stored URL.
pub fn placeholder_html(tile: TileId, shortcut: Option<&str>) -> String {
    let label = escape_html(&tile.label());
    let hint = match shortcut {
        Some(keys) => format!(" ({})", escape_html(keys)),
        None => String::new(),
    };
    format!(
        r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><title>{label}</title>
<style>{BASE_STYLE}
.center {{ text-align: center; position: fixed; width: 100%; top: 30%; }}
</style></head>
<body>
<div class="center">
<h2>{label}</h2>
select "{label} url" from the tiles menu{hint} to set a webpage
</div>
</body></html>"#
    )
}

/// Modal asking for a tile URL, prefilled with `initial`.
pub fn prompt_html(tile: TileId, initial: &str) -> String {
    let title = escape_html(&format!("{} url", tile.label()));
    let value = escape_html(initial);
    format!(
        r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><title>{title}</title>
<style>{BASE_STYLE}
body {{ background: rgba(0, 0, 0, 0.35); display: flex; align-items: center; justify-content: center; }}
.dialog {{ background: #fff; border-radius: 8px; padding: 16px 20px; width: 500px; box-shadow: 0 8px 30px rgba(0,0,0,.3); }}
label {{ display: block; margin-bottom: 8px; }}
input {{ width: 100%; box-sizing: border-box; padding: 6px; font-size: 14px; }}
.buttons {{ margin-top: 12px; text-align: right; }}
button {{ margin-left: 8px; min-width: 72px; }}
</style></head>
<body>
<form class="dialog" id="form">
<label for="url">Enter a full valid Url:</label>
<input id="url" type="text" value="{value}" autocomplete="off" spellcheck="false">
<div class="buttons">
<button type="button" id="cancel">Cancel</button>
<button type="submit">OK</button>
</div>
</form>
<script>
(function() {{
    var input = document.getElementById('url');
    input.focus();
    input.select();
    document.getElementById('form').addEventListener('submit', function(e) {{
        e.preventDefault();
        window.tiles.ipc.send('prompt_submit', input.value);
    }});
    document.getElementById('cancel').addEventListener('click', function() {{
        window.tiles.ipc.send('prompt_cancel', null);
    }});
    document.addEventListener('keydown', function(e) {{
        if (e.key === 'Escape') {{ window.tiles.ipc.send('prompt_cancel', null); }}
    }});
}})();
</script>
</body></html>"#
    )
}

/// Menu overlay listing `items`, grouped by section in the given order.
pub fn menu_html(items: &[MenuItem]) -> String {
    let mut body = String::new();
    let mut current_section: Option<&str> = None;

    for item in items {
        if current_section != Some(item.section.as_str()) {
            if current_section.is_some() {
                body.push_str("</section>\n");
            }
            body.push_str(&format!(
                "<section><h3>{}</h3>\n",
                escape_html(&item.section)
            ));
            current_section = Some(item.section.as_str());
        }

        let action = serde_json::to_string(&item.action).unwrap_or_else(|_| "null".into());
        let shortcut = item
            .shortcut
            .as_deref()
            .map(|s| format!("<kbd>{}</kbd>", escape_html(s)))
            .unwrap_or_default();
        body.push_str(&format!(
            "<button data-action=\"{}\" title=\"{}\"><span>{}</span>{}</button>\n",
            escape_html(&action),
            escape_html(&item.tip),
            escape_html(&item.label),
            shortcut,
        ));
    }
    if current_section.is_some() {
        body.push_str("</section>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><title>Menu</title>
<style>{BASE_STYLE}
body {{ background: rgba(0, 0, 0, 0.35); display: flex; align-items: flex-start; justify-content: center; }}
.panel {{ margin-top: 48px; background: #fff; border-radius: 8px; padding: 8px 0; min-width: 320px; box-shadow: 0 8px 30px rgba(0,0,0,.3); }}
h3 {{ margin: 8px 16px 4px; font-size: 12px; text-transform: uppercase; color: #888; }}
button {{ display: flex; justify-content: space-between; width: 100%; padding: 6px 16px; border: 0; background: none; font-size: 14px; text-align: left; cursor: pointer; }}
button:hover, button:focus {{ background: #e8f0fe; outline: none; }}
kbd {{ color: #888; font-family: inherit; margin-left: 24px; }}
</style></head>
<body>
<div class="panel" id="panel">
{body}</div>
<script>
(function() {{
    var buttons = Array.prototype.slice.call(document.querySelectorAll('button'));
    buttons.forEach(function(b) {{
        b.addEventListener('click', function(e) {{
            e.stopPropagation();
            window.tiles.ipc.send('menu_select', JSON.parse(b.getAttribute('data-action')));
        }});
    }});
    if (buttons.length) {{ buttons[0].focus(); }}
    document.body.addEventListener('click', function(e) {{
        if (!document.getElementById('panel').contains(e.target)) {{
            window.tiles.ipc.send('overlay_close', null);
        }}
    }});
    document.addEventListener('keydown', function(e) {{
        var i = buttons.indexOf(document.activeElement);
        if (e.key === 'Escape') {{
            window.tiles.ipc.send('overlay_close', null);
        }} else if (e.key === 'ArrowDown' && buttons.length) {{
            buttons[(i + 1) % buttons.length].focus();
            e.preventDefault();
        }} else if (e.key === 'ArrowUp' && buttons.length) {{
            buttons[(i - 1 + buttons.length) % buttons.length].focus();
            e.preventDefault();
        }}
    }});
}})();
</script>
</body></html>"#
    )
}
