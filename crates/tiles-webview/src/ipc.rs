//! IPC protocol between Rust and JavaScript.
//!
//! Messages flow from JavaScript to Rust only: pages call
//! `window.tiles.ipc.send(kind, payload)`, which posts
//! `JSON.stringify({kind, payload})` through `window.ipc.postMessage` to the
//! `ipc_handler` registered on the WebView. Rust drives pages with plain
//! `evaluate_script` calls.

use serde::{Deserialize, Serialize};
use tiles_common::Action;

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a plain string or structured JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    #[default]
    None,
}

/// A key press forwarded from inside a WebView.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeyPress {
    /// `KeyboardEvent.code`, e.g. `KeyR` or `Digit1`.
    #[serde(default)]
    pub code: String,
    /// `KeyboardEvent.key`.
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
    #[serde(default)]
    pub meta: bool,
}

/// What an IPC message asks the application to do.
#[derive(Debug, Clone, PartialEq)]
pub enum IpcCommand {
    /// A shortcut pressed while the WebView had focus.
    Keybind(KeyPress),
    /// A menu entry was clicked in the menu overlay.
    MenuSelect(Action),
    /// The URL prompt was confirmed with this text.
    PromptSubmit(String),
    /// The URL prompt was dismissed.
    PromptCancel,
    /// Escape or a click outside the overlay panel.
    CloseOverlay,
    /// Any kind this application does not understand.
    Unknown(String),
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Interpret the message. Malformed payloads of known kinds become `Unknown`.
    pub fn command(&self) -> IpcCommand {
        let json = match &self.payload {
            IpcPayload::Json(value) => Some(value.clone()),
            IpcPayload::Text(text) => Some(serde_json::Value::String(text.clone())),
            IpcPayload::None => None,
        };

        let parsed = match self.kind.as_str() {
            "keybind" => json
                .and_then(|v| serde_json::from_value(v).ok())
                .map(IpcCommand::Keybind),
            "menu_select" => json
                .and_then(|v| serde_json::from_value(v).ok())
                .map(IpcCommand::MenuSelect),
            "prompt_submit" => match &self.payload {
                IpcPayload::Text(text) => Some(IpcCommand::PromptSubmit(text.clone())),
                _ => None,
            },
            "prompt_cancel" => Some(IpcCommand::PromptCancel),
            "overlay_close" => Some(IpcCommand::CloseOverlay),
            _ => None,
        };
        parsed.unwrap_or_else(|| IpcCommand::Unknown(self.kind.clone()))
    }
}

/// JavaScript injected into every WebView before page scripts run.
///
/// Sets up `window.tiles.ipc` and forwards key presses that carry a
/// modifier, or are function keys, so application shortcuts keep working
/// while a tile has keyboard focus.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.tiles && window.tiles.ipc) { return; }
    window.tiles = window.tiles || {};
    window.tiles.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        }
    };

    window.addEventListener('keydown', function(e) {
        var fkey = /^F([1-9]|1[0-2])$/.test(e.key);
        if (!(e.ctrlKey || e.altKey || e.metaKey || fkey)) { return; }
        if (['Control', 'Alt', 'Shift', 'Meta'].indexOf(e.key) !== -1) { return; }
        window.tiles.ipc.send('keybind', {
            code: e.code || '',
            key: e.key || '',
            ctrl: e.ctrlKey,
            alt: e.altKey,
            shift: e.shiftKey,
            meta: e.metaKey
        });
    }, true);
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tiles_common::TileId;

    #[test]
    fn parses_keybind() {
        let raw = r#"{"kind":"keybind","payload":{"code":"Digit2","key":"2","ctrl":true,"alt":false,"shift":false,"meta":false}}"#;
        let msg = IpcMessage::from_json(raw).unwrap();
        match msg.command() {
            IpcCommand::Keybind(press) => {
                assert_eq!(press.code, "Digit2");
                assert!(press.ctrl);
                assert!(!press.meta);
            }
            other => panic!("expected keybind, got {other:?}"),
        }
    }

    #[test]
    fn parses_menu_select() {
        let action = serde_json::to_value(Action::SetTileUrl(TileId::FOUR)).unwrap();
        let raw = serde_json::json!({ "kind": "menu_select", "payload": action }).to_string();
        let msg = IpcMessage::from_json(&raw).unwrap();
        assert_eq!(
            msg.command(),
            IpcCommand::MenuSelect(Action::SetTileUrl(TileId::FOUR))
        );

        let raw = r#"{"kind":"menu_select","payload":"ReloadAll"}"#;
        assert_eq!(
            IpcMessage::from_json(raw).unwrap().command(),
            IpcCommand::MenuSelect(Action::ReloadAll)
        );
    }

    #[test]
    fn parses_prompt_messages() {
        let raw = r#"{"kind":"prompt_submit","payload":"https://example.com"}"#;
        assert_eq!(
            IpcMessage::from_json(raw).unwrap().command(),
            IpcCommand::PromptSubmit("https://example.com".into())
        );

        let raw = r#"{"kind":"prompt_cancel","payload":null}"#;
        assert_eq!(
            IpcMessage::from_json(raw).unwrap().command(),
            IpcCommand::PromptCancel
        );

        let raw = r#"{"kind":"overlay_close"}"#;
        assert_eq!(
            IpcMessage::from_json(raw).unwrap().command(),
            IpcCommand::CloseOverlay
        );
    }

    #[test]
    fn malformed_payload_is_unknown() {
        let raw = r#"{"kind":"menu_select","payload":{"Bogus":7}}"#;
        assert_eq!(
            IpcMessage::from_json(raw).unwrap().command(),
            IpcCommand::Unknown("menu_select".into())
        );

        let raw = r#"{"kind":"menu_select","payload":{"ReloadTile":0}}"#;
        assert_eq!(
            IpcMessage::from_json(raw).unwrap().command(),
            IpcCommand::Unknown("menu_select".into())
        );

        let raw = r#"{"kind":"prompt_submit","payload":{"text":1}}"#;
        assert_eq!(
            IpcMessage::from_json(raw).unwrap().command(),
            IpcCommand::Unknown("prompt_submit".into())
        );
    }

    #[test]
    fn rejects_non_message_json() {
        assert!(IpcMessage::from_json("not json").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":1}"#).is_none());
    }

    #[test]
    fn init_script_forwards_keys() {
        assert!(IPC_INIT_SCRIPT.contains("'keybind'"));
        assert!(IPC_INIT_SCRIPT.contains("window.ipc.postMessage"));
        assert!(!IPC_INIT_SCRIPT.contains("_dispatch"));
    }
}
