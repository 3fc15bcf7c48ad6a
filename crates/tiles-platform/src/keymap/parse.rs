use tiles_common::PlatformError;

use super::types::{KeyBind, Modifier};

/// Parses a keybind string like `"Cmd+1"`, `"Cmd+Shift+R"` or `"F1"`.
///
/// - `"Cmd"` / `"Command"` -> `Super` on macOS, `Ctrl` elsewhere
/// - `"Option"` / `"Opt"` / `"Alt"` -> `Alt`
/// - `"Control"` / `"Ctrl"` -> `Ctrl`
/// - `"Win"` / `"Super"` / `"Meta"` -> `Super`
///
/// The last token is always the key, even if it names a modifier.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();

    let Some((key_token, modifier_tokens)) = tokens.split_last() else {
        return Err(PlatformError::NotSupported("empty keybind string".into()));
    };
    if key_token.is_empty() {
        return Err(PlatformError::NotSupported(format!(
            "keybind '{s}' has no key component"
        )));
    }

    let mut modifiers = Vec::new();
    for token in modifier_tokens {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            PlatformError::NotSupported(format!("unrecognized modifier: {token}"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(key_token),
    })
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" => {
            if cfg!(target_os = "macos") {
                Some(Modifier::Super)
            } else {
                Some(Modifier::Ctrl)
            }
        }
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

pub(super) fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "period" => ".".into(),
        "comma" => ",".into(),
        "slash" => "/".into(),
        "minus" => "-".into(),
        "equal" | "equals" => "=".into(),
        "space" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "backspace" => "Backspace".into(),
        "delete" | "del" => "Delete".into(),
        "up" => "Up".into(),
        "down" => "Down".into(),
        "left" => "Left".into(),
        "right" => "Right".into(),
        "home" => "Home".into(),
        "end" => "End".into(),
        "pageup" => "PageUp".into(),
        "pagedown" => "PageDown".into(),
        _ if token.chars().count() == 1 => token.to_uppercase(),
        // F1..F24 keep the uppercase F
        _ if lower.starts_with('f') && lower[1..].parse::<u8>().is_ok() => lower.to_uppercase(),
        _ => {
            let mut chars = lower.chars();
            match chars.next() {
                Some(c) => format!("{}{}", c.to_uppercase(), chars.as_str()),
                None => lower,
            }
        }
    }
}
