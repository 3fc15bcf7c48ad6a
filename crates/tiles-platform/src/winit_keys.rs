//! Key name normalization for window and webview key events.
//!
//! Both winit's `KeyCode` debug names and the DOM `KeyboardEvent.code`
//! follow the W3C UI Events code names (`KeyA`, `Digit1`, `ArrowUp`), so
//! one mapping serves shortcuts pressed on the window and shortcuts
//! forwarded from inside a tile. Physical codes are preferred because
//! Option+digit on macOS produces a symbol as the logical key.

/// Convert a physical key code name to the name used by `KeyCombo`.
///
/// Returns `None` for codes without a stable mapping.
pub fn normalize_key_code(code: &str) -> Option<String> {
    if let Some(letter) = code.strip_prefix("Key") {
        if letter.len() == 1 {
            return Some(letter.to_uppercase());
        }
    }
    if let Some(digit) = code
        .strip_prefix("Digit")
        .or_else(|| code.strip_prefix("Numpad"))
    {
        if digit.len() == 1 && digit.chars().all(|c| c.is_ascii_digit()) {
            return Some(digit.to_string());
        }
    }
    if code.len() > 1 && code.starts_with('F') && code[1..].parse::<u8>().is_ok() {
        return Some(code.to_string());
    }

    let named = match code {
        "ArrowUp" => "Up",
        "ArrowDown" => "Down",
        "ArrowLeft" => "Left",
        "ArrowRight" => "Right",
        "Escape" | "Enter" | "Tab" | "Space" | "Backspace" | "Delete" | "Home" | "End"
        | "PageUp" | "PageDown" | "Insert" => code,
        "NumpadEnter" => "Enter",
        "Period" => ".",
        "Comma" => ",",
        "Slash" => "/",
        "Backslash" => "\\",
        "Semicolon" => ";",
        "Quote" => "'",
        "BracketLeft" => "[",
        "BracketRight" => "]",
        "Minus" => "-",
        "Equal" => "=",
        "Backquote" => "`",
        _ => return None,
    };
    Some(named.to_string())
}

/// Convert a logical key name (winit `Key` or DOM `KeyboardEvent.key`) to
/// the name used by `KeyCombo`.
pub fn normalize_winit_key(key: &str) -> String {
    match key {
        "ArrowUp" => "Up".to_string(),
        "ArrowDown" => "Down".to_string(),
        "ArrowLeft" => "Left".to_string(),
        "ArrowRight" => "Right".to_string(),
        "Esc" => "Escape".to_string(),
        " " => "Space".to_string(),
        _ if key.chars().count() == 1 => key.to_uppercase(),
        _ => key.to_string(),
    }
}

/// Normalize a key forwarded from a webview, preferring the physical code.
pub fn normalize_dom_key(code: &str, key: &str) -> String {
    normalize_key_code(code).unwrap_or_else(|| normalize_winit_key(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_digits() {
        assert_eq!(normalize_key_code("KeyR").as_deref(), Some("R"));
        assert_eq!(normalize_key_code("Digit4").as_deref(), Some("4"));
        assert_eq!(normalize_key_code("Numpad2").as_deref(), Some("2"));
    }

    #[test]
    fn function_and_named_keys() {
        assert_eq!(normalize_key_code("F1").as_deref(), Some("F1"));
        assert_eq!(normalize_key_code("F12").as_deref(), Some("F12"));
        assert_eq!(normalize_key_code("Escape").as_deref(), Some("Escape"));
        assert_eq!(normalize_key_code("ArrowLeft").as_deref(), Some("Left"));
        assert_eq!(normalize_key_code("Period").as_deref(), Some("."));
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(normalize_key_code("ShiftLeft"), None);
        assert_eq!(normalize_key_code("NumpadAdd"), None);
        assert_eq!(normalize_key_code("Fn"), None);
        assert_eq!(normalize_key_code(""), None);
    }

    #[test]
    fn logical_keys() {
        assert_eq!(normalize_winit_key("a"), "A");
        assert_eq!(normalize_winit_key(" "), "Space");
        assert_eq!(normalize_winit_key("ArrowDown"), "Down");
        assert_eq!(normalize_winit_key("F5"), "F5");
    }

    #[test]
    fn dom_key_prefers_code() {
        // Option+1 on macOS reports key "¡" with code "Digit1"
        assert_eq!(normalize_dom_key("Digit1", "\u{a1}"), "1");
        assert_eq!(normalize_dom_key("", "r"), "R");
        assert_eq!(normalize_dom_key("Unidentified", "Escape"), "Escape");
    }
}
