use super::types::{KeyBind, Modifier};

/// Converts a [`KeyBind`] into the string shown in the menu overlay.
///
/// macOS uses modifier symbols; other platforms join names with `+`.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let mut parts: Vec<String> = kb.modifiers.iter().map(|m| display_modifier(*m)).collect();
    parts.push(kb.key.clone());

    if cfg!(target_os = "macos") {
        parts.join("")
    } else {
        parts.join("+")
    }
}

fn display_modifier(modifier: Modifier) -> String {
    if cfg!(target_os = "macos") {
        match modifier {
            Modifier::Ctrl => "\u{2303}".into(),
            Modifier::Alt => "\u{2325}".into(),
            Modifier::Shift => "\u{21E7}".into(),
            Modifier::Super => "\u{2318}".into(),
        }
    } else {
        match modifier {
            Modifier::Ctrl => "Ctrl".into(),
            Modifier::Alt => "Alt".into(),
            Modifier::Shift => "Shift".into(),
            Modifier::Super if cfg!(target_os = "windows") => "Win".into(),
            Modifier::Super => "Super".into(),
        }
    }
}
