use crate::keymap::{KeyBind, Modifier};

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_ALT: u8 = 0b0010;
pub(super) const MOD_SHIFT: u8 = 0b0100;
pub(super) const MOD_SUPER: u8 = 0b1000;

/// A canonical key representation for HashMap lookup.
///
/// Modifiers are a bitmask so window and webview key events compare
/// without allocating.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    /// Normalized key name (e.g. "R", "1", "F1", "Escape").
    pub key: String,
}

impl KeyCombo {
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mods = kb.modifiers.iter().fold(0u8, |acc, m| {
            acc | match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Super => MOD_SUPER,
            }
        });
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Build from raw modifier flags and an already normalized key name.
    pub fn from_parts(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: String) -> Self {
        let mut mods = 0u8;
        if ctrl {
            mods |= MOD_CTRL;
        }
        if alt {
            mods |= MOD_ALT;
        }
        if shift {
            mods |= MOD_SHIFT;
        }
        if super_key {
            mods |= MOD_SUPER;
        }
        Self { mods, key }
    }

    pub(super) fn to_keybind(&self) -> KeyBind {
        let mut modifiers = Vec::new();
        for (bit, modifier) in [
            (MOD_CTRL, Modifier::Ctrl),
            (MOD_ALT, Modifier::Alt),
            (MOD_SHIFT, Modifier::Shift),
            (MOD_SUPER, Modifier::Super),
        ] {
            if self.mods & bit != 0 {
                modifiers.push(modifier);
            }
        }
        KeyBind {
            modifiers,
            key: self.key.clone(),
        }
    }
}
