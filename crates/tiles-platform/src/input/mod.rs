//! Keybind registry: maps key combinations to runtime `Action`s.

mod key_combo;
mod registry;

pub use key_combo::KeyCombo;
pub use registry::KeybindRegistry;
