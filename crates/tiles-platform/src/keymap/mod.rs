mod display;
mod parse;
mod types;

pub use display::keybind_to_display;
pub use parse::parse_keybind;
pub use types::{KeyBind, Modifier};
