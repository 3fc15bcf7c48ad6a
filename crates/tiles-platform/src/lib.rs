pub mod crash_report;
pub mod external;
pub mod input;
pub mod keymap;
pub mod paths;
pub mod winit_keys;

pub use external::{is_web_url, open_in_browser};
pub use input::{KeyCombo, KeybindRegistry};
pub use keymap::{KeyBind, Modifier};
pub use paths::{
    config_dir, crash_report_dir, data_dir, ensure_dirs, log_dir, profile_dir, profiles_dir,
    settings_file,
};
pub use winit_keys::{normalize_dom_key, normalize_key_code, normalize_winit_key};
