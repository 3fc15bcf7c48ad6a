pub mod actions;
pub mod errors;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, PlatformError, SettingsError, TilesError};
pub use types::{InvalidTileId, Rect, TileId, MAX_TILES};

pub type Result<T> = std::result::Result<T, TilesError>;
