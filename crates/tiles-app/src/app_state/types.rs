//! Internal types and constants for the app state module.

use std::time::Duration;

use tiles_common::TileId;

/// How often to drain webview events (approx 60 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// What the overlay webview is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Overlay {
    Menu,
    /// URL prompt for `tile`, prefilled with `initial`.
    Prompt { tile: TileId, initial: String },
}
