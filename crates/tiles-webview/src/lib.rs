//! WebView bridge for the tiles and overlays of the window.
//!
//! Wraps the `wry` crate to provide:
//! - One managed child WebView per tile, each with its own storage profile
//! - Overlay WebViews for the menu and the URL prompt
//! - JavaScript to Rust IPC, including key forwarding
//! - A permission policy for media capture and notifications
//! - Event handling (page load, new-window requests)

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod permissions;

pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcCommand, IpcMessage, IpcPayload, KeyPress};
pub use manager::{WebViewConfig, WebViewHandle, WebViewId, WebViewManager, WebViewRegistry};
pub use permissions::{PermissionDecision, PermissionKind};
