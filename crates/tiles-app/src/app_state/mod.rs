//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates settings, the tile layout, tile webviews, the
//! overlay, and input.

mod core;
mod dispatch;
mod event_handler;
mod init;
mod menu;
mod overlay;
mod polling;
mod prompt;
mod resize_drag;
mod shutdown;
mod tiles;
mod types;
mod webview_bridge;

pub use core::WebTilesApp;
