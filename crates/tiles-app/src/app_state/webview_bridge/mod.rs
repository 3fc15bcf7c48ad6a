//! Bridge between the tile layout and the webviews.
//!
//! Handles coordinate conversion, webview creation and placement, and
//! dispatch of events coming back from the webviews.

mod bounds;
mod ipc_dispatch;
mod lifecycle;

pub(super) use bounds::tiling_rect_to_wry;
