//! Coordinate conversion between layout rects and wry rects.

use tiles_common::Rect;

/// Convert a layout `Rect` (logical pixels) to a wry `Rect`.
pub fn tiling_rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}
