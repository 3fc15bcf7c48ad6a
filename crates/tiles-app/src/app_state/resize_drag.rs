//! Mouse-based drag resize state for splitter handles.
//!
//! Tracks which handle the user is dragging. The event handler calls into
//! this module on cursor movement and mouse button events.

use tiles_layout::{Orientation, SplitBorder};
use winit::event::{ElementState, MouseButton};
use winit::window::CursorIcon;

use super::core::WebTilesApp;

/// Active drag state during a resize operation.
#[derive(Debug, Clone)]
pub(super) struct DragState {
    /// The handle being dragged, as it was when the drag started.
    pub border: SplitBorder,
}

/// Result of checking cursor position against splitter handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum CursorZone {
    None,
    /// Over the handle of a horizontal splitter (vertical line).
    ColResize,
    /// Over the handle of a vertical splitter (horizontal line).
    RowResize,
}

pub(super) fn find_hovered_border(
    borders: &[SplitBorder],
    cursor_x: f64,
    cursor_y: f64,
) -> Option<&SplitBorder> {
    borders.iter().find(|b| b.hit_test(cursor_x, cursor_y))
}

pub(super) fn cursor_zone(border: Option<&SplitBorder>) -> CursorZone {
    match border {
        Some(b) => match b.orientation {
            Orientation::Horizontal => CursorZone::ColResize,
            Orientation::Vertical => CursorZone::RowResize,
        },
        None => CursorZone::None,
    }
}

impl WebTilesApp {
    /// Cursor moved to `(x, y)` in logical pixels: drag the active handle,
    /// or update the cursor icon.
    pub(super) fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor_pos = (x, y);

        if let Some(drag) = &self.drag {
            let border = drag.border.clone();
            if self.layout.drag_to(&border, x, y) {
                self.sync_webview_bounds();
            }
            return;
        }

        if self.overlay.is_some() {
            return;
        }
        let borders = self.layout.borders();
        let icon = match cursor_zone(find_hovered_border(&borders, x, y)) {
            CursorZone::ColResize => CursorIcon::ColResize,
            CursorZone::RowResize => CursorIcon::RowResize,
            CursorZone::None => CursorIcon::Default,
        };
        if let Some(w) = &self.window {
            w.set_cursor(icon);
        }
    }

    pub(super) fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }

        match state {
            ElementState::Pressed => {
                if self.overlay.is_some() {
                    return;
                }
                let (x, y) = self.cursor_pos;
                if let Some(border) = self.layout.border_at(x, y) {
                    tracing::trace!(splitter = %border.key, index = border.index, "Drag started");
                    self.drag = Some(DragState { border });
                }
            }
            ElementState::Released => {
                if self.drag.take().is_some() {
                    if let Some(w) = &self.window {
                        w.set_cursor(CursorIcon::Default);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::core::test_support::app_with_settings;
    use tiles_common::Rect;
    use tiles_layout::SplitterKey;

    fn sample_border() -> SplitBorder {
        SplitBorder {
            key: SplitterKey::Split2,
            orientation: Orientation::Horizontal,
            index: 1,
            position: 403.0,
            start: 0.0,
            end: 600.0,
            bounds: Rect {
                x: 0.0,
                y: 0.0,
                width: 806.0,
                height: 600.0,
            },
            gap: 6.0,
        }
    }

    #[test]
    fn find_hovered_border_hit_and_miss() {
        let borders = vec![sample_border()];
        assert_eq!(
            find_hovered_border(&borders, 405.0, 300.0).map(|b| b.key),
            Some(SplitterKey::Split2)
        );
        assert!(find_hovered_border(&borders, 100.0, 300.0).is_none());
        assert!(find_hovered_border(&[], 0.0, 0.0).is_none());
    }

    #[test]
    fn cursor_zones() {
        let border = sample_border();
        assert_eq!(cursor_zone(Some(&border)), CursorZone::ColResize);
        let border = SplitBorder {
            orientation: Orientation::Vertical,
            ..sample_border()
        };
        assert_eq!(cursor_zone(Some(&border)), CursorZone::RowResize);
        assert_eq!(cursor_zone(None), CursorZone::None);
    }

    #[test]
    fn drag_moves_root_splitter() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_settings(&dir.path().join("settings.json"));
        app.layout.set_viewport(Rect {
            x: 0.0,
            y: 0.0,
            width: 806.0,
            height: 606.0,
        });

        app.handle_cursor_moved(403.0, 100.0);
        app.handle_mouse_input(ElementState::Pressed, MouseButton::Left);
        assert!(app.drag.is_some());

        app.handle_cursor_moved(203.0, 120.0);
        app.handle_mouse_input(ElementState::Released, MouseButton::Left);
        assert!(app.drag.is_none());

        assert_eq!(
            app.layout.splitter_sizes(SplitterKey::Split2),
            Some(vec![200, 600])
        );
    }

    #[test]
    fn press_away_from_handles_does_not_drag() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_with_settings(&dir.path().join("settings.json"));
        app.layout.set_viewport(Rect {
            x: 0.0,
            y: 0.0,
            width: 806.0,
            height: 606.0,
        });

        app.handle_cursor_moved(100.0, 100.0);
        app.handle_mouse_input(ElementState::Pressed, MouseButton::Left);
        assert!(app.drag.is_none());
    }
}
