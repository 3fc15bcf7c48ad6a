//! Splitter handle computation for drag-resize hit testing.
//!
//! Walks the split tree and produces one `SplitBorder` per handle. The
//! event handler uses these to detect when the cursor is over a handle
//! and to turn a cursor position into a handle offset.

use tiles_common::Rect;

use crate::tree::{Orientation, SplitNode, SplitterKey};

use super::calculation::child_rects;

// =============================================================================
// TYPES
// =============================================================================

/// One draggable handle of a splitter.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitBorder {
    /// Splitter owning this handle.
    pub key: SplitterKey,
    /// Orientation of the owning splitter (Horizontal = vertical handle line).
    pub orientation: Orientation,
    /// Handle index; handle `i` sits before child `i`.
    pub index: usize,
    /// Centre of the handle in window pixels (x for horizontal, y for vertical).
    pub position: f64,
    /// Start of the handle line (y for horizontal, x for vertical).
    pub start: f64,
    /// End of the handle line.
    pub end: f64,
    /// Bounds of the owning splitter.
    pub bounds: Rect,
    /// Handle width in pixels.
    pub gap: f64,
}

impl SplitBorder {
    /// Half-width of the hit zone on each side of the handle centre.
    const HIT_HALF_WIDTH: f64 = 6.0;

    pub fn hit_test(&self, x: f64, y: f64) -> bool {
        match self.orientation {
            Orientation::Horizontal => {
                (x - self.position).abs() <= Self::HIT_HALF_WIDTH
                    && y >= self.start
                    && y <= self.end
            }
            Orientation::Vertical => {
                (y - self.position).abs() <= Self::HIT_HALF_WIDTH
                    && x >= self.start
                    && x <= self.end
            }
        }
    }

    /// Handle offset from the splitter origin that centres the handle on
    /// the cursor.
    pub fn handle_offset(&self, x: f64, y: f64) -> f64 {
        let (cursor, origin) = match self.orientation {
            Orientation::Horizontal => (x, self.bounds.x),
            Orientation::Vertical => (y, self.bounds.y),
        };
        cursor - origin - self.gap / 2.0
    }

    /// Splitter length along its axis.
    pub fn extent(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.bounds.width,
            Orientation::Vertical => self.bounds.height,
        }
    }
}

// =============================================================================
// COMPUTATION
// =============================================================================

/// Compute all splitter handles in the tree within the given viewport.
pub fn compute_borders(root: &SplitNode, bounds: Rect, gap: f64) -> Vec<SplitBorder> {
    let mut borders = Vec::new();
    walk_borders(root, bounds, gap, &mut borders);
    borders
}

fn walk_borders(node: &SplitNode, bounds: Rect, gap: f64, out: &mut Vec<SplitBorder>) {
    let SplitNode::Split(splitter) = node else {
        return;
    };

    let rects = child_rects(splitter, bounds, gap);
    for index in 1..rects.len() {
        let prev = rects[index - 1];
        let (position, start, end) = match splitter.orientation {
            Orientation::Horizontal => (
                prev.x + prev.width + gap / 2.0,
                bounds.y,
                bounds.y + bounds.height,
            ),
            Orientation::Vertical => (
                prev.y + prev.height + gap / 2.0,
                bounds.x,
                bounds.x + bounds.width,
            ),
        };
        out.push(SplitBorder {
            key: splitter.key,
            orientation: splitter.orientation,
            index,
            position,
            start,
            end,
            bounds,
            gap,
        });
    }

    for (child, rect) in splitter.children.iter().zip(rects) {
        walk_borders(child, rect, gap, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiles_common::TileId;

    fn viewport() -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: 806.0,
            height: 606.0,
        }
    }

    fn three_tiles() -> SplitNode {
        SplitNode::split(
            SplitterKey::Split2,
            Orientation::Horizontal,
            vec![
                SplitNode::split(
                    SplitterKey::Split1,
                    Orientation::Vertical,
                    vec![SplitNode::tile(TileId::ONE), SplitNode::tile(TileId::TWO)],
                ),
                SplitNode::tile(TileId::THREE),
            ],
        )
    }

    #[test]
    fn one_border_per_handle() {
        let borders = compute_borders(&three_tiles(), viewport(), 6.0);
        assert_eq!(borders.len(), 2);
        assert_eq!(borders[0].key, SplitterKey::Split2);
        assert_eq!(borders[0].index, 1);
        assert_eq!(borders[1].key, SplitterKey::Split1);
    }

    #[test]
    fn border_positions_sit_in_gap() {
        let borders = compute_borders(&three_tiles(), viewport(), 6.0);
        // (806 - 6) / 2 = 400 per column, handle centre at 403
        assert!((borders[0].position - 403.0).abs() < 0.01);
        assert_eq!(borders[0].start, 0.0);
        assert_eq!(borders[0].end, 606.0);

        // Left column: 400 wide, (606 - 6) / 2 = 300 per row
        assert!((borders[1].position - 303.0).abs() < 0.01);
        assert_eq!(borders[1].start, 0.0);
        assert!((borders[1].end - 400.0).abs() < 0.01);
    }

    #[test]
    fn hit_test_vertical_handle() {
        let borders = compute_borders(&three_tiles(), viewport(), 6.0);
        let root = &borders[0];
        assert!(root.hit_test(403.0, 300.0));
        assert!(root.hit_test(408.0, 300.0));
        assert!(!root.hit_test(410.0, 300.0));
        assert!(!root.hit_test(403.0, 700.0));
    }

    #[test]
    fn hit_test_horizontal_handle() {
        let borders = compute_borders(&three_tiles(), viewport(), 6.0);
        let left = &borders[1];
        assert!(left.hit_test(200.0, 300.0));
        assert!(!left.hit_test(200.0, 320.0));
        // Outside the left column
        assert!(!left.hit_test(600.0, 303.0));
    }

    #[test]
    fn handle_offset_centres_on_cursor() {
        let borders = compute_borders(&three_tiles(), viewport(), 6.0);
        let left = &borders[1];
        assert!((left.handle_offset(10.0, 203.0) - 200.0).abs() < 0.01);
        assert!((left.extent() - 606.0).abs() < 0.01);
    }

    #[test]
    fn leaf_has_no_borders() {
        let borders = compute_borders(&SplitNode::tile(TileId::ONE), viewport(), 6.0);
        assert!(borders.is_empty());
    }
}
