//! Layout calculation: recursive tree-to-rect computation.

use tiles_common::{Rect, TileId};

use crate::tree::{Orientation, SplitNode, Splitter, SplitterKey};

use super::LayoutEngine;

impl LayoutEngine {
    /// Rects for every tile in the tree, in depth-first order.
    pub fn compute(&self, root: &SplitNode, bounds: Rect) -> Vec<(TileId, Rect)> {
        let mut results = Vec::new();
        self.layout_node(root, bounds, &mut results);
        results
    }

    /// Bounds of every splitter in the tree, in depth-first order.
    pub fn splitter_rects(&self, root: &SplitNode, bounds: Rect) -> Vec<(SplitterKey, Rect)> {
        let mut results = Vec::new();
        self.walk_splitters(root, bounds, &mut results);
        results
    }

    fn layout_node(&self, node: &SplitNode, bounds: Rect, out: &mut Vec<(TileId, Rect)>) {
        match node {
            SplitNode::Tile(id) => out.push((*id, bounds)),
            SplitNode::Split(splitter) => {
                let rects = child_rects(splitter, bounds, self.gap());
                for (child, rect) in splitter.children.iter().zip(rects) {
                    self.layout_node(child, rect, out);
                }
            }
        }
    }

    fn walk_splitters(&self, node: &SplitNode, bounds: Rect, out: &mut Vec<(SplitterKey, Rect)>) {
        if let SplitNode::Split(splitter) = node {
            out.push((splitter.key, bounds));
            let rects = child_rects(splitter, bounds, self.gap());
            for (child, rect) in splitter.children.iter().zip(rects) {
                self.walk_splitters(child, rect, out);
            }
        }
    }
}

/// Length of `bounds` along the splitter's axis.
pub fn axis_extent(orientation: Orientation, bounds: Rect) -> f64 {
    match orientation {
        Orientation::Horizontal => bounds.width,
        Orientation::Vertical => bounds.height,
    }
}

/// Rects of a splitter's children, separated by `gap` pixel handles.
pub(crate) fn child_rects(splitter: &Splitter, bounds: Rect, gap: f64) -> Vec<Rect> {
    let sizes = splitter.pixel_sizes(axis_extent(splitter.orientation, bounds), gap);
    let mut offset = 0.0;
    sizes
        .into_iter()
        .map(|size| {
            let rect = match splitter.orientation {
                Orientation::Horizontal => Rect {
                    x: bounds.x + offset,
                    y: bounds.y,
                    width: size,
                    height: bounds.height,
                },
                Orientation::Vertical => Rect {
                    x: bounds.x,
                    y: bounds.y + offset,
                    width: bounds.width,
                    height: size,
                },
            };
            offset += size + gap;
            rect
        })
        .collect()
}
