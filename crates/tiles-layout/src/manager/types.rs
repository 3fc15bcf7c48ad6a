//! TileLayout struct and tree construction.

use tiles_common::{Rect, TileId};

use crate::layout::LayoutEngine;
use crate::tree::{Orientation, SplitNode, SplitterKey};

/// Owns the split tree of the window and the geometry derived from it.
///
/// The root is always `split2`. Its first child is `split1` (tile 1 above
/// tile 2); its second child is tile 3, or `split3` (tile 3 above tile 4)
/// while the 4-tile layout is shown.
pub struct TileLayout {
    pub(super) root: SplitNode,
    pub(super) engine: LayoutEngine,
    pub(super) viewport: Rect,
    pub(super) locked: bool,
}

/// Pixel sizes captured when the 4-tile layout collapses, for persisting.
#[derive(Debug, Clone, PartialEq)]
pub struct CollapsedSizes {
    pub split3: Vec<u32>,
    pub split2: Vec<u32>,
}

impl TileLayout {
    pub fn new(show_four: bool) -> Self {
        Self::with_engine(LayoutEngine::default(), show_four)
    }

    pub fn with_engine(engine: LayoutEngine, show_four: bool) -> Self {
        Self {
            root: build_tree(show_four),
            engine,
            viewport: Rect::ZERO,
            locked: false,
        }
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn root(&self) -> &SplitNode {
        &self.root
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn visible_tiles(&self) -> Vec<TileId> {
        self.root.tile_ids()
    }

    pub fn show_four(&self) -> bool {
        self.root.find_splitter(SplitterKey::Split3).is_some()
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

pub(super) fn right_column() -> SplitNode {
    SplitNode::split(
        SplitterKey::Split3,
        Orientation::Vertical,
        vec![SplitNode::tile(TileId::THREE), SplitNode::tile(TileId::FOUR)],
    )
}

fn build_tree(show_four: bool) -> SplitNode {
    let left = SplitNode::split(
        SplitterKey::Split1,
        Orientation::Vertical,
        vec![SplitNode::tile(TileId::ONE), SplitNode::tile(TileId::TWO)],
    );
    let right = if show_four {
        right_column()
    } else {
        SplitNode::tile(TileId::THREE)
    };
    SplitNode::split(SplitterKey::Split2, Orientation::Horizontal, vec![left, right])
}
