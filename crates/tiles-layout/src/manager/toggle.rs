//! Switching between the 3-tile and 4-tile trees.

use tiles_common::TileId;

use crate::tree::{SplitNode, SplitterKey};

use super::types::right_column;
use super::{CollapsedSizes, TileLayout};

impl TileLayout {
    /// Replace tile 3 in the root with `split3` (tile 3 above tile 4).
    ///
    /// `split3` starts with equal shares. Returns `false` if it is already
    /// shown.
    pub fn add_split3(&mut self) -> bool {
        if self.show_four() {
            return false;
        }
        let SplitNode::Split(root) = &mut self.root else {
            return false;
        };
        root.replace_child(1, right_column());
        tracing::debug!("Layout switched to 4 tiles");
        true
    }

    /// Collapse `split3` back to tile 3, returning the pixel sizes of
    /// `split3` and `split2` from just before the collapse.
    pub fn remove_split3(&mut self) -> Option<CollapsedSizes> {
        if !self.show_four() {
            return None;
        }
        let sizes = CollapsedSizes {
            split3: self.splitter_sizes(SplitterKey::Split3).unwrap_or_default(),
            split2: self.splitter_sizes(SplitterKey::Split2).unwrap_or_default(),
        };
        let SplitNode::Split(root) = &mut self.root else {
            return None;
        };
        root.replace_child(1, SplitNode::tile(TileId::THREE));
        tracing::debug!(?sizes, "Layout switched to 3 tiles");
        Some(sizes)
    }
}
