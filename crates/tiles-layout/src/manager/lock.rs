//! Handle moves, including lock-mode mirroring of `split1` onto `split3`.

use crate::layout::SplitBorder;
use crate::tree::SplitterKey;

use super::TileLayout;

impl TileLayout {
    /// Move handle `index` of splitter `key` to `pos` pixels from the
    /// splitter origin.
    ///
    /// While locked with 4 tiles shown, a move of `split1` is repeated on
    /// `split3` with the same offset and index. Moves of other splitters
    /// are never mirrored. Returns `true` if any sizes changed.
    pub fn move_splitter(&mut self, key: SplitterKey, pos: f64, index: usize) -> bool {
        let moved = self.move_one(key, pos, index);
        if key == SplitterKey::Split1 && self.locked && self.show_four() {
            let mirrored = self.move_one(SplitterKey::Split3, pos, index);
            return moved || mirrored;
        }
        moved
    }

    /// Move the dragged handle so it is centred on the cursor.
    pub fn drag_to(&mut self, border: &SplitBorder, x: f64, y: f64) -> bool {
        self.move_splitter(border.key, border.handle_offset(x, y), border.index)
    }

    fn move_one(&mut self, key: SplitterKey, pos: f64, index: usize) -> bool {
        let Some(extent) = self.splitter_extent(key) else {
            return false;
        };
        let gap = self.engine.gap();
        let min = self.engine.min_tile_size;
        match self.root.find_splitter_mut(key) {
            Some(splitter) => splitter.move_handle(pos, index, extent, gap, min),
            None => false,
        }
    }
}
