//! Geometry queries and splitter sizing for TileLayout.

use tiles_common::{Rect, TileId};

use crate::layout::{axis_extent, compute_borders, SplitBorder};
use crate::tree::SplitterKey;

use super::TileLayout;

impl TileLayout {
    /// Rects for the visible tiles within the current viewport.
    pub fn compute_layout(&self) -> Vec<(TileId, Rect)> {
        self.engine.compute(&self.root, self.viewport)
    }

    pub fn borders(&self) -> Vec<SplitBorder> {
        compute_borders(&self.root, self.viewport, self.engine.gap())
    }

    /// The handle under the cursor, if any.
    pub fn border_at(&self, x: f64, y: f64) -> Option<SplitBorder> {
        self.borders().into_iter().find(|b| b.hit_test(x, y))
    }

    /// Bounds of a visible splitter within the viewport.
    pub fn splitter_rect(&self, key: SplitterKey) -> Option<Rect> {
        self.engine
            .splitter_rects(&self.root, self.viewport)
            .into_iter()
            .find_map(|(k, rect)| (k == key).then_some(rect))
    }

    /// Length of a visible splitter along its own axis.
    pub(super) fn splitter_extent(&self, key: SplitterKey) -> Option<f64> {
        let splitter = self.root.find_splitter(key)?;
        let rect = self.splitter_rect(key)?;
        Some(axis_extent(splitter.orientation, rect))
    }

    /// Apply persisted pixel sizes to a visible splitter.
    ///
    /// Ignored when the splitter is hidden or the count does not match its
    /// children.
    pub fn set_splitter_sizes(&mut self, key: SplitterKey, sizes: &[u32]) -> bool {
        let weights: Vec<f64> = sizes.iter().map(|s| *s as f64).collect();
        match self.root.find_splitter_mut(key) {
            Some(splitter) => splitter.set_sizes(&weights),
            None => false,
        }
    }

    /// Current pixel sizes of a visible splitter, as persisted.
    ///
    /// `None` when the splitter is hidden or the viewport has no extent yet.
    pub fn splitter_sizes(&self, key: SplitterKey) -> Option<Vec<u32>> {
        let extent = self.splitter_extent(key)?;
        if extent <= 0.0 {
            return None;
        }
        let splitter = self.root.find_splitter(key)?;
        Some(
            splitter
                .pixel_sizes(extent, self.engine.gap())
                .into_iter()
                .map(|px| px.round().max(0.0) as u32)
                .collect(),
        )
    }

    /// Pixel sizes of every visible splitter.
    pub fn all_splitter_sizes(&self) -> Vec<(SplitterKey, Vec<u32>)> {
        self.root
            .splitter_keys()
            .into_iter()
            .filter_map(|key| self.splitter_sizes(key).map(|sizes| (key, sizes)))
            .collect()
    }

    /// Give every visible splitter equal halves along its own axis.
    pub fn reset_view(&mut self) {
        for key in [SplitterKey::Split3, SplitterKey::Split2, SplitterKey::Split1] {
            let Some(extent) = self.splitter_extent(key) else {
                continue;
            };
            if let Some(splitter) = self.root.find_splitter_mut(key) {
                splitter.reset_view(extent);
            }
        }
    }
}
