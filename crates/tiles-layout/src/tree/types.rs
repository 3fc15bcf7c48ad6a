//! Core types for the split tree: Orientation, SplitterKey, SplitNode, Splitter.

use std::fmt;

use serde::{Deserialize, Serialize};
use tiles_common::TileId;

/// Axis along which a splitter lays out its children.
///
/// `Horizontal` places children side by side with vertical handles;
/// `Vertical` stacks them with horizontal handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Identity of each splitter in the window. Doubles as its settings key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitterKey {
    /// Left column: tile 1 above tile 2.
    Split1,
    /// Root: left column beside the right column.
    Split2,
    /// Right column in 4-tile mode: tile 3 above tile 4.
    Split3,
}

impl SplitterKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SplitterKey::Split1 => "split1",
            SplitterKey::Split2 => "split2",
            SplitterKey::Split3 => "split3",
        }
    }

    pub fn all() -> [SplitterKey; 3] {
        [SplitterKey::Split1, SplitterKey::Split2, SplitterKey::Split3]
    }
}

impl fmt::Display for SplitterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SplitNode {
    Tile(TileId),
    Split(Splitter),
}

/// A resizable container dividing its children along one axis.
///
/// `sizes` are relative weights; the layout engine scales them to the
/// available extent. An empty list means equal shares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Splitter {
    pub key: SplitterKey,
    pub orientation: Orientation,
    pub children: Vec<SplitNode>,
    pub(crate) sizes: Vec<f64>,
}

impl SplitNode {
    pub fn tile(id: TileId) -> Self {
        SplitNode::Tile(id)
    }

    pub fn split(key: SplitterKey, orientation: Orientation, children: Vec<SplitNode>) -> Self {
        SplitNode::Split(Splitter::new(key, orientation, children))
    }

    /// Tile ids in depth-first order.
    pub fn tile_ids(&self) -> Vec<TileId> {
        let mut ids = Vec::new();
        self.collect_tiles_into(&mut ids);
        ids
    }

    fn collect_tiles_into(&self, out: &mut Vec<TileId>) {
        match self {
            SplitNode::Tile(id) => out.push(*id),
            SplitNode::Split(splitter) => {
                for child in &splitter.children {
                    child.collect_tiles_into(out);
                }
            }
        }
    }

    pub fn contains_tile(&self, id: TileId) -> bool {
        match self {
            SplitNode::Tile(tile) => *tile == id,
            SplitNode::Split(splitter) => splitter.children.iter().any(|c| c.contains_tile(id)),
        }
    }

    /// Splitter keys in depth-first order.
    pub fn splitter_keys(&self) -> Vec<SplitterKey> {
        let mut keys = Vec::new();
        if let SplitNode::Split(splitter) = self {
            keys.push(splitter.key);
            for child in &splitter.children {
                keys.extend(child.splitter_keys());
            }
        }
        keys
    }

    pub fn find_splitter(&self, key: SplitterKey) -> Option<&Splitter> {
        match self {
            SplitNode::Tile(_) => None,
            SplitNode::Split(splitter) if splitter.key == key => Some(splitter),
            SplitNode::Split(splitter) => splitter
                .children
                .iter()
                .find_map(|child| child.find_splitter(key)),
        }
    }

    pub fn find_splitter_mut(&mut self, key: SplitterKey) -> Option<&mut Splitter> {
        match self {
            SplitNode::Tile(_) => None,
            SplitNode::Split(splitter) => {
                if splitter.key == key {
                    return Some(splitter);
                }
                splitter
                    .children
                    .iter_mut()
                    .find_map(|child| child.find_splitter_mut(key))
            }
        }
    }
}
