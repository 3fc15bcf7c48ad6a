use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest tile number the window can show.
pub const MAX_TILES: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// A tile number in `1..=MAX_TILES`.
///
/// Deserialization goes through [`TileId::try_from`], so out-of-range
/// numbers arriving over IPC are rejected instead of wrapping `index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TileId(u8);

/// A tile number outside `1..=MAX_TILES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("tile number {0} is outside 1..={max}", max = MAX_TILES)]
pub struct InvalidTileId(pub u8);

impl TileId {
    pub const ONE: TileId = TileId(1);
    pub const TWO: TileId = TileId(2);
    pub const THREE: TileId = TileId(3);
    pub const FOUR: TileId = TileId(4);

    pub fn new(n: u8) -> Option<Self> {
        (1..=MAX_TILES).contains(&n).then_some(Self(n))
    }

    /// All tile ids in ascending order.
    pub fn all() -> impl Iterator<Item = TileId> {
        (1..=MAX_TILES).map(TileId)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position, for indexing tile vectors.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Settings key holding this tile's URL; also names its storage profile.
    pub fn store_key(self) -> String {
        format!("tile-store{}", self.0)
    }

    pub fn label(self) -> String {
        format!("Tile {}", self.0)
    }
}

impl TryFrom<u8> for TileId {
    type Error = InvalidTileId;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n).ok_or(InvalidTileId(n))
    }
}

impl From<TileId> for u8 {
    fn from(id: TileId) -> u8 {
        id.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile-{}", self.0)
    }
}
