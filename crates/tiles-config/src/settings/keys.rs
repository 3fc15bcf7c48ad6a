//! Settings key names.

use tiles_common::TileId;

/// Whether splitter lock mode is on (bool).
pub const LOCKSTEP: &str = "lockstep";
/// Present when the 4-tile layout is shown.
pub const SHOW_FOUR_TILES: &str = "show4tiles";
/// Left splitter: tile 1 above tile 2.
pub const SPLIT1: &str = "split1";
/// Root splitter: left column beside the right column.
pub const SPLIT2: &str = "split2";
/// Right splitter in 4-tile mode: tile 3 above tile 4.
pub const SPLIT3: &str = "split3";

/// URL key for a tile (`tile-store{n}`).
pub fn tile_store(tile: TileId) -> String {
    tile.store_key()
}
