//! TileLayout coordinates the split tree, splitter sizes, and lock mode.

mod layout_compute;
mod lock;
mod toggle;
mod types;

pub use types::*;
