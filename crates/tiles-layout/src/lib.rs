pub mod layout;
pub mod manager;
pub mod tree;

pub use layout::{LayoutEngine, SplitBorder};
pub use manager::{CollapsedSizes, TileLayout};
pub use tree::{Orientation, SplitNode, Splitter, SplitterKey};
