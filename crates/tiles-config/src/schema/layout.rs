use serde::{Deserialize, Serialize};

/// Splitter geometry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of each splitter handle in pixels.
    pub gap: u32,
    /// No tile can be dragged smaller than this along a splitter axis.
    pub min_tile_size: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gap: 6,
            min_tile_size: 50,
        }
    }
}
