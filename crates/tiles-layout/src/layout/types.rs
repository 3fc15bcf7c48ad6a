//! Layout engine types and configuration.

/// Geometry settings for turning the split tree into tile rects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    /// Width of each splitter handle in pixels.
    pub gap: u32,
    /// Smallest size a drag may give any tile along the splitter axis.
    pub min_tile_size: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            gap: 6,
            min_tile_size: 50.0,
        }
    }
}

impl LayoutEngine {
    pub fn gap(&self) -> f64 {
        self.gap as f64
    }
}
