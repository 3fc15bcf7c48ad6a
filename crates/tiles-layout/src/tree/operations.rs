//! Sizing operations on a single splitter: set sizes, reset, move a handle.

use super::{Orientation, SplitNode, Splitter, SplitterKey};

impl Splitter {
    pub fn new(key: SplitterKey, orientation: Orientation, children: Vec<SplitNode>) -> Self {
        Self {
            key,
            orientation,
            children,
            sizes: Vec::new(),
        }
    }

    /// Current size weights. Empty until sizes are set or a handle moves.
    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    /// Replace the size list. Ignored unless there is one entry per child,
    /// every entry is finite and non-negative, and at least one is positive.
    pub fn set_sizes(&mut self, sizes: &[f64]) -> bool {
        let valid = sizes.len() == self.children.len()
            && sizes.iter().all(|s| s.is_finite() && *s >= 0.0)
            && sizes.iter().any(|s| *s > 0.0);
        if !valid {
            tracing::debug!(
                splitter = %self.key,
                expected = self.children.len(),
                got = sizes.len(),
                "Ignoring splitter sizes"
            );
            return false;
        }
        self.sizes = sizes.to_vec();
        true
    }

    /// Split `extent` into equal shares along this splitter's own axis.
    pub fn reset_view(&mut self, extent: f64) {
        let n = self.children.len();
        if n == 0 {
            return;
        }
        self.sizes = vec![(extent / n as f64).max(0.0); n];
    }

    /// Child sizes in pixels for a splitter `extent` pixels long, with
    /// `gap` pixels taken by each handle.
    pub fn pixel_sizes(&self, extent: f64, gap: f64) -> Vec<f64> {
        let n = self.children.len();
        if n == 0 {
            return Vec::new();
        }
        let available = (extent - gap * (n - 1) as f64).max(0.0);
        let total: f64 = self.sizes.iter().sum();
        if self.sizes.len() != n || total <= 0.0 {
            return vec![available / n as f64; n];
        }
        self.sizes
            .iter()
            .map(|weight| available * weight / total)
            .collect()
    }

    /// Place handle `index` so the child before it ends at `pos` pixels from
    /// the splitter origin.
    ///
    /// Handle `i` sits between child `i - 1` and child `i`, so valid indices
    /// are `1..children.len()`. Only the two neighbouring children change
    /// size, and neither is made smaller than `min`. Returns `true` if the
    /// sizes changed.
    pub fn move_handle(&mut self, pos: f64, index: usize, extent: f64, gap: f64, min: f64) -> bool {
        let n = self.children.len();
        if index == 0 || index >= n || !pos.is_finite() {
            return false;
        }

        let mut px = self.pixel_sizes(extent, gap);
        let start = px[..index - 1].iter().sum::<f64>() + gap * (index - 1) as f64;
        let pair = px[index - 1] + px[index];
        let min = min.max(0.0);

        let first = if pair <= 2.0 * min {
            pair / 2.0
        } else {
            (pos - start).clamp(min, pair - min)
        };
        if (first - px[index - 1]).abs() < 1e-9 {
            return false;
        }

        px[index - 1] = first;
        px[index] = pair - first;
        self.sizes = px;
        true
    }

    /// Swap in a new child at `index`, returning the old one.
    ///
    /// Sizes are kept; the new child takes over the old child's share.
    pub fn replace_child(&mut self, index: usize, node: SplitNode) -> Option<SplitNode> {
        let slot = self.children.get_mut(index)?;
        Some(std::mem::replace(slot, node))
    }
}
