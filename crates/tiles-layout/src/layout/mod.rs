pub mod borders;
mod calculation;
mod types;

pub use borders::{compute_borders, SplitBorder};
pub use calculation::axis_extent;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Orientation, SplitNode, SplitterKey};
    use tiles_common::{Rect, TileId};

    fn bounds() -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            width: 806.0,
            height: 606.0,
        }
    }

    fn four_tiles() -> SplitNode {
        SplitNode::split(
            SplitterKey::Split2,
            Orientation::Horizontal,
            vec![
                SplitNode::split(
                    SplitterKey::Split1,
                    Orientation::Vertical,
                    vec![SplitNode::tile(TileId::ONE), SplitNode::tile(TileId::TWO)],
                ),
                SplitNode::split(
                    SplitterKey::Split3,
                    Orientation::Vertical,
                    vec![SplitNode::tile(TileId::THREE), SplitNode::tile(TileId::FOUR)],
                ),
            ],
        )
    }

    #[test]
    fn single_tile_fills_bounds() {
        let engine = LayoutEngine::default();
        let result = engine.compute(&SplitNode::tile(TileId::ONE), bounds());
        assert_eq!(result, vec![(TileId::ONE, bounds())]);
    }

    #[test]
    fn four_tiles_are_quadrants() {
        let engine = LayoutEngine::default();
        let result = engine.compute(&four_tiles(), bounds());
        assert_eq!(result.len(), 4);

        let (id, r) = result[0];
        assert_eq!(id, TileId::ONE);
        assert_eq!((r.x, r.y, r.width, r.height), (0.0, 0.0, 400.0, 300.0));

        let (id, r) = result[1];
        assert_eq!(id, TileId::TWO);
        assert_eq!((r.x, r.y), (0.0, 306.0));

        let (id, r) = result[3];
        assert_eq!(id, TileId::FOUR);
        assert_eq!((r.x, r.y, r.width, r.height), (406.0, 306.0, 400.0, 300.0));
    }

    #[test]
    fn sizes_are_relative_weights() {
        let engine = LayoutEngine::default();
        let mut root = four_tiles();
        root.find_splitter_mut(SplitterKey::Split2)
            .unwrap()
            .set_sizes(&[100.0, 300.0]);
        let result = engine.compute(&root, bounds());
        assert!((result[0].1.width - 200.0).abs() < 0.01);
        assert!((result[2].1.width - 600.0).abs() < 0.01);
        assert!((result[2].1.x - 206.0).abs() < 0.01);
    }

    #[test]
    fn gap_reduces_available_space() {
        let engine = LayoutEngine {
            gap: 10,
            min_tile_size: 10.0,
        };
        let result = engine.compute(&four_tiles(), bounds());
        let total = result[0].1.width + result[2].1.width;
        assert!((total - 796.0).abs() < 0.01);
    }

    #[test]
    fn splitter_rects_follow_tree() {
        let engine = LayoutEngine::default();
        let rects = engine.splitter_rects(&four_tiles(), bounds());
        let keys: Vec<_> = rects.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec![SplitterKey::Split2, SplitterKey::Split1, SplitterKey::Split3]
        );
        assert_eq!(rects[0].1, bounds());
        assert!((rects[2].1.x - 406.0).abs() < 0.01);
        assert_eq!(axis_extent(Orientation::Vertical, rects[2].1), 606.0);
    }
}
