mod operations;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use tiles_common::TileId;

    fn column() -> Splitter {
        Splitter::new(
            SplitterKey::Split1,
            Orientation::Vertical,
            vec![SplitNode::tile(TileId::ONE), SplitNode::tile(TileId::TWO)],
        )
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn tile_ids_depth_first() {
        let tree = SplitNode::split(
            SplitterKey::Split2,
            Orientation::Horizontal,
            vec![SplitNode::Split(column()), SplitNode::tile(TileId::THREE)],
        );
        assert_eq!(tree.tile_ids(), vec![TileId::ONE, TileId::TWO, TileId::THREE]);
        assert!(tree.contains_tile(TileId::TWO));
        assert!(!tree.contains_tile(TileId::FOUR));
        assert_eq!(
            tree.splitter_keys(),
            vec![SplitterKey::Split2, SplitterKey::Split1]
        );
    }

    #[test]
    fn find_nested_splitter() {
        let mut tree = SplitNode::split(
            SplitterKey::Split2,
            Orientation::Horizontal,
            vec![SplitNode::Split(column()), SplitNode::tile(TileId::THREE)],
        );
        assert_eq!(
            tree.find_splitter(SplitterKey::Split1).map(|s| s.key),
            Some(SplitterKey::Split1)
        );
        assert!(tree.find_splitter(SplitterKey::Split3).is_none());
        assert!(tree.find_splitter_mut(SplitterKey::Split2).is_some());
    }

    #[test]
    fn set_sizes_requires_one_per_child() {
        let mut s = column();
        assert!(!s.set_sizes(&[100.0]));
        assert!(!s.set_sizes(&[100.0, 200.0, 300.0]));
        assert!(s.sizes().is_empty());

        assert!(s.set_sizes(&[300.0, 100.0]));
        assert_eq!(s.sizes(), &[300.0, 100.0]);
    }

    #[test]
    fn set_sizes_rejects_degenerate_values() {
        let mut s = column();
        assert!(!s.set_sizes(&[0.0, 0.0]));
        assert!(!s.set_sizes(&[-5.0, 10.0]));
        assert!(!s.set_sizes(&[f64::NAN, 10.0]));
        assert!(s.set_sizes(&[0.0, 10.0]));
    }

    #[test]
    fn pixel_sizes_equal_by_default() {
        let s = column();
        let px = s.pixel_sizes(606.0, 6.0);
        assert!(approx(px[0], 300.0));
        assert!(approx(px[1], 300.0));
    }

    #[test]
    fn pixel_sizes_scale_weights() {
        let mut s = column();
        s.set_sizes(&[1.0, 3.0]);
        let px = s.pixel_sizes(406.0, 6.0);
        assert!(approx(px[0], 100.0));
        assert!(approx(px[1], 300.0));
    }

    #[test]
    fn reset_view_uses_own_extent() {
        let mut s = column();
        s.set_sizes(&[10.0, 90.0]);
        s.reset_view(800.0);
        assert_eq!(s.sizes(), &[400.0, 400.0]);
    }

    #[test]
    fn move_handle_places_boundary() {
        let mut s = column();
        assert!(s.move_handle(150.0, 1, 606.0, 6.0, 50.0));
        let px = s.pixel_sizes(606.0, 6.0);
        assert!(approx(px[0], 150.0));
        assert!(approx(px[1], 450.0));
    }

    #[test]
    fn move_handle_clamps_to_minimum() {
        let mut s = column();
        assert!(s.move_handle(-40.0, 1, 606.0, 6.0, 50.0));
        assert!(approx(s.pixel_sizes(606.0, 6.0)[0], 50.0));

        assert!(s.move_handle(10_000.0, 1, 606.0, 6.0, 50.0));
        let px = s.pixel_sizes(606.0, 6.0);
        assert!(approx(px[1], 50.0));
        assert!(approx(px[0], 550.0));
    }

    #[test]
    fn move_handle_rejects_bad_index() {
        let mut s = column();
        assert!(!s.move_handle(100.0, 0, 606.0, 6.0, 50.0));
        assert!(!s.move_handle(100.0, 2, 606.0, 6.0, 50.0));
        assert!(s.sizes().is_empty());
    }

    #[test]
    fn move_handle_to_current_position_is_noop() {
        let mut s = column();
        assert!(!s.move_handle(300.0, 1, 606.0, 6.0, 50.0));
    }

    #[test]
    fn replace_child_keeps_sizes() {
        let mut s = column();
        s.set_sizes(&[2.0, 1.0]);
        let old = s.replace_child(1, SplitNode::tile(TileId::FOUR));
        assert_eq!(old, Some(SplitNode::tile(TileId::TWO)));
        assert_eq!(s.sizes(), &[2.0, 1.0]);
        assert!(s.replace_child(5, SplitNode::tile(TileId::ONE)).is_none());
    }

    #[test]
    fn splitter_key_names() {
        assert_eq!(SplitterKey::Split1.as_str(), "split1");
        assert_eq!(SplitterKey::Split3.to_string(), "split3");
        assert_eq!(
            serde_json::to_string(&SplitterKey::Split2).unwrap(),
            "\"split2\""
        );
    }
}
