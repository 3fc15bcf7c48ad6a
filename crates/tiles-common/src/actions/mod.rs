mod action_enum;

pub use action_enum::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileId;

    #[test]
    fn menu_labels_match_window_menus() {
        assert_eq!(Action::ReloadAll.label(), "Reload all");
        assert_eq!(Action::ResetLayout.label(), "Reset Layout");
        assert_eq!(Action::ToggleLock.label(), "Tile lock");
        assert_eq!(Action::ReloadTile(TileId::TWO).label(), "Tile 2");
        assert_eq!(Action::SetTileUrl(TileId::FOUR).label(), "Tile 4 url");
    }

    #[test]
    fn status_tips_name_the_tile() {
        assert_eq!(
            Action::ReloadTile(TileId::THREE).status_tip(),
            "Reload tile 3"
        );
        assert_eq!(
            Action::SetTileUrl(TileId::ONE).status_tip(),
            "set url for tile 1"
        );
    }

    #[test]
    fn tile_accessor() {
        assert_eq!(Action::ReloadTile(TileId::TWO).tile(), Some(TileId::TWO));
        assert_eq!(Action::SetTileUrl(TileId::FOUR).tile(), Some(TileId::FOUR));
        assert_eq!(Action::ReloadAll.tile(), None);
    }

    #[test]
    fn action_serde_roundtrip() {
        let actions = vec![
            Action::ReloadAll,
            Action::ToggleFourTiles,
            Action::ReloadTile(TileId::ONE),
            Action::SetTileUrl(TileId::THREE),
        ];

        for action in &actions {
            let json = serde_json::to_string(action).unwrap();
            let deserialized: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(*action, deserialized);
        }
    }

    #[test]
    fn action_with_out_of_range_tile_fails_to_deserialize() {
        for raw in [r#"{"ReloadTile":0}"#, r#"{"SetTileUrl":9}"#] {
            assert!(serde_json::from_str::<Action>(raw).is_err(), "{raw}");
        }
        let ok: Action = serde_json::from_str(r#"{"ReloadTile":2}"#).unwrap();
        assert_eq!(ok, Action::ReloadTile(TileId::TWO));
    }
}
