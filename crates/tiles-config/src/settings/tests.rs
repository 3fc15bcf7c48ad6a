use super::keys;
use super::*;
use tiles_common::TileId;

fn temp_store() -> (tempfile::TempDir, SettingsStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::open(dir.path().join("settings.json"));
    (dir, store)
}

#[test]
fn missing_file_is_empty() {
    let (_dir, store) = temp_store();
    assert!(!store.contains(keys::LOCKSTEP));
    assert!(!store.is_dirty());
}

#[test]
fn url_survives_reopen() {
    let (dir, mut store) = temp_store();
    store.set_string(&keys::tile_store(TileId::TWO), "https://example.com/status");
    store.sync().unwrap();

    let reopened = SettingsStore::open(dir.path().join("settings.json"));
    assert_eq!(
        reopened.get_string("tile-store2"),
        Some("https://example.com/status")
    );
}

#[test]
fn sizes_survive_reopen() {
    let (dir, mut store) = temp_store();
    store.set_sizes(keys::SPLIT1, &[300, 500]);
    store.set_bool(keys::LOCKSTEP, true);
    store.sync().unwrap();

    let reopened = SettingsStore::open(dir.path().join("settings.json"));
    assert_eq!(reopened.get_sizes(keys::SPLIT1), Some(vec![300, 500]));
    assert_eq!(reopened.get_bool(keys::LOCKSTEP), Some(true));
}

#[test]
fn sizes_accept_numeric_strings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"split2": ["640", 635]}"#).unwrap();

    let store = SettingsStore::open(&path);
    assert_eq!(store.get_sizes(keys::SPLIT2), Some(vec![640, 635]));
}

#[test]
fn sizes_reject_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"split1": [100, "wide"], "split2": [-5, 10], "split3": 7}"#)
        .unwrap();

    let store = SettingsStore::open(&path);
    assert_eq!(store.get_sizes(keys::SPLIT1), None);
    assert_eq!(store.get_sizes(keys::SPLIT2), None);
    assert_eq!(store.get_sizes(keys::SPLIT3), None);
}

#[test]
fn remove_presence_flag() {
    let (dir, mut store) = temp_store();
    store.set_bool(keys::SHOW_FOUR_TILES, true);
    store.sync().unwrap();
    assert!(store.remove(keys::SHOW_FOUR_TILES));
    assert!(!store.remove(keys::SHOW_FOUR_TILES));
    store.sync().unwrap();

    let reopened = SettingsStore::open(dir.path().join("settings.json"));
    assert!(!reopened.contains(keys::SHOW_FOUR_TILES));
}

#[test]
fn last_write_wins() {
    let (_dir, mut store) = temp_store();
    store.set_string("tile-store1", "https://a.example");
    store.set_string("tile-store1", "https://b.example");
    assert_eq!(store.get_string("tile-store1"), Some("https://b.example"));
}

#[test]
fn corrupt_file_opens_empty_and_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{not json").unwrap();

    let mut store = SettingsStore::open(&path);
    assert!(!store.contains("tile-store1"));
    store.set_string("tile-store1", "https://example.org");
    store.sync().unwrap();

    let reopened = SettingsStore::open(&path);
    assert_eq!(reopened.get_string("tile-store1"), Some("https://example.org"));
}

#[test]
fn non_object_json_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(!SettingsStore::open(&path).contains("split1"));
}

#[test]
fn bool_accepts_string_form() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"lockstep": "true"}"#).unwrap();
    assert_eq!(SettingsStore::open(&path).get_bool(keys::LOCKSTEP), Some(true));
}

#[test]
fn unchanged_write_is_not_dirty() {
    let (_dir, mut store) = temp_store();
    store.set_bool(keys::LOCKSTEP, false);
    store.sync().unwrap();
    store.set_bool(keys::LOCKSTEP, false);
    assert!(!store.is_dirty());
}

#[test]
fn clear_drops_everything() {
    let (_dir, mut store) = temp_store();
    store.set_bool(keys::LOCKSTEP, true);
    store.set_sizes(keys::SPLIT2, &[1, 2]);
    store.clear();
    assert!(!store.contains(keys::LOCKSTEP));
    assert!(!store.contains(keys::SPLIT2));
    assert!(store.is_dirty());
}

#[test]
fn tile_store_key_names() {
    assert_eq!(keys::tile_store(TileId::ONE), "tile-store1");
    assert_eq!(keys::tile_store(TileId::FOUR), "tile-store4");
}
